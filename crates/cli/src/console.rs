//! Terminal rendering of a demo scene.

use demo::{DemoHost, TooltipPosition};

/// Prints each side effect. Every selector counts as present, so
/// highlights are always shown.
pub struct ConsoleHost;

impl DemoHost for ConsoleHost {
    fn navigate(&mut self, route: &str) {
        println!("→ {route}");
    }

    fn highlight(&mut self, selector: &str, message: Option<&str>) -> bool {
        match message {
            Some(message) => println!("  [{selector}] {message}"),
            None => println!("  [{selector}]"),
        }
        true
    }

    fn clear_highlight(&mut self) {}

    fn show_tooltip(&mut self, message: &str, position: Option<TooltipPosition>) {
        match position {
            Some(p) => println!("  💬 {message}  ({:.0}%, {:.0}%)", p.x, p.y),
            None => println!("  💬 {message}"),
        }
    }
}
