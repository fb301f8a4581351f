//! Subcommand handlers. Each one works against a freshly seeded repository.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context as _};
use serde::Serialize;
use tokio::sync::Notify;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use agents::{AgentRun, CannedAgent, MeetingSuggester, RunConfig, RunOutcome, SuggestionConfig};
use canvas::analysis::entry_nodes;
use canvas::{topological_order, CanvasLayout, CanvasSession, CanvasSnapshot, DragEnd, NodeKind};
use demo::{builtin_scenes, find_scene, DemoPlayer, PlaybackOutcome, PlayerConfig};
use store::{ProjectSearch, Repository, SessionStore, ToolQuery};
use wizard::{Wizard, WizardConfig};

use crate::console::ConsoleHost;
use crate::session_file::FileStorage;
use crate::{AgentCommand, CalendarCommand, CanvasCommand, CreateProject, DemoCommand, ProjectsCommand, ToolsCommand};

pub struct Context {
    session_file: PathBuf,
    json: bool,
}

impl Context {
    pub fn new(session_file: PathBuf, json: bool) -> Self {
        Self { session_file, json }
    }

    fn session(&self, repo: &Repository) -> SessionStore<FileStorage> {
        let mut session = SessionStore::new(FileStorage::open(self.session_file.clone()));
        session.restore(repo);
        session
    }

    fn print_json<T: Serialize + ?Sized>(&self, value: &T) -> anyhow::Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }
}

/// A token cancelled by the first Ctrl-C.
fn cancel_on_ctrl_c() -> CancellationToken {
    let token = CancellationToken::new();
    let trigger = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("interrupt received, cancelling");
            trigger.cancel();
        }
    });
    token
}

/// Signalled once per line read from stdin. The reader thread is abandoned
/// when the process exits.
fn next_on_enter() -> Arc<Notify> {
    let next = Arc::new(Notify::new());
    let signal = next.clone();
    std::thread::spawn(move || {
        for line in std::io::stdin().lines() {
            if line.is_err() {
                break;
            }
            signal.notify_one();
        }
    });
    next
}

// ---------------------------------------------------------------------------
// canvas
// ---------------------------------------------------------------------------

pub fn canvas(ctx: &Context, cmd: CanvasCommand) -> anyhow::Result<()> {
    match cmd {
        CanvasCommand::Preset => {
            let session = canvas::preset::cms_component_designer();
            let snapshot = CanvasSnapshot::capture(Some("CMS Component Designer".into()), session.store());
            println!("{}", snapshot.to_json()?);
        }

        CanvasCommand::Inspect { file } => {
            let text = std::fs::read_to_string(&file)
                .with_context(|| format!("reading {}", file.display()))?;
            let snapshot = CanvasSnapshot::from_json(&text)?;
            let name = snapshot.name.clone();
            let store = snapshot.into_store(CanvasLayout::default())?;
            let order = topological_order(&store).ok();

            if ctx.json {
                return ctx.print_json(&serde_json::json!({
                    "name": name,
                    "nodes": store.nodes(),
                    "edges": store.edges(),
                    "entry_nodes": entry_nodes(&store),
                    "run_order": order,
                }));
            }

            println!("{} ({} nodes)", name.as_deref().unwrap_or("untitled canvas"), store.len());
            for node in store.nodes() {
                println!("  {:<8} {:<9} {}", node.id, node.kind, node.label);
            }
            for edge in store.edges() {
                println!("  {} → {}", edge.from, edge.to);
            }
            match order {
                Some(order) => {
                    let order: Vec<String> = order.iter().map(ToString::to_string).collect();
                    println!("run order: {}", order.join(" → "));
                }
                None => println!("run order: none, the graph contains a cycle"),
            }
        }

        CanvasCommand::DemoEdit => {
            let session = demo_edit();
            let snapshot = CanvasSnapshot::capture(Some("Scripted edit".into()), session.store());
            println!("{}", snapshot.to_json()?);
        }
    }
    Ok(())
}

/// Source → Agent → Output, the first edge drawn with the pointer gesture.
fn demo_edit() -> CanvasSession {
    let layout = CanvasLayout::default();
    let mut session = CanvasSession::new(layout);

    let source = session.add_node(NodeKind::Source, Some("Figma Wireframe".into()), None);
    let agent = session.add_node(NodeKind::Agent, None, None);
    let output = session.add_node(NodeKind::Output, Some("Chrome Testbed".into()), None);

    let anchors = session
        .store()
        .node(&source)
        .zip(session.store().node(&agent))
        .map(|(s, a)| (layout.output_anchor(s), layout.input_anchor(a)));
    if let Some((start, end)) = anchors {
        session.press_output(&source, start);
        session.pointer_moved(start.midpoint(end));
        if let DragEnd::Dropped { outcome, .. } = session.release_over_input(&agent) {
            debug!(?outcome, "edge drawn by drag");
        }
    }

    let outcome = session.add_edge(&agent, &output);
    debug!(?outcome, "edge added");
    let outcome = session.add_edge(&agent, &agent);
    debug!(?outcome, "self-loop rejected");
    session
}

// ---------------------------------------------------------------------------
// projects
// ---------------------------------------------------------------------------

pub async fn projects(ctx: &Context, cmd: ProjectsCommand) -> anyhow::Result<()> {
    match cmd {
        ProjectsCommand::List { search, status, mine } => {
            let repo = Repository::seeded();
            let mut hits = repo.search_projects(&ProjectSearch { text: search, status });

            if mine {
                let session = ctx.session(&repo);
                let Some(user) = session.current_user() else {
                    bail!("not signed in; run `agent-platform login` first");
                };
                let own: Vec<&str> = repo
                    .projects_for_user(&user.user_id)?
                    .into_iter()
                    .map(|p| p.project_id.as_str())
                    .collect();
                hits.retain(|p| own.contains(&p.project_id.as_str()));
            }

            if ctx.json {
                return ctx.print_json(&hits);
            }
            for p in hits {
                println!(
                    "{:<8} {:<36} {:<24} {:<10} {:>3}%",
                    p.project_id, p.name, p.client, p.status, p.metrics.completion
                );
            }
            Ok(())
        }

        ProjectsCommand::Create(args) => create_project(ctx, args).await,
    }
}

async fn create_project(ctx: &Context, args: CreateProject) -> anyhow::Result<()> {
    let mut repo = Repository::seeded();
    let mut wizard = Wizard::new(WizardConfig {
        generation_delay: Duration::from_millis(args.think_ms),
        creation_delay: Duration::from_millis(args.setup_ms),
        ..WizardConfig::default()
    });

    eprintln!("Generating recommendations…");
    let cancel = cancel_on_ctrl_c();
    let Some(rec) = wizard.generate_recommendations(&args.prompt, &cancel).await else {
        bail!("cancelled");
    };
    if !ctx.json {
        println!("Suggested:   {}", rec.project_name);
        println!("Roles:       {}", rec.roles.join(", "));
        println!("Tools:       {}", rec.tools.join(", "));
        println!("Timeline:    {}", rec.timeline);
    }
    wizard.next();

    if let Some(name) = args.name {
        wizard.set_project_name(name);
    }
    wizard.set_client_name(args.client);
    if !wizard.can_advance() {
        bail!("project name must not be empty");
    }
    wizard.next();

    let candidates = Wizard::available_members(&repo, "", None);
    for id in &args.members {
        let member = candidates
            .iter()
            .find(|m| &m.user_id == id)
            .with_context(|| format!("unknown team member '{id}'"))?;
        wizard.toggle_team_member(member.clone());
    }
    if !wizard.can_advance() {
        bail!("pick at least one team member with --member");
    }
    wizard.next();

    for id in &args.integrations {
        wizard.toggle_integration(id)?;
    }

    eprintln!("Setting up project…");
    let Some(project) = wizard.submit(&mut repo, chrono::Local::now().naive_local(), &cancel).await? else {
        bail!("cancelled");
    };
    if ctx.json {
        return ctx.print_json(&project);
    }
    println!(
        "Created {} \"{}\" for {} with {} team member(s), ending {}",
        project.project_id,
        project.name,
        project.client,
        project.team.len(),
        project.target_end_date
    );
    Ok(())
}

// ---------------------------------------------------------------------------
// tools
// ---------------------------------------------------------------------------

pub fn tools(ctx: &Context, cmd: ToolsCommand) -> anyhow::Result<()> {
    let ToolsCommand::List { search, category, featured, sort } = cmd;
    let repo = Repository::seeded();
    let hits = repo.search_tools(&ToolQuery { text: search, category, featured_only: featured, sort });

    if ctx.json {
        return ctx.print_json(&hits);
    }
    for t in hits {
        let star = if t.featured { "★" } else { " " };
        println!("{} {:<8} {:<34} {}", star, t.tool_id, t.name, t.category);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// agent
// ---------------------------------------------------------------------------

pub async fn agent(ctx: &Context, cmd: AgentCommand) -> anyhow::Result<()> {
    let AgentCommand::Run { tool_id, prompt, run_ms, steps, save } = cmd;
    let repo = Repository::seeded();
    let tool = repo.get_tool(&tool_id)?;
    let prompt = AgentRun::resolve_prompt(tool, prompt.as_deref())?;

    let run = AgentRun::new(
        Arc::new(CannedAgent),
        RunConfig { total: Duration::from_millis(run_ms), steps },
    );

    let mut progress = run.subscribe();
    let reporter = tokio::spawn(async move {
        while progress.changed().await.is_ok() {
            let pct = *progress.borrow_and_update();
            eprint!("\rthinking… {pct:>3.0}%");
        }
    });

    let cancel = cancel_on_ctrl_c();
    let outcome = run.execute(tool, prompt, &cancel).await;
    drop(run);
    reporter.await.ok();
    eprintln!();

    match outcome? {
        RunOutcome::Cancelled { progress } => bail!("run cancelled at {progress:.0}%"),
        RunOutcome::Completed(output) => {
            if let Some(dir) = save {
                let path = dir.join(&output.file_name);
                std::fs::write(&path, &output.output)
                    .with_context(|| format!("writing {}", path.display()))?;
                eprintln!("saved {}", path.display());
            }
            if ctx.json {
                return ctx.print_json(&output);
            }
            println!("{}", output.output);
            Ok(())
        }
    }
}

// ---------------------------------------------------------------------------
// calendar
// ---------------------------------------------------------------------------

pub async fn calendar(ctx: &Context, cmd: CalendarCommand) -> anyhow::Result<()> {
    let repo = Repository::seeded();
    match cmd {
        CalendarCommand::List { date, event_type } => {
            let mut events: Vec<_> = match date {
                Some(day) => repo.events_on(day),
                None => repo.list_events().iter().collect(),
            };
            if let Some(kind) = event_type {
                events.retain(|e| e.event_type == kind);
            }

            if ctx.json {
                return ctx.print_json(&events);
            }
            for e in events {
                println!(
                    "{} {}-{}  {:<40} {}",
                    e.start_time.date(),
                    e.start_time.format("%H:%M"),
                    e.end_time.format("%H:%M"),
                    e.title,
                    e.location.as_deref().unwrap_or("")
                );
            }
            Ok(())
        }

        CalendarCommand::Suggest { project, today } => {
            let today = today.unwrap_or_else(|| chrono::Local::now().date_naive());
            let (name, team) = match project.as_deref() {
                Some(id) => {
                    let p = repo.get_project(id)?;
                    (Some(p.name.clone()), p.team.clone())
                }
                None => (None, repo.team_members()),
            };

            let pending = MeetingSuggester::new(SuggestionConfig::default()).suggest_meeting(name.as_deref(), &team, today);
            let mut phases = pending.subscribe();
            let reporter = tokio::spawn(async move {
                while phases.changed().await.is_ok() {
                    eprintln!("{}", *phases.borrow_and_update());
                }
            });

            let cancel = cancel_on_ctrl_c();
            let suggestion = pending.resolve(&cancel).await;
            reporter.await.ok();
            let Some(suggestion) = suggestion else {
                bail!("cancelled");
            };

            if ctx.json {
                return ctx.print_json(&suggestion);
            }
            println!("{}", suggestion.title);
            println!("  {} to {}", suggestion.start_time, suggestion.end_time());
            println!("  {}", suggestion.location);
            println!("  attendees: {}", suggestion.attendees.join(", "));
            Ok(())
        }
    }
}

// ---------------------------------------------------------------------------
// demo
// ---------------------------------------------------------------------------

pub async fn demo(ctx: &Context, cmd: DemoCommand) -> anyhow::Result<()> {
    match cmd {
        DemoCommand::List => {
            let scenes = builtin_scenes()?;
            if ctx.json {
                return ctx.print_json(&scenes);
            }
            for s in scenes {
                println!("{:<20} {:<28} {} actions", s.id, s.title, s.actions.len());
            }
        }

        DemoCommand::Play { scene_id } => {
            let scene = find_scene(&scene_id)?;
            println!("{}: {}", scene.title, scene.description);

            eprintln!("Press Enter to skip ahead, Ctrl-C to stop.");

            let mut player = DemoPlayer::new();
            player.start(scene);
            let next = next_on_enter();
            let cancel = cancel_on_ctrl_c();
            match demo::play(&mut player, &mut ConsoleHost, &PlayerConfig::default(), &next, &cancel).await {
                PlaybackOutcome::Finished => println!("Tour complete."),
                PlaybackOutcome::Stopped { at_index } => println!("Tour stopped at step {}.", at_index + 1),
            }
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// session
// ---------------------------------------------------------------------------

pub fn login(ctx: &Context, email: &str, password: &str) -> anyhow::Result<()> {
    let repo = Repository::seeded();
    let mut session = SessionStore::new(FileStorage::open(ctx.session_file.clone()));
    let user = session.login(&repo, email, password)?;
    println!("Signed in as {} ({})", user.name, user.role);
    Ok(())
}

pub fn logout(ctx: &Context) -> anyhow::Result<()> {
    let repo = Repository::seeded();
    ctx.session(&repo).logout();
    println!("Signed out");
    Ok(())
}

pub fn whoami(ctx: &Context) -> anyhow::Result<()> {
    let repo = Repository::seeded();
    let session = ctx.session(&repo);
    let Some(user) = session.current_user() else {
        bail!("not signed in");
    };
    if ctx.json {
        return ctx.print_json(user);
    }
    println!("{} <{}> {}", user.name, user.email, user.role);
    Ok(())
}
