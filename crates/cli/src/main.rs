use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod console;
mod session_file;

/// Agent platform: workflow canvas, project workspace and toolbox runner.
#[derive(Parser)]
#[command(name = "agent-platform", version, about)]
struct Cli {
    /// Where the signed-in user is remembered between invocations.
    #[arg(long, env = "AGENT_PLATFORM_SESSION", default_value = ".agent-platform-session.json", global = true)]
    session_file: PathBuf,

    /// Print machine-readable JSON instead of tables.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Workflow canvas utilities.
    #[command(subcommand)]
    Canvas(CanvasCommand),

    /// Browse and create projects.
    #[command(subcommand)]
    Projects(ProjectsCommand),

    /// Browse the toolbox.
    #[command(subcommand)]
    Tools(ToolsCommand),

    /// Run toolbox agents.
    #[command(subcommand)]
    Agent(AgentCommand),

    /// Team calendar.
    #[command(subcommand)]
    Calendar(CalendarCommand),

    /// Guided product tours.
    #[command(subcommand)]
    Demo(DemoCommand),

    /// Sign in with a demo account.
    Login {
        #[arg(long, env = "AGENT_PLATFORM_EMAIL")]
        email: String,
        #[arg(long, env = "AGENT_PLATFORM_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Forget the signed-in user.
    Logout,

    /// Show the signed-in user.
    Whoami,
}

#[derive(Subcommand)]
pub enum CanvasCommand {
    /// Print the CMS Component Designer workflow as JSON.
    Preset,
    /// Validate a saved canvas and print its nodes, edges and run order.
    Inspect {
        file: PathBuf,
    },
    /// Build a small workflow through the editing gestures and print it.
    DemoEdit,
}

#[derive(Subcommand)]
pub enum ProjectsCommand {
    List {
        /// Substring of the project name or client.
        #[arg(long, default_value = "")]
        search: String,
        /// planning, active or completed.
        #[arg(long)]
        status: Option<store::models::ProjectStatus>,
        /// Only projects the signed-in user belongs to.
        #[arg(long)]
        mine: bool,
    },
    /// Run the new-project wizard non-interactively.
    Create(CreateProject),
}

#[derive(Args)]
pub struct CreateProject {
    /// What the project should deliver.
    #[arg(long)]
    pub prompt: String,
    #[arg(long)]
    pub client: String,
    /// Overrides the generated project name.
    #[arg(long)]
    pub name: Option<String>,
    /// User ID to put on the team; repeatable.
    #[arg(long = "member")]
    pub members: Vec<String>,
    /// Optional integration to enable (confluence, figma); repeatable.
    #[arg(long = "integration")]
    pub integrations: Vec<String>,
    /// Simulated thinking time before recommendations appear.
    #[arg(long, env = "AGENT_PLATFORM_THINK_MS", default_value_t = 2000)]
    pub think_ms: u64,
    /// Simulated setup time before the project is created.
    #[arg(long, env = "AGENT_PLATFORM_SETUP_MS", default_value_t = 2000)]
    pub setup_ms: u64,
}

#[derive(Subcommand)]
pub enum ToolsCommand {
    List {
        #[arg(long, default_value = "")]
        search: String,
        /// ai_agents, integrations, collaboration, analytics or agent_orchestrator.
        #[arg(long)]
        category: Option<store::models::ToolCategory>,
        #[arg(long)]
        featured: bool,
        /// name, popular or recent.
        #[arg(long, default_value = "popular")]
        sort: store::ToolSort,
    },
}

#[derive(Subcommand)]
pub enum AgentCommand {
    /// Run a tool's agent and print its output. Ctrl-C cancels.
    Run {
        tool_id: String,
        /// Defaults to the tool's own prompt.
        #[arg(long)]
        prompt: Option<String>,
        /// Length of the simulated thinking phase.
        #[arg(long, env = "AGENT_RUN_MS", default_value_t = 4000)]
        run_ms: u64,
        #[arg(long, env = "AGENT_RUN_STEPS", default_value_t = 20)]
        steps: u32,
        /// Write the output into this directory under its suggested name.
        #[arg(long)]
        save: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum CalendarCommand {
    List {
        /// YYYY-MM-DD; lists every event when omitted.
        #[arg(long)]
        date: Option<chrono::NaiveDate>,
        /// meeting, deadline, milestone or review.
        #[arg(long = "type")]
        event_type: Option<store::models::EventType>,
    },
    /// Ask the scheduling assistant for a sprint planning slot.
    Suggest {
        /// Project to plan for; its team becomes the attendee list.
        #[arg(long)]
        project: Option<String>,
        /// Pretend today is this date (YYYY-MM-DD).
        #[arg(long)]
        today: Option<chrono::NaiveDate>,
    },
}

#[derive(Subcommand)]
pub enum DemoCommand {
    /// List the bundled scenes.
    List,
    /// Play a scene in the terminal. Ctrl-C stops it.
    Play {
        scene_id: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let ctx = commands::Context::new(cli.session_file, cli.json);

    match cli.command {
        Command::Canvas(cmd) => commands::canvas(&ctx, cmd),
        Command::Projects(cmd) => commands::projects(&ctx, cmd).await,
        Command::Tools(cmd) => commands::tools(&ctx, cmd),
        Command::Agent(cmd) => commands::agent(&ctx, cmd).await,
        Command::Calendar(cmd) => commands::calendar(&ctx, cmd).await,
        Command::Demo(cmd) => commands::demo(&ctx, cmd).await,
        Command::Login { email, password } => commands::login(&ctx, &email, &password),
        Command::Logout => commands::logout(&ctx),
        Command::Whoami => commands::whoami(&ctx),
    }
}
