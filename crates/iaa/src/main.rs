//! iaa CLI - Project scaffolding from Gin layout templates

use anyhow::Result;
use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use layout_core::tui::NewArgs;
use layout_core::{LayoutConfig, Project, TemplateChoice};
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// iaa product configuration
#[derive(Clone)]
pub struct IaaConfig;

impl LayoutConfig for IaaConfig {
    fn name(&self) -> &'static str {
        "iaa"
    }

    fn display_name(&self) -> &'static str {
        "iaa"
    }

    fn base_template_url(&self) -> &'static str {
        "https://github.com/q1mi/gin-base-layout.git"
    }

    fn advanced_template_url(&self) -> &'static str {
        "https://github.com/q1mi/gin-advanced-layout.git"
    }

    fn template_url_env(&self) -> &'static str {
        "IAA_TEMPLATE_URL"
    }

    fn advanced_template_url_env(&self) -> &'static str {
        "IAA_ADVANCED_TEMPLATE_URL"
    }

    fn next_steps(&self, project: &Project) -> Vec<String> {
        vec![
            format!("cd {}", project.folder_name),
            "go run cmd/server/main.go".to_string(),
        ]
    }
}

#[derive(Parser, Debug)]
#[command(name = "iaa")]
#[command(about = "CLI for scaffolding Gin projects from layout templates")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new project with gin-base-layout or gin-advanced-layout
    #[command(after_help = "Example: iaa new example.com/org/app [--advanced] [--repo <url>]")]
    New(CliNewArgs),
}

#[derive(Parser, Debug)]
pub struct CliNewArgs {
    /// Project name, used as the Go module path (e.g. example.com/org/app)
    pub name: String,

    /// Use the advanced template (gin-advanced-layout)
    #[arg(long)]
    pub advanced: bool,

    /// Custom template repository URL (takes precedence over --advanced)
    #[arg(long, value_name = "URL")]
    pub repo: Option<String>,

    /// Skip git/go installation check
    #[arg(long = "skip-tool-check")]
    pub skip_tool_check: bool,

    /// Auto-confirm all prompts (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,
}

impl From<CliNewArgs> for NewArgs {
    fn from(args: CliNewArgs) -> Self {
        NewArgs {
            name: args.name,
            template: TemplateChoice {
                repo: args.repo,
                advanced: args.advanced,
            },
            skip_tool_check: args.skip_tool_check,
            yes: args.yes,
        }
    }
}

/// Parse the command line, naming the command after the product
fn parse_args<C: LayoutConfig>(config: &C) -> Args {
    let matches = Args::command()
        .name(config.name())
        .bin_name(config.name())
        .get_matches();
    Args::from_arg_matches(&matches).unwrap_or_else(|e| e.exit())
}

/// RUST_LOG always wins; --verbose falls back to DEBUG, otherwise WARN.
fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let filter = EnvFilter::from_default_env().add_directive(level.into());
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let config = IaaConfig;
    let args = parse_args(&config);
    init_tracing(args.verbose);

    match args.command {
        Command::New(new_args) => {
            let result = layout_core::run(&config, new_args.into()).await;

            // Ensure cursor is visible on normal exit
            let _ = console::Term::stderr().show_cursor();

            result
        }
    }
}
