use std::path::PathBuf;

use clap::{Parser, Subcommand};
use promptkeep::commands::{self, add::AddRequest, Session};
use promptkeep::error::report;
use promptkeep::output::{ConsoleOutput, Output};
use promptkeep::tools::{BuiltinChooser, Chooser, CommandEditor, FzfChooser, SystemClipboard};
use promptkeep::{Config, PickerKind, VaultLocator};

#[derive(Parser)]
#[command(name = "promptkeep")]
#[command(about = "PromptKeep - A CLI tool for managing and accessing your AI prompts", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new prompt vault
    Init {
        #[arg(default_value = "~/PromptVault", help = "Path where your prompt vault will be created")]
        path: String,
        #[arg(short, long, help = "Force creation even if directory exists")]
        force: bool,
    },
    /// Add a new prompt and open it in your editor
    Add {
        #[arg(short, long, help = "Title of the prompt")]
        title: String,
        #[arg(short, long, default_value = "", help = "Short description of the prompt")]
        description: String,
        #[arg(long = "tag", help = "Tag for the prompt (repeatable)")]
        tags: Vec<String>,
        #[arg(long, help = "Path to the prompt vault")]
        vault: Option<String>,
    },
    /// Pick a prompt and copy it to the clipboard
    Pick {
        #[arg(long, help = "Path to the prompt vault")]
        vault: Option<String>,
        #[arg(long = "tag", help = "Only show prompts with this tag (repeatable, all must match)")]
        tags: Vec<String>,
    },
    /// Pick a prompt and open it in your editor
    Edit {
        #[arg(long, help = "Path to the prompt vault")]
        vault: Option<String>,
        #[arg(long = "tag", help = "Only show prompts with this tag (repeatable, all must match)")]
        tags: Vec<String>,
    },
    /// Render the chooser preview for a prompt file
    #[command(hide = true)]
    Preview { path: PathBuf },
}

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(format!("promptkeep={}", log_level)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let config = Config::from_env();
    let mut output = ConsoleOutput;

    let code = match run(cli.command, &config, &mut output) {
        Ok(()) => 0,
        Err(e) => report(&mut output, &e),
    };
    std::process::exit(code);
}

fn run(command: Commands, config: &Config, output: &mut dyn Output) -> anyhow::Result<()> {
    let chooser: Box<dyn Chooser> = match config.picker {
        PickerKind::Fzf => {
            let preview = std::env::current_exe()
                .ok()
                .map(|exe| FzfChooser::preview_via(&exe));
            Box::new(FzfChooser::new(preview))
        }
        PickerKind::Builtin => Box::new(BuiltinChooser),
    };
    let editor = CommandEditor::new(config.editor.clone());
    let clipboard = SystemClipboard;

    let mut session = Session {
        locator: VaultLocator::from_config(config),
        output,
        editor: &editor,
        chooser: chooser.as_ref(),
        clipboard: &clipboard,
    };

    match command {
        Commands::Init { path, force } => commands::init::run(session.output, &path, force).map(|_| ()),
        Commands::Add {
            title,
            description,
            tags,
            vault,
        } => {
            let request = AddRequest {
                title,
                description,
                tags,
                vault,
            };
            commands::add::run(&mut session, &request).map(|_| ())
        }
        Commands::Pick { vault, tags } => {
            commands::pick::run(&mut session, vault.as_deref(), &tags).map(|_| ())
        }
        Commands::Edit { vault, tags } => {
            commands::edit::run(&mut session, vault.as_deref(), &tags).map(|_| ())
        }
        Commands::Preview { path } => commands::preview::run(session.output, &path),
    }
}
