use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use eyre::Result;
use healthscore_cli::config::{self, DEFINITIONS_DIR_ENV};
use healthscore_cli::{commands, logging};

#[derive(Parser, Debug)]
#[command(
    name = "healthscore",
    about = "Score health questionnaires into a risk score, urgency tier and recommendations",
    version
)]
struct Cli {
    /// Config file (defaults to <config dir>/healthscore/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Directory of extra assessment definitions, one JSON file each
    #[arg(long, global = true)]
    definitions_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the offered assessments
    List,
    /// Print an assessment definition as JSON
    Show { id: String },
    /// Check every definition file in a directory
    Validate { dir: PathBuf },
    /// Score a response sheet against an assessment
    Score {
        id: String,
        /// Response sheet file, or `-` for stdin
        #[arg(long)]
        responses: PathBuf,
        /// Print the narrative grounding text instead of JSON
        #[arg(long)]
        context: bool,
    },
}

fn read_sheet(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut sheet = String::new();
        std::io::stdin().read_to_string(&mut sheet)?;
        return Ok(sheet);
    }
    std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read responses at {}: {e}", path.display()))
}

fn main() -> Result<ExitCode> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let config = logging::with_startup_logging(std::io::stderr, || {
        config::load_config(cli.config.as_deref())
    })?;
    logging::init(config.log_format);

    let env_dir = std::env::var(DEFINITIONS_DIR_ENV).ok();
    let definitions_dir =
        config.definitions_dir(cli.definitions_dir.as_deref(), env_dir.as_deref());
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Command::List => {
            let registry = commands::build_registry(&config, definitions_dir.as_deref())?;
            commands::list(&registry, &mut stdout)?;
        }
        Command::Show { id } => {
            let registry = commands::build_registry(&config, definitions_dir.as_deref())?;
            commands::show(&registry, &id, &mut stdout)?;
        }
        Command::Validate { dir } => {
            if !commands::validate(&dir, &mut stdout)? {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Score {
            id,
            responses,
            context,
        } => {
            let registry = commands::build_registry(&config, definitions_dir.as_deref())?;
            let sheet = read_sheet(&responses)?;
            commands::score(&registry, &id, &sheet, context, &mut stdout)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}
