mod args;
mod commands;

use clap::Parser;
use lwfa_core::domain::LwfaError;
use tracing_subscriber::EnvFilter;

const PROGRAM_NAME: &str = "lwfa-estimate";

pub fn run_from_env() -> i32 {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match run(args) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("{}", error.diagnostic_line());
            eprintln!("{}", error.fatal_exit_line());
            error.exit_code()
        }
    }
}

pub fn run<I, S>(args: I) -> Result<i32, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let full_args = std::iter::once(PROGRAM_NAME.to_string())
        .chain(args.into_iter().map(Into::into))
        .collect::<Vec<_>>();
    parse_and_dispatch(full_args)
}

fn parse_and_dispatch(args: Vec<String>) -> Result<i32, CliError> {
    match Cli::try_parse_from(&args) {
        Ok(cli) => {
            install_logging(cli.verbose);
            dispatch_parsed(cli.command, OutputFormat::from_flag(cli.json))
        }
        Err(err) => match err.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                print!("{}", err);
                Ok(0)
            }
            _ => Err(CliError::Usage(err.to_string())),
        },
    }
}

// RUST_LOG wins over -v; a second install (repeated `run` calls) is a no-op.
fn install_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[derive(Parser)]
#[command(
    name = "lwfa-estimate",
    version,
    about = "Laser-wakefield acceleration parameter estimates"
)]
struct Cli {
    /// Print serde_json summaries instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Raise log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: CliCommand,
}

#[derive(clap::Subcommand)]
enum CliCommand {
    /// Derive a Gaussian beam focus
    Beam(args::BeamArgs),
    /// Derive a laser pulse and its focal quantities
    Laser(args::LaserArgs),
    /// Derive plasma scales and, with a laser, acceleration estimates
    Plasma(args::PlasmaArgs),
    /// Estimate particle-in-cell resolution for a laser-driven plasma
    Simulation(args::SimulationArgs),
    /// Derive the matched laser and plasma for a target a0
    Matched(args::MatchedArgs),
    /// Evaluate a JSON scenario file
    Scenario(args::ScenarioArgs),
}

fn dispatch_parsed(command: CliCommand, format: OutputFormat) -> Result<i32, CliError> {
    match command {
        CliCommand::Beam(args) => commands::run_scenario_command(args.into_scenario(), format),
        CliCommand::Laser(args) => commands::run_scenario_command(args.into_scenario(), format),
        CliCommand::Plasma(args) => commands::run_scenario_command(args.into_scenario(), format),
        CliCommand::Simulation(args) => {
            commands::run_scenario_command(args.into_scenario(), format)
        }
        CliCommand::Matched(args) => commands::run_scenario_command(args.into_scenario(), format),
        CliCommand::Scenario(args) => commands::run_scenario_file_command(&args.path, format),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    fn from_flag(json: bool) -> Self {
        if json { Self::Json } else { Self::Text }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error("{0}")]
    Compute(LwfaError),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl CliError {
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Usage(_) => "INPUT.CLI_USAGE",
            Self::Compute(error) => error.placeholder(),
            Self::Internal(_) => "IO.CLI",
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Usage(_) => 2,
            Self::Compute(error) => error.exit_code(),
            Self::Internal(_) => 4,
        }
    }

    pub fn diagnostic_line(&self) -> String {
        match self {
            Self::Compute(error) => error.diagnostic_line(),
            // clap messages carry their own "error:" prefix and trailing help.
            Self::Usage(message) => {
                let first_line = message.lines().next().unwrap_or_default();
                let message = first_line.trim_start_matches("error:").trim();
                format!("ERROR: [{}] {}", self.placeholder(), message)
            }
            Self::Internal(error) => format!("ERROR: [{}] {error:#}", self.placeholder()),
        }
    }

    pub fn fatal_exit_line(&self) -> String {
        format!("FATAL EXIT CODE: {}", self.exit_code())
    }
}
