use std::io;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use fincalc::cli::{handle_compute_command, handle_formulas_command, ComputeArgs};
use fincalc::config::Settings;
use fincalc::menu::Calculator;

#[derive(Parser)]
#[command(
    name = "fincalc",
    version,
    about = "Interactive time-value-of-money calculator",
    long_about = "fincalc is a menu-driven calculator for the standard time-value-of-money \
                  formulas: single cash flows, annuities, perpetuities and APR/EAR \
                  conversion. Learning mode explains each concept and formula before \
                  computing it."
)]
struct Cli {
    /// Enable learning mode without asking at startup
    #[arg(long, global = true)]
    learn: bool,

    /// Disable coloured output
    #[arg(long, global = true)]
    no_color: bool,

    /// Log debug information to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the menu-driven calculator (default)
    #[command(alias = "menu")]
    Interactive,

    /// Run a single calculation from command-line arguments
    Compute(ComputeArgs),

    /// Print every concept and formula used by learning mode
    Formulas,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::from_flags(cli.learn, cli.no_color, cli.verbose);
    init_tracing(&settings);

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Interactive => {
            let stdin = io::stdin();
            let mut calculator = Calculator::new(stdin.lock(), io::stdout(), settings);
            calculator.run()?;
        }
        Commands::Compute(args) => {
            handle_compute_command(&args, &mut io::stdout().lock())?;
        }
        Commands::Formulas => {
            handle_formulas_command(&mut io::stdout().lock(), settings.color)?;
        }
    }

    Ok(())
}

fn init_tracing(settings: &Settings) {
    let filter = if settings.verbose {
        EnvFilter::new(settings.log_filter())
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(settings.log_filter()))
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}
