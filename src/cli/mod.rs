mod args;
mod config;
mod global;
mod handlers;

use clap::Parser;
use shortening::{CodecError, Config};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use args::Commands;
use config::{resolve_scheme, should_use_color};
use global::GlobalArgs;

#[derive(Parser)]
#[command(name = "shortening")]
#[command(version)]
#[command(about = "Turn integers into short, reversible identifiers and back", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.global.verbose);

    match execute(cli.command, &cli.global) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report(e.as_ref(), should_use_color(&cli.global));
            ExitCode::FAILURE
        }
    }
}

fn execute(command: Commands, global: &GlobalArgs) -> Result<(), Box<dyn std::error::Error>> {
    // Load settings with user overrides
    let config = Config::load_with_overrides()?;
    let scheme = resolve_scheme(global, &config)?;
    tracing::debug!(%scheme, "resolved scheme");

    match command {
        Commands::Encode(args) => handlers::encode::handle(args, scheme),
        Commands::Decode(args) => handlers::decode::handle(args, scheme),
        Commands::List => handlers::list::handle(&config),
        Commands::Table => handlers::table::handle(scheme),
    }
}

/// `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn report(err: &(dyn std::error::Error + 'static), use_color: bool) {
    if use_color {
        eprintln!("\x1b[1;31merror:\x1b[0m {}", err);
    } else {
        eprintln!("error: {}", err);
    }

    if let Some(codec_err) = err.downcast_ref::<CodecError>() {
        if use_color {
            eprintln!("\x1b[1;36mhint:\x1b[0m {}", codec_err.hint());
        } else {
            eprintln!("hint: {}", codec_err.hint());
        }
    }
}
