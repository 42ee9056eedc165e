mod args;
mod commands;
mod config;
mod global;
mod handlers;

use args::Commands;
use clap::Parser;
use global::GlobalArgs;

#[derive(Parser)]
#[command(name = "base-dots")]
#[command(version)]
#[command(about = "Encode binary data as digits in any alphabet or as Braille glyphs", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Load alphabets configuration with user overrides
    let config = config::load_registry(&cli.global)?;

    match cli.command {
        Commands::Encode(args) => handlers::encode::handle(args, &cli.global, &config),
        Commands::Decode(args) => handlers::decode::handle(args, &cli.global, &config),
        Commands::Dump(args) => handlers::dump::handle(args, &cli.global, &config),
        Commands::Compare(args) => handlers::compare::handle(args, &config),
        Commands::List(args) => handlers::list::handle(args, &config),
    }
}
