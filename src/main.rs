use anyhow::Result;
use clap::Parser;
use waybill::cli::{Cli, Commands};
use waybill::commands;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Classify {
            code,
            format,
            output,
            original,
        } => commands::classify::classify_code(commands::classify::ClassifyConfig {
            code,
            format,
            output,
            original,
        }),
        Commands::Carriers { format, output } => commands::carriers::list_carriers(format, output),
        Commands::Init { force } => commands::init::init_config(force),
    }
}
