//! GDP CLI - inspect a wide GDP per capita CSV and preview chart projections.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "gdp-cli",
    version,
    about = "Gapminder GDP per capita dataset toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: gdp_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    gdp_cmd::run(cli.command)
}
