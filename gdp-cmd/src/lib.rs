//! Command implementations for the GDP dashboard CLI.
//!
//! Every subcommand reads the same wide CSV the dashboard embeds, so the
//! CLI doubles as a way to check a dataset before it ships.

use clap::Subcommand;
use std::path::PathBuf;

pub mod project;
pub mod summary;
pub mod tidy;

#[derive(Subcommand)]
pub enum Command {
    /// Print entity count, period bounds and record count for a wide CSV
    Summary {
        /// Wide CSV (or .csv.gz): entity column followed by one column per period
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Reshape a wide CSV into tidy `entity,period,value` rows
    Tidy {
        #[arg(short, long)]
        input: PathBuf,

        /// Output path for the tidy CSV
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Print the chart projection for a selection as JSON
    Project {
        #[arg(short, long)]
        input: PathBuf,

        /// Entity to chart; repeat for several. Order sets legend order.
        #[arg(short, long = "entity")]
        entities: Vec<String>,

        /// First period (inclusive). Defaults to the earliest in the table.
        #[arg(long)]
        from: Option<i32>,

        /// Last period (inclusive). Defaults to the latest in the table.
        #[arg(long)]
        to: Option<i32>,

        /// Dashboard TOML supplying chart title and axis labels
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Summary { input } => {
            let summary = summary::run_summary(&input)?;
            println!("{}", summary);
            Ok(())
        }
        Command::Tidy { input, output } => {
            let written = tidy::run_tidy(&input, &output)?;
            log::info!("Wrote {} tidy records to {}", written, output.display());
            Ok(())
        }
        Command::Project {
            input,
            entities,
            from,
            to,
            config,
        } => {
            let json = project::run_project(&input, &entities, from, to, config.as_deref())?;
            println!("{}", json);
            Ok(())
        }
    }
}
