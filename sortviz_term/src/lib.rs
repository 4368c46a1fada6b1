//! # Introduction
//!
//! Animates the [`sortviz_orst`] engine in the terminal: the array is drawn as a column chart
//! and redrawn after every step of the selected algorithm, with settled bars in green and the
//! bar being sorted in blue.
//!
//! Install the [`sortviz`](https://crates.io/crates/sortviz) crate and run `sortviz sort run
//! --help` to see what options are available.

pub mod chart;
pub mod config;
pub mod logging;
pub mod pacing;
pub mod palette;
pub mod shell;

use std::io::{self, IsTerminal};

use clap::{Args, Subcommand};
use colored::Colorize;
use sortviz_orst::orst::Algorithm;

use config::{RunOptions, VisualizerConfig};
use logging::LogConfig;
use palette::ColorScheme;

#[derive(Debug, Args)]
#[command(flatten_help = true, subcommand_required = true)]
pub struct VisualizeArgs {
    #[command(subcommand)]
    command: VisualizeCommands,
}

#[derive(Clone, Subcommand, Debug)]
enum VisualizeCommands {
    /// Generate a random array and animate an algorithm sorting it. Ctrl-C stops the sort.
    Run {
        #[command(flatten)]
        options: RunOptions,
    },

    /// List the available algorithms with their time complexity.
    Algorithms,

    /// Print the colours used for the bars.
    Legend {
        #[arg(long, value_enum, default_value_t = ColorScheme::Rainbow)]
        scheme: ColorScheme,
    },
}

impl VisualizeArgs {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            VisualizeCommands::Run { options } => {
                let config = VisualizerConfig::try_from(options)?;
                logging::init_logging(
                    &LogConfig::from_verbosity(config.verbosity)
                        .with_ansi(io::stderr().is_terminal()),
                )?;

                shell::run_rounds(config).await?;
            }
            VisualizeCommands::Algorithms => {
                for algorithm in Algorithm::ALL {
                    println!(
                        "{:<16} {}",
                        algorithm.name().bold().green(),
                        algorithm.time_complexity().cyan()
                    );
                }
            }
            VisualizeCommands::Legend { scheme } => print!("{}", palette::legend(scheme)),
        }

        Ok(())
    }
}
