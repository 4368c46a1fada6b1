use anyhow::{Context, Result};
use clap::Args;
use sortviz_orst::orst::Algorithm;

use crate::pacing::{Pacing, MAX_SPEED, MIN_SPEED};
use crate::palette::ColorScheme;

pub const DEFAULT_SIZE: u16 = 30;
pub const DEFAULT_SPEED: f64 = 5.0;
pub const DEFAULT_HEIGHT: u16 = 20;

/// Options of a visualization run, as given on the command line.
#[derive(Debug, Clone, Args)]
pub struct RunOptions {
    /// The sorting algorithm to animate
    #[arg(short, long, value_enum, default_value_t = Algorithm::Bubble)]
    pub algorithm: Algorithm,

    /// Number of bars to sort
    #[arg(short = 'n', long, default_value_t = DEFAULT_SIZE,
          value_parser = clap::value_parser!(u16).range(10..=100))]
    pub size: u16,

    /// Steps per second, between 1 and 10
    #[arg(short, long, default_value_t = DEFAULT_SPEED, value_parser = parse_speed)]
    pub speed: f64,

    /// Do not pause between steps
    #[arg(long, conflicts_with = "speed")]
    pub instant: bool,

    /// Colour scheme of the unsorted bars
    #[arg(long, value_enum, default_value_t = ColorScheme::Rainbow)]
    pub scheme: ColorScheme,

    /// Height of the chart in terminal rows
    #[arg(long, default_value_t = DEFAULT_HEIGHT,
          value_parser = clap::value_parser!(u16).range(4..=100))]
    pub height: u16,

    /// Seed the random arrays so a run can be reproduced
    #[arg(long)]
    pub seed: Option<u64>,

    /// Stop the sort once this many steps have been shown
    #[arg(long)]
    pub max_steps: Option<usize>,

    /// Number of rounds, each over a freshly generated array
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub rounds: u32,

    /// Show a step counter instead of the chart
    #[arg(long)]
    pub headless: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

fn parse_speed(s: &str) -> std::result::Result<f64, String> {
    let speed: f64 = s.parse().map_err(|_| format!("`{s}` is not a number"))?;
    if (MIN_SPEED..=MAX_SPEED).contains(&speed) {
        Ok(speed)
    } else {
        Err(format!("speed must be between {MIN_SPEED} and {MAX_SPEED}"))
    }
}

/// Validated settings the shell runs with.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualizerConfig {
    pub algorithm: Algorithm,
    pub size: usize,
    pub pacing: Pacing,
    pub scheme: ColorScheme,
    pub chart_height: usize,
    pub seed: Option<u64>,
    pub max_steps: Option<usize>,
    pub rounds: u32,
    pub headless: bool,
    pub verbosity: u8,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            size: DEFAULT_SIZE as usize,
            pacing: Pacing::none(),
            scheme: ColorScheme::default(),
            chart_height: DEFAULT_HEIGHT as usize,
            seed: None,
            max_steps: None,
            rounds: 1,
            headless: false,
            verbosity: 0,
        }
    }
}

impl TryFrom<RunOptions> for VisualizerConfig {
    type Error = anyhow::Error;

    fn try_from(options: RunOptions) -> Result<Self> {
        let pacing = if options.instant {
            Pacing::none()
        } else {
            Pacing::from_speed(options.speed).context("invalid --speed")?
        };

        Ok(Self {
            algorithm: options.algorithm,
            size: options.size as usize,
            pacing,
            scheme: options.scheme,
            chart_height: options.height as usize,
            seed: options.seed,
            max_steps: options.max_steps,
            rounds: options.rounds,
            headless: options.headless,
            verbosity: options.verbose,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use clap::Parser;

    use super::*;

    #[derive(Parser)]
    struct Cli {
        #[command(flatten)]
        options: RunOptions,
    }

    fn parse(args: &[&str]) -> Result<VisualizerConfig> {
        let cli = Cli::try_parse_from(std::iter::once("sortviz").chain(args.iter().copied()))?;
        VisualizerConfig::try_from(cli.options)
    }

    #[test]
    fn defaults() {
        let config = parse(&[]).unwrap();
        assert_eq!(config.algorithm, Algorithm::Bubble);
        assert_eq!(config.size, 30);
        assert_eq!(config.pacing.delay(), Duration::from_millis(200));
        assert_eq!(config.scheme, ColorScheme::Rainbow);
        assert_eq!(config.rounds, 1);
        assert!(!config.headless);
    }

    #[test]
    fn every_option() {
        let config = parse(&[
            "--algorithm",
            "quick",
            "-n",
            "100",
            "--instant",
            "--scheme",
            "cool",
            "--seed",
            "7",
            "--max-steps",
            "25",
            "--rounds",
            "3",
            "--headless",
            "-vv",
        ])
        .unwrap();

        assert_eq!(config.algorithm, Algorithm::Quick);
        assert_eq!(config.size, 100);
        assert_eq!(config.pacing, Pacing::none());
        assert_eq!(config.scheme, ColorScheme::Cool);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.max_steps, Some(25));
        assert_eq!(config.rounds, 3);
        assert!(config.headless);
        assert_eq!(config.verbosity, 2);
    }

    #[test]
    fn sizes_follow_the_slider_bounds() {
        assert!(parse(&["-n", "9"]).is_err());
        assert!(parse(&["-n", "101"]).is_err());
        assert_eq!(parse(&["-n", "10"]).unwrap().size, 10);
    }

    #[test]
    fn speed_bounds() {
        assert!(parse(&["--speed", "0"]).is_err());
        assert!(parse(&["--speed", "fast"]).is_err());
        assert_eq!(
            parse(&["--speed", "10"]).unwrap().pacing.delay(),
            Duration::from_millis(100)
        );
        assert!(parse(&["--speed", "2", "--instant"]).is_err());
    }

    #[test]
    fn zero_rounds_are_rejected() {
        assert!(parse(&["--rounds", "0"]).is_err());
    }
}
