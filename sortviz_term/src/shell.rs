//! The presentation layer around the engine: draws every step, paces the animation and turns
//! Ctrl-C or the step limit into a cancellation.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rand::{rngs::StdRng, SeedableRng};
use sortviz_orst::orst::{Algorithm, TerminationReason};
use sortviz_orst::{ArrayModel, Session, StopHandle, VALUE_RANGE};
use tracing::{info, warn};

use crate::chart::BarChart;
use crate::config::VisualizerConfig;
use crate::pacing::Pacing;
use crate::palette;

const CLEAR_SCREEN: &str = "\x1b[2J";
const CURSOR_HOME: &str = "\x1b[H";
const CLEAR_LINE: &str = "\x1b[K";

/// What one round ended with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundSummary {
    pub reason: TerminationReason,
    pub steps: usize,
    pub elapsed: Duration,
}

enum Output<W> {
    Chart { chart: BarChart, out: W },
    Progress(ProgressBar),
}

/// Receives the engine's steps for one round.
struct Presenter<W> {
    algorithm: Algorithm,
    output: Output<W>,
    pacing: Pacing,
    stop: StopHandle,
    max_steps: Option<usize>,
    steps: usize,
    error: Option<io::Error>,
}

impl<W: Write> Presenter<W> {
    fn chart(config: &VisualizerConfig, stop: StopHandle, out: W) -> Self {
        let chart = BarChart::new(config.chart_height, config.scheme);
        Self::new(config, stop, Output::Chart { chart, out })
    }

    fn new(config: &VisualizerConfig, stop: StopHandle, output: Output<W>) -> Self {
        Self {
            algorithm: config.algorithm,
            output,
            pacing: config.pacing,
            stop,
            max_steps: config.max_steps,
            steps: 0,
            error: None,
        }
    }

    /// Draws the array before the first step.
    fn start(&mut self, values: &[u32]) -> io::Result<()> {
        if let Output::Chart { out, .. } = &mut self.output {
            write!(out, "{CLEAR_SCREEN}")?;
        }
        self.draw(values, None)
    }

    fn on_step(&mut self, values: &[u32], boundary: usize) {
        self.steps += 1;

        if let Err(error) = self.draw(values, Some(boundary)) {
            warn!(%error, "unable to draw step, stopping the sort");
            self.error = Some(error);
            self.stop.request_stop();
            return;
        }

        if self.max_steps.is_some_and(|max| self.steps >= max) {
            info!(steps = self.steps, "step limit reached");
            self.stop.request_stop();
        }

        self.pacing.pause();
    }

    /// Draws the final frame: all bars settled when the sort completed, the last step otherwise.
    fn finish(&mut self, values: &[u32], reason: TerminationReason) -> io::Result<()> {
        if let Output::Progress(bar) = &self.output {
            bar.finish_with_message(format!("{} {reason}", self.algorithm));
            return Ok(());
        }

        match reason {
            TerminationReason::Completed => self.draw(values, Some(values.len())),
            TerminationReason::Cancelled => Ok(()),
        }
    }

    fn draw(&mut self, values: &[u32], boundary: Option<usize>) -> io::Result<()> {
        match &mut self.output {
            Output::Progress(bar) => {
                bar.set_position(self.steps as u64);
                Ok(())
            }
            Output::Chart { chart, out } => {
                write!(out, "{CURSOR_HOME}")?;
                writeln!(
                    out,
                    "{} {} {}{CLEAR_LINE}",
                    self.algorithm.name().bold().magenta(),
                    format!("Time Complexity: {}", self.algorithm.time_complexity()).dimmed(),
                    format!("step {}", self.steps).cyan(),
                )?;
                writeln!(out)?;
                write!(out, "{}", chart.render(values, boundary))?;
                out.flush()
            }
        }
    }
}

fn progress_bar(algorithm: Algorithm) -> Result<ProgressBar> {
    let bar = ProgressBar::new_spinner();
    bar.set_style(ProgressStyle::with_template(
        "{spinner:.green} [{elapsed_precise}] {msg} -> {pos} steps",
    )?);
    bar.set_message(algorithm.name());
    bar.enable_steady_tick(Duration::from_millis(100));
    Ok(bar)
}

/// Runs every configured round until one is cancelled. Ctrl-C stops the current sort, or the
/// next one when it arrives between rounds.
pub async fn run_rounds(config: VisualizerConfig) -> Result<Vec<RoundSummary>> {
    let session = Session::new(config.size)?;
    play_rounds(&config, session).await
}

async fn play_rounds(config: &VisualizerConfig, mut session: Session) -> Result<Vec<RoundSummary>> {
    let mut rng = config.seed.map(StdRng::seed_from_u64);
    let stop = session.stop_handle();

    let ctrl_c = {
        let stop = stop.clone();
        tokio::spawn(async move {
            while tokio::signal::ctrl_c().await.is_ok() {
                info!("stop requested");
                stop.request_stop();
            }
        })
    };

    let mut summaries = Vec::new();
    for round in 1..=config.rounds {
        if stop.is_stop_requested() {
            info!(round, "stop requested before the round started");
            break;
        }

        // seeded rounds draw from one generator so the whole sequence is reproducible
        if let Some(rng) = rng.as_mut() {
            session.replace(ArrayModel::generate_with(config.size, VALUE_RANGE, rng)?);
        } else if round > 1 {
            session.reset()?;
        }

        info!(round, algorithm = %config.algorithm, size = config.size, "round started");

        let round_config = config.clone();
        let (returned, summary) =
            tokio::task::spawn_blocking(move || play_round(session, &round_config))
                .await
                .context("sorting task panicked")?;
        session = returned;
        let summary = summary?;

        info!(round, reason = %summary.reason, steps = summary.steps, "round finished");
        print_summary(config, round, &summary);
        summaries.push(summary);

        if summary.reason == TerminationReason::Cancelled {
            break;
        }
    }

    ctrl_c.abort();
    Ok(summaries)
}

/// Sorts one round on the current thread, drawing either the chart to stdout or a spinner.
fn play_round(mut session: Session, config: &VisualizerConfig) -> (Session, Result<RoundSummary>) {
    let result = if config.headless {
        progress_bar(config.algorithm).and_then(|bar| {
            let presenter = Presenter::<io::Stdout>::new(
                config,
                session.stop_handle(),
                Output::Progress(bar),
            );
            sort_round(&mut session, config.algorithm, presenter)
        })
    } else {
        let presenter = Presenter::chart(config, session.stop_handle(), io::stdout());
        sort_round(&mut session, config.algorithm, presenter)
    };
    (session, result)
}

fn sort_round<W: Write>(
    session: &mut Session,
    algorithm: Algorithm,
    mut presenter: Presenter<W>,
) -> Result<RoundSummary> {
    let started = Instant::now();
    presenter.start(session.array().as_slice())?;

    let reason = session.run(algorithm, |values, boundary| {
        presenter.on_step(values, boundary)
    })?;

    if let Some(error) = presenter.error.take() {
        return Err(error).context("failed to draw the chart");
    }
    presenter.finish(session.array().as_slice(), reason)?;

    Ok(RoundSummary {
        reason,
        steps: presenter.steps,
        elapsed: started.elapsed(),
    })
}

fn print_summary(config: &VisualizerConfig, round: u32, summary: &RoundSummary) {
    if !config.headless {
        print!("\n{}", palette::legend(config.scheme));
    }

    let reason = match summary.reason {
        TerminationReason::Completed => summary.reason.to_string().green().bold(),
        TerminationReason::Cancelled => summary.reason.to_string().yellow().bold(),
    };
    println!(
        "\n{} Round {round}: {} {reason} after {} steps in {:.2?}",
        "==>".green().bold(),
        config.algorithm.name().bold(),
        summary.steps.to_string().bold().cyan(),
        summary.elapsed,
    );
}
