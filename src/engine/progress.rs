//! Progress events emitted by the copy pass, and the terminal sink used by the CLI.

use kdam::{Animation, Bar, BarExt};
use log::info;
use std::path::PathBuf;

use crate::Report;
use crate::utils::config::ProgressConsts;

/// One copied (or, under dry-run, planned) track.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackProgress {
    pub ordinal: usize,
    pub total: usize,
    pub destination: PathBuf,
    pub source_bytes: u64,
    /// Destination size minus source size; `None` when nothing was written.
    pub byte_delta: Option<i64>,
}

#[derive(Clone, Debug)]
pub enum ProgressEvent {
    Started { total: usize },
    Track(TrackProgress),
    Finished(Report),
}

/// Receives structured progress; formatting is up to the sink.
pub trait ProgressSink {
    fn on_event(&mut self, event: &ProgressEvent);
}

impl<F> ProgressSink for F
where
    F: FnMut(&ProgressEvent),
{
    fn on_event(&mut self, event: &ProgressEvent) {
        self(event)
    }
}

/// Discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct Silent;

impl ProgressSink for Silent {
    fn on_event(&mut self, _event: &ProgressEvent) {}
}

/// Configuration for creating a progress bar
pub struct ProgressBarConfig {
    pub total: usize,
    pub desc: &'static str,
    pub animation: Animation,
}

impl ProgressBarConfig {
    pub fn new(total: usize, desc: &'static str, animation: Animation) -> Self {
        Self {
            total,
            desc,
            animation,
        }
    }
}

pub fn create_progress_bar(config: ProgressBarConfig) -> Bar {
    kdam::tqdm!(
        total = config.total,
        desc = config.desc,
        animation = config.animation,
        unit = ProgressConsts::BAR_UNIT
    )
}

/// CLI sink: one line per track when verbose, otherwise a bar. Always ends with a summary.
pub struct TerminalSink {
    verbose: bool,
    bar: Option<Bar>,
}

impl TerminalSink {
    pub fn new(verbose: bool) -> Self {
        Self { verbose, bar: None }
    }
}

impl ProgressSink for TerminalSink {
    fn on_event(&mut self, event: &ProgressEvent) {
        match event {
            ProgressEvent::Started { total } => {
                if !self.verbose {
                    self.bar = Some(create_progress_bar(ProgressBarConfig::new(
                        *total,
                        ProgressConsts::BAR_DESC,
                        Animation::Classic,
                    )));
                }
            }
            ProgressEvent::Track(t) => match &mut self.bar {
                Some(bar) => {
                    let _ = bar.update(1);
                }
                None => info!("{}", format_track_line(t)),
            },
            ProgressEvent::Finished(report) => {
                if let Some(mut bar) = self.bar.take() {
                    let _ = bar.refresh();
                    eprintln!();
                }
                info!("{}", format_summary(report));
            }
        }
    }
}

/// `  7/120 /dst/Album/007-song.mp3 (+0)`; the delta is omitted under dry-run.
pub fn format_track_line(t: &TrackProgress) -> String {
    let width = t.total.to_string().len();
    let delta = match t.byte_delta {
        Some(d) => format!(" ({d:+})"),
        None => String::new(),
    };
    format!(
        "{:>width$}/{} {}{}",
        t.ordinal,
        t.total,
        t.destination.display(),
        delta
    )
}

pub fn format_summary(report: &Report) -> String {
    let verb = match (report.destination.is_some(), report.dry_run) {
        (false, _) => "Counted",
        (true, true) => "Would copy",
        (true, false) => "Copied",
    };
    format!(
        "{} {} track(s), {} bytes in {:.2?}",
        verb, report.track_count, report.total_bytes, report.elapsed
    )
}
