use crate::metaheuristic::aco::Message;
use crate::metaheuristic::{Solution, Supervisor};

use csv::Writer;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;
use tracing::warn;

/// Writes one csv row per `aggregation_rate` iterations.
pub struct CsvSupervisor<W: Write> {
    pending: Option<Message>,
    counter: usize,
    aggregation_rate: usize,
    writer: Writer<W>,
}

impl<W: Write> CsvSupervisor<W> {
    pub fn new(aggregation_rate: usize, writer: Writer<W>) -> Self {
        CsvSupervisor {
            pending: None,
            counter: 0,
            aggregation_rate: aggregation_rate.max(1),
            writer,
        }
    }

    fn write_pending(&mut self) {
        if let Some(record) = self.pending.take() {
            if let Err(err) = self.writer.serialize(record) {
                warn!(error = %err, "failed to write iteration record");
            }
        }
        self.counter = 0;
    }

    /// Writes a partially aggregated row, if any, and flushes the writer.
    pub fn flush(&mut self) -> std::io::Result<()> {
        self.write_pending();
        self.writer.flush()
    }

    pub fn into_inner(mut self) -> std::io::Result<W> {
        self.flush()?;
        self.writer.into_inner().map_err(|err| err.into_error())
    }
}

impl<W: Write> Supervisor for CsvSupervisor<W> {
    fn notify(&mut self, message: &Message, _best: Option<&Solution>) {
        match self.pending.as_mut() {
            Some(pending) => pending.merge(message),
            None => self.pending = Some(*message),
        }

        self.counter += 1;
        if self.counter >= self.aggregation_rate {
            self.write_pending();
        }
    }
}

/// Shows the run as a terminal progress bar.
pub struct ProgressSupervisor {
    bar: ProgressBar,
}

impl ProgressSupervisor {
    pub fn new(iterations: usize) -> Self {
        let bar = ProgressBar::new(iterations as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner} [{elapsed_precise}] {bar:40} {pos}/{len} {msg}"),
        );
        ProgressSupervisor { bar }
    }

    pub fn hidden() -> Self {
        ProgressSupervisor {
            bar: ProgressBar::hidden(),
        }
    }

    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    pub fn finish(&self) {
        self.bar.finish();
    }
}

impl Supervisor for ProgressSupervisor {
    fn notify(&mut self, message: &Message, _best: Option<&Solution>) {
        self.bar.set_message(&format!("best value {}", message.best_value));
        self.bar.inc(1);
    }
}
