use crate::chronometer::Chronometer;
use std::fmt::Display;

/// Writes progress messages to stderr, stamped with the time elapsed since creation.
#[derive(Clone, Copy)]
pub struct Logger {
    chronometer: Chronometer,
    enabled: bool,
}

impl Logger {
    pub fn new(enabled: bool) -> Self {
        Self {
            chronometer: Chronometer::new(),
            enabled,
        }
    }

    pub fn log(&self, value: impl Display) {
        if self.enabled {
            eprintln!("{} ({} elapsed)", value, self.chronometer.elapsed());
        }
    }
}

/// Logs only every `interval`-th call.
#[derive(Clone, Copy)]
pub struct PartialLogger<'a> {
    index: usize,
    interval: usize,
    logger: &'a Logger,
}

impl<'a> PartialLogger<'a> {
    pub fn new(interval: usize, logger: &'a Logger) -> Self {
        Self {
            index: 0,
            interval: interval.max(1),
            logger,
        }
    }

    /// Returns whether `f` was called.
    pub fn log<D: Display>(&mut self, f: impl FnOnce(usize) -> D) -> bool {
        let due = self.index % self.interval == 0;
        if due {
            self.logger.log(f(self.index));
        }
        self.index += 1;
        due
    }
}
