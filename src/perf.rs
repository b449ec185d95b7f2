//! Command timings and the event log.
//!
//! Timings print to stderr when `--perf` is on. The event log is a
//! JSON-lines file holding one record per executed command.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::warn;

use crate::commands::Outcome;

static TIMINGS: AtomicBool = AtomicBool::new(false);
static EVENT_LOG: Mutex<Option<EventLog>> = Mutex::new(None);

pub fn set_timings(enabled: bool) {
    TIMINGS.store(enabled, Ordering::Relaxed);
}

pub fn timings_enabled() -> bool {
    TIMINGS.load(Ordering::Relaxed)
}

fn millis(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}

/// Wall-clock timer for one phase of a run: reading, a command, writing.
#[derive(Debug)]
pub struct Timer {
    label: &'static str,
    started: Instant,
}

impl Timer {
    pub fn start(label: &'static str) -> Self {
        Self {
            label,
            started: Instant::now(),
        }
    }

    /// Stop the timer and return the elapsed time, printing it when
    /// timings are on.
    pub fn stop(self) -> Duration {
        let elapsed = self.started.elapsed();
        if timings_enabled() {
            eprintln!("[perf] {}: {:.2} ms", self.label, millis(elapsed));
        }
        elapsed
    }
}

#[derive(Debug)]
struct EventLog {
    opened: Instant,
    writer: BufWriter<File>,
}

/// One line of the event log.
#[derive(Serialize)]
struct Event<'a> {
    at_ms: f64,
    took_ms: f64,
    #[serde(flatten)]
    outcome: &'a Outcome,
}

/// Start recording commands to `path`, truncating it.
pub fn open_event_log(path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let log = EventLog {
        opened: Instant::now(),
        writer: BufWriter::new(file),
    };
    *EVENT_LOG.lock().expect("event log lock poisoned") = Some(log);
    Ok(())
}

/// Flush and stop recording.
pub fn close_event_log() -> io::Result<()> {
    let log = EVENT_LOG.lock().expect("event log lock poisoned").take();
    match log {
        Some(mut log) => log.writer.flush(),
        None => Ok(()),
    }
}

/// Append a command's outcome to the event log, if one is open.
pub fn record(outcome: &Outcome, took: Duration) {
    let mut guard = EVENT_LOG.lock().expect("event log lock poisoned");
    let Some(log) = guard.as_mut() else {
        return;
    };
    let event = Event {
        at_ms: millis(log.opened.elapsed()),
        took_ms: millis(took),
        outcome,
    };
    let written = serde_json::to_writer(&mut log.writer, &event)
        .map_err(io::Error::from)
        .and_then(|()| writeln!(log.writer))
        .and_then(|()| log.writer.flush());
    if let Err(err) = written {
        warn!(%err, command = outcome.command, "event log write failed");
    }
}
