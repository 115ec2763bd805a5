// src/state/progress.rs
//! Cosmetic progress feed shown while an analysis request is in flight.
//!
//! The feed is purely time-driven and has no coupling to real upload or
//! server progress. It walks a fixed script on a 3 second cadence, then
//! creeps toward (but never reaches) 100% until the request resolves. The
//! simulator is owned by the pending request's state, so dropping the
//! request tears it down on every exit path.

use std::time::{Duration, Instant};

const TICK_INTERVAL: Duration = Duration::from_secs(3);
const OVERTIME_STEP: f32 = 2.0;
const OVERTIME_CAP: f32 = 99.0;

struct ScriptStep {
    percent: f32,
    status: &'static str,
    log: &'static str,
}

const SCRIPT: &[ScriptStep] = &[
    ScriptStep {
        percent: 10.0,
        status: "Sending files to the analysis service...",
        log: "Uploading CSV files",
    },
    ScriptStep {
        percent: 20.0,
        status: "Analyzing file structure...",
        log: "Analyzing file structure",
    },
    ScriptStep {
        percent: 30.0,
        status: "Identifying file types...",
        log: "Identifying file types",
    },
    ScriptStep {
        percent: 50.0,
        status: "Identifying columns...",
        log: "Identifying columns",
    },
    ScriptStep {
        percent: 70.0,
        status: "Validating results...",
        log: "Validating results",
    },
    ScriptStep {
        percent: 85.0,
        status: "Generating summary...",
        log: "Generating summary",
    },
    ScriptStep {
        percent: 95.0,
        status: "Finalizing...",
        log: "Finalizing",
    },
];

#[derive(Debug)]
pub struct ProgressSimulator {
    percent: f32,
    status: String,
    log: Vec<String>,
    next_step: usize,
    last_tick: Instant,
}

impl ProgressSimulator {
    pub fn start(now: Instant) -> Self {
        Self {
            percent: 0.0,
            status: "Starting analysis...".to_string(),
            log: vec!["Preparing upload...".to_string()],
            next_step: 0,
            last_tick: now,
        }
    }

    /// Advance by however many whole intervals have elapsed since the last
    /// tick. Called once per UI frame with the current time.
    pub fn tick(&mut self, now: Instant) {
        while now.duration_since(self.last_tick) >= TICK_INTERVAL {
            self.last_tick += TICK_INTERVAL;
            self.advance();
        }
    }

    fn advance(&mut self) {
        if let Some(step) = SCRIPT.get(self.next_step) {
            self.next_step += 1;
            self.percent = step.percent;
            self.status = step.status.to_string();
            self.log.push(step.log.to_string());
        } else {
            // Script exhausted; creep without ever claiming completion.
            self.percent = (self.percent + OVERTIME_STEP).min(OVERTIME_CAP);
            self.status = "Processing...".to_string();
        }
    }

    /// Snap to 100% once the real response has arrived.
    pub fn complete(&mut self) {
        self.percent = 100.0;
        self.status = "Analysis complete".to_string();
        self.log.push("Analysis complete".to_string());
    }

    pub fn percent(&self) -> f32 {
        self.percent
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn log(&self) -> &[String] {
        &self.log
    }
}
