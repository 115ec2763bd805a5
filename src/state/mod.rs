// src/state/mod.rs
//! Central application state. All mutations go through the methods here;
//! rendering code receives `&mut AppState` and calls them.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use chrono::{DateTime, Local};
use tracing::{debug, warn};

use crate::config::Settings;
use crate::net::client::{ApiClient, ApiError};
use crate::net::task::{self, PendingAnalysis, PendingStats};
use crate::net::types::{AnalysisResponse, AnalysisResultRow, TokenStats};
use crate::state::progress::ProgressSimulator;
use crate::state::selection::{SelectionStore, CSV_ONLY_MESSAGE};

pub mod progress;
pub mod selection;

/// How long the finished progress panel lingers after a success.
const COMPLETE_LINGER: Duration = Duration::from_secs(2);

pub const NO_RESULTS_MESSAGE: &str = "No results to display";

/// The progress feed of a request that just succeeded, frozen at 100% and
/// kept on screen briefly. No ticks reach it; only pending requests tick.
pub struct CompletedProgress {
    pub simulator: ProgressSimulator,
    finished_at: Instant,
}

pub struct AppState {
    pub settings: Settings,
    client: ApiClient,

    // Selection
    pub selection: SelectionStore,
    pub selection_error: Option<String>,

    // Request lifecycle: `pending` occupied means Submitting; clearing it
    // is the single reset path that re-enables the Analyze action.
    pub pending: Option<PendingAnalysis>,
    pub completed: Option<CompletedProgress>,

    // Results & errors
    pub results: Option<Vec<AnalysisResultRow>>,
    pub files_processed: Option<u32>,
    pub error_message: Option<String>,
    pub scroll_results: bool,

    // Header stats widget
    pub stats: Option<TokenStats>,
    pub stats_refreshed: Option<DateTime<Local>>,
    pending_stats: Option<PendingStats>,

    pub drag_hover: bool,
}

impl AppState {
    pub fn new(settings: Settings, client: ApiClient) -> Self {
        Self {
            settings,
            client,
            selection: SelectionStore::default(),
            selection_error: None,
            pending: None,
            completed: None,
            results: None,
            files_processed: None,
            error_message: None,
            scroll_results: false,
            stats: None,
            stats_refreshed: None,
            pending_stats: None,
            drag_hover: false,
        }
    }

    pub fn can_analyze(&self) -> bool {
        !self.selection.is_empty() && self.pending.is_none()
    }

    /// Add dropped or picked files to the selection. A batch with no
    /// `.csv`-named entry leaves the selection unchanged and shows the
    /// selection error; any accepted batch clears it.
    pub fn add_paths(&mut self, incoming: Vec<PathBuf>) {
        if incoming.is_empty() {
            return;
        }
        let added = self.selection.add_paths(incoming);
        if added == 0 {
            self.selection_error = Some(CSV_ONLY_MESSAGE.to_string());
        } else {
            self.selection_error = None;
        }
    }

    pub fn remove_file(&mut self, index: usize) {
        self.selection.remove_file(index);
    }

    /// Empty the selection and hide any shown results and errors.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
        self.selection_error = None;
        self.error_message = None;
        self.results = None;
        self.files_processed = None;
        self.scroll_results = false;
    }

    /// Idle -> Submitting: hide previous panels, start the simulator and
    /// kick off the worker thread. No-op unless the selection is non-empty
    /// and nothing is already in flight.
    pub fn start_analysis(&mut self, now: Instant) {
        if !self.can_analyze() {
            return;
        }
        self.error_message = None;
        self.results = None;
        self.files_processed = None;
        self.scroll_results = false;
        self.completed = None;
        self.pending = Some(task::spawn_analysis(
            self.client.clone(),
            self.selection.files().to_vec(),
            now,
        ));
    }

    /// Kick off a best-effort stats fetch unless one is already running.
    pub fn refresh_stats(&mut self) {
        if self.pending_stats.is_none() {
            self.pending_stats = Some(task::spawn_stats(self.client.clone()));
        }
    }

    /// Called once per UI frame: tick the simulator, drain worker results,
    /// expire the lingering completion panel.
    pub fn poll(&mut self, now: Instant) {
        let outcome = match &mut self.pending {
            Some(pending) => {
                pending.simulator.tick(now);
                pending.try_take()
            }
            None => None,
        };
        if let Some(result) = outcome {
            // Taking the slot both re-enables the Analyze action and stops
            // the simulator, on success and failure alike.
            if let Some(request) = self.pending.take() {
                match result {
                    Ok(response) => self.apply_response(response, request.simulator, now),
                    Err(err) => self.fail_request(err),
                }
            }
        }

        if let Some(done) = &self.completed {
            if now.duration_since(done.finished_at) >= COMPLETE_LINGER {
                self.completed = None;
            }
        }

        if let Some(stats_task) = &self.pending_stats {
            match stats_task.try_take() {
                Some(Ok(stats)) => {
                    self.pending_stats = None;
                    self.update_stats(stats);
                }
                Some(Err(err)) => {
                    self.pending_stats = None;
                    // Stats are optional; never surfaced to the user.
                    debug!("Stats fetch failed: {}", err);
                }
                None => {}
            }
        }
    }

    fn apply_response(
        &mut self,
        response: AnalysisResponse,
        mut simulator: ProgressSimulator,
        now: Instant,
    ) {
        simulator.complete();
        self.completed = Some(CompletedProgress {
            simulator,
            finished_at: now,
        });

        if let Some(stats) = response.token_stats {
            self.update_stats(stats);
        }
        self.files_processed = response.files_processed;

        if response.results.is_empty() {
            self.error_message = Some(NO_RESULTS_MESSAGE.to_string());
        } else {
            self.results = Some(response.results);
            self.scroll_results = true;
        }
    }

    fn fail_request(&mut self, err: ApiError) {
        warn!("Analysis request failed: {}", err);
        self.error_message = Some(err.to_string());
        // Previously rendered results stay untouched.
    }

    /// Single update path for the header widget; repeated updates with the
    /// same payload are idempotent.
    pub fn update_stats(&mut self, stats: TokenStats) {
        self.stats = Some(stats);
        self.stats_refreshed = Some(Local::now());
    }
}
