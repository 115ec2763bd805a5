// src/net/task.rs
//! Worker-thread plumbing. Network calls run on spawned threads and report
//! back over mpsc channels that the UI loop polls each frame.

use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::Instant;

use crate::net::client::{ApiClient, ApiError};
use crate::net::types::{AnalysisResponse, TokenStats};
use crate::state::progress::ProgressSimulator;
use crate::state::selection::SelectedFile;

/// An in-flight analysis request. While one of these occupies the pending
/// slot, the Analyze action stays disabled; dropping it tears down the
/// progress simulator with it.
pub struct PendingAnalysis {
    pub rx: Receiver<Result<AnalysisResponse, ApiError>>,
    pub simulator: ProgressSimulator,
}

impl PendingAnalysis {
    /// Non-blocking check for the worker's result. A disconnected channel
    /// means the worker died without sending; report it as a failure rather
    /// than leaving the request pending forever.
    pub fn try_take(&self) -> Option<Result<AnalysisResponse, ApiError>> {
        match self.rx.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(ApiError::Connection(
                "analysis worker exited unexpectedly".to_string(),
            ))),
        }
    }
}

pub fn spawn_analysis(
    client: ApiClient,
    files: Vec<SelectedFile>,
    now: Instant,
) -> PendingAnalysis {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let _ = tx.send(client.analyze(&files));
    });
    PendingAnalysis {
        rx,
        simulator: ProgressSimulator::start(now),
    }
}

/// An in-flight stats fetch. Failures are swallowed by the poller.
pub struct PendingStats {
    pub rx: Receiver<Result<TokenStats, ApiError>>,
}

impl PendingStats {
    pub fn try_take(&self) -> Option<Result<TokenStats, ApiError>> {
        match self.rx.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(ApiError::Connection(
                "stats worker exited unexpectedly".to_string(),
            ))),
        }
    }
}

pub fn spawn_stats(client: ApiClient) -> PendingStats {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let _ = tx.send(client.fetch_stats());
    });
    PendingStats { rx }
}
