//! Background execution of backend calls.
//!
//! The UI thread never blocks on the network: calls run on a small tokio
//! runtime owned by [`ModelRunner`], and settled results come back over a
//! channel polled once per frame. Overlapping runs are coordinated with a
//! monotonically increasing sequence token held by [`RunState`]; only the
//! response matching the latest issued token is applied.

use std::sync::mpsc::{self, Receiver, Sender};

use filmsim_client::{ClientError, ModelClient};
use filmsim_core::report::ModelReport;
use filmsim_core::request::ModelRequest;
use filmsim_core::search::{SearchRequest, SearchResponse};
use tracing::{debug, error, info};

/// A settled backend call, delivered to the UI thread.
pub enum RunnerEvent {
    Model {
        seq: u64,
        result: Result<ModelReport, ClientError>,
    },
    Search {
        seq: u64,
        result: Result<SearchResponse, ClientError>,
    },
}

/// Owns the tokio runtime and the result channel.
pub struct ModelRunner {
    runtime: tokio::runtime::Runtime,
    client: ModelClient,
    tx: Sender<RunnerEvent>,
    rx: Receiver<RunnerEvent>,
    next_seq: u64,
}

impl ModelRunner {
    pub fn new(client: ModelClient) -> anyhow::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()?;
        let (tx, rx) = mpsc::channel();
        Ok(Self {
            runtime,
            client,
            tx,
            rx,
            next_seq: 0,
        })
    }

    /// Submits one model run and returns its sequence token.
    pub fn submit_model(&mut self, request: ModelRequest, ctx: egui::Context) -> u64 {
        let seq = self.issue_seq();
        info!(seq, "submitting model run");
        let client = self.client.clone();
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let result = client.run_model(&request).await;
            if tx.send(RunnerEvent::Model { seq, result }).is_ok() {
                ctx.request_repaint();
            }
        });
        seq
    }

    /// Submits one comparable-title search and returns its sequence token.
    pub fn submit_search(&mut self, request: SearchRequest, ctx: egui::Context) -> u64 {
        let seq = self.issue_seq();
        info!(seq, query = %request.query, "submitting search");
        let client = self.client.clone();
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let result = client.search(&request).await;
            if tx.send(RunnerEvent::Search { seq, result }).is_ok() {
                ctx.request_repaint();
            }
        });
        seq
    }

    /// Drains every event settled since the previous frame.
    pub fn poll(&self) -> Vec<RunnerEvent> {
        self.rx.try_iter().collect()
    }

    fn issue_seq(&mut self) -> u64 {
        self.next_seq += 1;
        self.next_seq
    }
}

/// Loading/error state for one kind of backend call.
///
/// The loading flag flips true synchronously on `begin` and false exactly
/// once, when the latest-issued call settles. Stale settlements (an older
/// token finishing after a newer run started) change nothing.
#[derive(Debug, Default)]
pub struct RunState {
    latest_seq: u64,
    pub loading: bool,
    pub error: Option<String>,
}

impl RunState {
    /// Records a newly submitted call. Clears any prior error.
    pub fn begin(&mut self, seq: u64) {
        self.latest_seq = seq;
        self.loading = true;
        self.error = None;
    }

    /// Applies a settled call.
    ///
    /// Returns the payload when this settlement is the latest issued call
    /// and succeeded. On failure the prior payload stays wherever the
    /// caller keeps it; only the error message changes.
    pub fn settle<T>(
        &mut self,
        seq: u64,
        result: Result<T, ClientError>,
        failure_message: impl Fn(&ClientError) -> String,
    ) -> Option<T> {
        if seq != self.latest_seq {
            debug!(seq, latest = self.latest_seq, "dropping stale response");
            return None;
        }
        self.loading = false;
        match result {
            Ok(payload) => {
                self.error = None;
                Some(payload)
            }
            Err(err) => {
                error!(seq, %err, "backend call failed");
                self.error = Some(failure_message(&err));
                None
            }
        }
    }
}

/// Fixed user-facing message for a failed model run. Decode failures get
/// their own wording; every other cause collapses into one message.
pub fn model_failure_message(err: &ClientError) -> String {
    if err.is_malformed() {
        "Model service returned a malformed response".to_string()
    } else {
        "Failed to run model".to_string()
    }
}

pub fn search_failure_message(_err: &ClientError) -> String {
    "Search failed".to_string()
}
