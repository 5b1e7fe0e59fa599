//! Where tickets come from.

pub mod http;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::app::Action;
use crate::model::ticket::Snapshot;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} responded with {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("malformed payload from {url}: {source}")]
    Payload {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

#[async_trait]
pub trait TicketSource: Send + Sync {
    fn name(&self) -> &str;
    async fn fetch_snapshot(&self) -> Result<Snapshot, FetchError>;
}

/// An in-flight fetch. Dropping the handle cancels it, so a result can never
/// land on an app that has already gone away.
pub struct FetchHandle {
    task: JoinHandle<()>,
}

impl Drop for FetchHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Run one fetch in the background and report the outcome as an [`Action`].
/// Failures are logged here; the receiver only learns that the fetch ended.
pub fn spawn_fetch(
    source: Box<dyn TicketSource>,
    action_tx: mpsc::UnboundedSender<Action>,
) -> FetchHandle {
    let task = tokio::spawn(async move {
        let action = match source.fetch_snapshot().await {
            Ok(snapshot) => {
                info!(
                    source = source.name(),
                    tickets = snapshot.tickets.len(),
                    users = snapshot.users.len(),
                    "fetched ticket snapshot"
                );
                Action::SnapshotLoaded(snapshot)
            }
            Err(e) => {
                error!(source = source.name(), error = %e, "error fetching tickets");
                Action::FetchFailed(e.to_string())
            }
        };
        let _ = action_tx.send(action);
    });
    FetchHandle { task }
}
