use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use catalog_core::PageRequest;
use catalog_logging::catalog_warn;
use thiserror::Error;

use crate::fetch::{FetchSettings, PageFetcher, ReqwestPageFetcher};
use crate::{EngineEvent, FetchError};

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error("failed to build http client: {0}")]
    Client(#[from] FetchError),
}

enum EngineCommand {
    FetchPage(PageRequest),
}

/// Runs page fetches on a background tokio runtime and reports results over a channel.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings) -> Result<Self, EngineError> {
        let fetcher = ReqwestPageFetcher::new(settings)?;
        Self::with_fetcher(Arc::new(fetcher))
    }

    pub fn with_fetcher(fetcher: Arc<dyn PageFetcher>) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let fetcher = fetcher.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(fetcher.as_ref(), command, event_tx).await;
                });
            }
        });

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn fetch_page(&self, request: PageRequest) {
        if self.cmd_tx.send(EngineCommand::FetchPage(request)).is_err() {
            catalog_warn!("Engine worker is gone; dropping fetch of page={}", request.page);
        }
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    fetcher: &dyn PageFetcher,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::FetchPage(request) => {
            let result = fetcher.fetch_page(request.page, request.page_size).await;
            let _ = event_tx.send(EngineEvent::PageFetched { request, result });
        }
    }
}
