use catalog_core::{Effect, FetchPurpose, Msg, TransportError};
use catalog_engine::{EngineError, EngineEvent, EngineHandle, FetchSettings};
use catalog_logging::{catalog_info, catalog_warn};

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: FetchSettings) -> Result<Self, EngineError> {
        Ok(Self::with_engine(EngineHandle::new(settings)?))
    }

    pub fn with_engine(engine: EngineHandle) -> Self {
        Self { engine }
    }

    /// Executes effects; returns `true` when one of them asks the app to quit.
    pub fn run(&self, effects: Vec<Effect>) -> bool {
        let mut quit = false;
        for effect in effects {
            match effect {
                Effect::FetchPage(request) => {
                    let purpose = match request.purpose {
                        FetchPurpose::View => "view",
                        FetchPurpose::BulkSelect => "bulk",
                    };
                    catalog_info!(
                        "FetchPage purpose={} page={} limit={}",
                        purpose,
                        request.page,
                        request.page_size
                    );
                    self.engine.fetch_page(request);
                }
                Effect::Quit => quit = true,
            }
        }
        quit
    }

    /// Drains finished engine work into messages for the update loop.
    pub fn poll(&self) -> Vec<Msg> {
        let mut inbox = Vec::new();
        while let Some(event) = self.engine.try_recv() {
            inbox.push(event_to_msg(event));
        }
        inbox
    }

    #[cfg(test)]
    pub fn wait(&self, timeout: std::time::Duration) -> Option<Msg> {
        self.engine.recv_timeout(timeout).map(event_to_msg)
    }
}

fn event_to_msg(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::PageFetched { request, result } => {
            if let Err(err) = &result {
                catalog_warn!("Fetch of page {} failed: {}", request.page, err);
            }
            Msg::PageLoaded {
                request,
                result: result.map_err(TransportError::from),
            }
        }
    }
}
