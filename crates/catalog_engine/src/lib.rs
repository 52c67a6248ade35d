//! Catalog engine: HTTP page fetching and effect execution.
mod bulk;
mod decode;
mod engine;
mod fetch;
mod types;

pub use bulk::select_next;
pub use decode::{decode_page, DecodeError};
pub use engine::{EngineError, EngineHandle};
pub use fetch::{FetchSettings, PageFetcher, ReqwestPageFetcher, DEFAULT_BASE_URL};
pub use types::{EngineEvent, FailureKind, FetchError};
