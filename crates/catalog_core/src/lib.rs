//! Catalog core: pure selection bookkeeping, bulk-selection state machine,
//! and the view state machine driven by messages.
mod bulk;
mod effect;
mod msg;
mod record;
mod selection;
mod state;
mod update;
mod view_model;

pub use bulk::{BulkOutcome, BulkSelection, BulkStep};
pub use effect::{Effect, FetchPurpose, PageRequest};
pub use msg::Msg;
pub use record::{page_count, page_index_for_offset, Page, Record, RecordId, TransportError};
pub use selection::SelectionSet;
pub use state::{AppState, ViewSettings, PAGE_SIZE_CHOICES};
pub use update::update;
pub use view_model::{AppViewModel, CountOverlayView, RecordRowView};
