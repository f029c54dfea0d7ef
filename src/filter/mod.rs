pub mod context;
pub mod draft;
pub mod error;
pub mod payload;

pub use context::SearchContext;
pub use draft::{FilterDraft, FilterSession, RequiredField, MAX_TRAVEL_TIME};
pub use error::{FilterError, Result};
pub use payload::{visible_ranges, CostKind, CostRange, RequestPayload};
