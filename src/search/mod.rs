pub mod client;
pub mod error;
pub mod results;
pub mod retriever;
pub mod traits;

pub use client::HttpPropertySource;
pub use error::{Result, SearchError};
pub use results::{ResultsView, SearchTicket, NO_RESULTS};
pub use retriever::ResultRetriever;
pub use traits::PropertySource;
