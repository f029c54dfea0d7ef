use crate::filter::RequestPayload;
use crate::models::PropertyItem;
use crate::search::error::{Result, SearchError};
use crate::search::traits::PropertySource;
use tracing::{error, info, warn};

/// Runs searches for a submitted filter against a [`PropertySource`]
pub struct ResultRetriever<S> {
    source: S,
}

impl<S: PropertySource> ResultRetriever<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Search around `resolved_address`, surfacing the failure cause.
    ///
    /// An empty address is rejected before any request is made.
    pub async fn try_search(&self, payload: &RequestPayload, resolved_address: &str) -> Result<Vec<PropertyItem>> {
        if resolved_address.trim().is_empty() {
            return Err(SearchError::MissingAddress);
        }

        let request = payload.with_address(resolved_address);
        self.source.fetch(&request).await
    }

    /// Search around `resolved_address`.
    ///
    /// Failures are logged and come back as an empty list, the same as a
    /// search with no matches.
    pub async fn search(&self, payload: &RequestPayload, resolved_address: &str) -> Vec<PropertyItem> {
        match self.try_search(payload, resolved_address).await {
            Ok(items) => {
                info!(
                    source = self.source.source_name(),
                    address = resolved_address,
                    count = items.len(),
                    "Fetched listings"
                );
                items
            }
            Err(SearchError::MissingAddress) => {
                warn!("No resolved address, skipping property search");
                Vec::new()
            }
            Err(e) => {
                error!(
                    source = self.source.source_name(),
                    address = resolved_address,
                    error = %e,
                    "Property search failed"
                );
                Vec::new()
            }
        }
    }
}
