use crate::filter::RequestPayload;
use crate::models::PropertyItem;
use crate::search::error::Result;
use async_trait::async_trait;

/// Backend that answers property searches.
/// The HTTP endpoint is the only production source; tests plug in their own.
#[async_trait]
pub trait PropertySource: Send + Sync {
    /// Fetch every listing matching `payload`
    async fn fetch(&self, payload: &RequestPayload) -> Result<Vec<PropertyItem>>;

    /// Get the name of the source
    fn source_name(&self) -> &'static str;
}
