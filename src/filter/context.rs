use chrono::{DateTime, Utc};

use crate::filter::RequestPayload;

/// Filter result handed from the filter step to the results step.
///
/// Read-only once created; a new filter session builds a new one.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchContext {
    payload: RequestPayload,
    submitted_at: DateTime<Utc>,
}

impl SearchContext {
    pub fn new(payload: RequestPayload) -> Self {
        Self {
            payload,
            submitted_at: Utc::now(),
        }
    }

    pub fn payload(&self) -> &RequestPayload {
        &self.payload
    }

    pub fn submitted_at(&self) -> DateTime<Utc> {
        self.submitted_at
    }
}
