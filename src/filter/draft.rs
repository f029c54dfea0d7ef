use std::collections::BTreeSet;
use tracing::{debug, info, warn};

use crate::filter::error::{FilterError, Result};
use crate::filter::payload::{visible_ranges, CostKind, CostRange, RequestPayload};
use crate::filter::SearchContext;
use crate::models::{HouseType, Priority, TradeType};
use crate::routes::Route;

/// Longest commute the time slider allows, in minutes
pub const MAX_TRAVEL_TIME: u8 = 80;

/// Fields that must be filled in before the filter can be submitted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    Address,
    HouseType,
    TradeType,
    Priority,
}

impl RequiredField {
    pub fn name(self) -> &'static str {
        match self {
            Self::Address => "address",
            Self::HouseType => "houseType",
            Self::TradeType => "tradeType",
            Self::Priority => "priority",
        }
    }
}

/// Partially filled filter form
#[derive(Debug, Clone, PartialEq)]
pub struct FilterDraft {
    pub address: String,
    pub travel_time: u8,
    pub house_type: BTreeSet<HouseType>,
    pub trade_type: BTreeSet<TradeType>,
    pub deposit: Option<CostRange>,
    pub monthly: Option<CostRange>,
    pub priority: Option<Priority>,
}

impl Default for FilterDraft {
    fn default() -> Self {
        Self {
            address: String::new(),
            travel_time: 0,
            house_type: BTreeSet::new(),
            trade_type: BTreeSet::new(),
            deposit: Some(CostKind::Deposit.full_range()),
            monthly: Some(CostKind::Monthly.full_range()),
            priority: None,
        }
    }
}

impl FilterDraft {
    /// Required fields that are still empty, in form order.
    pub fn missing_fields(&self) -> Vec<RequiredField> {
        let mut missing = Vec::new();
        if self.address.trim().is_empty() {
            missing.push(RequiredField::Address);
        }
        if self.house_type.is_empty() {
            missing.push(RequiredField::HouseType);
        }
        if self.trade_type.is_empty() {
            missing.push(RequiredField::TradeType);
        }
        if self.priority.is_none() {
            missing.push(RequiredField::Priority);
        }
        missing
    }

    fn range(&self, kind: CostKind) -> Option<CostRange> {
        match kind {
            CostKind::Deposit => self.deposit,
            CostKind::Monthly => self.monthly,
        }
    }

    /// The range for `kind` if the current trade types make it meaningful.
    fn relevant_range(&self, kind: CostKind) -> Option<CostRange> {
        if kind.is_relevant(&self.trade_type) {
            self.range(kind)
        } else {
            None
        }
    }
}

/// One filter session: owns the draft and keeps `submittable` in step with it
#[derive(Debug, Clone)]
pub struct FilterSession {
    draft: FilterDraft,
    submittable: bool,
}

impl Default for FilterSession {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterSession {
    pub fn new() -> Self {
        let mut session = Self {
            draft: FilterDraft::default(),
            submittable: false,
        };
        session.recompute_submittable();
        session
    }

    pub fn draft(&self) -> &FilterDraft {
        &self.draft
    }

    pub fn is_submittable(&self) -> bool {
        self.submittable
    }

    pub fn missing_fields(&self) -> Vec<RequiredField> {
        self.draft.missing_fields()
    }

    pub fn set_address(&mut self, text: impl Into<String>) {
        self.draft.address = text.into();
        self.recompute_submittable();
    }

    /// Set the commute time, clamped to the slider's range.
    pub fn set_travel_time(&mut self, minutes: i64) {
        self.draft.travel_time = minutes.clamp(0, i64::from(MAX_TRAVEL_TIME)) as u8;
        self.recompute_submittable();
    }

    /// Replace the house type selection with the given tag-list labels.
    pub fn set_house_type<I, S>(&mut self, labels: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let selected = map_labels(labels, "houseType", HouseType::from_label)?;
        debug!(?selected, "House type selection changed");
        self.draft.house_type = selected;
        self.recompute_submittable();
        Ok(())
    }

    /// Replace the trade type selection with the given tag-list labels.
    pub fn set_trade_type<I, S>(&mut self, labels: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let selected = map_labels(labels, "tradeType", TradeType::from_label)?;
        debug!(
            ?selected,
            visible = ?visible_ranges(&selected),
            "Trade type selection changed"
        );
        self.draft.trade_type = selected;
        self.recompute_submittable();
        Ok(())
    }

    pub fn set_priority(&mut self, tag: &str) -> Result<()> {
        let priority = Priority::from_tag(tag).ok_or_else(|| {
            warn!(tag, "Unknown priority tag");
            FilterError::UnknownLabel {
                field: "priority",
                label: tag.to_string(),
            }
        })?;
        self.draft.priority = Some(priority);
        self.recompute_submittable();
        Ok(())
    }

    /// Overwrite one cost range, leaving the other untouched.
    pub fn set_cost_range(&mut self, kind: CostKind, range: (i64, i64)) {
        let range = CostRange::clamped(kind, range.0, range.1);
        match kind {
            CostKind::Deposit => self.draft.deposit = Some(range),
            CostKind::Monthly => self.draft.monthly = Some(range),
        }
        self.recompute_submittable();
    }

    pub fn recompute_submittable(&mut self) -> bool {
        self.submittable = self.draft.missing_fields().is_empty();
        self.submittable
    }

    /// Cost sliders the form should currently show.
    pub fn visible_ranges(&self) -> BTreeSet<CostKind> {
        visible_ranges(&self.draft.trade_type)
    }

    /// Project the draft into a request, dropping ranges the selected trade
    /// types don't use.
    pub fn build_payload(&self) -> Result<RequestPayload> {
        let missing = self.draft.missing_fields();
        let priority = match self.draft.priority {
            Some(priority) if missing.is_empty() => priority,
            _ => return Err(FilterError::Incomplete { missing }),
        };

        Ok(RequestPayload {
            address: self.draft.address.clone(),
            travel_time: self.draft.travel_time,
            house_type: self.draft.house_type.iter().copied().collect(),
            trade_type: self.draft.trade_type.iter().copied().collect(),
            deposit: self.draft.relevant_range(CostKind::Deposit),
            monthly: self.draft.relevant_range(CostKind::Monthly),
            priority,
        })
    }

    /// Finish the session: build the payload and hand it to the results step.
    pub fn submit(&self) -> Result<(SearchContext, Route)> {
        let payload = self.build_payload()?;
        info!(
            address = %payload.address,
            travel_time = payload.travel_time,
            has_deposit = payload.deposit.is_some(),
            has_monthly = payload.monthly.is_some(),
            "Filter submitted"
        );
        Ok((SearchContext::new(payload), Route::TopAreas))
    }
}

fn map_labels<T, I, S>(labels: I, field: &'static str, map: fn(&str) -> Option<T>) -> Result<BTreeSet<T>>
where
    T: Ord,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    labels
        .into_iter()
        .map(|label| {
            let label = label.as_ref();
            map(label).ok_or_else(|| {
                warn!(field, label, "Unknown label from selection widget");
                FilterError::UnknownLabel {
                    field,
                    label: label.to_string(),
                }
            })
        })
        .collect()
}
