use serde::Serialize;
use std::collections::BTreeSet;

use crate::models::{HouseType, Priority, TradeType};

/// Which cost slider a range belongs to
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "camelCase")]
pub enum CostKind {
    Deposit,
    Monthly,
}

impl CostKind {
    /// Upper bound of the slider, in won
    pub fn max(self) -> i64 {
        match self {
            Self::Deposit => 300_000_000,
            Self::Monthly => 3_500_000,
        }
    }

    pub fn full_range(self) -> CostRange {
        CostRange { min: 0, max: self.max() }
    }

    /// Whether this range means anything for the selected trade types.
    ///
    /// An empty selection makes neither range relevant.
    pub fn is_relevant(self, trade_types: &BTreeSet<TradeType>) -> bool {
        match self {
            Self::Deposit => {
                trade_types.contains(&TradeType::Sale)
                    || trade_types.contains(&TradeType::LongTermRent)
            }
            Self::Monthly => trade_types.contains(&TradeType::MonthlyRent),
        }
    }

    /// Query keys carrying the lower and upper bound
    pub fn query_keys(self) -> (&'static str, &'static str) {
        match self {
            Self::Deposit => ("depositMin", "depositMax"),
            Self::Monthly => ("monthlyMin", "monthlyMax"),
        }
    }
}

/// Cost sliders the filter form should show.
///
/// Unlike [`CostKind::is_relevant`], an empty selection shows both.
pub fn visible_ranges(trade_types: &BTreeSet<TradeType>) -> BTreeSet<CostKind> {
    [CostKind::Deposit, CostKind::Monthly]
        .into_iter()
        .filter(|kind| trade_types.is_empty() || kind.is_relevant(trade_types))
        .collect()
}

/// Inclusive cost bounds in won
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CostRange {
    pub min: i64,
    pub max: i64,
}

impl CostRange {
    /// Clamp both bounds into the slider's limits, reordering a reversed pair.
    pub fn clamped(kind: CostKind, a: i64, b: i64) -> Self {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        Self {
            min: lo.clamp(0, kind.max()),
            max: hi.clamp(0, kind.max()),
        }
    }
}

impl Serialize for CostRange {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        [self.min, self.max].serialize(serializer)
    }
}

/// Finalized query produced by a complete filter
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RequestPayload {
    pub address: String,
    pub travel_time: u8,
    pub house_type: Vec<HouseType>,
    pub trade_type: Vec<TradeType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deposit: Option<CostRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly: Option<CostRange>,
    pub priority: Priority,
}

impl RequestPayload {
    /// Copy of this payload searching around `address` instead.
    pub fn with_address(&self, address: &str) -> Self {
        Self {
            address: address.to_string(),
            ..self.clone()
        }
    }

    /// Encode as query pairs: set fields repeat their key once per element,
    /// ranges split into a min and a max key.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("address", self.address.clone()),
            ("travelTime", self.travel_time.to_string()),
        ];
        pairs.extend(self.house_type.iter().map(|h| ("houseType", h.tag().to_string())));
        pairs.extend(self.trade_type.iter().map(|t| ("tradeType", t.tag().to_string())));

        for (kind, range) in [(CostKind::Deposit, self.deposit), (CostKind::Monthly, self.monthly)] {
            if let Some(range) = range {
                let (min_key, max_key) = kind.query_keys();
                pairs.push((min_key, range.min.to_string()));
                pairs.push((max_key, range.max.to_string()));
            }
        }

        pairs.push(("priority", self.priority.tag().to_string()));
        pairs
    }
}
