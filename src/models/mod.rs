use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

pub mod display;

pub use display::{format_won, DisplayItem};

/// Structural category of a dwelling
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HouseType {
    Apartment,
    Officetel,
    Villa,
}

impl HouseType {
    pub const ALL: [HouseType; 3] = [HouseType::Apartment, HouseType::Officetel, HouseType::Villa];

    /// Map a tag-list label to its house type.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "아파트" => Some(Self::Apartment),
            "오피스텔" => Some(Self::Officetel),
            "빌라" => Some(Self::Villa),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Apartment => "아파트",
            Self::Officetel => "오피스텔",
            Self::Villa => "빌라",
        }
    }

    /// Wire tag sent to and received from the search endpoint
    pub fn tag(self) -> &'static str {
        match self {
            Self::Apartment => "APARTMENT",
            Self::Officetel => "OFFICETEL",
            Self::Villa => "VILLA",
        }
    }
}

/// Transaction category of a listing
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradeType {
    Sale,
    MonthlyRent,
    LongTermRent,
}

impl TradeType {
    pub const ALL: [TradeType; 3] = [TradeType::Sale, TradeType::LongTermRent, TradeType::MonthlyRent];

    /// Map a tag-list label to its trade type.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "매매" => Some(Self::Sale),
            "전세" => Some(Self::LongTermRent),
            "월세" => Some(Self::MonthlyRent),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Sale => "매매",
            Self::LongTermRent => "전세",
            Self::MonthlyRent => "월세",
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Self::Sale => "SALE",
            Self::MonthlyRent => "MONTHLY_RENT",
            Self::LongTermRent => "LONG_TERM_RENT",
        }
    }
}

/// What the user cares about most when ranking areas
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Time,
    Budget,
}

impl Priority {
    /// Accepts either the wire tag or the tag-list label.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "TIME" | "시간" => Some(Self::Time),
            "BUDGET" | "예산" => Some(Self::Budget),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Time => "시간",
            Self::Budget => "예산",
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Self::Time => "TIME",
            Self::Budget => "BUDGET",
        }
    }
}

impl fmt::Display for HouseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl fmt::Display for TradeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// One listing returned by the property search endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PropertyItem {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub trade_type: TradeType,
    pub house_type: HouseType,
    /// Sale price or deposit, in won
    pub price: i64,
    /// Monthly rent in won; absent for sale and long-term rent listings
    #[serde(default)]
    pub rent_price: Option<i64>,
    /// Commute time in minutes
    pub travel_time: i32,
    pub address_number: String,
    pub floor: i32,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(i64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(s) => s,
        Id::Number(n) => n.to_string(),
    })
}
