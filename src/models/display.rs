use crate::models::{PropertyItem, TradeType};
use serde::Serialize;
use std::fmt;

const EOK: i64 = 100_000_000;
const MAN: i64 = 10_000;

/// Render-ready projection of a [`PropertyItem`]
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DisplayItem {
    pub id: String,
    pub trade_type: &'static str,
    pub house_type: &'static str,
    pub price: String,
    pub rent_price: Option<String>,
    pub travel_time: String,
    pub address: String,
    pub floor: String,
}

impl From<&PropertyItem> for DisplayItem {
    fn from(item: &PropertyItem) -> Self {
        // Rent is only meaningful on monthly-rent listings
        let rent_price = match (item.trade_type, item.rent_price) {
            (TradeType::MonthlyRent, Some(rent)) => Some(format_won(rent)),
            _ => None,
        };

        Self {
            id: item.id.clone(),
            trade_type: item.trade_type.label(),
            house_type: item.house_type.label(),
            price: format_won(item.price),
            rent_price,
            travel_time: format!("{}분", item.travel_time),
            address: item.address_number.clone(),
            floor: format!("{}층", item.floor),
        }
    }
}

impl fmt::Display for DisplayItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.trade_type, self.price)?;
        if let Some(rent) = &self.rent_price {
            write!(f, " / {}", rent)?;
        }
        write!(
            f,
            " · {} · {} · {} · {}",
            self.house_type, self.address, self.floor, self.travel_time
        )
    }
}

/// Format a won amount using 억/만 units, e.g. `850_000_000` → `8억 5,000만원`.
pub fn format_won(amount: i64) -> String {
    if amount == 0 {
        return "0원".to_string();
    }

    let sign = if amount < 0 { "-" } else { "" };
    let abs = amount.unsigned_abs();
    let eok = abs / EOK as u64;
    let man = (abs % EOK as u64) / MAN as u64;
    let rest = abs % MAN as u64;

    let mut parts = Vec::with_capacity(3);
    if eok > 0 {
        parts.push(format!("{}억", group_thousands(eok)));
    }
    if man > 0 {
        parts.push(format!("{}만", group_thousands(man)));
    }
    if rest > 0 {
        parts.push(group_thousands(rest));
    }

    format!("{}{}원", sign, parts.join(" "))
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HouseType;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(0, "0원")]
    #[test_case(9_999, "9,999원")]
    #[test_case(12_345, "1만 2,345원")]
    #[test_case(650_000, "65만원")]
    #[test_case(3_500_000, "350만원")]
    #[test_case(300_000_000, "3억원")]
    #[test_case(850_000_000, "8억 5,000만원")]
    #[test_case(1_234_500_000_000, "12,345억원")]
    #[test_case(-650_000, "-65만원")]
    fn won_formatting(amount: i64, expected: &str) {
        assert_eq!(format_won(amount), expected);
    }

    #[test]
    fn monthly_rent_item_shows_rent() {
        let item = PropertyItem {
            id: "7".to_string(),
            trade_type: TradeType::MonthlyRent,
            house_type: HouseType::Villa,
            price: 10_000_000,
            rent_price: Some(550_000),
            travel_time: 32,
            address_number: "북아현동 1-9".to_string(),
            floor: 2,
        };

        let display = DisplayItem::from(&item);
        assert_eq!(
            display,
            DisplayItem {
                id: "7".to_string(),
                trade_type: "월세",
                house_type: "빌라",
                price: "1,000만원".to_string(),
                rent_price: Some("55만원".to_string()),
                travel_time: "32분".to_string(),
                address: "북아현동 1-9".to_string(),
                floor: "2층".to_string(),
            }
        );
        assert_eq!(
            display.to_string(),
            "월세 1,000만원 / 55만원 · 빌라 · 북아현동 1-9 · 2층 · 32분"
        );
    }

    #[test]
    fn sale_item_ignores_stray_rent() {
        let item = PropertyItem {
            id: "8".to_string(),
            trade_type: TradeType::Sale,
            house_type: HouseType::Apartment,
            price: 850_000_000,
            rent_price: Some(0),
            travel_time: 15,
            address_number: "아현동 700".to_string(),
            floor: 11,
        };

        let display = DisplayItem::from(&item);
        assert_eq!(display.rent_price, None);
        assert_eq!(display.to_string(), "매매 8억 5,000만원 · 아파트 · 아현동 700 · 11층 · 15분");
    }
}
