//! Deal records.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DealError;
use crate::ids::DealId;

/// How a deal's discount magnitude is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiscountKind {
    /// Magnitude is a percentage off.
    #[serde(rename = "percentage")]
    Percentage,
    /// Magnitude is a whole-dollar amount off.
    #[serde(rename = "fixed", alias = "fixed-amount")]
    FixedAmount,
    /// The offer is free; magnitude is ignored.
    #[serde(rename = "free")]
    Free,
}

impl DiscountKind {
    /// Wire name of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            DiscountKind::Percentage => "percentage",
            DiscountKind::FixedAmount => "fixed",
            DiscountKind::Free => "free",
        }
    }
}

impl fmt::Display for DiscountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DiscountKind {
    type Err = DealError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "percentage" => Ok(DiscountKind::Percentage),
            "fixed" | "fixed-amount" => Ok(DiscountKind::FixedAmount),
            "free" => Ok(DiscountKind::Free),
            other => Err(DealError::InvalidDiscountKind(other.to_string())),
        }
    }
}

/// A single coupon deal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Deal {
    /// Unique deal identifier.
    pub id: DealId,
    /// Brand offering the deal.
    pub brand: String,
    /// Headline shown on the card.
    pub title: String,
    /// Redemption code the user copies.
    pub code: String,
    /// Longer description.
    pub description: String,
    /// Discount magnitude, interpreted by `kind`.
    pub discount: u32,
    /// Discount kind.
    #[serde(rename = "type")]
    pub kind: DiscountKind,
    /// Category label, matched exactly by the category filter.
    pub category: String,
    /// Human-readable expiry window (e.g. "2 days").
    pub expires_in: String,
    /// Average rating.
    pub rating: f32,
    /// Number of times the code has been used.
    pub uses: u32,
    /// Whether the code has been verified.
    pub verified: bool,
}

impl Deal {
    /// Badge text for the discount ("30%", "$20", "FREE").
    pub fn discount_label(&self) -> String {
        match self.kind {
            DiscountKind::Percentage => format!("{}%", self.discount),
            DiscountKind::FixedAmount => format!("${}", self.discount),
            DiscountKind::Free => "FREE".to_string(),
        }
    }

    /// Expiry line shown under the description.
    pub fn expiry_label(&self) -> String {
        format!("Expires in {}", self.expires_in)
    }

    /// Usage line shown under the description.
    pub fn uses_label(&self) -> String {
        format!("{} uses", self.uses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deal(kind: DiscountKind, discount: u32) -> Deal {
        Deal {
            id: DealId::new("1"),
            brand: "Brand".to_string(),
            title: "Title".to_string(),
            code: "CODE".to_string(),
            description: String::new(),
            discount,
            kind,
            category: "Food".to_string(),
            expires_in: "1 day".to_string(),
            rating: 4.5,
            uses: 10,
            verified: false,
        }
    }

    #[test]
    fn test_discount_labels() {
        assert_eq!(deal(DiscountKind::Percentage, 30).discount_label(), "30%");
        assert_eq!(deal(DiscountKind::FixedAmount, 20).discount_label(), "$20");
        assert_eq!(deal(DiscountKind::Free, 0).discount_label(), "FREE");
    }

    #[test]
    fn test_discount_kind_parsing() {
        assert_eq!("percentage".parse::<DiscountKind>(), Ok(DiscountKind::Percentage));
        assert_eq!("fixed-amount".parse::<DiscountKind>(), Ok(DiscountKind::FixedAmount));
        assert_eq!(
            "bogo".parse::<DiscountKind>(),
            Err(DealError::InvalidDiscountKind("bogo".to_string()))
        );
    }

    #[test]
    fn test_deal_json_shape() {
        let json = serde_json::to_value(deal(DiscountKind::FixedAmount, 20)).unwrap();
        assert_eq!(json["type"], "fixed");
        assert_eq!(json["expiresIn"], "1 day");
    }

    #[test]
    fn test_fixed_amount_alias_deserializes() {
        let kind: DiscountKind = serde_json::from_str("\"fixed-amount\"").unwrap();
        assert_eq!(kind, DiscountKind::FixedAmount);
    }
}
