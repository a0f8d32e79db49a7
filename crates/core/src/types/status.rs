//! Order status and pickup method vocabularies.
//!
//! The `orders` table enforces these values with check constraints. The
//! enums give callers the exact literals the store accepts; order records
//! still carry the raw column text, so a value the store rejects surfaces as
//! a constraint error rather than a decode failure.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// A string did not match any variant of a closed vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {kind}: {value}")]
pub struct UnknownVariant {
    /// Which vocabulary was being parsed.
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

/// Lifecycle state of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Paid,
    Canceled,
}

impl OrderStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [Self; 3] = [Self::Pending, Self::Paid, Self::Canceled];

    /// The literal stored in `orders.status`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
            Self::Canceled => "canceled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownVariant {
                kind: "order status",
                value: s.to_owned(),
            })
    }
}

/// How the customer receives an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PickupMethod {
    /// Collected in store; no delivery address.
    Pickup,
    /// Shipped to the order's delivery address.
    Delivery,
}

impl PickupMethod {
    /// The literal stored in `orders.pickup_method`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pickup => "pickup",
            Self::Delivery => "delivery",
        }
    }
}

impl fmt::Display for PickupMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PickupMethod {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pickup" => Ok(Self::Pickup),
            "delivery" => Ok(Self::Delivery),
            _ => Err(UnknownVariant {
                kind: "pickup method",
                value: s.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_status_literals() {
        assert_eq!(OrderStatus::Pending.as_str(), "pending");
        assert_eq!(OrderStatus::Paid.as_str(), "paid");
        assert_eq!(OrderStatus::Canceled.as_str(), "canceled");
    }

    #[test]
    fn test_status_parse_matches_literal() {
        for status in OrderStatus::ALL {
            assert_eq!(status.as_str().parse::<OrderStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_status_parse_rejects_unknown() {
        let err = "bogus".parse::<OrderStatus>().unwrap_err();
        assert_eq!(err.to_string(), "invalid order status: bogus");
    }

    #[test]
    fn test_status_is_case_sensitive() {
        // The check constraint compares exact text
        assert!("Paid".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn test_pickup_method_display() {
        assert_eq!(PickupMethod::Delivery.to_string(), "delivery");
        assert_eq!("pickup".parse::<PickupMethod>().unwrap(), PickupMethod::Pickup);
    }

    #[test]
    fn test_serde_uses_store_literals() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Canceled).unwrap(),
            "\"canceled\""
        );
        assert_eq!(
            serde_json::from_str::<PickupMethod>("\"delivery\"").unwrap(),
            PickupMethod::Delivery
        );
    }
}
