//! Order lifecycle.
//!
//! ```text
//! pending ─▶ preparing ─▶ out-for-delivery ─▶ delivered (terminal)
//! ```
//!
//! Updates may move a non-terminal order to *any* of the four states; the arrows show the
//! usual flow, not an enforced one. Only two rules are enforced:
//!
//! 1. a `delivered` order cannot be updated at all;
//! 2. a proposed status must be one of the four known values.
//!
//! Deletion is narrower than update: only a `pending` order may be deleted.

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Preparing,
    OutForDelivery,
    Delivered,
}

/// A status string outside the known set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Order must have a status of {}", OrderStatus::allowed_list())]
pub struct UnknownStatus(pub String);

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Preparing,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::OutForDelivery => "out-for-delivery",
            OrderStatus::Delivered => "delivered",
        }
    }

    /// `"pending, preparing, out-for-delivery, delivered"`
    pub fn allowed_list() -> String {
        Self::ALL.map(Self::as_str).join(", ")
    }

    pub fn is_terminal(self) -> bool {
        self == OrderStatus::Delivered
    }

    /// Whether an order currently in this state accepts updates.
    pub fn accepts_updates(self) -> bool {
        !self.is_terminal()
    }

    /// Whether an order currently in this state may be deleted.
    pub fn allows_delete(self) -> bool {
        self == OrderStatus::Pending
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}
