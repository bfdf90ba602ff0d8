//! Stock and expiry classification.
//!
//! One stock line folds down to a single [`AvailabilityStatus`] for badges
//! and restock dashboards. Checks run in strict priority order so exactly
//! one status applies per record per call; nothing here caches "today".

use std::fmt;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::stock::StockInfo;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AvailabilityStatus {
    Expired,
    OutOfStock,
    LowStock,
    ExpiringSoon,
    Available,
}

impl AvailabilityStatus {
    /// Human-readable badge text.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Expired => "Expired",
            Self::OutOfStock => "Out of Stock",
            Self::LowStock => "Low Stock",
            Self::ExpiringSoon => "Expiring Soon",
            Self::Available => "Available",
        }
    }

    /// Badge tint the inventory UI renders for this status.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Expired | Self::OutOfStock => "red",
            Self::LowStock => "orange",
            Self::ExpiringSoon => "yellow",
            Self::Available => "green",
        }
    }
}

impl fmt::Display for AvailabilityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Tunables for [`classify_with_policy`].
#[derive(Debug, Clone)]
pub struct AvailabilityPolicy {
    /// Days ahead of expiry at which stock starts reporting
    /// [`AvailabilityStatus::ExpiringSoon`]. Inclusive window end.
    pub expiring_soon_window_days: u32,
}

impl Default for AvailabilityPolicy {
    fn default() -> Self {
        Self {
            expiring_soon_window_days: 30,
        }
    }
}

/// Classifies one stock line against its expiry date with the default
/// 30-day expiring-soon window.
#[must_use]
pub fn classify(stock: &StockInfo, expiry_date: NaiveDate, today: NaiveDate) -> AvailabilityStatus {
    classify_with_policy(stock, expiry_date, today, &AvailabilityPolicy::default())
}

/// Classifies one stock line. First matching rule wins:
///
/// 1. expiry on or before `today` → `Expired`; expired stock is never
///    dispensable whatever the count says
/// 2. zero on hand → `OutOfStock`
/// 3. at or below the reorder threshold → `LowStock`
/// 4. expiry within the policy window of `today` (inclusive) → `ExpiringSoon`
/// 5. otherwise → `Available`
#[must_use]
pub fn classify_with_policy(
    stock: &StockInfo,
    expiry_date: NaiveDate,
    today: NaiveDate,
    policy: &AvailabilityPolicy,
) -> AvailabilityStatus {
    if expiry_date <= today {
        return AvailabilityStatus::Expired;
    }
    if stock.is_depleted() {
        return AvailabilityStatus::OutOfStock;
    }
    if stock.is_at_or_below_threshold() {
        return AvailabilityStatus::LowStock;
    }
    let window_end = today
        .checked_add_days(Days::new(u64::from(policy.expiring_soon_window_days)))
        .unwrap_or(NaiveDate::MAX);
    if expiry_date <= window_end {
        return AvailabilityStatus::ExpiringSoon;
    }
    AvailabilityStatus::Available
}
