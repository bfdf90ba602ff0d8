use serde::{Deserialize, Serialize};

/// Catalog-schema default for [`StockInfo::minimum_threshold`], applied when
/// a legacy row carries a bare stock count with no threshold of its own.
pub const DEFAULT_MINIMUM_THRESHOLD: u32 = 10;

/// On-hand stock for one medicine at one pharmacy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockInfo {
    /// Units currently on hand. Unsigned by construction; negative upstream
    /// counts are rejected during normalization, never clamped.
    pub current_quantity: u32,
    /// Reorder point: at or below this the item counts as low stock.
    pub minimum_threshold: u32,
    /// Stock-keeping unit label, e.g. `"strips"` or `"bottles"`.
    pub unit: String,
}

impl StockInfo {
    /// Builds the structured form of a legacy bare count, with the catalog
    /// default threshold and unit.
    #[must_use]
    pub fn from_bare_count(current_quantity: u32) -> Self {
        Self {
            current_quantity,
            minimum_threshold: DEFAULT_MINIMUM_THRESHOLD,
            unit: "pieces".to_string(),
        }
    }

    #[must_use]
    pub fn is_depleted(&self) -> bool {
        self.current_quantity == 0
    }

    /// `true` at or below the reorder point, including when depleted.
    #[must_use]
    pub fn is_at_or_below_threshold(&self) -> bool {
        self.current_quantity <= self.minimum_threshold
    }
}
