use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::stock::StockInfo;

/// A medicine as stocked by one pharmacy, normalized from the catalog
/// service's payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MedicineRecord {
    /// Upstream object id, stored as a string (Mongo-style hex, not numeric).
    pub id: String,
    pub name: String,
    pub generic_name: Option<String>,
    pub brand: String,
    /// Active-ingredient line, e.g. `"Paracetamol 500mg"`.
    pub composition: String,
    pub category: Category,
    /// Dose strength label, e.g. `"500mg"`.
    pub strength: Option<String>,
    pub pack_size: Option<String>,
    pub manufacturer: Option<String>,
    pub batch_number: Option<String>,
    pub manufacturing_date: Option<NaiveDate>,
    /// Calendar date; the expiry day itself already counts as expired.
    pub expiry_date: NaiveDate,
    /// Maximum retail price in rupees, when the catalog row carries one.
    ///
    /// Boundary note: in-memory `f64` convenience. The upstream store keeps
    /// money as decimals and no arithmetic is done on it here; ordering uses
    /// `total_cmp`.
    pub mrp: Option<f64>,
    /// Boundary note: same `f64` convenience as `mrp`.
    pub selling_price: f64,
    pub prescription_required: bool,
    pub stock: StockInfo,
    pub description: Option<String>,
    pub tags: Vec<String>,
    /// Soft-delete flag from the catalog service.
    pub active: bool,
}

impl MedicineRecord {
    #[must_use]
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.expiry_date <= today
    }

    /// Calendar days until expiry; zero on the expiry day, negative after.
    #[must_use]
    pub fn days_until_expiry(&self, today: NaiveDate) -> i64 {
        (self.expiry_date - today).num_days()
    }

    /// Whether this record can be handed over the counter: in stock, not
    /// expired, and not soft-deleted.
    #[must_use]
    pub fn is_dispensable(&self, today: NaiveDate) -> bool {
        !self.stock.is_depleted() && !self.is_expired(today) && self.active
    }

    /// Case-insensitive substring match over name, brand, generic name, and
    /// composition. An empty or whitespace-only query matches everything.
    #[must_use]
    pub fn matches_query(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&needle)
            || self.brand.to_lowercase().contains(&needle)
            || self
                .generic_name
                .as_deref()
                .is_some_and(|g| g.to_lowercase().contains(&needle))
            || self.composition.to_lowercase().contains(&needle)
    }
}
