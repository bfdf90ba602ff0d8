//! Inventory summaries for the pharmacist dashboard.

use chrono::{Days, NaiveDate};
use rxnear_catalog::{classify_with_policy, AvailabilityPolicy, AvailabilityStatus, MedicineRecord};

/// Options for the dashboard figures. Defaults mirror the original cards:
/// 30-day expiry window, 10 rows per alert list.
#[derive(Debug, Clone)]
pub struct SummaryOptions {
    pub expiring_soon_window_days: u32,
    pub max_alert_rows: usize,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            expiring_soon_window_days: 30,
            max_alert_rows: 10,
        }
    }
}

/// Availability counts for one pharmacy's inventory.
///
/// Counts follow the classifier, so they are mutually exclusive and sum to
/// `total`. Soft-deleted records are excluded entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventorySummary {
    pub total: usize,
    pub available: usize,
    pub low_stock: usize,
    pub out_of_stock: usize,
    pub expiring_soon: usize,
    pub expired: usize,
}

/// One classifier pass over the inventory.
#[must_use]
pub fn summarize_inventory(
    medicines: &[MedicineRecord],
    today: NaiveDate,
    options: &SummaryOptions,
) -> InventorySummary {
    let policy = AvailabilityPolicy {
        expiring_soon_window_days: options.expiring_soon_window_days,
    };
    let mut summary = InventorySummary::default();
    for medicine in medicines.iter().filter(|medicine| medicine.active) {
        summary.total += 1;
        match classify_with_policy(&medicine.stock, medicine.expiry_date, today, &policy) {
            AvailabilityStatus::Available => summary.available += 1,
            AvailabilityStatus::LowStock => summary.low_stock += 1,
            AvailabilityStatus::OutOfStock => summary.out_of_stock += 1,
            AvailabilityStatus::ExpiringSoon => summary.expiring_soon += 1,
            AvailabilityStatus::Expired => summary.expired += 1,
        }
    }
    summary
}

/// Active records at or below their reorder threshold, in input order,
/// capped at `options.max_alert_rows`. Depleted records are included; both
/// states need a purchase order.
#[must_use]
pub fn restock_alerts<'a>(
    medicines: &'a [MedicineRecord],
    options: &SummaryOptions,
) -> Vec<&'a MedicineRecord> {
    medicines
        .iter()
        .filter(|medicine| medicine.active && medicine.stock.is_at_or_below_threshold())
        .take(options.max_alert_rows)
        .collect()
}

/// Active, unexpired records whose expiry falls inside the window, soonest
/// first, capped at `options.max_alert_rows`.
#[must_use]
pub fn expiry_alerts<'a>(
    medicines: &'a [MedicineRecord],
    today: NaiveDate,
    options: &SummaryOptions,
) -> Vec<&'a MedicineRecord> {
    let window_end = today
        .checked_add_days(Days::new(u64::from(options.expiring_soon_window_days)))
        .unwrap_or(NaiveDate::MAX);
    let mut alerts: Vec<&MedicineRecord> = medicines
        .iter()
        .filter(|medicine| {
            medicine.active && medicine.expiry_date > today && medicine.expiry_date <= window_end
        })
        .collect();
    alerts.sort_by(|a, b| a.expiry_date.cmp(&b.expiry_date));
    alerts.truncate(options.max_alert_rows);
    alerts
}

#[cfg(test)]
mod tests {
    use super::*;
    use rxnear_catalog::{Category, StockInfo};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        date(2024, 6, 15)
    }

    fn make_medicine(name: &str, quantity: u32, expiry: NaiveDate) -> MedicineRecord {
        MedicineRecord {
            id: format!("med-{name}"),
            name: name.to_string(),
            generic_name: None,
            brand: "Generic Labs".to_string(),
            composition: format!("{name} base"),
            category: Category::Tablet,
            strength: None,
            pack_size: None,
            manufacturer: None,
            batch_number: None,
            manufacturing_date: None,
            expiry_date: expiry,
            mrp: None,
            selling_price: 25.0,
            prescription_required: false,
            stock: StockInfo {
                current_quantity: quantity,
                minimum_threshold: 10,
                unit: "strips".to_string(),
            },
            description: None,
            tags: Vec::new(),
            active: true,
        }
    }

    fn mixed_inventory() -> Vec<MedicineRecord> {
        vec![
            make_medicine("healthy", 50, date(2026, 1, 1)),
            make_medicine("low", 5, date(2026, 1, 1)),
            make_medicine("depleted", 0, date(2026, 1, 1)),
            make_medicine("soon", 50, date(2024, 7, 1)),
            make_medicine("gone", 50, date(2024, 1, 1)),
        ]
    }

    #[test]
    fn counts_are_disjoint_and_sum_to_total() {
        let summary = summarize_inventory(&mixed_inventory(), today(), &SummaryOptions::default());
        assert_eq!(summary.total, 5);
        assert_eq!(summary.available, 1);
        assert_eq!(summary.low_stock, 1);
        assert_eq!(summary.out_of_stock, 1);
        assert_eq!(summary.expiring_soon, 1);
        assert_eq!(summary.expired, 1);
        assert_eq!(
            summary.available
                + summary.low_stock
                + summary.out_of_stock
                + summary.expiring_soon
                + summary.expired,
            summary.total
        );
    }

    #[test]
    fn expired_low_stock_counts_once_as_expired() {
        // The classifier decides the bucket; an expired item that is also
        // below threshold must not inflate the low-stock figure.
        let inventory = vec![make_medicine("both", 2, date(2024, 1, 1))];
        let summary = summarize_inventory(&inventory, today(), &SummaryOptions::default());
        assert_eq!(summary.expired, 1);
        assert_eq!(summary.low_stock, 0);
    }

    #[test]
    fn inactive_records_are_invisible_to_the_summary() {
        let mut inventory = mixed_inventory();
        inventory[0].active = false;
        let summary = summarize_inventory(&inventory, today(), &SummaryOptions::default());
        assert_eq!(summary.total, 4);
        assert_eq!(summary.available, 0);
    }

    #[test]
    fn restock_alerts_keep_input_order_and_cap() {
        let mut inventory: Vec<MedicineRecord> = (1..=14)
            .map(|i| make_medicine(&format!("m{i}"), 3, date(2026, 1, 1)))
            .collect();
        inventory.insert(0, make_medicine("plenty", 80, date(2026, 1, 1)));
        let alerts = restock_alerts(&inventory, &SummaryOptions::default());
        assert_eq!(alerts.len(), 10);
        assert_eq!(alerts[0].name, "m1");
        assert_eq!(alerts[9].name, "m10");
    }

    #[test]
    fn restock_alerts_include_depleted_records() {
        let inventory = vec![
            make_medicine("depleted", 0, date(2026, 1, 1)),
            make_medicine("plenty", 80, date(2026, 1, 1)),
        ];
        let alerts = restock_alerts(&inventory, &SummaryOptions::default());
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].name, "depleted");
    }

    #[test]
    fn expiry_alerts_sort_soonest_first_and_skip_expired() {
        let inventory = vec![
            make_medicine("later", 50, date(2024, 7, 10)),
            make_medicine("gone", 50, date(2024, 6, 1)),
            make_medicine("soonest", 50, date(2024, 6, 20)),
            make_medicine("outside", 50, date(2025, 3, 1)),
        ];
        let alerts = expiry_alerts(&inventory, today(), &SummaryOptions::default());
        let names: Vec<&str> = alerts.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["soonest", "later"]);
    }

    #[test]
    fn expiry_alert_window_is_inclusive() {
        let inventory = vec![
            make_medicine("edge", 50, date(2024, 7, 15)),
            make_medicine("past-edge", 50, date(2024, 7, 16)),
        ];
        let alerts = expiry_alerts(&inventory, today(), &SummaryOptions::default());
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].name, "edge");
    }

    #[test]
    fn shrinking_the_window_shrinks_the_alert_list() {
        let inventory = vec![
            make_medicine("week", 50, date(2024, 6, 20)),
            make_medicine("month", 50, date(2024, 7, 10)),
        ];
        let options = SummaryOptions {
            expiring_soon_window_days: 7,
            max_alert_rows: 10,
        };
        let alerts = expiry_alerts(&inventory, today(), &options);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].name, "week");
    }
}
