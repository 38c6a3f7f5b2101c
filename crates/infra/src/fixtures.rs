//! Built-in sample inventory.
//!
//! Mirrors the hard-coded demo list the dashboard ships with. Expiry dates are
//! expressed relative to `today` so the demo always shows a mix of statuses.

use chrono::{Days, NaiveDate};

use pharmawatch_core::{FacilityId, ItemId};
use pharmawatch_inventory::{Category, InventoryItem};

pub const CENTRAL_HOSPITAL: FacilityId = FacilityId::from_u128(0x01);
pub const NORTHSIDE_CLINIC: FacilityId = FacilityId::from_u128(0x02);
pub const RIVERSIDE_PHARMACY: FacilityId = FacilityId::from_u128(0x03);

const FACILITY_NAMES: &[(FacilityId, &str)] = &[
    (CENTRAL_HOSPITAL, "Central Hospital"),
    (NORTHSIDE_CLINIC, "Northside Clinic"),
    (RIVERSIDE_PHARMACY, "Riverside Pharmacy"),
];

pub fn facility_name(id: FacilityId) -> Option<&'static str> {
    FACILITY_NAMES
        .iter()
        .find(|(facility, _)| *facility == id)
        .map(|(_, name)| *name)
}

// (name, category, facility, quantity, min threshold, days until expiry)
const SAMPLE: &[(&str, Category, FacilityId, i64, i64, u64)] = &[
    ("Amoxicillin 500mg", Category::Prescription, CENTRAL_HOSPITAL, 0, 200, 240),
    ("Insulin glargine 100U/mL", Category::Prescription, CENTRAL_HOSPITAL, 35, 50, 21),
    ("Morphine sulfate 10mg", Category::Prescription, CENTRAL_HOSPITAL, 120, 40, 400),
    ("Sodium chloride 0.9% 1L", Category::Otc, CENTRAL_HOSPITAL, 800, 300, 12),
    ("Paracetamol 500mg", Category::Otc, NORTHSIDE_CLINIC, 1500, 500, 365),
    ("Salbutamol inhaler", Category::Prescription, NORTHSIDE_CLINIC, 0, 30, 5),
    ("Metformin 850mg", Category::Prescription, NORTHSIDE_CLINIC, 260, 100, 180),
    ("Ibuprofen 200mg", Category::Otc, NORTHSIDE_CLINIC, 90, 150, 300),
    ("Loratadine 10mg", Category::Otc, RIVERSIDE_PHARMACY, 45, 60, 28),
    ("Atorvastatin 20mg", Category::Prescription, RIVERSIDE_PHARMACY, 400, 120, 500),
    ("Omeprazole 20mg", Category::Otc, RIVERSIDE_PHARMACY, 220, 80, 90),
    ("Lisinopril 10mg", Category::Prescription, RIVERSIDE_PHARMACY, 12, 60, 150),
];

pub fn sample_inventory(today: NaiveDate) -> Vec<InventoryItem> {
    SAMPLE
        .iter()
        .enumerate()
        .map(|(idx, &(name, category, facility, quantity, min_threshold, days))| {
            let item = InventoryItem::new(name, category, facility)
                .with_id(ItemId::from_u128(0x100 + idx as u128))
                .with_stock(quantity, min_threshold);
            match today.checked_add_days(Days::new(days)) {
                Some(expiry) => item.with_expiry_date(expiry),
                None => item,
            }
        })
        .collect()
}
