//! Structural Profiles Reference Table
//!
//! Nominal linear weights (kg/m) for the standard Mexican structural profiles
//! the estimator prices. The table is fixed: it is built once on first use and
//! never mutated.
//!
//! ## Supported Families
//!
//! - **IPR**: Wide flange beams
//! - **IPS**: Standard I-beams
//! - **Ángulo**: Equal-leg angles
//! - **Canal**: Channels
//! - **Tubo Rectangular**: Rectangular hollow sections
//! - **Tubo Circular**: Round hollow sections
//!
//! Families and sizes keep the order listed below. The first family and its
//! first size are the defaults for a new element.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::profiles::reference_table;
//!
//! let table = reference_table();
//! assert_eq!(table.unit_weight("IPR", "100x50"), 9.65);
//! assert_eq!(table.unit_weight("Canal", "100x50"), 0.0);
//! ```

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::errors::{CalcError, CalcResult};

/// (family, [(size label, kg/m)])
type FamilyRows = (&'static str, &'static [(&'static str, f64)]);

const PROFILE_DATA: [FamilyRows; 6] = [
    (
        "IPR",
        &[
            ("100x50", 9.65),
            ("120x64", 13.10),
            ("150x75", 17.90),
            ("200x100", 25.30),
            ("250x125", 37.20),
            ("300x150", 46.10),
            ("350x175", 57.00),
            ("400x200", 66.30),
        ],
    ),
    (
        "IPS",
        &[
            ("76x76", 8.50),
            ("102x102", 15.40),
            ("127x127", 23.80),
            ("152x152", 34.20),
            ("203x203", 60.00),
            ("254x254", 88.90),
            ("305x305", 137.00),
        ],
    ),
    (
        "Ángulo",
        &[
            ("25x25x3", 1.12),
            ("38x38x5", 2.77),
            ("51x51x6", 4.47),
            ("64x64x6", 7.09),
            ("76x76x8", 11.40),
            ("102x102x10", 19.30),
            ("127x127x13", 30.60),
        ],
    ),
    (
        "Canal",
        &[
            ("76x38", 5.90),
            ("102x51", 10.40),
            ("127x64", 14.90),
            ("152x76", 19.30),
            ("203x89", 29.80),
            ("254x102", 41.70),
            ("305x102", 55.70),
        ],
    ),
    (
        "Tubo Rectangular",
        &[
            ("40x20x2", 1.84),
            ("50x25x2", 2.42),
            ("60x40x3", 4.32),
            ("80x40x3", 5.49),
            ("100x50x4", 8.77),
            ("120x60x4", 10.90),
            ("150x100x5", 18.20),
        ],
    ),
    (
        "Tubo Circular",
        &[
            ("25x2", 1.21),
            ("32x2", 1.59),
            ("51x3", 3.58),
            ("76x3", 5.59),
            ("102x4", 9.56),
            ("152x5", 18.20),
            ("203x6", 29.40),
        ],
    ),
];

static REFERENCE_TABLE: Lazy<ReferenceTable> = Lazy::new(ReferenceTable::builtin);

/// The process-wide reference table.
pub fn reference_table() -> &'static ReferenceTable {
    &REFERENCE_TABLE
}

/// One size within a profile family
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProfileSize {
    /// Dimensional designator (e.g., "100x50")
    pub label: &'static str,

    /// Nominal linear weight (kg/m)
    pub kg_per_m: f64,
}

/// A profile family and its sizes, in table order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileFamily {
    /// Family name (e.g., "IPR", "Ángulo")
    pub name: &'static str,

    /// Sizes in table order
    pub sizes: Vec<ProfileSize>,
}

impl ProfileFamily {
    /// First size of the family, used when an element switches to it
    pub fn first_size(&self) -> Option<&ProfileSize> {
        self.sizes.first()
    }

    /// Size labels in table order
    pub fn size_labels(&self) -> Vec<&'static str> {
        self.sizes.iter().map(|s| s.label).collect()
    }

    fn size(&self, label: &str) -> Option<&ProfileSize> {
        self.sizes.iter().find(|s| s.label == label)
    }
}

/// Ordered family → size → kg/m table
///
/// Families are kept in a Vec to preserve listing order; a name index gives
/// O(1) family lookup.
#[derive(Debug, Clone)]
pub struct ReferenceTable {
    families: Vec<ProfileFamily>,
    index: HashMap<&'static str, usize>,
}

impl ReferenceTable {
    fn builtin() -> Self {
        let families: Vec<ProfileFamily> = PROFILE_DATA
            .iter()
            .map(|&(name, rows)| ProfileFamily {
                name,
                sizes: rows
                    .iter()
                    .map(|&(label, kg_per_m)| ProfileSize { label, kg_per_m })
                    .collect(),
            })
            .collect();

        let index = families
            .iter()
            .enumerate()
            .map(|(i, f)| (f.name, i))
            .collect();

        ReferenceTable { families, index }
    }

    /// All families in table order
    pub fn families(&self) -> &[ProfileFamily] {
        &self.families
    }

    /// Family names in table order
    pub fn family_names(&self) -> Vec<&'static str> {
        self.families.iter().map(|f| f.name).collect()
    }

    /// Look up a family by exact name
    pub fn family(&self, name: &str) -> Option<&ProfileFamily> {
        self.index.get(name).map(|&i| &self.families[i])
    }

    /// Default (family, size) for a new element: the first entry of the table
    pub fn default_profile(&self) -> (&'static str, &'static str) {
        let family = &self.families[0];
        (family.name, family.sizes[0].label)
    }

    /// Strict kg/m lookup.
    ///
    /// Returns `CalcError::ProfileNotFound` when the family is unknown or the
    /// size does not belong to it.
    pub fn lookup(&self, family: &str, size: &str) -> CalcResult<f64> {
        self.family(family)
            .and_then(|f| f.size(size))
            .map(|s| s.kg_per_m)
            .ok_or_else(|| CalcError::profile_not_found(family, size))
    }

    /// Lenient kg/m lookup: 0.0 on a miss.
    pub fn unit_weight(&self, family: &str, size: &str) -> f64 {
        self.lookup(family, size).unwrap_or(0.0)
    }

    /// Check whether `size` is a valid key of `family`
    pub fn contains(&self, family: &str, size: &str) -> bool {
        self.lookup(family, size).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_order() {
        let table = reference_table();
        assert_eq!(
            table.family_names(),
            vec!["IPR", "IPS", "Ángulo", "Canal", "Tubo Rectangular", "Tubo Circular"]
        );
    }

    #[test]
    fn test_default_profile() {
        assert_eq!(reference_table().default_profile(), ("IPR", "100x50"));
    }

    #[test]
    fn test_table_values() {
        let table = reference_table();
        assert_eq!(table.unit_weight("IPR", "400x200"), 66.30);
        assert_eq!(table.unit_weight("IPS", "305x305"), 137.00);
        assert_eq!(table.unit_weight("Ángulo", "25x25x3"), 1.12);
        assert_eq!(table.unit_weight("Canal", "203x89"), 29.80);
        assert_eq!(table.unit_weight("Tubo Rectangular", "150x100x5"), 18.20);
        assert_eq!(table.unit_weight("Tubo Circular", "203x6"), 29.40);
    }

    #[test]
    fn test_family_sizes() {
        let table = reference_table();
        let ipr = table.family("IPR").unwrap();
        assert_eq!(ipr.sizes.len(), 8);
        assert_eq!(ipr.first_size().unwrap().label, "100x50");

        for family in table.families().iter().skip(1) {
            assert_eq!(family.sizes.len(), 7, "{}", family.name);
            assert!(family.sizes.iter().all(|s| s.kg_per_m > 0.0));
        }

        let canal = table.family("Canal").unwrap();
        assert_eq!(canal.size_labels()[0], "76x38");
    }

    #[test]
    fn test_lookup_miss() {
        let table = reference_table();
        assert_eq!(table.unit_weight("Canal", "100x50"), 0.0);
        assert_eq!(table.unit_weight("Viga", "100x50"), 0.0);
        assert!(!table.contains("Canal", "100x50"));
        assert!(table.contains("Canal", "76x38"));

        let err = table.lookup("Viga", "1x1").unwrap_err();
        assert_eq!(err, CalcError::profile_not_found("Viga", "1x1"));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let table = reference_table();
        assert!(table.family("ipr").is_none());
        assert!(table.family("Angulo").is_none());
    }
}
