//! # Estimate
//!
//! The `Estimate` is the root container for a weight/cost estimation session:
//! an ordered list of elements plus the unit price.
//!
//! ## Structure
//!
//! ```text
//! Estimate
//! ├── settings: EstimatorSettings (defaults, report title)
//! ├── elements: Vec<Element> (line items, in entry order)
//! └── unit_price: f64 (currency per kg)
//! ```
//!
//! Element weight is recomputed by every mutation of the element, so it is
//! always `kg/m × length × quantity` for the element's current fields (zero
//! when the family/size pair is not in the reference table). Totals are not
//! stored: `totals()` derives them from the current list and price.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::estimate::{ElementField, Estimate};
//!
//! let mut estimate = Estimate::new();
//! let id = estimate.add_element();
//! estimate.update_element(id, ElementField::Length(3.0));
//! estimate.update_element(id, ElementField::Quantity(2));
//!
//! let totals = estimate.totals();
//! assert!((totals.total_weight_kg - 57.9).abs() < 1e-9);
//! assert!((totals.total_cost - 1621.2).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::profiles::{reference_table, ReferenceTable};
use crate::report::Report;
use crate::settings::EstimatorSettings;

/// One line item: a quantity of a profile/size cut to a length.
///
/// Fields are read-only outside this module so the weight can only change
/// through a recompute.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Element {
    id: Uuid,
    profile_family: String,
    size: String,
    length_m: f64,
    quantity: u32,
    brand: String,
    weight_kg: f64,
}

impl Element {
    fn new_default(table: &ReferenceTable) -> Self {
        let (family, size) = table.default_profile();
        let mut element = Element {
            id: Uuid::new_v4(),
            profile_family: family.to_string(),
            size: size.to_string(),
            length_m: 1.0,
            quantity: 1,
            brand: String::new(),
            weight_kg: 0.0,
        };
        element.recompute(table);
        element
    }

    /// Unique id, stable for the element's lifetime
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Profile family name (e.g., "IPR")
    pub fn profile_family(&self) -> &str {
        &self.profile_family
    }

    /// Size label within the family (e.g., "100x50")
    pub fn size(&self) -> &str {
        &self.size
    }

    /// Length of each piece (m)
    pub fn length_m(&self) -> f64 {
        self.length_m
    }

    /// Number of pieces
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Free-text brand label
    pub fn brand(&self) -> &str {
        &self.brand
    }

    /// Total weight of the line (kg)
    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    /// Whether the family/size pair resolves in the reference table
    pub fn is_resolved(&self) -> bool {
        reference_table().contains(&self.profile_family, &self.size)
    }

    fn apply(&mut self, field: ElementField) {
        match field {
            ElementField::ProfileFamily(family) => self.profile_family = family,
            ElementField::Size(size) => self.size = size,
            ElementField::Length(length_m) => self.length_m = coerce_non_negative(length_m),
            ElementField::Quantity(quantity) => self.quantity = quantity,
            ElementField::Brand(brand) => self.brand = brand,
        }
    }

    fn recompute(&mut self, table: &ReferenceTable) {
        let kg_per_m = table.unit_weight(&self.profile_family, &self.size);
        self.weight_kg = kg_per_m * self.length_m * f64::from(self.quantity);
    }
}

/// A single field update for an element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum ElementField {
    /// Family name. The size is left as is; see `Estimate::change_profile_family`.
    ProfileFamily(String),
    Size(String),
    Length(f64),
    Quantity(u32),
    Brand(String),
}

impl ElementField {
    /// Field name as used in logs and JSON
    pub fn name(&self) -> &'static str {
        match self {
            ElementField::ProfileFamily(_) => "profile_family",
            ElementField::Size(_) => "size",
            ElementField::Length(_) => "length",
            ElementField::Quantity(_) => "quantity",
            ElementField::Brand(_) => "brand",
        }
    }
}

/// Aggregate weight and cost
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Totals {
    /// Sum of element weights (kg)
    pub total_weight_kg: f64,
    /// total_weight_kg × unit price
    pub total_cost: f64,
}

/// Snapshot shown by the front ends
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateSummary {
    pub element_count: usize,
    pub total_weight_kg: f64,
    pub total_cost: f64,
    pub unit_price: f64,
}

/// Ordered list of elements and the unit price.
#[derive(Debug, Clone, Serialize)]
pub struct Estimate {
    settings: EstimatorSettings,
    elements: Vec<Element>,
    unit_price: f64,
}

impl Estimate {
    /// Create an empty estimate with default settings.
    pub fn new() -> Self {
        Estimate::with_settings(EstimatorSettings::default())
    }

    /// Create an empty estimate; the unit price starts at the settings default.
    ///
    /// Invalid settings fields (negative price, report prefix with path
    /// separators) are replaced by their defaults.
    pub fn with_settings(settings: EstimatorSettings) -> Self {
        let settings = settings.sanitized();
        let unit_price = settings.default_unit_price;
        Estimate {
            settings,
            elements: Vec::new(),
            unit_price,
        }
    }

    /// Append an element with default values and return its id.
    ///
    /// Defaults: first family of the table, its first size, length 1 m,
    /// quantity 1, empty brand.
    pub fn add_element(&mut self) -> Uuid {
        let element = Element::new_default(reference_table());
        let id = element.id;
        tracing::debug!(%id, family = %element.profile_family, size = %element.size, "element added");
        self.elements.push(element);
        id
    }

    /// Replace one field of an element and recompute its weight.
    ///
    /// Returns `false` (and changes nothing) when no element has `id`.
    ///
    /// Changing the family does not touch the size. If the old size is not a
    /// size of the new family the weight resolves to 0 until a valid size is
    /// set.
    pub fn update_element(&mut self, id: Uuid, field: ElementField) -> bool {
        let Some(element) = self.elements.iter_mut().find(|e| e.id == id) else {
            tracing::debug!(%id, field = field.name(), "update ignored: unknown element");
            return false;
        };

        let field_name = field.name();
        element.apply(field);
        element.recompute(reference_table());

        if !element.is_resolved() {
            tracing::debug!(
                %id,
                family = %element.profile_family,
                size = %element.size,
                "profile lookup missed, weight is 0"
            );
        }
        tracing::debug!(%id, field = field_name, weight_kg = element.weight_kg, "element updated");
        true
    }

    /// Switch an element to another family and reset its size to the first
    /// size of that family, in one step.
    ///
    /// An unknown family keeps the current size (the weight then resolves to 0).
    pub fn change_profile_family(&mut self, id: Uuid, family: impl Into<String>) -> bool {
        let family = family.into();
        let first_size = reference_table()
            .family(&family)
            .and_then(|f| f.first_size())
            .map(|s| s.label.to_string());

        let Some(element) = self.elements.iter_mut().find(|e| e.id == id) else {
            return false;
        };

        element.apply(ElementField::ProfileFamily(family));
        if let Some(size) = first_size {
            element.apply(ElementField::Size(size));
        }
        element.recompute(reference_table());
        tracing::debug!(
            %id,
            family = %element.profile_family,
            size = %element.size,
            weight_kg = element.weight_kg,
            "element family changed"
        );
        true
    }

    /// Remove an element by id. Returns `false` when no element matched.
    pub fn remove_element(&mut self, id: Uuid) -> bool {
        let before = self.elements.len();
        self.elements.retain(|e| e.id != id);
        let removed = self.elements.len() != before;
        tracing::debug!(%id, removed, "remove element");
        removed
    }

    /// Set the unit price. Negative or non-finite prices become 0.
    pub fn set_unit_price(&mut self, price: f64) {
        self.unit_price = coerce_non_negative(price);
        tracing::debug!(unit_price = self.unit_price, "unit price set");
    }

    /// Current unit price (currency per kg)
    pub fn unit_price(&self) -> f64 {
        self.unit_price
    }

    /// Aggregate weight and cost of the current list.
    pub fn totals(&self) -> Totals {
        let total_weight_kg: f64 = self.elements.iter().map(|e| e.weight_kg).sum();
        Totals {
            total_weight_kg,
            total_cost: total_weight_kg * self.unit_price,
        }
    }

    /// Element count and totals.
    pub fn summary(&self) -> EstimateSummary {
        let totals = self.totals();
        EstimateSummary {
            element_count: self.elements.len(),
            total_weight_kg: totals.total_weight_kg,
            total_cost: totals.total_cost,
            unit_price: self.unit_price,
        }
    }

    /// Build the text report for the current list.
    pub fn generate_report(&self) -> Report {
        Report::from_estimate(self)
    }

    /// Get an element by id.
    pub fn element(&self, id: Uuid) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    /// Id of the element at a 0-based list position.
    pub fn id_at(&self, index: usize) -> Option<Uuid> {
        self.elements.get(index).map(|e| e.id)
    }

    /// Elements in list order
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn settings(&self) -> &EstimatorSettings {
        &self.settings
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl Default for Estimate {
    fn default() -> Self {
        Estimate::new()
    }
}

/// Lengths and prices: negative or non-finite values become 0.
fn coerce_non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
