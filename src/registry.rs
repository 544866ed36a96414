//! Derives the selectable controls from the loaded collection.
//!
//! Value sets are computed once after load and never recomputed on criteria
//! changes. Distinctness is exact string identity, no case folding.

use std::collections::BTreeSet;

use crate::catalog::GameRecord;
use crate::query::{Attribute, SortKey};

/// Placeholder text for the free-text search control.
pub const SEARCH_PLACEHOLDER: &str = "Search games...";

/// One categorical control: its attribute, display label, and the distinct
/// values observed across all loaded records, sorted ascending.
#[derive(Debug, Clone)]
pub struct FilterOption {
    pub attribute: Attribute,
    pub label: &'static str,
    pub values: Vec<String>,
}

impl FilterOption {
    /// Control entries in display order: "all" first, then every value.
    pub fn entries(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(self.values.len() + 1);
        out.push("all".to_string());
        out.extend(self.values.iter().cloned());
        out
    }

    /// Whether a selection is offered by this control.
    pub fn offers(&self, value: &str) -> bool {
        value == "all" || self.values.iter().any(|v| v == value)
    }
}

/// The full set of controls for a loaded collection.
#[derive(Debug, Clone)]
pub struct FilterRegistry {
    options: Vec<FilterOption>,
}

impl FilterRegistry {
    pub fn derive(records: &[GameRecord]) -> Self {
        let options = Attribute::ALL
            .iter()
            .map(|attr| {
                // BTreeSet gives both distinctness and ascending order.
                let values: BTreeSet<String> = records
                    .iter()
                    .map(|r| attr.value_of(r).to_string())
                    .collect();
                FilterOption {
                    attribute: *attr,
                    label: attr.label(),
                    values: values.into_iter().collect(),
                }
            })
            .collect();
        Self { options }
    }

    pub fn options(&self) -> &[FilterOption] {
        &self.options
    }

    pub fn option(&self, attr: Attribute) -> &FilterOption {
        // Construction follows Attribute::ALL, so discriminant order is index order.
        &self.options[attr as usize]
    }

    /// The sort control's keys in fixed display order.
    pub fn sort_keys(&self) -> [SortKey; 4] {
        SortKey::ALL
    }
}
