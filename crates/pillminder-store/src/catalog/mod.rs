//! Read-only medicine name → description lookup.

mod builtin;

use log::debug;
use serde::Serialize;
use std::collections::HashMap;

/// Reply used when a lookup finds nothing.
pub const UNKNOWN_MEDICINE: &str = "Sorry, I don’t have information about this medicine.";

/// A single catalog row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MedicineEntry {
    /// Lowercase medicine name.
    pub name: String,
    pub description: String,
}

/// Deduplicated, ordered medicine table.
///
/// Lookups try an exact (case-insensitive) name first, then fall back to the
/// first entry in table order whose name contains the query or is contained
/// in it.
#[derive(Debug, Clone, Default)]
pub struct MedicineCatalog {
    entries: Vec<MedicineEntry>,
    by_name: HashMap<String, usize>,
}

impl MedicineCatalog {
    /// Build a catalog from `(name, description)` pairs.
    ///
    /// A repeated name keeps the position of its first occurrence and the
    /// description of its last one.
    pub fn from_entries<I, N, D>(entries: I) -> Self
    where
        I: IntoIterator<Item = (N, D)>,
        N: AsRef<str>,
        D: Into<String>,
    {
        let mut catalog = Self::default();
        let mut collapsed = 0usize;
        for (name, description) in entries {
            let name = normalize(name.as_ref());
            if name.is_empty() {
                continue;
            }
            let description = description.into();
            match catalog.by_name.get(&name) {
                Some(&idx) => {
                    collapsed += 1;
                    catalog.entries[idx].description = description;
                }
                None => {
                    catalog.by_name.insert(name.clone(), catalog.entries.len());
                    catalog.entries.push(MedicineEntry { name, description });
                }
            }
        }
        if collapsed > 0 {
            debug!(
                "medicine catalog flattened duplicates (collapsed={collapsed}, entries={})",
                catalog.entries.len()
            );
        }
        catalog
    }

    /// The table shipped with the application.
    pub fn builtin() -> Self {
        Self::from_entries(builtin::BUILTIN_MEDICINES.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exact, case-insensitive name match.
    pub fn get(&self, name: &str) -> Option<&MedicineEntry> {
        self.by_name
            .get(&normalize(name))
            .map(|&idx| &self.entries[idx])
    }

    /// Exact match first, then first substring match in table order.
    pub fn lookup(&self, query: &str) -> Option<&MedicineEntry> {
        let query = normalize(query);
        if query.is_empty() {
            return None;
        }
        if let Some(&idx) = self.by_name.get(&query) {
            return Some(&self.entries[idx]);
        }
        self.entries
            .iter()
            .find(|entry| entry.name.contains(&query) || query.contains(&entry.name))
    }

    /// Description for a query, or the stock "unknown" reply.
    pub fn describe(&self, query: &str) -> &str {
        self.get(query)
            .map(|entry| entry.description.as_str())
            .unwrap_or(UNKNOWN_MEDICINE)
    }

    pub fn entries(&self) -> &[MedicineEntry] {
        &self.entries
    }
}

fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}
