//! Sheet-number to canonical-name mapping built from catalog titles.
//!
//! The catalog lists every product (edition, reprint, back side...) as its own
//! row, so the same sheet number appears many times. The first title seen for
//! a number determines its name; later rows that disagree are reported as
//! conflicts but never replace the first name.

use std::collections::BTreeMap;

use crate::title::{TitleSkip, normalize_title};

/// Ordered mapping from sheet identifier to canonical name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingTable {
    entries: BTreeMap<u32, String>,
}

impl MappingTable {
    /// Look up the canonical name for a sheet identifier.
    pub fn get(&self, id: u32) -> Option<&str> {
        self.entries.get(&id).map(String::as_str)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in ascending identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> {
        self.entries.iter().map(|(id, name)| (*id, name.as_str()))
    }

    /// Insert unless the identifier is already present. Returns the name that
    /// is kept when the identifier was already taken.
    fn insert_first(&mut self, id: u32, name: String) -> Option<&str> {
        use std::collections::btree_map::Entry;
        match self.entries.entry(id) {
            Entry::Vacant(slot) => {
                slot.insert(name);
                None
            }
            Entry::Occupied(slot) => Some(slot.into_mut().as_str()),
        }
    }
}

/// A later catalog row that named an already-mapped sheet differently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingConflict {
    pub id: u32,
    /// Name kept from the first occurrence.
    pub kept: String,
    /// Name from the later row, not used.
    pub ignored: String,
    /// Zero-based position of the later row in the input.
    pub row: usize,
}

/// A catalog row that produced no mapping entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    pub row: usize,
    pub title: String,
    pub reason: TitleSkip,
}

/// Mapping table plus everything that was dropped while building it.
#[derive(Debug, Clone, Default)]
pub struct MappingReport {
    pub table: MappingTable,
    pub conflicts: Vec<MappingConflict>,
    pub skipped: Vec<SkippedRow>,
}

impl MappingReport {
    /// Rows skipped for a reason other than being a header or free-text row.
    pub fn suspicious_skips(&self) -> impl Iterator<Item = &SkippedRow> {
        self.skipped.iter().filter(|s| !s.reason.is_routine())
    }
}

/// Build the mapping table from catalog titles in catalog order.
///
/// # Examples
///
/// ```
/// use kaartblad_catalog::mapping::build_mapping;
///
/// let report = build_mapping(["titel", "14 ENKHUIZEN (proef) 2", "14 ENKHUIZEN OOST"]);
/// assert_eq!(report.table.get(14), Some("ENKHUIZEN"));
/// assert_eq!(report.table.len(), 1);
/// assert!(report.conflicts.is_empty());
/// ```
pub fn build_mapping<I, S>(titles: I) -> MappingReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut report = MappingReport::default();

    for (row, raw) in titles.into_iter().enumerate() {
        let raw = raw.as_ref();
        match normalize_title(raw) {
            Ok(title) => {
                let Some(kept) = report.table.insert_first(title.id, title.name.clone()) else {
                    continue;
                };
                if kept != title.name {
                    log::warn!(
                        "Sheet {} named '{}' in row {}, keeping '{}'",
                        title.id,
                        title.name,
                        row,
                        kept
                    );
                    report.conflicts.push(MappingConflict {
                        id: title.id,
                        kept: kept.to_string(),
                        ignored: title.name,
                        row,
                    });
                }
            }
            Err(reason) => {
                if reason.is_routine() {
                    log::debug!("Skipping catalog row {row} ('{raw}'): {reason}");
                } else {
                    log::warn!("Skipping catalog row {row} ('{raw}'): {reason}");
                }
                report.skipped.push(SkippedRow {
                    row,
                    title: raw.to_string(),
                    reason,
                });
            }
        }
    }

    report
}

#[cfg(test)]
#[path = "tests/mapping_tests.rs"]
mod tests;
