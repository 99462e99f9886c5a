//! Sheets that appear in only one label.
//!
//! Most sheets have several scans (editions, back sides, duplicates), so a
//! sheet number that shows up once in a label list usually points at a
//! missing or mislabelled scan.

use std::collections::HashMap;

use crate::sheet_label::sheet_key;

/// Sheet keys (text before the first `.`) that occur in exactly one label,
/// in order of first appearance. Blank lines are ignored.
///
/// ```
/// use kaartblad_manifest::find_lonely_numbers;
///
/// let lonely = find_lonely_numbers(["12.W", "12.E", "13.W", "14.B"]);
/// assert_eq!(lonely, vec!["13", "14"]);
/// ```
pub fn find_lonely_numbers<I, S>(labels: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();

    for label in labels {
        let label = label.as_ref().trim();
        if label.is_empty() {
            continue;
        }
        let key = sheet_key(label).to_string();
        let count = counts.entry(key.clone()).or_insert(0);
        if *count == 0 {
            order.push(key);
        }
        *count += 1;
    }

    order.into_iter().filter(|k| counts[k] == 1).collect()
}
