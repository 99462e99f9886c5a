//! Substitution dictionaries for label rewriting.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A string-to-string substitution table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dictionary(BTreeMap<String, String>);

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Keys whose replacement is itself a key, which would make a second pass
    /// rewrite the result again.
    pub fn chained_keys(&self) -> Vec<&str> {
        self.0
            .iter()
            .filter(|(k, v)| *k != *v && self.0.contains_key(v.as_str()))
            .map(|(k, _)| k.as_str())
            .collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Dictionary {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Abbreviated revision codes expanded when a whole label equals the code.
pub fn label_replacements() -> Dictionary {
    [
        ("bw", "bewerkt"),
        ("vk", "verkend"),
        ("hz", "herzien"),
        ("bij", "bijgewerkt"),
        ("gbij", "bijgewerkt"),
        ("ui", "uitgave"),
        ("ba", "basis"),
    ]
    .into_iter()
    .collect()
}

/// Sheet type and position codes expanded inside dotted labels.
pub fn name_replacements() -> Dictionary {
    [
        ("WVE", "watervoorzieningseenheden"),
        ("HWP", "hydrologische waarnemingspunten"),
        ("B", "back"),
        ("dup", "duplicate"),
        ("L", "left"),
        ("R", "right"),
    ]
    .into_iter()
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_dictionaries_do_not_chain() {
        assert!(label_replacements().chained_keys().is_empty());
        assert!(name_replacements().chained_keys().is_empty());
    }

    #[test]
    fn chained_keys_detected() {
        let dict: Dictionary = [("a", "b"), ("b", "c"), ("d", "d")].into_iter().collect();
        assert_eq!(dict.chained_keys(), vec!["a"]);
    }

    #[test]
    fn empty_dictionary() {
        assert!(Dictionary::new().is_empty());
        assert!(!label_replacements().is_empty());
        let dict: Dictionary = serde_json::from_str("{}").unwrap();
        assert!(dict.is_empty());
    }

    #[test]
    fn deserializes_from_plain_map() {
        let dict: Dictionary = serde_json::from_str(r#"{"bw": "bewerkt"}"#).unwrap();
        assert_eq!(dict.get("bw"), Some("bewerkt"));
        assert_eq!(dict.len(), 1);
    }
}
