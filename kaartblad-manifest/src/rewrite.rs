//! Dictionary-driven rewriting of string leaves in JSON documents.
//!
//! A [`LabelRewriter`] is an ordered list of passes. Each pass walks the whole
//! document and rebuilds it, replacing string leaves according to its
//! [`RewriteMode`] and dictionary. Keys, numbers, booleans and nulls are never
//! touched, and the shape of the document is preserved.

use serde_json::Value;

use crate::dictionary::{self, Dictionary};

/// Delimiter between codes in a sheet label.
pub const SEGMENT_DELIMITER: char = '.';

/// Descriptive titles start with this text and may contain periods that are
/// not code separators.
pub const PROTECTED_PREFIX: &str = "Waterstaatskaart van Nederland";

/// How a pass matches string leaves against its dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RewriteMode {
    /// A string equal to a key is replaced by its value.
    WholeString,
    /// A string containing `delimiter` is split, each segment looked up on
    /// its own and the result joined again. Strings starting with
    /// `protected_prefix` are left alone.
    Segments {
        delimiter: char,
        protected_prefix: Option<String>,
    },
}

impl RewriteMode {
    /// Segment mode on `.` with the standard protected prefix.
    pub fn dotted_segments() -> Self {
        Self::Segments {
            delimiter: SEGMENT_DELIMITER,
            protected_prefix: Some(PROTECTED_PREFIX.to_string()),
        }
    }

    /// Rewrite one string; `None` when it is left unchanged.
    pub fn rewrite_str(&self, s: &str, dict: &Dictionary) -> Option<String> {
        match self {
            RewriteMode::WholeString => dict.get(s).map(str::to_string),
            RewriteMode::Segments {
                delimiter,
                protected_prefix,
            } => {
                if !s.contains(*delimiter) {
                    return None;
                }
                if protected_prefix
                    .as_deref()
                    .is_some_and(|prefix| s.starts_with(prefix))
                {
                    return None;
                }
                let mut changed = false;
                let segments: Vec<&str> = s
                    .split(*delimiter)
                    .map(|segment| match dict.get(segment) {
                        Some(replacement) => {
                            changed = true;
                            replacement
                        }
                        None => segment,
                    })
                    .collect();
                let separator = delimiter.to_string();
                changed.then(|| segments.join(separator.as_str()))
            }
        }
    }
}

/// One traversal of the document with a mode and a dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewritePass {
    pub mode: RewriteMode,
    pub dictionary: Dictionary,
}

impl RewritePass {
    pub fn new(mode: RewriteMode, dictionary: Dictionary) -> Self {
        Self { mode, dictionary }
    }

    /// Return a rewritten copy of `value`.
    pub fn apply(&self, value: &Value) -> Value {
        match value {
            Value::Object(map) => Value::Object(
                map.iter()
                    .map(|(key, v)| (key.clone(), self.apply(v)))
                    .collect(),
            ),
            Value::Array(items) => Value::Array(items.iter().map(|v| self.apply(v)).collect()),
            Value::String(s) => match self.mode.rewrite_str(s, &self.dictionary) {
                Some(replacement) => Value::String(replacement),
                None => value.clone(),
            },
            Value::Number(_) | Value::Bool(_) | Value::Null => value.clone(),
        }
    }
}

/// An ordered sequence of rewrite passes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelRewriter {
    passes: Vec<RewritePass>,
}

impl LabelRewriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pass; passes run in the order they were added.
    pub fn with_pass(mut self, mode: RewriteMode, dictionary: Dictionary) -> Self {
        self.passes.push(RewritePass::new(mode, dictionary));
        self
    }

    /// Whole-string pass with `labels`, then a dotted-segment pass with `names`
    /// honouring `protected_prefix`.
    pub fn standard(labels: Dictionary, names: Dictionary, protected_prefix: Option<String>) -> Self {
        Self::new().with_pass(RewriteMode::WholeString, labels).with_pass(
            RewriteMode::Segments {
                delimiter: SEGMENT_DELIMITER,
                protected_prefix,
            },
            names,
        )
    }

    pub fn passes(&self) -> &[RewritePass] {
        &self.passes
    }

    /// Run every pass over `value` in order and return the result.
    pub fn apply(&self, value: &Value) -> Value {
        let mut passes = self.passes.iter();
        let Some(first) = passes.next() else {
            return value.clone();
        };
        passes.fold(first.apply(value), |acc, pass| pass.apply(&acc))
    }
}

/// The built-in rewriter: revision codes, then sheet type codes.
pub fn default_rewriter() -> LabelRewriter {
    LabelRewriter::standard(
        dictionary::label_replacements(),
        dictionary::name_replacements(),
        Some(PROTECTED_PREFIX.to_string()),
    )
}

#[cfg(test)]
#[path = "tests/rewrite_tests.rs"]
mod tests;
