//! Map-sheet labels as they appear on manifest canvases.
//!
//! A label is a dot-separated code: the sheet number first, then position,
//! revision and type codes, e.g. `35.W`, `23.bw.1` or `12.B.dup`.

/// A manifest label split into its sheet number and remaining codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetLabel {
    /// Sheet identifier parsed from the first segment (`"023"` -> `23`).
    pub number: u32,
    /// First segment exactly as written.
    pub number_text: String,
    /// Remaining segments in order.
    pub segments: Vec<String>,
}

impl SheetLabel {
    /// Parse a label; `None` when the first segment is not a number.
    ///
    /// ```
    /// use kaartblad_manifest::SheetLabel;
    ///
    /// let label = SheetLabel::parse("23.bw.1").unwrap();
    /// assert_eq!(label.number, 23);
    /// assert_eq!(label.segments, vec!["bw", "1"]);
    /// assert!(SheetLabel::parse("index").is_none());
    /// ```
    pub fn parse(label: &str) -> Option<Self> {
        let mut parts = label.trim().split('.');
        let number_text = parts.next()?.trim();
        if number_text.is_empty() || !number_text.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        let number = number_text.parse().ok()?;
        Some(Self {
            number,
            number_text: number_text.to_string(),
            segments: parts.map(str::to_string).collect(),
        })
    }

    /// Whether any code after the sheet number is one of `codes`.
    pub fn has_segment_in(&self, codes: &[String]) -> bool {
        self.segments.iter().any(|s| codes.contains(s))
    }
}

/// The text before the first `.` of a label, used to group labels by sheet.
pub fn sheet_key(label: &str) -> &str {
    label.split('.').next().unwrap_or(label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_number_and_segments() {
        let label = SheetLabel::parse("35.W").unwrap();
        assert_eq!(label.number, 35);
        assert_eq!(label.number_text, "35");
        assert_eq!(label.segments, vec!["W"]);
    }

    #[test]
    fn bare_number() {
        let label = SheetLabel::parse("12").unwrap();
        assert_eq!(label.number, 12);
        assert!(label.segments.is_empty());
    }

    #[test]
    fn leading_zero_kept_in_text() {
        let label = SheetLabel::parse("007.ba.2").unwrap();
        assert_eq!(label.number, 7);
        assert_eq!(label.number_text, "007");
    }

    #[test]
    fn rejects_non_numeric() {
        assert!(SheetLabel::parse("").is_none());
        assert!(SheetLabel::parse("W.35").is_none());
        assert!(SheetLabel::parse("12a.W").is_none());
    }

    #[test]
    fn segment_membership() {
        let label = SheetLabel::parse("12.W.HWP").unwrap();
        assert!(label.has_segment_in(&["HWP".to_string()]));
        assert!(!label.has_segment_in(&["B".to_string()]));
    }

    #[test]
    fn sheet_key_before_first_dot() {
        assert_eq!(sheet_key("12.W.bw"), "12");
        assert_eq!(sheet_key("12"), "12");
        assert_eq!(sheet_key(""), "");
    }
}
