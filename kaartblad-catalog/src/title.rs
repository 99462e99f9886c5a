//! Normalizer for catalog product titles.
//!
//! Catalog titles are typed by hand and follow a loose convention:
//! ```text
//! 23 NIEUW WEST (oud) 2 – tweede druk
//! ```
//! A leading sheet number, a place name, optional parenthetical notes, an
//! optional directional suffix, an optional trailing sequence number and an
//! optional secondary title after a dash. This module reduces such a title to
//! the sheet number and a canonical uppercase place name.

use std::fmt;

/// A catalog title reduced to its sheet number and canonical place name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogTitle {
    /// Sheet identifier (e.g., `14` for `"14 ENKHUIZEN"`).
    pub id: u32,
    /// Canonical uppercase name without notes, direction or sequence number.
    pub name: String,
}

/// Why a catalog title did not yield a mapping entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TitleSkip {
    /// Fewer than two whitespace-separated tokens.
    TooShort,
    /// First token does not start with a digit (header or free-text row).
    NotNumbered(String),
    /// First token starts with a digit but is not a valid sheet number.
    BadNumber(String),
    /// Nothing was left of the name after normalization.
    EmptyName(u32),
}

impl TitleSkip {
    /// Whether this skip is routine in catalog exports and not worth a warning.
    pub fn is_routine(&self) -> bool {
        matches!(self, TitleSkip::TooShort | TitleSkip::NotNumbered(_))
    }
}

impl fmt::Display for TitleSkip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TitleSkip::TooShort => write!(f, "title has no name part"),
            TitleSkip::NotNumbered(token) => write!(f, "'{token}' is not a sheet number"),
            TitleSkip::BadNumber(token) => write!(f, "'{token}' is not a valid sheet number"),
            TitleSkip::EmptyName(id) => write!(f, "name of sheet {id} is empty after cleanup"),
        }
    }
}

/// Known inconsistent spellings, fixed before secondary titles are stripped.
const SPELLING_FIXES: &[(&str, &str)] = &[("47 / 53 SLUIS", "53 SLUIS"), ("'S-", "'S ")];

/// Separators introducing a secondary title; only the left part is kept.
const SECONDARY_TITLE_SEPARATORS: &[&str] = &["-", " – "];

/// Abbreviated names expanded after secondary titles are stripped.
const NAME_EXPANSIONS: &[(&str, &str)] = &[
    ("23 NIEUW", "23 NIEUW-SCHOONEBEEK"),
    ("HELDER", "DEN HELDER"),
];

/// Directional suffixes that never belong to the canonical name.
const DIRECTION_SUFFIXES: &[&str] = &[" WEST", " OOST"];

/// Normalize a raw catalog title into a sheet number and canonical name.
///
/// # Examples
///
/// ```
/// use kaartblad_catalog::title::normalize_title;
///
/// let title = normalize_title("14 ENKHUIZEN-OUD (proef) 2").unwrap();
/// assert_eq!(title.id, 14);
/// assert_eq!(title.name, "ENKHUIZEN");
///
/// let title = normalize_title("23 NIEUW WEST (oud)").unwrap();
/// assert_eq!(title.name, "NIEUW-SCHOONEBEEK");
///
/// assert!(normalize_title("titel").is_err());
/// ```
pub fn normalize_title(raw: &str) -> Result<CatalogTitle, TitleSkip> {
    let mut title = raw.to_uppercase();

    for (from, to) in SPELLING_FIXES {
        title = title.replace(from, to);
    }

    for separator in SECONDARY_TITLE_SEPARATORS {
        if let Some((head, _)) = title.split_once(separator) {
            title = head.to_string();
        }
    }

    for (from, to) in NAME_EXPANSIONS {
        title = expand_once(&title, from, to);
    }

    let mut tokens = title.split_whitespace();
    let (number, rest): (&str, Vec<&str>) = match tokens.next() {
        Some(first) => (first, tokens.collect()),
        None => return Err(TitleSkip::TooShort),
    };
    if rest.is_empty() {
        return Err(TitleSkip::TooShort);
    }
    if !number.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(TitleSkip::NotNumbered(number.to_string()));
    }
    let id: u32 = number
        .parse()
        .map_err(|_| TitleSkip::BadNumber(number.to_string()))?;

    let name = clean_name(&rest.join(" "));
    if name.is_empty() {
        return Err(TitleSkip::EmptyName(id));
    }

    Ok(CatalogTitle { id, name })
}

/// Reduce the name part of a title to its canonical form.
fn clean_name(name: &str) -> String {
    let name = match name.find(['(', ')']) {
        Some(pos) => &name[..pos],
        None => name,
    };
    let mut name = collapse_whitespace(name);

    while let Some(suffix) = DIRECTION_SUFFIXES.iter().find(|s| name.contains(*s)) {
        name = name.replace(suffix, "");
    }

    let mut tokens: Vec<&str> = name.split_whitespace().collect();
    if tokens.len() > 1
        && tokens
            .last()
            .is_some_and(|t| t.chars().all(|c| c.is_ascii_digit()))
    {
        tokens.pop();
    }
    tokens.join(" ")
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Replace every occurrence of `from` with `to`, leaving occurrences that are
/// already part of the expanded form alone.
fn expand_once(s: &str, from: &str, to: &str) -> String {
    let Some(offset) = to.find(from) else {
        return s.replace(from, to);
    };

    let mut out = String::with_capacity(s.len());
    let mut last = 0;
    for (i, _) in s.match_indices(from) {
        if i < last {
            continue;
        }
        let already_expanded = i >= offset
            && s.is_char_boundary(i - offset)
            && s[i - offset..].starts_with(to);
        out.push_str(&s[last..i]);
        out.push_str(if already_expanded { from } else { to });
        last = i + from.len();
    }
    out.push_str(&s[last..]);
    out
}

#[cfg(test)]
#[path = "tests/title_tests.rs"]
mod tests;
