//! Catalog loading and sheet-name mapping for the map collection.
//!
//! The catalog is the spreadsheet of authoritative product titles, read here
//! from its CSV export. Titles are normalized into a sheet-number to
//! canonical-name [`MappingTable`] that the manifest tooling joins against.

pub mod error;
pub mod mapping;
pub mod table;
pub mod title;

pub use error::CatalogError;
pub use mapping::{MappingConflict, MappingReport, MappingTable, SkippedRow, build_mapping};
pub use table::{CatalogTable, EDITION_COLUMN, SHEET_TYPE_COLUMN, TITLE_COLUMN};
pub use title::{CatalogTitle, TitleSkip, normalize_title};
