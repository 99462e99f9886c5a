//! IIIF manifest tooling for the map collection.
//!
//! - [`extract`]: flat label/metadata records from manifest documents
//! - [`rewrite`]: dictionary-driven rewriting of string leaves
//! - [`batch`]: directory-wide rewriting into `modified_` files
//! - [`lonely`]: sheet numbers that occur in a single label

pub mod batch;
pub mod dictionary;
pub mod error;
pub mod extract;
pub mod lonely;
pub mod rewrite;
pub mod sheet_label;

pub use batch::{BatchOptions, BatchReport, FileOutcome, OUTPUT_PREFIX, rewrite_directory};
pub use dictionary::{Dictionary, label_replacements, name_replacements};
pub use error::ManifestError;
pub use extract::{
    MAP_LABEL_COLUMN, ManifestRecord, exclude_sheet_types, extract_records, load_manifest,
    load_records, manifest_files,
};
pub use lonely::find_lonely_numbers;
pub use rewrite::{
    LabelRewriter, PROTECTED_PREFIX, RewriteMode, RewritePass, SEGMENT_DELIMITER,
    default_rewriter,
};
pub use sheet_label::{SheetLabel, sheet_key};
