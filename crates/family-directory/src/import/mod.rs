//! Admin bulk import of listings from CSV.
//!
//! A payload flows through [`tokenizer`] (lines and quote-aware fields),
//! [`coercion`] (cell text to typed values), and [`mapping`] (per-kind field
//! descriptors) before [`service::ListingImporter`] validates each row and
//! hands it to the store.

pub mod coercion;
pub mod mapping;
pub mod report;
pub mod router;
pub mod service;
pub mod tokenizer;

pub use mapping::{columns_for, ImportTarget, RequiredValue, UnknownEnumValue};
pub use report::{template_csv, write_error_report};
pub use router::{import_router, ImportRequest, ImportState};
pub use service::{ImportResult, ListingImporter};
pub use tokenizer::{tokenize, RawRow, TokenizeError};
