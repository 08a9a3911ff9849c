use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::mapping::ImportTarget;
use super::tokenizer::tokenize;
use crate::listings::{
    InternshipInput, JobInput, ListingKind, ListingStore, SummerCampInput, TutoringProviderInput,
};

/// Aggregate outcome of one CSV submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportResult {
    pub success: usize,
    pub errors: Vec<String>,
}

impl ImportResult {
    pub fn failed(&self) -> usize {
        self.errors.len()
    }

    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Display label for the `index`-th data row: the header is line 1 and rows
/// are numbered from 1, so data row 0 is "Row 2".
pub(crate) fn row_label(index: usize) -> String {
    format!("Row {}", index + 2)
}

/// Bulk importer writing validated listings through a [`ListingStore`].
///
/// Every import is total: parse failures, missing columns, and store
/// rejections are all reported through [`ImportResult::errors`].
pub struct ListingImporter<S> {
    store: Arc<S>,
}

impl<S> Clone for ListingImporter<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S> ListingImporter<S>
where
    S: ListingStore + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub fn import(&self, kind: ListingKind, csv: &str) -> ImportResult {
        match kind {
            ListingKind::TutoringProvider => self.import_tutoring_providers(csv),
            ListingKind::SummerCamp => self.import_summer_camps(csv),
            ListingKind::Internship => self.import_internships(csv),
            ListingKind::Job => self.import_jobs(csv),
        }
    }

    pub fn import_tutoring_providers(&self, csv: &str) -> ImportResult {
        self.import_rows::<TutoringProviderInput>(csv)
    }

    pub fn import_summer_camps(&self, csv: &str) -> ImportResult {
        self.import_rows::<SummerCampInput>(csv)
    }

    pub fn import_internships(&self, csv: &str) -> ImportResult {
        self.import_rows::<InternshipInput>(csv)
    }

    pub fn import_jobs(&self, csv: &str) -> ImportResult {
        self.import_rows::<JobInput>(csv)
    }

    fn import_rows<T: ImportTarget>(&self, csv: &str) -> ImportResult {
        let kind = T::KIND;
        let mut result = ImportResult::default();

        let rows = match tokenize(csv) {
            Ok(rows) => rows,
            Err(err) => {
                warn!(%kind, error = %err, "listing import rejected");
                result.errors.push(format!("CSV parsing error: {err}"));
                return result;
            }
        };

        for (index, row) in rows.iter().enumerate() {
            let label = row_label(index);
            let record = T::from_row(row);

            if !record.has_required_fields() {
                let names = record.required_field_names().join(", ");
                debug!(%kind, row = %label, "row missing required fields");
                result
                    .errors
                    .push(format!("{label}: Missing required fields ({names})"));
                continue;
            }

            for unknown in record.unknown_enum_values() {
                warn!(
                    %kind,
                    row = %label,
                    column = unknown.column,
                    value = %unknown.value,
                    "unrecognized value imported as-is"
                );
            }

            match record.persist(&*self.store) {
                Ok(id) => {
                    debug!(%kind, row = %label, %id, "listing created");
                    result.success += 1;
                }
                Err(err) => {
                    let message = err.to_string();
                    let message = if message.is_empty() {
                        "Unknown error".to_string()
                    } else {
                        message
                    };
                    debug!(%kind, row = %label, error = %message, "store rejected listing");
                    result.errors.push(format!("{label}: {message}"));
                }
            }
        }

        info!(
            %kind,
            rows = rows.len(),
            success = result.success,
            failed = result.failed(),
            "listing import finished"
        );

        result
    }
}
