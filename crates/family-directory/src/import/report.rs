use std::io::Write;

use super::mapping::columns_for;
use super::service::ImportResult;
use crate::listings::ListingKind;

/// Write the rejected rows of `result` as a `row,message` CSV for admins.
///
/// Row-level entries keep their row number; file-level errors such as CSV
/// parse failures are written with an empty `row` cell.
pub fn write_error_report<W: Write>(result: &ImportResult, writer: W) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["row", "message"])?;

    for error in &result.errors {
        let (row, message) = split_row_error(error);
        let row = row.map(|row| row.to_string()).unwrap_or_default();
        csv_writer.write_record([row.as_str(), message])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Header row an admin can fill in for `kind`.
pub fn template_csv(kind: ListingKind) -> Result<String, csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(Vec::new());
    csv_writer.write_record(columns_for(kind))?;
    let bytes = csv_writer
        .into_inner()
        .map_err(|err| csv::Error::from(err.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn split_row_error(error: &str) -> (Option<usize>, &str) {
    error
        .strip_prefix("Row ")
        .and_then(|rest| rest.split_once(": "))
        .and_then(|(row, message)| row.parse().ok().map(|row| (Some(row), message)))
        .unwrap_or((None, error))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_keeps_row_numbers_and_quotes_commas() {
        let result = ImportResult {
            success: 1,
            errors: vec![
                "Row 2: Missing required fields (name, description, city, state, categories)"
                    .to_string(),
                "Row 5: store unavailable: timeout".to_string(),
            ],
        };

        let mut buffer = Vec::new();
        write_error_report(&result, &mut buffer).expect("report writes");
        let text = String::from_utf8(buffer).expect("utf8");

        assert_eq!(
            text,
            "row,message\n\
2,\"Missing required fields (name, description, city, state, categories)\"\n\
5,store unavailable: timeout\n"
        );
    }

    #[test]
    fn aggregate_errors_have_no_row() {
        let result = ImportResult {
            success: 0,
            errors: vec![
                "CSV parsing error: CSV must contain a header row and at least one data row"
                    .to_string(),
            ],
        };

        let mut buffer = Vec::new();
        write_error_report(&result, &mut buffer).expect("report writes");
        let text = String::from_utf8(buffer).expect("utf8");

        assert!(text.starts_with("row,message\n,CSV parsing error: "));
    }

    #[test]
    fn template_lists_columns_in_order() {
        let template = template_csv(ListingKind::TutoringProvider).expect("template renders");
        assert!(template.starts_with("name,type,description,categories,"));
        assert!(template.ends_with("backgroundChecked\n"));
    }
}
