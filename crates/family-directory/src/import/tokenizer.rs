/// Failure to turn a payload into header + data rows.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenizeError {
    #[error("CSV must contain a header row and at least one data row")]
    MissingData,
}

/// One data line keyed by the header row, in column order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawRow {
    cells: Vec<(String, String)>,
}

impl RawRow {
    fn from_fields(headers: &[String], mut fields: Vec<String>) -> Self {
        fields.resize(headers.len(), String::new());
        let cells = headers.iter().cloned().zip(fields).collect();
        Self { cells }
    }

    /// Cell for `column`, or `""` when the column is absent. Duplicate headers
    /// resolve to the right-most occurrence.
    pub fn get(&self, column: &str) -> &str {
        self.cells
            .iter()
            .rev()
            .find(|(header, _)| header == column)
            .map(|(_, value)| value.as_str())
            .unwrap_or("")
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(header, _)| header.as_str())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawRow {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            cells: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

/// Split a whole payload into keyed rows.
///
/// Lines are split on `\n` before any quote handling, so quoted cells cannot
/// span lines. Blank lines are ignored. A leading byte-order mark is dropped.
pub fn tokenize(payload: &str) -> Result<Vec<RawRow>, TokenizeError> {
    let payload = payload.strip_prefix('\u{FEFF}').unwrap_or(payload);
    let lines: Vec<&str> = payload
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .collect();

    if lines.len() < 2 {
        return Err(TokenizeError::MissingData);
    }

    let headers = split_line(lines[0]);
    Ok(lines[1..]
        .iter()
        .map(|line| RawRow::from_fields(&headers, split_line(line)))
        .collect())
}

/// Quote-aware comma split of a single line.
///
/// Every `"` toggles quoting and is dropped; `""` is not treated as an
/// escaped quote.
pub fn split_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    fields.push(current.trim().to_string());

    fields
}
