//! Spreadsheet content extractor.
//!
//! Only the first sheet (by declaration order) is read. Every row of its used
//! range becomes an array of cell values ending at its last non-empty cell; the
//! header row, if any, is ordinary data. Blank rows inside the range are kept
//! and contribute an empty string, so they show up as an extra space.

use async_trait::async_trait;
use calamine::{Data, Reader, Xlsx};
use docsift_core::{mime, ExtractError, TextExtractor};
use std::io::Cursor;
use tracing::debug;

/// Extractor for `.xlsx` workbooks.
pub struct SpreadsheetExtractor;

impl SpreadsheetExtractor {
    /// Create a new spreadsheet extractor.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for SpreadsheetExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TextExtractor for SpreadsheetExtractor {
    fn name(&self) -> &str {
        "spreadsheet"
    }

    fn supported_types(&self) -> &[&str] {
        &[mime::XLSX]
    }

    async fn extract_bytes(&self, data: &[u8]) -> Result<String, ExtractError> {
        let data = data.to_vec();
        tokio::task::spawn_blocking(move || extract_first_sheet(data))
            .await
            .map_err(|e| ExtractError::Failed(format!("Task join error: {e}")))?
    }
}

/// Parse a workbook and flatten its first sheet into text.
fn extract_first_sheet(data: Vec<u8>) -> Result<String, ExtractError> {
    let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(data))
        .map_err(|e| ExtractError::Corrupt(format!("XLSX parse failed: {e}")))?;

    let Some(sheet_name) = workbook.sheet_names().first().cloned() else {
        debug!("Workbook has no sheets");
        return Ok(String::new());
    };

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| ExtractError::Corrupt(format!("failed to read sheet {sheet_name:?}: {e}")))?;

    debug!(
        "Extracting sheet {:?} ({} rows)",
        sheet_name,
        range.height()
    );

    Ok(join_rows(range.rows().map(row_values)))
}

/// Cell values of a row, up to and including its last non-empty cell.
pub fn row_values(row: &[Data]) -> Vec<String> {
    let mut values: Vec<String> = row.iter().map(ToString::to_string).collect();
    while values.last().is_some_and(String::is_empty) {
        values.pop();
    }
    values
}

/// Join each row's cells with a space, then all rows with a space.
pub fn join_rows<I, R, S>(rows: I) -> String
where
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    rows.into_iter()
        .map(|row| {
            row.into_iter()
                .map(|cell| cell.as_ref().to_string())
                .collect::<Vec<_>>()
        })
        .map(|cells| cells.join(" "))
        .collect::<Vec<_>>()
        .join(" ")
}
