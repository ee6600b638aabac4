//! Summaries over exported eligibility response logs.

mod parser;
mod summary;

pub use summary::{ResponseLogSummary, ResultCodeCount, UnrecognizedResult};

use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug)]
pub enum ResponseLogImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    MissingHeader,
    MissingColumn(&'static str),
}

impl std::fmt::Display for ResponseLogImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResponseLogImportError::Io(err) => write!(f, "failed to read response log: {}", err),
            ResponseLogImportError::Csv(err) => {
                write!(f, "invalid response log CSV data: {}", err)
            }
            ResponseLogImportError::MissingHeader => {
                write!(f, "response log is empty: expected a header row")
            }
            ResponseLogImportError::MissingColumn(column) => {
                write!(f, "response log is missing required column '{}'", column)
            }
        }
    }
}

impl std::error::Error for ResponseLogImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ResponseLogImportError::Io(err) => Some(err),
            ResponseLogImportError::Csv(err) => Some(err),
            ResponseLogImportError::MissingHeader | ResponseLogImportError::MissingColumn(_) => {
                None
            }
        }
    }
}

impl From<std::io::Error> for ResponseLogImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for ResponseLogImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

pub struct ResponseLogImporter;

impl ResponseLogImporter {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
    ) -> Result<ResponseLogSummary, ResponseLogImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<ResponseLogSummary, ResponseLogImportError> {
        let records = parser::parse_records(reader)?;
        let summary = ResponseLogSummary::from_records(records);

        for entry in &summary.unknown {
            warn!(
                row = entry.row,
                request_id = %entry.request_id,
                value = %entry.value,
                "unrecognized eligibility result code"
            );
        }
        debug!(
            total = summary.total,
            unknown = summary.unknown.len(),
            "response log summarized"
        );

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::EligibilityResultCode;
    use chrono::NaiveDate;
    use std::io::Cursor;

    #[test]
    fn parse_datetime_supports_rfc3339_and_date_strings() {
        let rfc = parser::parse_datetime_for_tests("2025-09-24T10:00:00Z").expect("parse rfc");
        assert_eq!(
            rfc,
            NaiveDate::from_ymd_opt(2025, 9, 24)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap()
        );

        let date = parser::parse_datetime_for_tests("2025-09-30").expect("parse date");
        assert_eq!(
            date,
            NaiveDate::from_ymd_opt(2025, 9, 30)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap()
        );

        assert!(parser::parse_datetime_for_tests("  ").is_none());
        assert!(parser::parse_datetime_for_tests("not-a-date").is_none());
    }

    #[test]
    fn records_keep_row_numbers_and_decode_results() {
        let records = parser::parse_records(Cursor::new(
            "Request ID,Result Code,Received At\nreq-1,SUCCESS,2025-09-24T10:00:00Z\nreq-2,BOGUS,\n",
        ))
        .expect("parse");

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].row, 1);
        assert_eq!(records[0].outcome, Ok(EligibilityResultCode::Success));
        assert!(records[0].received_at.is_some());
        assert_eq!(records[1].row, 2);
        assert!(records[1].outcome.is_err());
        assert!(records[1].received_at.is_none());
    }

    #[test]
    fn fields_are_trimmed_before_decoding() {
        let summary = ResponseLogImporter::from_reader(Cursor::new(
            "Request ID,Result Code\nreq-1,  PAYER_TIMEOUT  \n",
        ))
        .expect("import succeeds");

        assert_eq!(summary.count_for(EligibilityResultCode::PayerTimeout), 1);
        assert!(summary.unknown.is_empty());
    }

    #[test]
    fn lowercase_codes_are_reported_as_unknown() {
        let summary =
            ResponseLogImporter::from_reader(Cursor::new("Request ID,Result Code\nreq-9,success\n"))
                .expect("import succeeds");

        assert_eq!(summary.count_for(EligibilityResultCode::Success), 0);
        assert_eq!(
            summary.unknown,
            vec![UnrecognizedResult {
                row: 1,
                request_id: "req-9".to_string(),
                value: "success".to_string(),
            }]
        );
        assert_eq!(summary.success_percentage, None);
    }

    #[test]
    fn missing_result_code_column_is_rejected() {
        let error = ResponseLogImporter::from_reader(Cursor::new("Request ID\nreq-1\n"))
            .expect_err("expected missing column");

        match error {
            ResponseLogImportError::MissingColumn(column) => assert_eq!(column, "Result Code"),
            other => panic!("expected missing column, got {other:?}"),
        }
    }

    #[test]
    fn header_only_log_without_result_code_is_rejected() {
        let error = ResponseLogImporter::from_reader(Cursor::new("Request ID\n"))
            .expect_err("expected missing column");

        assert!(matches!(
            error,
            ResponseLogImportError::MissingColumn("Result Code")
        ));
        assert_eq!(
            error.to_string(),
            "response log is missing required column 'Result Code'"
        );
    }

    #[test]
    fn missing_request_id_column_is_rejected() {
        let error = ResponseLogImporter::from_reader(Cursor::new("Result Code\nSUCCESS\n"))
            .expect_err("expected missing column");

        assert!(matches!(
            error,
            ResponseLogImportError::MissingColumn("Request ID")
        ));
    }

    #[test]
    fn empty_input_is_rejected() {
        let error =
            ResponseLogImporter::from_reader(Cursor::new("")).expect_err("expected missing header");

        assert!(matches!(error, ResponseLogImportError::MissingHeader));
    }

    #[test]
    fn header_only_log_with_required_columns_is_an_empty_summary() {
        let summary = ResponseLogImporter::from_reader(Cursor::new("Request ID,Result Code\n"))
            .expect("import succeeds");

        assert_eq!(summary.total, 0);
        assert_eq!(summary.success_percentage, None);
    }

    #[test]
    fn ragged_rows_are_a_csv_error() {
        let error = ResponseLogImporter::from_reader(Cursor::new(
            "Request ID,Result Code\nreq-1,SUCCESS,extra\n",
        ))
        .expect_err("expected csv error");

        match error {
            ResponseLogImportError::Csv(_) => {}
            other => panic!("expected csv error, got {other:?}"),
        }
    }

    #[test]
    fn importer_from_path_propagates_io_errors() {
        let error = ResponseLogImporter::from_path("./does-not-exist.csv")
            .expect_err("expected io error");

        match error {
            ResponseLogImportError::Io(_) => {}
            other => panic!("expected io error, got {other:?}"),
        }
    }
}
