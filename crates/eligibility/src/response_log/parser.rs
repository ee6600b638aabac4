use crate::codes::{EligibilityResultCode, UnknownResultCode};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};
use std::io::Read;

use super::ResponseLogImportError;

pub(crate) const REQUEST_ID_COLUMN: &str = "Request ID";
pub(crate) const RESULT_CODE_COLUMN: &str = "Result Code";

#[derive(Debug)]
pub(crate) struct ResponseRecord {
    pub(crate) row: usize,
    pub(crate) request_id: String,
    pub(crate) outcome: Result<EligibilityResultCode, UnknownResultCode>,
    pub(crate) received_at: Option<NaiveDateTime>,
}

pub(crate) fn parse_records<R: Read>(
    reader: R,
) -> Result<Vec<ResponseRecord>, ResponseLogImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers()?;
    if headers.is_empty() {
        return Err(ResponseLogImportError::MissingHeader);
    }
    for column in [REQUEST_ID_COLUMN, RESULT_CODE_COLUMN] {
        if !headers.iter().any(|header| header == column) {
            return Err(ResponseLogImportError::MissingColumn(column));
        }
    }

    let mut records = Vec::new();

    for (index, record) in csv_reader.deserialize::<ResponseRow>().enumerate() {
        let row = record?;
        let outcome = EligibilityResultCode::parse(&row.result_code);
        let received_at = row.received_at.as_deref().and_then(parse_datetime);

        records.push(ResponseRecord {
            row: index + 1,
            request_id: row.request_id,
            outcome,
            received_at,
        });
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct ResponseRow {
    #[serde(rename = "Request ID")]
    request_id: String,
    #[serde(rename = "Result Code")]
    result_code: String,
    #[serde(
        rename = "Received At",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    received_at: Option<String>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_utc());
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }

    None
}

#[cfg(test)]
pub(crate) fn parse_datetime_for_tests(value: &str) -> Option<NaiveDateTime> {
    parse_datetime(value)
}
