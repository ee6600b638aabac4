use crate::codes::EligibilityResultCode;
use chrono::NaiveDateTime;
use serde::Serialize;

use super::parser::ResponseRecord;

/// Tally of a single result code across an imported response log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResultCodeCount {
    pub code: EligibilityResultCode,
    pub count: usize,
}

/// Row whose result code could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnrecognizedResult {
    pub row: usize,
    pub request_id: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseLogSummary {
    pub total: usize,
    pub counts: Vec<ResultCodeCount>,
    pub unknown: Vec<UnrecognizedResult>,
    pub success_percentage: Option<u8>,
    pub first_received: Option<NaiveDateTime>,
    pub last_received: Option<NaiveDateTime>,
}

impl ResponseLogSummary {
    pub(crate) fn from_records(records: Vec<ResponseRecord>) -> Self {
        let mut counts: Vec<ResultCodeCount> = EligibilityResultCode::ordered()
            .into_iter()
            .map(|code| ResultCodeCount { code, count: 0 })
            .collect();
        let mut unknown = Vec::new();
        let mut first_received: Option<NaiveDateTime> = None;
        let mut last_received: Option<NaiveDateTime> = None;
        let total = records.len();

        for record in records {
            if let Some(received) = record.received_at {
                first_received = Some(first_received.map_or(received, |seen| seen.min(received)));
                last_received = Some(last_received.map_or(received, |seen| seen.max(received)));
            }

            match record.outcome {
                Ok(code) => {
                    if let Some(entry) = counts.iter_mut().find(|entry| entry.code == code) {
                        entry.count += 1;
                    }
                }
                Err(error) => unknown.push(UnrecognizedResult {
                    row: record.row,
                    request_id: record.request_id,
                    value: error.0,
                }),
            }
        }

        let recognized = total - unknown.len();
        let successes = counts
            .iter()
            .find(|entry| entry.code == EligibilityResultCode::Success)
            .map_or(0, |entry| entry.count);
        let success_percentage = if recognized == 0 {
            None
        } else {
            Some(((successes as f64 / recognized as f64) * 100.0).round() as u8)
        };

        Self {
            total,
            counts,
            unknown,
            success_percentage,
            first_received,
            last_received,
        }
    }

    pub fn count_for(&self, code: EligibilityResultCode) -> usize {
        self.counts
            .iter()
            .find(|entry| entry.code == code)
            .map_or(0, |entry| entry.count)
    }
}
