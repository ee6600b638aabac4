use serde::Serialize;

use super::result_code::{EligibilityResultCode, UnknownResultCode};

/// Public view of a single result code as exposed by the catalog endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResultCodeView {
    pub code: &'static str,
    pub display: &'static str,
}

impl From<EligibilityResultCode> for ResultCodeView {
    fn from(code: EligibilityResultCode) -> Self {
        Self {
            code: code.wire_value(),
            display: code.display_label(),
        }
    }
}

pub fn catalog() -> Vec<ResultCodeView> {
    EligibilityResultCode::ordered()
        .into_iter()
        .map(ResultCodeView::from)
        .collect()
}

pub fn lookup(raw: &str) -> Result<ResultCodeView, UnknownResultCode> {
    EligibilityResultCode::parse(raw).map(ResultCodeView::from)
}
