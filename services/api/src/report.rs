use clap::Args;
use eligibility::codes::{catalog, lookup, ResultCodeView};
use eligibility::error::AppError;
use eligibility::response_log::{ResponseLogImporter, ResponseLogSummary};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ResponseLogSummaryArgs {
    /// CSV export with `Request ID`, `Result Code` and optional `Received At` columns
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Emit the summary as JSON instead of a text report
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_list() {
    print!("{}", render_catalog(&catalog()));
}

pub(crate) fn run_decode(value: &str) -> Result<(), AppError> {
    let view = lookup(value)?;
    println!("{} ({})", view.code, view.display);
    Ok(())
}

pub(crate) fn run_response_log_summary(args: ResponseLogSummaryArgs) -> Result<(), AppError> {
    let ResponseLogSummaryArgs { csv, json } = args;
    let summary = ResponseLogImporter::from_path(&csv)?;

    if json {
        match serde_json::to_string_pretty(&summary) {
            Ok(payload) => println!("{payload}"),
            Err(err) => println!("Summary payload unavailable: {}", err),
        }
    } else {
        println!("Eligibility response log: {}", csv.display());
        print!("{}", render_summary(&summary));
    }

    Ok(())
}

fn render_catalog(views: &[ResultCodeView]) -> String {
    let width = views.iter().map(|view| view.code.len()).max().unwrap_or(0);
    views
        .iter()
        .map(|view| format!("{:<width$}  {}\n", view.code, view.display))
        .collect()
}

fn render_summary(summary: &ResponseLogSummary) -> String {
    let mut out = String::new();
    out.push_str(&format!("Responses: {}\n", summary.total));

    match (summary.first_received, summary.last_received) {
        (Some(first), Some(last)) => {
            out.push_str(&format!("Received window: {} .. {}\n", first, last));
        }
        _ => out.push_str("Received window: unknown\n"),
    }

    match summary.success_percentage {
        Some(pct) => out.push_str(&format!("Success rate: {}% of recognized responses\n", pct)),
        None => out.push_str("Success rate: n/a (no recognized responses)\n"),
    }

    out.push_str("\nResult codes\n");
    for entry in &summary.counts {
        out.push_str(&format!("  - {}: {}\n", entry.code, entry.count));
    }

    if summary.unknown.is_empty() {
        out.push_str("\nUnrecognized codes: none\n");
    } else {
        out.push_str("\nUnrecognized codes\n");
        for entry in &summary.unknown {
            out.push_str(&format!(
                "  - row {} ({}): '{}'\n",
                entry.row, entry.request_id, entry.value
            ));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_rendering_aligns_columns() {
        let rendered = render_catalog(&catalog());
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], format!("{:<28}  SUCCESS", "SUCCESS"));
        assert!(lines[6].starts_with("PROVIDER_ENROLLMENT_REQUIRED  "));
    }

    #[test]
    fn decode_reports_unknown_codes() {
        let error = run_decode("BOGUS").expect_err("unknown code fails");
        assert!(matches!(error, AppError::UnknownCode(_)));
        assert!(run_decode("SYSTEM_ERROR").is_ok());
    }

    #[test]
    fn summary_rendering_lists_unknown_rows() {
        let summary = ResponseLogImporter::from_reader(
            "Request ID,Result Code\nreq-1,SUCCESS\nreq-2,NOPE\n".as_bytes(),
        )
        .expect("imports");

        let rendered = render_summary(&summary);
        assert!(rendered.contains("Responses: 2\n"));
        assert!(rendered.contains("Success rate: 100% of recognized responses"));
        assert!(rendered.contains("  - SUCCESS: 1\n"));
        assert!(rendered.contains("  - row 2 (req-2): 'NOPE'"));
        assert!(rendered.contains("Received window: unknown"));
    }
}
