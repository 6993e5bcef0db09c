//! Page construction and state reporting for the CLI

use std::sync::Arc;

use application::{FetchOutcome, update_weather};
use domain::{ClassToken, WeatherReport};
use infrastructure::{Document, DocumentView, SharedDocument, shared_document};
use serde_json::{Value, json};

/// Build a fresh weather page with extra background classes
pub fn build_page(initial_classes: &[String]) -> anyhow::Result<SharedDocument> {
    let classes = initial_classes
        .iter()
        .map(|c| ClassToken::new(c.as_str()))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(shared_document(Document::weather_page(&classes)))
}

/// Apply a literal JSON payload to a page
pub fn render_payload(document: &SharedDocument, payload: &str) -> anyhow::Result<WeatherReport> {
    let report: WeatherReport = serde_json::from_str(payload)?;
    let view = DocumentView::bind(Arc::clone(document))?;
    update_weather(&view, &report)?;
    Ok(report)
}

/// Summarize an outcome and the resulting page as JSON
pub fn describe(outcome: &FetchOutcome, document: &SharedDocument) -> Value {
    let page = serde_json::to_value(&*document.lock()).unwrap_or(Value::Null);
    match outcome {
        FetchOutcome::Skipped => json!({ "outcome": "skipped", "page": page }),
        FetchOutcome::Updated(report) => {
            json!({ "outcome": "updated", "report": report, "page": page })
        },
        FetchOutcome::Failed(e) => {
            json!({ "outcome": "failed", "error": e.to_string(), "page": page })
        },
    }
}
