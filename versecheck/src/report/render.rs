use serde_json::{Map, Value};

use super::escape::escape;
use super::view::CritiqueView;
use crate::models::prelude::{metric_display, AnalysisResult, FeedbackItem, LineSuggestion};

/// Maps a critique onto the view's five slots. Every slot is replaced on
/// every call, so rendering the same result twice leaves the view exactly
/// as rendering it once; absent fields produce empty slots rather than
/// leftovers from an earlier render.
pub fn render(result: &AnalysisResult, view: &mut dyn CritiqueView) {
    view.replace_summary(&summary_fragment(result.summary.as_deref()));
    view.replace_creative(&feedback_fragment(
        result.creative.as_deref().unwrap_or_default(),
    ));
    view.replace_critical(&feedback_fragment(
        result.critical.as_deref().unwrap_or_default(),
    ));
    view.replace_line_suggestions(&line_fragment(
        result.line_by_line.as_deref().unwrap_or_default(),
    ));
    view.replace_metrics(&metrics_fragment(result.metrics.as_ref()));
}

fn summary_fragment(summary: Option<&str>) -> String {
    format!("<p>{}</p>", escape(summary.unwrap_or("")))
}

fn feedback_fragment(items: &[FeedbackItem]) -> String {
    items
        .iter()
        .map(|item| {
            format!(
                r#"<div class="feedback-block"><h4>{}</h4><p>{}</p></div>"#,
                escape(&item.label),
                escape(&item.text)
            )
        })
        .collect()
}

fn line_fragment(lines: &[LineSuggestion]) -> String {
    lines
        .iter()
        .map(|line| {
            format!(
                concat!(
                    r#"<div class="suggestion-line">"#,
                    r#"<div class="orig"><strong>Original:</strong> {}</div>"#,
                    r#"<div class="creative"><strong>Creative:</strong> {}</div>"#,
                    r#"<div class="critical"><strong>Critical:</strong> {}</div>"#,
                    "</div>"
                ),
                escape(&line.orig),
                escape(&line.creative),
                escape(&line.critical)
            )
        })
        .collect()
}

fn metrics_fragment(metrics: Option<&Map<String, Value>>) -> String {
    let Some(metrics) = metrics else {
        return String::new();
    };

    metrics
        .iter()
        .map(|(name, value)| {
            // Decode already rejected non-scalar metrics; anything that
            // slips through renders as an empty value rather than a panic.
            let text = metric_display(value).unwrap_or_default();
            format!(
                r#"<div class="metric"><h4>{}</h4><div class="value">{}</div></div>"#,
                escape(name),
                escape(&text)
            )
        })
        .collect()
}
