use anyhow::Result;
use lazy_static::lazy_static;
use minijinja::{context, Environment};
use mockall::automock;
use std::fs;
use std::path::Path;

/// The output surface the renderer writes into: five named slots, each fully
/// replaced per render pass. Implementations receive pre-escaped HTML
/// fragments and must insert them verbatim.
#[automock]
pub trait CritiqueView {
    fn replace_summary(&mut self, fragment: &str);
    fn replace_creative(&mut self, fragment: &str);
    fn replace_critical(&mut self, fragment: &str);
    fn replace_line_suggestions(&mut self, fragment: &str);
    fn replace_metrics(&mut self, fragment: &str);
}

/// Collects the slot fragments and assembles them into a complete,
/// asset-free HTML document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HtmlReport {
    summary: String,
    creative: String,
    critical: String,
    line_suggestions: String,
    metrics: String,
}

impl CritiqueView for HtmlReport {
    fn replace_summary(&mut self, fragment: &str) {
        self.summary = fragment.to_string();
    }

    fn replace_creative(&mut self, fragment: &str) {
        self.creative = fragment.to_string();
    }

    fn replace_critical(&mut self, fragment: &str) {
        self.critical = fragment.to_string();
    }

    fn replace_line_suggestions(&mut self, fragment: &str) {
        self.line_suggestions = fragment.to_string();
    }

    fn replace_metrics(&mut self, fragment: &str) {
        self.metrics = fragment.to_string();
    }
}

const DOCUMENT_TEMPLATE: &str = r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{{ title }}</title>
<style>
body { font-family: sans-serif; margin: 2rem auto; max-width: 46rem; line-height: 1.5; }
section { margin-bottom: 1.5rem; }
.feedback-block h4, .metric h4 { margin-bottom: 0.2rem; }
.suggestion-line { border-left: 3px solid #888; padding-left: 0.8rem; margin-bottom: 0.8rem; }
.metric .value { font-weight: bold; }
</style>
</head>
<body>
<h1>{{ title }}</h1>
<section id="summary">{{ summary|safe }}</section>
<section id="creativeList"><h2>Creative Sparks</h2>{{ creative|safe }}</section>
<section id="criticalList"><h2>Polish &amp; Precision</h2>{{ critical|safe }}</section>
<section id="lineSuggestions"><h2>Line by Line</h2>{{ line_suggestions|safe }}</section>
<section id="metrics"><h2>Metrics</h2>{{ metrics|safe }}</section>
</body>
</html>
"#;

lazy_static! {
    static ref TEMPLATES: Environment<'static> = {
        let mut env = Environment::new();
        env.add_template("report.html", DOCUMENT_TEMPLATE)
            .expect("report template to parse");
        env
    };
}

impl HtmlReport {
    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn creative(&self) -> &str {
        &self.creative
    }

    pub fn critical(&self) -> &str {
        &self.critical
    }

    pub fn line_suggestions(&self) -> &str {
        &self.line_suggestions
    }

    pub fn metrics(&self) -> &str {
        &self.metrics
    }

    /// Renders the full document. The slot fragments are already escaped and
    /// go in verbatim; the title is plain text and escaped by the template.
    pub fn to_document(&self, title: &str) -> Result<String> {
        let template = TEMPLATES.get_template("report.html")?;
        let rendered = template.render(context! {
            title => title,
            summary => self.summary,
            creative => self.creative,
            critical => self.critical,
            line_suggestions => self.line_suggestions,
            metrics => self.metrics,
        })?;
        Ok(rendered)
    }

    pub fn write_to(&self, path: &Path, title: &str) -> Result<()> {
        let document = self.to_document(title)?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, document)?;
        Ok(())
    }
}
