use crate::config::RenderConfig;
use crate::error::RenderError;
use crate::results::{LinkEntry, ReportSummary, WordCount};
use std::fmt::{self, Write};
use std::fs;
use std::path::{Path, PathBuf};

const BUILTIN_TEMPLATE: &str = include_str!("../templates/page_report.html");

/// Output formats a report can be rendered to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain text listing for the console
    Text,
    /// HTML page built from a template
    Html,
    /// JSON document of the report record
    Json,
}

impl OutputFormat {
    /// File extension for saved reports
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Html => "html",
            OutputFormat::Json => "json",
        }
    }
}

/// Turns a finished report into text
pub trait ReportRenderer {
    fn render(&self, report: &ReportSummary) -> Result<String, RenderError>;
}

/// Renders a report in the given format
pub fn render_report(
    report: &ReportSummary,
    format: OutputFormat,
    config: &RenderConfig,
) -> Result<String, RenderError> {
    match format {
        OutputFormat::Text => TextRenderer.render(report),
        OutputFormat::Json => JsonRenderer { pretty: true }.render(report),
        OutputFormat::Html => HtmlRenderer::from_config(config)?.render(report),
    }
}

/// Writes a rendered report to a file as UTF-8
pub fn save_report(rendered: &str, path: impl AsRef<Path>) -> std::io::Result<()> {
    let path = path.as_ref();
    fs::write(path, rendered.as_bytes())?;
    ::log::info!("Report written to {}", path.display());
    Ok(())
}

/// Console listing, one section per line
pub struct TextRenderer;

impl ReportRenderer for TextRenderer {
    fn render(&self, report: &ReportSummary) -> Result<String, RenderError> {
        let mut out = String::new();
        write_listing(&mut out, report)?;
        Ok(out)
    }
}

fn write_listing(out: &mut impl Write, report: &ReportSummary) -> fmt::Result {
    writeln!(out, "Page {}", report.url())?;
    writeln!(out, "Title {}", report.title())?;
    writeln!(out, "All Meta Tags {:?}", report.meta_attribute_keys())?;
    writeln!(out, "filesize {} KB", report.page_size_kb())?;
    writeln!(out, "word count {}", report.total_word_count())?;
    writeln!(out, "number of unique words {}", report.unique_word_count())?;
    writeln!(out, "most common words: {:?}", report.most_common_words())?;
    writeln!(out, "keywords not in text {:?}", report.missing_keywords())?;

    write!(out, "word frequencies")?;
    for (i, entry) in report.word_frequencies().iter().enumerate() {
        let sep = if i == 0 { " " } else { ", " };
        write!(out, "{}{}: {}", sep, entry.word, entry.count)?;
    }
    writeln!(out)?;

    writeln!(out, "Links")?;
    writeln!(out, "destination, text")?;
    for link in report.links() {
        writeln!(
            out,
            "{} {}",
            link.destination.as_deref().unwrap_or("None"),
            link.display_text
        )?;
    }
    Ok(())
}

/// Serializes the report record with serde
pub struct JsonRenderer {
    pub pretty: bool,
}

impl ReportRenderer for JsonRenderer {
    fn render(&self, report: &ReportSummary) -> Result<String, RenderError> {
        let json = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(json)
    }
}

/// Fills `{{ placeholder }}` slots of an HTML template
pub struct HtmlRenderer {
    template: String,
}

impl HtmlRenderer {
    /// Uses the template bundled with the crate
    pub fn builtin() -> Self {
        Self {
            template: BUILTIN_TEMPLATE.to_string(),
        }
    }

    /// Loads a template file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, RenderError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(RenderError::MissingTemplate(PathBuf::from(path)));
        }
        ::log::debug!("Loading report template {}", path.display());
        Ok(Self {
            template: fs::read_to_string(path)?,
        })
    }

    /// Template file from the config, or the built-in one
    pub fn from_config(config: &RenderConfig) -> Result<Self, RenderError> {
        match &config.template_path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::builtin()),
        }
    }
}

impl ReportRenderer for HtmlRenderer {
    fn render(&self, report: &ReportSummary) -> Result<String, RenderError> {
        let mut out = String::with_capacity(self.template.len());
        let mut rest = self.template.as_str();

        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            let Some(end) = after.find("}}") else {
                // unterminated slot, keep it verbatim
                out.push_str(&rest[start..]);
                return Ok(out);
            };
            out.push_str(&placeholder_value(after[..end].trim(), report)?);
            rest = &after[end + 2..];
        }

        out.push_str(rest);
        Ok(out)
    }
}

fn placeholder_value(name: &str, report: &ReportSummary) -> Result<String, RenderError> {
    let value = match name {
        "url" => escape_html(report.url()),
        "title" => escape_html(report.title()),
        "tag_count" => report.tag_count().to_string(),
        "page_size_kb" => report.page_size_kb().to_string(),
        "word_count" => report.total_word_count().to_string(),
        "unique_word_count" => report.unique_word_count().to_string(),
        "ranked_words" => list_items(report.most_common_words()),
        "missing_keywords" => list_items(report.missing_keywords()),
        "meta_tags" => list_items(report.meta_attribute_keys()),
        "word_frequencies" => frequency_items(report.word_frequencies()),
        "links" => link_items(report.links()),
        other => return Err(RenderError::UnknownPlaceholder(other.to_string())),
    };
    Ok(value)
}

fn list_items(values: &[String]) -> String {
    values
        .iter()
        .map(|v| format!("    <li>{}</li>", escape_html(v)))
        .collect::<Vec<_>>()
        .join("\n")
}

fn frequency_items(entries: &[WordCount]) -> String {
    entries
        .iter()
        .map(|e| format!("    <li>{}: {}</li>", escape_html(&e.word), e.count))
        .collect::<Vec<_>>()
        .join("\n")
}

fn link_items(links: &[LinkEntry]) -> String {
    links
        .iter()
        .map(|link| match &link.destination {
            Some(href) => format!(
                "    <li><a href=\"{}\">{}</a></li>",
                escape_html(href),
                escape_html(&link.display_text)
            ),
            None => format!("    <li>{}</li>", escape_html(&link.display_text)),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
