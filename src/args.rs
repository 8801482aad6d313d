use clap::{Parser, ValueEnum};
use page_report::OutputFormat;
use page_report::config::{KeywordMatching, ReportConfig};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "page-report")]
#[command(about = "Scrapes a URL and reports links, word counts, meta tags and keywords")]
#[command(version)]
pub struct Args {
    /// Page URL to report on
    pub url: String,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = FormatArg::Text)]
    pub format: FormatArg,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write the report to a file named after the URL
    #[arg(long, conflicts_with = "output")]
    pub save: bool,

    /// JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// HTML template to render the report with
    #[arg(long)]
    pub template: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Number of most common words to report
    #[arg(long)]
    pub top: Option<usize>,

    /// Compare keywords with page words case-sensitively
    #[arg(long)]
    pub exact_keywords: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Text,
    Html,
    Json,
}

/// Convert from CLI argument format to the library output format
pub fn convert_format(arg: FormatArg) -> OutputFormat {
    match arg {
        FormatArg::Text => OutputFormat::Text,
        FormatArg::Html => OutputFormat::Html,
        FormatArg::Json => OutputFormat::Json,
    }
}

impl Args {
    /// Apply command-line overrides on top of a loaded configuration
    pub fn apply_overrides(&self, mut config: ReportConfig) -> ReportConfig {
        if let Some(timeout) = self.timeout {
            config.fetch.timeout_secs = timeout;
        }
        if let Some(top) = self.top {
            config.analysis.most_common_count = top;
        }
        if let Some(template) = &self.template {
            config.render.template_path = Some(template.clone());
        }
        if self.exact_keywords {
            config.analysis.keyword_matching = KeywordMatching::Exact;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["page-report", "https://example.com"]).unwrap();
        assert_eq!(args.url, "https://example.com");
        assert_eq!(args.format, FormatArg::Text);
        assert!(args.output.is_none());
        assert!(!args.save);

        let config = args.apply_overrides(ReportConfig::default());
        assert_eq!(config.analysis.most_common_count, 5);
        assert_eq!(config.fetch.timeout_secs, 30);
    }

    #[test]
    fn test_overrides() {
        let args = Args::try_parse_from([
            "page-report",
            "https://example.com",
            "-f",
            "html",
            "--top",
            "10",
            "--timeout",
            "3",
            "--template",
            "report.html",
            "--exact-keywords",
        ])
        .unwrap();
        assert_eq!(convert_format(args.format), OutputFormat::Html);

        let config = args.apply_overrides(ReportConfig::default());
        assert_eq!(config.analysis.most_common_count, 10);
        assert_eq!(config.fetch.timeout_secs, 3);
        assert_eq!(
            config.render.template_path,
            Some(PathBuf::from("report.html"))
        );
        assert_eq!(config.analysis.keyword_matching, KeywordMatching::Exact);
    }

    #[test]
    fn test_save_conflicts_with_output() {
        let result = Args::try_parse_from([
            "page-report",
            "https://example.com",
            "--save",
            "-o",
            "out.txt",
        ]);
        assert!(result.is_err());
    }
}
