use clap::Parser;
use std::path::PathBuf;

use sbom_assess::application::dto::OutputFormat;

/// Summarize SBOM plugin assessment runs into a status badge and report
#[derive(Parser, Debug)]
#[command(name = "sbom-assess")]
#[command(version)]
#[command(
    about = "Summarize SBOM plugin assessment runs into a status badge and report",
    long_about = None
)]
pub struct Args {
    /// Path to the assessment payload JSON file
    #[arg(short, long, default_value = "assessment.json")]
    pub path: PathBuf,

    /// Output format: json or markdown [default: json]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Render as a viewer whose plan does not include assessments
    #[arg(long)]
    pub unavailable: bool,

    /// Location hash to navigate to, e.g. "#plugin-ntia" or "#assessment-results"
    #[arg(long, value_name = "HASH", allow_hyphen_values = true)]
    pub anchor: Option<String>,

    /// Component id used to build detail links
    #[arg(long, value_name = "ID")]
    pub component_id: Option<String>,

    /// Exclude plugins matching patterns (supports wildcards: *)
    /// Can be specified multiple times: -e "ntia" -e "fda-*"
    #[arg(short, long = "exclude-plugin", value_name = "PATTERN")]
    pub exclude_plugin: Vec<String>,

    /// Exit with code 1 when any assessment failed
    #[arg(long)]
    pub fail_on_failures: bool,

    /// Path to a config file (defaults to sbom-assess.config.yml next to the payload)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["sbom-assess"]).unwrap();
        assert_eq!(args.path, PathBuf::from("assessment.json"));
        assert!(args.format.is_none());
        assert!(args.output.is_none());
        assert!(!args.unavailable);
        assert!(args.anchor.is_none());
        assert!(args.exclude_plugin.is_empty());
        assert!(!args.fail_on_failures);
        assert!(args.config.is_none());
    }

    #[test]
    fn test_all_options() {
        let args = Args::try_parse_from([
            "sbom-assess",
            "-p",
            "payload.json",
            "-f",
            "md",
            "-o",
            "report.md",
            "--unavailable",
            "--anchor",
            "#plugin-ntia",
            "--component-id",
            "comp-1",
            "-e",
            "ntia",
            "--exclude-plugin",
            "fda-*",
            "--fail-on-failures",
            "-c",
            "custom.yml",
        ])
        .unwrap();

        assert_eq!(args.path, PathBuf::from("payload.json"));
        assert_eq!(args.format, Some(OutputFormat::Markdown));
        assert_eq!(args.output, Some(PathBuf::from("report.md")));
        assert!(args.unavailable);
        assert_eq!(args.anchor.as_deref(), Some("#plugin-ntia"));
        assert_eq!(args.component_id.as_deref(), Some("comp-1"));
        assert_eq!(args.exclude_plugin, vec!["ntia", "fda-*"]);
        assert!(args.fail_on_failures);
        assert_eq!(args.config, Some(PathBuf::from("custom.yml")));
    }

    #[test]
    fn test_invalid_format() {
        let result = Args::try_parse_from(["sbom-assess", "--format", "xml"]);
        assert!(result.is_err());
    }
}
