/// Formatter adapters for assessment report output formats
mod json_report_formatter;
mod markdown_report_formatter;

pub use json_report_formatter::JsonReportFormatter;
pub use markdown_report_formatter::MarkdownReportFormatter;
