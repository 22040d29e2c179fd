use crate::adapters::outbound::formatters::{JsonReportFormatter, MarkdownReportFormatter};
use crate::application::dto::{OutputFormat, PanelExpansion};
use crate::ports::outbound::AssessmentFormatter;

/// Factory for creating report formatters
///
/// Selects the infrastructure adapter for an application-level output format.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter for `format`.
    ///
    /// `expansion` only affects Markdown: JSON always carries every finding.
    ///
    /// # Examples
    /// ```
    /// use sbom_assess::application::dto::{OutputFormat, PanelExpansion};
    /// use sbom_assess::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Json, PanelExpansion::All);
    /// ```
    pub fn create(format: OutputFormat, expansion: PanelExpansion) -> Box<dyn AssessmentFormatter> {
        match format {
            OutputFormat::Json => Box::new(JsonReportFormatter::new()),
            OutputFormat::Markdown => Box::new(MarkdownReportFormatter::new(expansion)),
        }
    }

    /// Returns the progress message for the specified output format
    ///
    /// # Examples
    /// ```
    /// use sbom_assess::application::dto::OutputFormat;
    /// use sbom_assess::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputFormat::Json);
    /// assert_eq!(message, "📝 Generating JSON assessment report...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Json => "📝 Generating JSON assessment report...",
            OutputFormat::Markdown => "📝 Generating Markdown assessment report...",
        }
    }
}
