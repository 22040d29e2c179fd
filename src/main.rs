mod cli;

use cli::Args;
use sbom_assess::adapters::outbound::console::StderrProgressReporter;
use sbom_assess::adapters::outbound::filesystem::FileSystemReader;
use sbom_assess::adapters::outbound::navigation::{InMemoryLocation, ReportPanelState};
use sbom_assess::application::dto::{AssessmentRequest, OutputFormat, PanelExpansion};
use sbom_assess::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use sbom_assess::application::navigation::{AnchorTarget, AttachedNavigator};
use sbom_assess::application::read_models::AssessmentReadModel;
use sbom_assess::application::use_cases::SummarizeAssessmentsUseCase;
use sbom_assess::config::{self, ConfigFile};
use sbom_assess::ports::outbound::{HashChangeSource, ProgressReporter};
use sbom_assess::shared::error::ExitCode;
use sbom_assess::shared::Result;
use std::path::PathBuf;
use std::process;
use std::rc::Rc;

fn main() {
    let args = Args::parse_args();

    match run(args) {
        Ok(exit_code) => process::exit(exit_code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

/// Effective settings after merging CLI flags over the config file
#[derive(Debug)]
struct Settings {
    payload_path: PathBuf,
    format: OutputFormat,
    output: Option<PathBuf>,
    is_available: bool,
    anchor: Option<String>,
    component_id: Option<String>,
    base_url: Option<String>,
    exclude_plugins: Vec<String>,
    fail_on_failures: bool,
}

impl Settings {
    /// CLI flag > config file > default
    fn merge(args: Args, config: ConfigFile) -> Self {
        let exclude_plugins = if args.exclude_plugin.is_empty() {
            config.exclude_plugins.clone().unwrap_or_default()
        } else {
            args.exclude_plugin
        };

        Self {
            payload_path: args.path,
            format: args
                .format
                .or_else(|| config.output_format())
                .unwrap_or_default(),
            output: args.output,
            is_available: !args.unavailable && config.entitled.unwrap_or(true),
            anchor: args.anchor,
            component_id: args.component_id.or(config.component_id),
            base_url: config.base_url,
            exclude_plugins,
            fail_on_failures: args.fail_on_failures || config.fail_on_failures.unwrap_or(false),
        }
    }
}

fn load_config(args: &Args) -> Result<ConfigFile> {
    let config = match &args.config {
        Some(path) => config::load_config_from_path(path)?,
        None => config::discover_config(&config::discovery_dir(&args.path))?.unwrap_or_default(),
    };
    Ok(config)
}

fn run(args: Args) -> Result<ExitCode> {
    let reporter = StderrProgressReporter::new();

    let config = load_config(&args)?;
    for warning in config.unknown_field_warnings() {
        reporter.report_warning(&warning);
    }
    let settings = Settings::merge(args, config);

    // Create use case with injected dependencies
    let use_case = SummarizeAssessmentsUseCase::new(
        FileSystemReader::new(),
        StderrProgressReporter::new(),
    );

    let request = AssessmentRequest::new(settings.payload_path.clone())
        .with_availability(settings.is_available)
        .with_component_id(settings.component_id.clone())
        .with_base_url(settings.base_url.clone())
        .with_exclude_plugins(settings.exclude_plugins.clone());

    let response = use_case.execute(request)?;
    let read_model = response.read_model;

    let expansion = resolve_expansion(&read_model, settings.anchor.as_deref(), &reporter);

    reporter.report(FormatterFactory::progress_message(settings.format));
    let formatter = FormatterFactory::create(settings.format, expansion);
    let formatted_output = formatter.format(&read_model)?;

    let presenter = PresenterFactory::create(PresenterType::from_output(settings.output));
    presenter.present(&formatted_output)?;

    if settings.fail_on_failures && read_model.has_failures() {
        reporter.report_error("❌ One or more assessments failed.");
        return Ok(ExitCode::FailuresDetected);
    }
    Ok(ExitCode::Success)
}

/// Drives a navigator over the rendered panels from the requested anchor.
///
/// Without an anchor every panel is shown expanded.
fn resolve_expansion<P: ProgressReporter>(
    read_model: &AssessmentReadModel,
    anchor: Option<&str>,
    reporter: &P,
) -> PanelExpansion {
    let Some(hash) = anchor else {
        return PanelExpansion::All;
    };

    let panel_state = ReportPanelState::new(read_model.plugin_names());
    let location = Rc::new(InMemoryLocation::new(hash));
    let attached = AttachedNavigator::attach(Rc::clone(&location), panel_state.clone());
    drop(attached);

    if let AnchorTarget::Plugin(name) = AnchorTarget::parse(&location.current_hash()) {
        if panel_state.expanded_plugins().is_empty() {
            reporter.report_warning(&format!(
                "⚠️  Warning: Anchor targets plugin '{}', which has no panel in this report.",
                name
            ));
        }
    }

    panel_state.expansion()
}
