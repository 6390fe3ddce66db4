mod cli;

use cli::Args;
use nvd_cpe_report::adapters::outbound::console::StderrProgressReporter;
use nvd_cpe_report::adapters::outbound::filesystem::FileSystemFeedReader;
use nvd_cpe_report::adapters::outbound::network::{NvdFeedClient, OnDemandFeedRepository};
use nvd_cpe_report::application::dto::ReportRequest;
use nvd_cpe_report::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use nvd_cpe_report::application::read_models::CveReportReadModelBuilder;
use nvd_cpe_report::application::use_cases::GenerateReportUseCase;
use nvd_cpe_report::config::{self, ConfigFile, Settings};
use nvd_cpe_report::cve_report::domain::ReportName;
use nvd_cpe_report::shared::error::{ExitCode, ReportError};
use nvd_cpe_report::shared::Result;
use owo_colors::{OwoColorize, Stream};
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!(
            "\n{}\n",
            "❌ An error occurred:".if_supports_color(Stream::Stderr, |text| text.red())
        );
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(exit_code_for(&e).as_i32());
    }
}

/// Settings problems are argument errors; everything else failed while running
fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    match error.downcast_ref::<ReportError>() {
        Some(ReportError::Validation { .. }) => ExitCode::InvalidArguments,
        _ => ExitCode::ApplicationError,
    }
}

fn run() -> Result<()> {
    // Parse command-line arguments (clap exits with code 2 on its own errors)
    let args = Args::parse_args();

    let config_file = load_config(&args)?;
    let settings = Settings::resolve(args.overrides(), config_file.as_ref())?;

    // Resolve the destination first so an unusable file name fails before any download
    let report_name = ReportName::new(&settings.filter, settings.year);
    let presenter_type = resolve_presenter_type(&args, &settings, &report_name)?;

    // Create adapters (Dependency Injection)
    let reader = FileSystemFeedReader::new(settings.input_dir.clone());
    let feed_repository = if settings.offline {
        OnDemandFeedRepository::offline(reader)
    } else {
        OnDemandFeedRepository::new(reader, Some(NvdFeedClient::new(&settings.feed_base_url)?))
    };
    let progress_reporter = StderrProgressReporter::new();

    let use_case = GenerateReportUseCase::new(feed_repository, progress_reporter);
    let request = ReportRequest::new(settings.year, settings.filter.clone());
    let response = use_case.execute(request)?;

    eprintln!("{}", FormatterFactory::progress_message(settings.format));
    let model = CveReportReadModelBuilder::build(&response);
    let formatted_output = FormatterFactory::create(settings.format).format(&model)?;

    PresenterFactory::create(presenter_type).present(&formatted_output)?;

    Ok(())
}

fn load_config(args: &Args) -> Result<Option<ConfigFile>> {
    match &args.config {
        Some(path) => config::load_config_from_path(path).map(Some),
        None => config::discover_config(&std::env::current_dir()?),
    }
}

fn resolve_presenter_type(
    args: &Args,
    settings: &Settings,
    report_name: &ReportName,
) -> Result<PresenterType> {
    if args.stdout {
        return Ok(PresenterType::Stdout);
    }

    if let Some(path) = &args.output {
        return Ok(PresenterType::File {
            path: path.clone(),
            create_parent_dir: false,
        });
    }

    let file_name = report_name.file_name(settings.format.extension())?;
    Ok(PresenterType::File {
        path: settings.output_dir.join(file_name),
        create_parent_dir: true,
    })
}
