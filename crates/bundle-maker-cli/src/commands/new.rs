//! Implementation of the `bundle-maker new` command.
//!
//! Responsibility: turn flags, config defaults and prompts into a
//! `ScaffoldRequest`, call the core scaffold service, and display results.
//! No business logic lives here.

use std::path::PathBuf;

use tracing::{info, instrument};

use bundle_maker_adapters::{LocalFilesystem, SymfonyBundleRenderer};
use bundle_maker_core::{application::ScaffoldService, domain::ScaffoldReport};

use crate::{
    cli::NewArgs,
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
    prompt,
};

/// Execute the `bundle-maker new` command.
///
/// Dispatch sequence:
/// 1. Collect bundle, vendor and version (flags, config, prompts)
/// 2. Resolve the output root (`--output`, `output.root`, current directory)
/// 3. Plan the bundle; `--dry-run` stops here
/// 4. Write it through `ScaffoldService`
/// 5. Report the result
#[instrument(skip_all)]
pub fn execute(args: NewArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    // 1. Inputs
    let prompter = prompt::terminal_prompter(args.no_input)?;
    let request = prompt::collect_request(&args, &config, prompter.as_deref())?;

    // 2. Output root
    let output_root = resolve_output_root(&args, &config);

    // 3. Plan
    let service = ScaffoldService::new(
        Box::new(SymfonyBundleRenderer::new()),
        Box::new(LocalFilesystem::new()),
    );
    let plan = service
        .plan(&request, &output_root)
        .with_cli_context(|| "planning bundle")?;

    if args.dry_run {
        return show_dry_run(&plan.report(), &output);
    }

    // 4. Write
    output.print(&format!(
        "Generating bundle at {} using the modern structure...",
        plan.root().display()
    ))?;
    info!(bundle = %request.namespace(), path = %plan.root().display(), "Scaffold started");

    let report = service
        .apply(&plan)
        .with_cli_context(|| "writing bundle")?;

    // 5. Result
    if output.is_json() {
        output.json(&report)?;
    } else {
        output.success("Bundle generation completed successfully using the modern structure!")?;
        output.print(&format!("  Package:   {}", request.package_name()))?;
        output.print(&format!("  Namespace: {}", request.namespace()))?;
    }

    Ok(())
}

/// `--output`, else `output.root`, else the current directory.
fn resolve_output_root(args: &NewArgs, config: &AppConfig) -> PathBuf {
    args.output
        .clone()
        .or_else(|| config.output.root.clone())
        .unwrap_or_else(|| PathBuf::from("."))
}

fn show_dry_run(report: &ScaffoldReport, output: &OutputManager) -> CliResult<()> {
    if output.is_json() {
        output.json(report)?;
        return Ok(());
    }

    output.header(&format!(
        "Dry run: would generate bundle at {}",
        report.base_path.display()
    ))?;
    output.print("Directories:")?;
    for dir in &report.directories {
        output.print(&format!("  {}/", dir.display()))?;
    }
    output.print("Files:")?;
    for file in &report.files {
        output.print(&format!("  {}", file.display()))?;
    }
    output.info("No files were written.")?;
    Ok(())
}
