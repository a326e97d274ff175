//! `wrapgen generate` - write function bodies and accessors.
//!
//! All output is buffered and written once at the end, so a `--fail-fast`
//! abort never leaves a partial file behind.

use std::fs;

use tracing::{debug, info, instrument, warn};

use super::{Workbench, jobs, load_manifest, select_backends};
use crate::{
    cli::GenerateArgs,
    config::AppConfig,
    error::{CliError, CliResult, ErrorCategory, IntoCli},
    output::OutputManager,
};

#[instrument(skip_all, fields(manifest = %args.manifest.display()))]
pub fn execute(args: GenerateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    if let Some(path) = args.output.as_ref().filter(|p| p.is_dir()) {
        return Err(CliError::InvalidInput {
            message: format!("output '{}' is a directory, expected a file", path.display()),
            source: None,
        });
    }

    let backends = select_backends(&args.backends, &config)?;
    let fail_fast = args.fail_fast || config.generation.fail_fast;
    let manifest = load_manifest(&args.manifest)?;

    let jobs = jobs(&manifest, &backends);
    if jobs.is_empty() {
        output.warning("Nothing to generate for the selected backends")?;
        return Ok(());
    }

    let bench = Workbench::new()?;
    let progress = output.progress(jobs.len() as u64);

    let mut code = String::new();
    let mut failed = 0;
    let mut first: Option<ErrorCategory> = None;

    for job in &jobs {
        progress.set_message(job.label());
        match bench.run(job) {
            Ok(text) => {
                debug!(job = %job.label(), "generated");
                code.push_str(&text);
            }
            Err(e) if fail_fast => {
                progress.abandon();
                return Err(e.into());
            }
            Err(e) => {
                warn!(job = %job.label(), "skipped: {e}");
                progress.suspend(|| output.error(&e.to_string()))?;
                failed += 1;
                first = first.or(Some(ErrorCategory::from(e.category())));
            }
        }
        progress.inc(1);
    }
    progress.finish_and_clear();

    let generated = jobs.len() - failed;
    match &args.output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).with_cli_context(|| {
                    format!("Failed to create output directory '{}'", parent.display())
                })?;
            }
            fs::write(path, &code)
                .with_cli_context(|| format!("Failed to write '{}'", path.display()))?;
            output.success(&format!(
                "Generated {generated} item(s) into {}",
                path.display()
            ))?;
        }
        None => output.emit(&code)?,
    }
    info!(generated, failed, "generation finished");

    match first {
        Some(first) => Err(CliError::Incomplete {
            failed,
            total: jobs.len(),
            first,
        }),
        None => Ok(()),
    }
}
