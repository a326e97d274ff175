//! Command handlers, one module per subcommand.
//!
//! `generate` and `check` share the plumbing below: backend selection,
//! manifest loading, and the job list that both walk.

use std::path::Path;

use tracing::{info, instrument};

use wrapgen_adapters::{GlobalStore, Manifest, ManifestLoader, PlaceholderRenderer};
use wrapgen_core::{
    application::{AccessorComposer, WrapperComposer},
    domain::{Backend, FunctionSpec, ValueObjectSpec},
    error::WrapgenResult,
};

use crate::{
    cli::BackendArg,
    config::AppConfig,
    error::{CliError, CliResult},
};

pub mod check;
pub mod completions;
pub mod config;
pub mod generate;
pub mod init;
pub mod list;

/// Backends named on the command line, else the configured ones, else all.
pub(crate) fn select_backends(
    requested: &[BackendArg],
    config: &AppConfig,
) -> CliResult<Vec<Backend>> {
    let chosen: Vec<Backend> = if requested.is_empty() {
        config
            .default_backends()
            .map_err(|message| CliError::ConfigError {
                message: format!("generation.backends: {message}"),
                source: None,
            })?
    } else {
        requested.iter().map(|b| Backend::from(*b)).collect()
    };

    if chosen.is_empty() {
        return Ok(Backend::ALL.to_vec());
    }

    let mut unique = Vec::with_capacity(chosen.len());
    for backend in chosen {
        if !unique.contains(&backend) {
            unique.push(backend);
        }
    }
    Ok(unique)
}

#[instrument(skip(path), fields(path = %path.display()))]
pub(crate) fn load_manifest(path: &Path) -> CliResult<Manifest> {
    let manifest = ManifestLoader::new(path).load()?;
    info!(
        functions = manifest.functions.len(),
        value_objects = manifest.value_objects.len(),
        "manifest loaded"
    );
    Ok(manifest)
}

/// One unit of generation: a function for one backend, or one value object.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Job<'a> {
    Function {
        spec: &'a FunctionSpec,
        backend: Backend,
    },
    Accessors(&'a ValueObjectSpec),
}

impl Job<'_> {
    pub(crate) fn label(&self) -> String {
        match self {
            Self::Function { spec, backend } => format!("{} [{backend}]", spec.name),
            Self::Accessors(object) => {
                format!("{} [{}]", object.class_name, Backend::ValueObjectAccessor)
            }
        }
    }
}

/// Every job for `backends`, functions first in manifest order, then value
/// objects when the accessor backend is selected.
pub(crate) fn jobs<'a>(manifest: &'a Manifest, backends: &[Backend]) -> Vec<Job<'a>> {
    let mut jobs: Vec<Job<'a>> = manifest
        .functions
        .iter()
        .flat_map(|spec| {
            backends
                .iter()
                .filter(|b| b.composes_functions())
                .map(move |&backend| Job::Function { spec, backend })
        })
        .collect();

    if backends.contains(&Backend::ValueObjectAccessor) {
        jobs.extend(manifest.value_objects.iter().map(Job::Accessors));
    }
    jobs
}

/// The two composers, wired to the process-wide registry.
pub(crate) struct Workbench {
    functions: WrapperComposer,
    accessors: AccessorComposer,
}

impl Workbench {
    pub(crate) fn new() -> CliResult<Self> {
        Ok(Self {
            functions: WrapperComposer::new(
                Box::new(GlobalStore::new()?),
                Box::new(PlaceholderRenderer::new()),
            ),
            accessors: AccessorComposer::new(
                Box::new(GlobalStore::new()?),
                Box::new(PlaceholderRenderer::new()),
            ),
        })
    }

    /// Run `job` and return its code, each body under a marker comment.
    pub(crate) fn run(&self, job: &Job<'_>) -> WrapgenResult<String> {
        match job {
            Job::Function { spec, backend } => {
                let body = self.functions.compose(spec, *backend)?;
                Ok(format!("// wrapgen: {}\n{}\n", job.label(), body.text()))
            }
            Job::Accessors(object) => {
                let bodies = self.accessors.compose(object)?;
                Ok(format!(
                    "// wrapgen: {name} getter\n{getter}\n// wrapgen: {name} setter\n{setter}\n",
                    name = job.label(),
                    getter = bodies.getter(),
                    setter = bodies.setter(),
                ))
            }
        }
    }
}
