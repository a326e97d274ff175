//! `wrapgen check` - classify and resolve a manifest without writing code.

use serde::Serialize;
use tracing::instrument;

use wrapgen_core::{
    domain::{Backend, FunctionSpec, Stage, output_variable, plan},
    error::WrapgenError,
};

use super::{Workbench, jobs, load_manifest, select_backends};
use crate::{
    cli::{CheckArgs, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult, ErrorCategory},
    output::OutputManager,
};

#[derive(Debug, Serialize)]
struct CheckReport {
    backends: Vec<Backend>,
    functions: Vec<FunctionPlan>,
    items: Vec<CheckItem>,
    failed: usize,
}

/// The stages each parameter passes through, and the variable it ends in.
#[derive(Debug, Serialize)]
struct FunctionPlan {
    name: String,
    parameters: Vec<ParameterPlan>,
}

#[derive(Debug, Serialize)]
struct ParameterPlan {
    name: String,
    stages: Vec<Stage>,
    variable: Option<String>,
}

#[derive(Debug, Serialize)]
struct CheckItem {
    item: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip)]
    category: Option<ErrorCategory>,
}

fn plan_function(function: &FunctionSpec) -> FunctionPlan {
    FunctionPlan {
        name: function.name.clone(),
        parameters: function
            .parameters
            .iter()
            .map(|p| ParameterPlan {
                name: p.name.clone(),
                stages: plan(p),
                variable: output_variable(p).ok(),
            })
            .collect(),
    }
}

#[instrument(skip_all, fields(manifest = %args.manifest.display()))]
pub fn execute(args: CheckArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let backends = select_backends(&args.backends, &config)?;
    let manifest = load_manifest(&args.manifest)?;
    let bench = Workbench::new()?;

    let items: Vec<CheckItem> = jobs(&manifest, &backends)
        .iter()
        .map(|job| match bench.run(job) {
            Ok(_) => CheckItem {
                item: job.label(),
                error: None,
                category: None,
            },
            Err(e) => CheckItem {
                item: job.label(),
                error: Some(e.to_string()),
                category: Some(ErrorCategory::from(e.category())),
            },
        })
        .collect();

    let report = CheckReport {
        backends,
        functions: manifest.functions.iter().map(plan_function).collect(),
        failed: items.iter().filter(|i| i.error.is_some()).count(),
        items,
    };

    if output.format() == OutputFormat::Json {
        let json = serde_json::to_string_pretty(&report).map_err(|e| WrapgenError::Internal {
            message: format!("cannot serialise check report: {e}"),
        })?;
        output.emit(&format!("{json}\n"))?;
    } else {
        print_report(&report, &output)?;
    }

    let first = report.items.iter().find_map(|i| i.category);
    match first {
        Some(first) => Err(CliError::Incomplete {
            failed: report.failed,
            total: report.items.len(),
            first,
        }),
        None => Ok(()),
    }
}

fn print_report(report: &CheckReport, output: &OutputManager) -> std::io::Result<()> {
    let backends: Vec<&str> = report.backends.iter().map(Backend::as_str).collect();
    output.header(&format!("Checking against {}", backends.join(", ")))?;

    for function in &report.functions {
        output.print(&format!("  {}", function.name))?;
        for p in &function.parameters {
            let stages: Vec<&str> = p.stages.iter().map(Stage::as_str).collect();
            output.print(&format!(
                "    {:<12} {} -> {}",
                p.name,
                stages.join(" > "),
                p.variable.as_deref().unwrap_or("?"),
            ))?;
        }
    }

    for item in &report.items {
        match &item.error {
            None => output.success(&item.item)?,
            Some(e) => output.error(e)?,
        }
    }

    if report.failed == 0 {
        output.success(&format!("{} item(s) ok", report.items.len()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wrapgen_core::domain::{ParameterSpec, ReturnSpec};

    #[test]
    fn plan_lists_stages_and_final_variable() {
        let function = FunctionSpec::new("qlRate", "f(rateLib, dcEnum)")
            .parameter(ParameterSpec::primitive("rate", "double").library_type("QuantLib::Rate"))
            .parameter(ParameterSpec::enumeration("dc", "QuantLib::DayCounter"))
            .returns(ReturnSpec::primitive("double"));
        let plan = plan_function(&function);

        assert_eq!(plan.parameters[0].stages, vec![Stage::ToNative, Stage::ToLibrary]);
        assert_eq!(plan.parameters[0].variable.as_deref(), Some("rateLib"));
        assert_eq!(plan.parameters[1].stages, vec![Stage::ToNative, Stage::ToEnum]);
        assert_eq!(plan.parameters[1].variable.as_deref(), Some("dcEnum"));
    }

    #[test]
    fn report_serialises_without_empty_errors() {
        let report = CheckReport {
            backends: vec![Backend::NativeBinding],
            functions: Vec::new(),
            items: vec![CheckItem {
                item: "qlRate [native-binding]".into(),
                error: None,
                category: None,
            }],
            failed: 0,
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["backends"][0], "native-binding");
        assert!(json["items"][0].get("error").is_none());
        assert!(json["items"][0].get("category").is_none());
    }
}
