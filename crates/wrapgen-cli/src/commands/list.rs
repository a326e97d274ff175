//! Implementation of the `wrapgen list` command.

use serde::Serialize;

use wrapgen_adapters::bootstrap;
use wrapgen_core::{
    domain::{Backend, Dimensionality, Fallback, Route, SemanticKind, Stage, TemplateEntry},
    error::WrapgenError,
};

use crate::{
    cli::{ListArgs, ListFormat},
    error::CliResult,
    output::OutputManager,
};

/// One registered template, flattened for display.
#[derive(Debug, Serialize)]
struct Row {
    stage: Stage,
    dimensionality: Dimensionality,
    kind: SemanticKind,
    backend: Backend,
    fallback: Fallback,
    route: Route,
    placeholders: Vec<&'static str>,
}

impl From<&TemplateEntry> for Row {
    fn from(entry: &TemplateEntry) -> Self {
        let d = entry.descriptor();
        Self {
            stage: d.stage,
            dimensionality: d.dimensionality,
            kind: d.kind,
            backend: d.backend,
            fallback: d.fallback,
            route: d.route,
            placeholders: entry.placeholders().iter().map(|p| p.token()).collect(),
        }
    }
}

impl Row {
    fn cells(&self) -> [&'static str; 6] {
        [
            self.stage.as_str(),
            self.dimensionality.as_str(),
            self.kind.as_str(),
            self.backend.as_str(),
            self.fallback.as_str(),
            self.route.as_str(),
        ]
    }
}

const HEADINGS: [&str; 6] = ["stage", "dimensionality", "kind", "backend", "fallback", "route"];

fn rows(entries: Vec<&TemplateEntry>, args: &ListArgs) -> Vec<Row> {
    let backend = args.backend.map(Backend::from);
    let stage = args.stage.map(Stage::from);
    entries
        .into_iter()
        .filter(|e| backend.is_none_or(|b| e.descriptor().backend == b))
        .filter(|e| stage.is_none_or(|s| e.descriptor().stage == s))
        .map(Row::from)
        .collect()
}

pub fn execute(args: ListArgs, output: OutputManager) -> CliResult<()> {
    let registry = bootstrap()?;
    let rows = rows(registry.entries(), &args);

    if rows.is_empty() {
        output.warning("No templates match the given filters")?;
        return Ok(());
    }

    match args.format {
        ListFormat::Table => {
            output.header(&format!("Registered templates ({}):", rows.len()))?;
            output.print(&table_line(HEADINGS))?;
            for row in &rows {
                output.print(&table_line(row.cells()))?;
            }
        }

        ListFormat::Json => {
            // Straight to stdout so the array stays parseable in pipes.
            let json = serde_json::to_string_pretty(&rows).map_err(|e| WrapgenError::Internal {
                message: format!("cannot serialise template list: {e}"),
            })?;
            output.emit(&format!("{json}\n"))?;
        }

        ListFormat::List => {
            let mut text = String::new();
            for row in &rows {
                text.push_str(&row.cells().join("/"));
                text.push('\n');
            }
            output.emit(&text)?;
        }

        ListFormat::Csv => {
            let mut text = format!("{},placeholders\n", HEADINGS.join(","));
            for row in &rows {
                text.push_str(&format!(
                    "{},{}\n",
                    row.cells().join(","),
                    row.placeholders.join(";")
                ));
            }
            output.emit(&text)?;
        }
    }

    Ok(())
}

fn table_line(cells: [&str; 6]) -> String {
    format!(
        "  {:<18} {:<14} {:<17} {:<21} {:<9} {}",
        cells[0], cells[1], cells[2], cells[3], cells[4], cells[5]
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{BackendArg, StageArg};

    fn args(backend: Option<BackendArg>, stage: Option<StageArg>) -> ListArgs {
        ListArgs {
            backend,
            stage,
            format: ListFormat::List,
        }
    }

    #[test]
    fn filters_combine() {
        let registry = bootstrap().unwrap();
        let all = rows(registry.entries(), &args(None, None));
        assert_eq!(all.len(), registry.len());

        let native = rows(
            registry.entries(),
            &args(Some(BackendArg::NativeBinding), Some(StageArg::ToNative)),
        );
        assert!(!native.is_empty());
        assert!(native.len() < all.len());
        assert!(
            native
                .iter()
                .all(|r| r.backend == Backend::NativeBinding && r.stage == Stage::ToNative)
        );
    }

    #[test]
    fn accessor_rows_are_field_stages_only() {
        let registry = bootstrap().unwrap();
        let accessor = rows(
            registry.entries(),
            &args(Some(BackendArg::ValueObjectAccessor), None),
        );
        assert!(
            accessor
                .iter()
                .all(|r| matches!(r.stage, Stage::FieldGet | Stage::FieldSet))
        );
    }

    #[test]
    fn row_lists_placeholder_tokens() {
        let registry = bootstrap().unwrap();
        let row = Row::from(registry.entries()[0]);
        assert!(row.placeholders.contains(&"name"));
    }
}
