//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No generation logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use wrapgen_core::domain::{Backend, Stage};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "wrapgen",
    bin_name = "wrapgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Glue-code generator for numerical library add-ins",
    long_about = "wrapgen reads a manifest of library functions and value objects \
                  and generates the C++ bodies that expose them to spreadsheets, \
                  scripting hosts, serialization and native clients.",
    after_help = "EXAMPLES:\n\
        \x20 wrapgen generate functions.toml -b spreadsheet-formula -o addin.cpp\n\
        \x20 wrapgen check manifests/\n\
        \x20 wrapgen list --backend native-binding --stage to-native\n\
        \x20 wrapgen completions bash > /usr/share/bash-completion/completions/wrapgen",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate function bodies and accessors from a manifest.
    #[command(
        visible_alias = "g",
        about = "Generate code from a manifest",
        after_help = "EXAMPLES:\n\
            \x20 wrapgen generate curves.toml\n\
            \x20 wrapgen generate curves.toml -b script-binding -b native-binding\n\
            \x20 wrapgen generate manifests/ -o generated.cpp --fail-fast"
    )]
    Generate(GenerateArgs),

    /// Classify and resolve everything without writing output.
    #[command(
        about = "Validate a manifest against the template catalog",
        after_help = "EXAMPLES:\n\
            \x20 wrapgen check curves.toml\n\
            \x20 wrapgen check manifests/ -b spreadsheet-formula\n\
            \x20 wrapgen check curves.toml --output-format json"
    )]
    Check(CheckArgs),

    /// List registered templates.
    #[command(
        visible_alias = "ls",
        about = "List registered templates",
        after_help = "EXAMPLES:\n\
            \x20 wrapgen list\n\
            \x20 wrapgen list --backend script-binding\n\
            \x20 wrapgen list --stage return-conversion --format csv"
    )]
    List(ListArgs),

    /// Write a default configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 wrapgen init                     # default location\n\
            \x20 wrapgen init --force             # overwrite\n\
            \x20 wrapgen --config ./wrapgen.toml init"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 wrapgen completions bash > ~/.local/share/bash-completion/completions/wrapgen\n\
            \x20 wrapgen completions zsh  > ~/.zfunc/_wrapgen\n\
            \x20 wrapgen completions fish > ~/.config/fish/completions/wrapgen.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 wrapgen config get generation.backends\n\
            \x20 wrapgen config list\n\
            \x20 wrapgen config path"
    )]
    Config(ConfigCommands),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `wrapgen generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// A manifest file or a directory of `*.toml` manifests.
    #[arg(value_name = "MANIFEST", help = "Manifest file or directory")]
    pub manifest: PathBuf,

    /// Backends to generate for. Repeatable.
    #[arg(
        short = 'b',
        long = "backend",
        value_name = "BACKEND",
        value_enum,
        action = clap::ArgAction::Append,
        help = "Target backend (repeatable; default: configured or all)"
    )]
    pub backends: Vec<BackendArg>,

    /// Write generated code here instead of stdout.
    #[arg(short = 'o', long = "output", value_name = "FILE", help = "Output file")]
    pub output: Option<PathBuf>,

    /// Stop at the first failure and write nothing.
    #[arg(long = "fail-fast", help = "Abort on the first failed function")]
    pub fail_fast: bool,
}

// ── check ─────────────────────────────────────────────────────────────────────

/// Arguments for `wrapgen check`.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// A manifest file or a directory of `*.toml` manifests.
    #[arg(value_name = "MANIFEST", help = "Manifest file or directory")]
    pub manifest: PathBuf,

    /// Backends to check against. Repeatable.
    #[arg(
        short = 'b',
        long = "backend",
        value_name = "BACKEND",
        value_enum,
        action = clap::ArgAction::Append,
        help = "Target backend (repeatable; default: configured or all)"
    )]
    pub backends: Vec<BackendArg>,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `wrapgen list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only templates for this backend.
    #[arg(short = 'b', long = "backend", value_enum, help = "Filter by backend")]
    pub backend: Option<BackendArg>,

    /// Only templates for this stage.
    #[arg(short = 's', long = "stage", value_enum, help = "Filter by stage")]
    pub stage: Option<StageArg>,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Aligned columns.
    Table,
    /// One descriptor per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `wrapgen init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `wrapgen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `wrapgen config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print one configuration value.
    Get {
        /// Dotted key, e.g. `generation.fail_fast`.
        #[arg(value_name = "KEY")]
        key: String,
    },

    /// Print the effective configuration as TOML.
    List,

    /// Print the configuration file location.
    Path,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Command-line spelling of a [`Backend`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BackendArg {
    #[value(alias = "excel", alias = "spreadsheet")]
    SpreadsheetFormula,
    #[value(alias = "calc", alias = "script")]
    ScriptBinding,
    #[value(alias = "serialization")]
    SerializationLayer,
    #[value(alias = "accessor", alias = "value-object")]
    ValueObjectAccessor,
    #[value(alias = "cpp", alias = "native")]
    NativeBinding,
}

impl From<BackendArg> for Backend {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::SpreadsheetFormula => Backend::SpreadsheetFormula,
            BackendArg::ScriptBinding => Backend::ScriptBinding,
            BackendArg::SerializationLayer => Backend::SerializationLayer,
            BackendArg::ValueObjectAccessor => Backend::ValueObjectAccessor,
            BackendArg::NativeBinding => Backend::NativeBinding,
        }
    }
}

/// Command-line spelling of a [`Stage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StageArg {
    ToNative,
    ToLibrary,
    ToEnum,
    ToObjectRef,
    ToHandle,
    ReturnDeclaration,
    ReturnConversion,
    FieldGet,
    FieldSet,
}

impl From<StageArg> for Stage {
    fn from(arg: StageArg) -> Self {
        match arg {
            StageArg::ToNative => Stage::ToNative,
            StageArg::ToLibrary => Stage::ToLibrary,
            StageArg::ToEnum => Stage::ToEnum,
            StageArg::ToObjectRef => Stage::ToObjectRef,
            StageArg::ToHandle => Stage::ToHandle,
            StageArg::ReturnDeclaration => Stage::ReturnDeclaration,
            StageArg::ReturnConversion => Stage::ReturnConversion,
            StageArg::FieldGet => Stage::FieldGet,
            StageArg::FieldSet => Stage::FieldSet,
        }
    }
}
