//! Declarative manifest loader.
//!
//! Reads the functions and value objects to wrap from TOML, either from one
//! file or from every `*.toml` file under a directory.
//!
//! # Format
//!
//! ```toml
//! [namespaces]                   # optional, fills unset slot namespaces
//! objects = "QuantLibAddin"
//! library = "QuantLib"
//!
//! [[function]]
//! name       = "qlCurveRate"
//! invocation = "curveLibObj->zeroRate(rateLib)"
//!
//! [[function.parameter]]
//! name        = "rate"
//! kind        = "primitive"
//! native-type = "double"
//! default     = "0.0"
//!
//! [function.returns]
//! kind        = "primitive"
//! native-type = "double"
//!
//! [[value-object]]
//! class-name = "qlCurveRate"
//!
//! [[value-object.property]]
//! name        = "rate"
//! kind        = "primitive"
//! native-type = "double"
//! ```
//!
//! Namespace defaults apply only to the file that declares them. When a
//! directory is loaded, files are read in sorted path order so the merged
//! manifest is the same on every run.

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, instrument};
use walkdir::WalkDir;

use wrapgen_core::{
    domain::{FunctionSpec, ValueObjectSpec},
    error::WrapgenError,
};

// ── Errors ────────────────────────────────────────────────────────────────────

/// Failures while locating, reading or parsing manifests.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("manifest not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("no *.toml manifests under {}", path.display())]
    Empty { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to walk {}: {source}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("invalid manifest {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("{what} '{name}' is declared in both {} and {}", first.display(), second.display())]
    Duplicate {
        what: &'static str,
        name: String,
        first: PathBuf,
        second: PathBuf,
    },
}

impl ManifestError {
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::NotFound { .. } => vec![
                "Check the path passed to the command".into(),
                "A manifest is a .toml file or a directory of them".into(),
            ],
            Self::Empty { .. } => vec!["Add at least one .toml manifest to the directory".into()],
            Self::Io { .. } | Self::Walk { .. } => {
                vec!["Check that the file is readable".into()]
            }
            Self::Parse { .. } => vec![
                "Keys are kebab-case, e.g. native-type, class-name".into(),
                "Functions are [[function]] tables; properties are [[value-object.property]]"
                    .into(),
            ],
            Self::Duplicate { .. } => vec!["Rename or remove one of the declarations".into()],
        }
    }

    /// Whether the failure means the input path is missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::Empty { .. })
    }
}

impl From<ManifestError> for WrapgenError {
    fn from(err: ManifestError) -> Self {
        WrapgenError::Configuration {
            message: err.to_string(),
        }
    }
}

// ── Manifest ──────────────────────────────────────────────────────────────────

/// Namespaces applied to every slot that does not set its own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NamespaceDefaults {
    pub objects: Option<String>,
    pub library: Option<String>,
}

/// Everything to generate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    #[serde(default)]
    pub namespaces: NamespaceDefaults,
    #[serde(default, rename = "function")]
    pub functions: Vec<FunctionSpec>,
    #[serde(default, rename = "value-object")]
    pub value_objects: Vec<ValueObjectSpec>,
}

impl Manifest {
    /// Parse one manifest document and apply its namespace defaults.
    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        let mut manifest: Manifest = toml::from_str(text)?;
        manifest.apply_namespace_defaults();
        Ok(manifest)
    }

    fn apply_namespace_defaults(&mut self) {
        let objects = self.namespaces.objects.as_deref();
        let library = self.namespaces.library.as_deref();
        for function in &mut self.functions {
            function.inherit_namespaces(objects, library);
        }
        for object in &mut self.value_objects {
            for property in &mut object.properties {
                property.inherit_namespaces(objects, library);
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty() && self.value_objects.is_empty()
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

/// Loads a [`Manifest`] from a file or a directory tree.
///
/// # Example
///
/// ```no_run
/// use wrapgen_adapters::manifest::ManifestLoader;
///
/// let manifest = ManifestLoader::new("./wrap").load()?;
/// println!("{} functions", manifest.functions.len());
/// # Ok::<(), wrapgen_adapters::manifest::ManifestError>(())
/// ```
pub struct ManifestLoader {
    path: PathBuf,
}

impl ManifestLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read, parse and merge every manifest under the configured path.
    ///
    /// # Errors
    ///
    /// Fails on the first unreadable or malformed file, and when two files
    /// declare the same function or value-object class.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> Result<Manifest, ManifestError> {
        let files = self.discover()?;

        let mut merged = Manifest::default();
        let mut functions: HashMap<String, PathBuf> = HashMap::new();
        let mut objects: HashMap<String, PathBuf> = HashMap::new();

        for file in &files {
            let manifest = load_file(file)?;
            debug!(
                file = %file.display(),
                functions = manifest.functions.len(),
                value_objects = manifest.value_objects.len(),
                "manifest parsed"
            );

            for function in manifest.functions {
                claim(&mut functions, "function", &function.name, file)?;
                merged.functions.push(function);
            }
            for object in manifest.value_objects {
                claim(&mut objects, "value object", &object.class_name, file)?;
                merged.value_objects.push(object);
            }
        }

        debug!(
            files = files.len(),
            functions = merged.functions.len(),
            value_objects = merged.value_objects.len(),
            "manifests loaded"
        );
        Ok(merged)
    }

    /// The manifest files to read, in load order.
    pub fn discover(&self) -> Result<Vec<PathBuf>, ManifestError> {
        if !self.path.exists() {
            return Err(ManifestError::NotFound {
                path: self.path.clone(),
            });
        }
        if self.path.is_file() {
            return Ok(vec![self.path.clone()]);
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(&self.path).sort_by_file_name() {
            let entry = entry.map_err(|source| ManifestError::Walk {
                path: self.path.clone(),
                source,
            })?;
            let path = entry.path();
            if entry.file_type().is_file() && path.extension().is_some_and(|e| e == "toml") {
                files.push(path.to_path_buf());
            }
        }

        if files.is_empty() {
            return Err(ManifestError::Empty {
                path: self.path.clone(),
            });
        }
        files.sort();
        Ok(files)
    }
}

fn load_file(path: &Path) -> Result<Manifest, ManifestError> {
    let text = fs::read_to_string(path).map_err(|source| ManifestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Manifest::parse(&text).map_err(|source| ManifestError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn claim(
    seen: &mut HashMap<String, PathBuf>,
    what: &'static str,
    name: &str,
    file: &Path,
) -> Result<(), ManifestError> {
    if let Some(first) = seen.get(name) {
        return Err(ManifestError::Duplicate {
            what,
            name: name.to_string(),
            first: first.clone(),
            second: file.to_path_buf(),
        });
    }
    seen.insert(name.to_string(), file.to_path_buf());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{fs::File, io::Write};
    use tempfile::TempDir;
    use wrapgen_core::domain::{Coercion, Dimensionality, SemanticKind};

    fn write(dir: &Path, rel: &str, text: &str) -> PathBuf {
        let full = dir.join(rel);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        File::create(&full)
            .unwrap()
            .write_all(text.as_bytes())
            .unwrap();
        full
    }

    const CURVE: &str = r#"
[namespaces]
objects = "QuantLibAddin"
library = "QuantLib"

[[function]]
name = "qlCurveRate"
invocation = "curveLibObj->zeroRate(rateLib)"

[[function.parameter]]
name = "curve"
kind = "object-handle-ref"
class-name = "YieldTermStructure"

[[function.parameter]]
name = "rate"
kind = "primitive"
native-type = "double"
library-type = "QuantLib::Rate"
default = "0.0"

[function.returns]
kind = "primitive"
native-type = "double"

[[value-object]]
class-name = "qlCurveRate"

[[value-object.property]]
name = "rate"
kind = "primitive"
native-type = "double"
"#;

    #[test]
    fn parses_functions_and_value_objects() {
        let m = Manifest::parse(CURVE).unwrap();
        assert_eq!(m.functions.len(), 1);
        assert_eq!(m.value_objects.len(), 1);

        let f = &m.functions[0];
        assert_eq!(f.parameters[0].kind, SemanticKind::ObjectHandleRef);
        assert_eq!(f.parameters[1].default_value.as_deref(), Some("0.0"));
        assert_eq!(f.returns.native_type.as_deref(), Some("double"));
    }

    #[test]
    fn namespace_defaults_fill_unset_slots() {
        let m = Manifest::parse(CURVE).unwrap();
        let curve = &m.functions[0].parameters[0];
        assert_eq!(curve.namespace_objects.as_deref(), Some("QuantLibAddin"));
        assert_eq!(curve.namespace_library.as_deref(), Some("QuantLib"));
        assert_eq!(
            m.functions[0].returns.namespace_objects.as_deref(),
            Some("QuantLibAddin")
        );
        assert_eq!(
            m.value_objects[0].properties[0].namespace_objects.as_deref(),
            Some("QuantLibAddin")
        );
    }

    #[test]
    fn explicit_namespaces_win_over_defaults() {
        let text = r#"
[namespaces]
objects = "Default"

[[function]]
name = "f"
invocation = "g()"
returns = { kind = "variant" }

[[function.parameter]]
name = "a"
kind = "library-object"
class-name = "A"
namespace-objects = "Mine"
"#;
        let m = Manifest::parse(text).unwrap();
        assert_eq!(
            m.functions[0].parameters[0].namespace_objects.as_deref(),
            Some("Mine")
        );
    }

    #[test]
    fn coercion_and_dimensionality_parse() {
        let text = r#"
[[function]]
name = "f"
invocation = "g()"
returns = { kind = "primitive", native-type = "double", dimensionality = "vector" }

[[function.parameter]]
name = "q"
kind = "object-handle-ref"
coercion = "quote"
"#;
        let m = Manifest::parse(text).unwrap();
        assert_eq!(m.functions[0].parameters[0].coercion, Some(Coercion::Quote));
        assert_eq!(m.functions[0].returns.dimensionality, Dimensionality::Vector);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let text = r#"
[[function]]
name = "f"
invocation = "g()"
returns = { kind = "variant" }
colour = "red"
"#;
        assert!(Manifest::parse(text).is_err());
    }

    #[test]
    fn load_single_file() {
        let temp = TempDir::new().unwrap();
        let file = write(temp.path(), "curve.toml", CURVE);
        let m = ManifestLoader::new(&file).load().unwrap();
        assert_eq!(m.functions[0].name, "qlCurveRate");
    }

    #[test]
    fn load_directory_in_sorted_order() {
        let temp = TempDir::new().unwrap();
        write(
            temp.path(),
            "b.toml",
            "[[function]]\nname = \"second\"\ninvocation = \"g()\"\nreturns = { kind = \"variant\" }\n",
        );
        write(
            temp.path(),
            "a/nested.toml",
            "[[function]]\nname = \"first\"\ninvocation = \"g()\"\nreturns = { kind = \"variant\" }\n",
        );
        write(temp.path(), "notes.txt", "not a manifest");

        let loader = ManifestLoader::new(temp.path());
        assert_eq!(loader.discover().unwrap().len(), 2);

        let names: Vec<_> = loader
            .load()
            .unwrap()
            .functions
            .into_iter()
            .map(|f| f.name)
            .collect();
        assert_eq!(names, vec!["first", "second"]);
    }

    #[test]
    fn namespace_defaults_stay_in_their_file() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "a.toml", CURVE);
        write(
            temp.path(),
            "b.toml",
            "[[function]]\nname = \"bare\"\ninvocation = \"g()\"\nreturns = { kind = \"variant\" }\n",
        );

        let m = ManifestLoader::new(temp.path()).load().unwrap();
        let bare = m.functions.iter().find(|f| f.name == "bare").unwrap();
        assert!(bare.returns.namespace_objects.is_none());
    }

    #[test]
    fn duplicate_function_across_files_is_rejected() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "a.toml", CURVE);
        write(temp.path(), "b.toml", CURVE);

        let err = ManifestLoader::new(temp.path()).load().unwrap_err();
        assert!(matches!(
            err,
            ManifestError::Duplicate { what: "function", ref name, .. } if name == "qlCurveRate"
        ));
    }

    #[test]
    fn missing_path_is_not_found() {
        let err = ManifestLoader::new("/absolutely/does/not/exist.toml")
            .load()
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn directory_without_manifests_is_empty() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "readme.md", "# nothing");
        let err = ManifestLoader::new(temp.path()).load().unwrap_err();
        assert!(matches!(err, ManifestError::Empty { .. }));
    }

    #[test]
    fn parse_errors_name_the_file() {
        let temp = TempDir::new().unwrap();
        let file = write(temp.path(), "bad.toml", "[[function]\n");
        let err = ManifestLoader::new(&file).load().unwrap_err();
        assert!(err.to_string().contains("bad.toml"));
    }
}
