//! Shared fixtures for binary tests.

#![allow(dead_code)]

use std::{
    fs,
    path::{Path, PathBuf},
};

use assert_cmd::{Command, cargo};
use tempfile::TempDir;

pub const CURVE_RATE: &str = r#"
[namespaces]
objects = "QuantLibAddin"
library = "QuantLib"

[[function]]
name = "qlCurveRate"
invocation = "QuantLibAddin::curveRate(rateCpp)"

[[function.parameter]]
name = "rate"
kind = "primitive"
native-type = "double"
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

/// Returns a matrix the library cannot convert back.
pub const GRID: &str = r#"
[[function]]
name = "qlGrid"
invocation = "QuantLibAddin::grid()"

[function.returns]
kind = "primitive"
native-type = "double"
dimensionality = "matrix"
library-type = "QuantLib::Matrix"
"#;

/// A handle parameter with no library namespace anywhere.
pub const HANDLE_WITHOUT_NAMESPACE: &str = r#"
[[function]]
name = "qlCurveDiscount"
invocation = "curveLibObj->discount(1.0)"

[[function.parameter]]
name = "curve"
kind = "handle"
class-name = "YieldTermStructure"
namespace-objects = "QuantLibAddin"

[function.returns]
kind = "primitive"
native-type = "double"
"#;

/// A scratch directory that also isolates the user config location.
pub struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    /// `wrapgen` running inside the sandbox with a clean environment.
    pub fn wrapgen(&self) -> Command {
        let mut cmd = cargo::cargo_bin_cmd!("wrapgen");
        cmd.current_dir(self.path())
            .env("XDG_CONFIG_HOME", self.path().join("xdg"))
            .env_remove("RUST_LOG")
            .env_remove("NO_COLOR")
            .env_remove("WRAPGEN__GENERATION__BACKENDS")
            .env_remove("WRAPGEN__GENERATION__FAIL_FAST")
            .env_remove("WRAPGEN__OUTPUT__FORMAT")
            .env_remove("WRAPGEN__OUTPUT__NO_COLOR");
        cmd
    }
}
