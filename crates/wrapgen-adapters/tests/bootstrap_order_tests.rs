//! Registry access before bootstrap.
//!
//! Kept in its own test binary: any other test here that bootstrapped the
//! registry would make the outcome depend on scheduling.

use wrapgen_adapters::registry::{global, try_global};

#[test]
#[should_panic(expected = "before bootstrap")]
fn global_registry_panics_before_bootstrap() {
    assert!(try_global().is_none());
    let _ = global().len();
}
