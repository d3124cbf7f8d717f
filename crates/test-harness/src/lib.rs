//! Test harness for scripting customizer workflows.
//!
//! Provides a fluent builder over the real `studio_bridge::dispatch()`
//! path, so multi-step editing sessions are exercised exactly the way
//! the web UI drives them.

pub mod builder;

pub use builder::{HarnessError, StudioBuilder};
