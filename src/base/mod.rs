//! Foundation helpers for the verifier.
//!
//! This module provides:
//! - [`package_prefix`] - The package part of a dotted type name
//! - [`resolve_package`], [`PackageRef`] - Main package vs. imported package
//! - [`qualify_in`] - Package qualification of relative names
//!
//! This module has NO dependencies on other pbverify modules.

mod qualify;

pub use qualify::{PackageRef, normalize, package_prefix, qualify_in, resolve_package};
