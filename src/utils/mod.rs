//! The `utils` module provides a collection of utility functions and common
//! definitions used across the `postbox` application.
//!
//! This module aims to centralize reusable components, such as custom error types
//! and logging initialization, to promote code consistency and reduce duplication.

pub mod error;
pub mod logging;
