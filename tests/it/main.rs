//! Single test binary entry point.
//!
//! All tests compile into one binary:
//! - unit: single-module tests for geometry, elements, and the layout format
//! - integration: full edit-workflow and scene-controller tests

mod helpers;
mod integration;
mod unit;
