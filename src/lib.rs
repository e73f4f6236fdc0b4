//! bundlescope - bundle weight and dependency audit reports for JavaScript projects
//!
//! This crate reads a project's package.json, checks the declared
//! dependencies against tables of known heavy, redundant and deferrable
//! packages, and ranks the largest source files. Results are written as
//! JSON reports and rendered on the console.

pub mod audit;
pub mod bundle;
pub mod catalog;
pub mod export;
pub mod parser;
pub mod scan;
