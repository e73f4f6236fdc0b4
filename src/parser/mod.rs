//! Manifest parsing for bundlescope.
//!
//! Loads an npm `package.json` and exposes its production and development
//! dependency groups.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use bundlescope::parser::{parse_file, merge_dependencies, group_by_type};
//!
//! let pkg = parse_file(Path::new("package.json"))?;
//! let deps = merge_dependencies(&pkg);
//! let (prod, dev) = group_by_type(&deps);
//!
//! println!("{} production, {} development", prod.len(), dev.len());
//! ```

pub mod package_json;
pub mod types;

pub use package_json::{
    group_by_type, merge_dependencies, parse_file, parse_str, ParseError, ParseResult,
};

pub use types::{Dependency, DependencyType, PackageJson};
