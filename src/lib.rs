//! # Linter Registry Library
//!
//! Keeps a local mirror of every linter repository listed in a set of JSON
//! registry files, and reports on that mirror. It powers the
//! `linter-registry` command-line tool.
//!
//! ## Quick Example
//!
//! ```
//! use linter_registry::registry::Package;
//!
//! let package = Package::new(None, "https://github.com/SublimeLinter/SublimeLinter-eslint");
//! assert_eq!(package.display_name(), "SublimeLinter-eslint");
//!
//! let named = Package::new(Some("eslint"), "https://github.com/SublimeLinter/SublimeLinter-eslint");
//! assert_eq!(named.display_name(), "eslint");
//! ```
//!
//! ## Execution Flow
//!
//! Every command follows the same shape:
//!
//! 1.  **Load**: read the registry files (`registry`) or list the checkout
//!     directories (`checkouts`).
//! 2.  **Fan out**: run one unit of work per package or checkout on a bounded
//!     worker pool (`executor`).
//! 3.  **Work**: each unit runs a single git command through the
//!     `repository::GitOperations` seam (`sync`, `status`) and returns a
//!     record. Failures are records too.
//! 4.  **Report**: sort the records, print a summary and derive the exit code
//!     (`report`, `exit_codes`).
//!
//! Configuration is passed explicitly (`config`); nothing is global.

pub mod checkouts;
pub mod config;
pub mod defaults;
pub mod error;
pub mod executor;
pub mod exit_codes;
pub mod git;
pub mod logging;
pub mod output;
pub mod registry;
pub mod report;
pub mod repository;
pub mod status;
pub mod sync;
