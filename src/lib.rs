//! Course planner: an ordered course catalog loaded from comma-delimited
//! files, queried by course number.
//!
//! Layering:
//! - [`domain`]: course records and the ordered tree (no I/O)
//! - [`catalog`]: catalog-file ingestion
//! - [`cli`]: argument parsing, command dispatch, terminal output
//! - [`config`]: layered settings (defaults, global file, environment)

pub mod catalog;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;

pub use domain::{Course, CourseTree};
