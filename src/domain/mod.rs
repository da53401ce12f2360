//! Domain layer: course records and the ordered course tree
//!
//! This layer is independent of external concerns (no I/O, no CLI, no
//! config loading). Every operation here is total: lookups report
//! "not found" as an ordinary result and removal of an absent key is a
//! no-op, so the layer carries no error type.

pub mod course;
pub mod tree;

pub use course::Course;
pub use tree::{CourseTree, InOrderIter};
