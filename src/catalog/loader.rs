//! Catalog ingestion: comma-delimited course files into the tree

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, instrument};

use crate::domain::{Course, CourseTree};

use super::error::{CatalogError, CatalogResult};

/// Load a course catalog file into an ordered tree.
///
/// Each line holds a course number, a title, and zero or more
/// prerequisite numbers, comma-delimited. Lines that do not carry at
/// least a number and a title are skipped and logged at debug level;
/// only a missing file or a read failure is an error.
#[instrument(level = "debug")]
pub fn load_catalog(path: &Path) -> CatalogResult<CourseTree> {
    if !path.exists() {
        return Err(CatalogError::FileNotFound(path.to_path_buf()));
    }

    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut tree = CourseTree::new();
    let mut skipped = 0usize;
    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;
        match Course::parse_line(&line) {
            Some(course) => tree.insert(course),
            None => {
                if !line.trim().is_empty() {
                    debug!("skipping malformed line {}: {:?}", lineno + 1, line);
                    skipped += 1;
                }
            }
        }
    }

    debug!(
        "loaded {} courses from {} ({} lines skipped)",
        tree.len(),
        path.display(),
        skipped
    );
    Ok(tree)
}
