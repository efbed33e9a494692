//! Parallel batch processing — one stateless parse task per file.

use crate::model::DocRecord;
use crate::parser;
use crate::scan;
use rayon::prelude::*;
use std::path::PathBuf;

/// Parse every file on a worker pool and concatenate the results.
///
/// Parsing is pure and each worker owns its file's text exclusively, so no
/// coordination is needed. A file that cannot be read is reported on stderr
/// and contributes zero records; the batch continues.
pub fn process_files(files: &[PathBuf]) -> Vec<DocRecord> {
    files
        .par_iter()
        .flat_map(|path| match scan::read_source(path) {
            Ok(content) => parser::parse_source(&content),
            Err(e) => {
                eprintln!("warning: skipping {}: {:#}", path.display(), e);
                Vec::new()
            }
        })
        .collect()
}
