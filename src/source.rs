//! Corpus enumeration and per-file processing.
//!
//! A corpus is a directory tree of export files downloaded from the
//! procurement portal: plain `.xml` documents plus `.zip` archives whose
//! members are the same documents. Files are processed in schema order
//! (organizations first) so records referencing an entity are always
//! emitted after the entity itself.

use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::config::{self, ARCHIVE_EXTENSION};
use crate::dispatch::{process_document, DocumentStats};
use crate::error::{ExtractError, Result};
use crate::sink::RecordSink;

/// File name as seen by the classification helpers (final path component).
fn base_name(path: &Path) -> &str {
    path.file_name().and_then(|name| name.to_str()).unwrap_or("")
}

/// Check whether a corpus file should be processed at all: either an
/// extractable document or an archive that may contain them.
fn is_corpus_file(name: &str) -> bool {
    name.ends_with(ARCHIVE_EXTENSION) || config::is_extractable_name(name)
}

/// Collect every processable file under `root`, in processing order.
///
/// The walk is recursive; the result is sorted by schema order first and
/// path second, so repeated runs over the same tree are deterministic.
///
/// # Errors
/// Returns an error if a directory cannot be read.
pub fn collect_corpus(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    collect_into(root, &mut files)?;
    files.sort_by(|a, b| {
        let key_a = (config::parse_order(base_name(a)), a);
        let key_b = (config::parse_order(base_name(b)), b);
        key_a.cmp(&key_b)
    });
    Ok(files)
}

fn collect_into(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_into(&path, files)?;
        } else if is_corpus_file(base_name(&path)) {
            files.push(path);
        }
    }
    Ok(())
}

/// Process one corpus file: a plain document directly, an archive member by
/// member. Archive members that are not extractable documents are skipped.
///
/// # Errors
/// Returns an error if the file cannot be opened or its markup cannot be
/// streamed; extraction failures inside a document are isolated there and
/// reported through the returned stats.
pub fn process_file(path: &Path, sink: &mut dyn RecordSink) -> Result<DocumentStats> {
    let name = path.display().to_string();
    if base_name(path).ends_with(ARCHIVE_EXTENSION) {
        process_archive(path, &name, sink)
    } else {
        let reader = BufReader::new(File::open(path)?);
        process_document(reader, &name, sink)
    }
}

fn process_archive(path: &Path, name: &str, sink: &mut dyn RecordSink) -> Result<DocumentStats> {
    let archive_error = |source| ExtractError::Archive {
        name: name.to_string(),
        source,
    };

    let mut archive = zip::ZipArchive::new(File::open(path)?).map_err(archive_error)?;
    let mut stats = DocumentStats::default();

    for index in 0..archive.len() {
        let entry = archive.by_index(index).map_err(archive_error)?;
        let entry_name = entry.name().to_string();
        let entry_base = entry_name.rsplit('/').next().unwrap_or(&entry_name);
        if !config::is_extractable_name(entry_base) {
            continue;
        }

        // Qualify diagnostics with the member so failures inside archives
        // point at the right document.
        let member = format!("{name}!{entry_name}");
        stats.absorb(process_document(BufReader::new(entry), &member, sink)?);
    }

    Ok(stats)
}

/// Process every corpus file under `root` into `sink`.
///
/// # Errors
/// Stops at the first file-level failure; see [`process_file`].
pub fn process_tree(root: &Path, sink: &mut dyn RecordSink) -> Result<DocumentStats> {
    let mut stats = DocumentStats::default();
    for path in collect_corpus(root)? {
        stats.absorb(process_file(&path, sink)?);
    }
    Ok(stats)
}
