//! Archive dispatch by file extension
//!
//! Opens a zip archive and routes every entry to the handler registered
//! for the entry's extension. Entries are visited in archive order, but
//! handlers must not depend on ordering across entries.

use std::fs;
use std::io::{self, Read, Seek};
use std::path::Path;

use zip::ZipArchive;

use crate::app::handlers::HandlerTable;
use crate::app::layout::Layout;
use crate::app::progress;
use crate::errors::{ExtractError, ExtractResult};

/// Extract `archive_path`, dispatching each entry by extension.
///
/// # Errors
///
/// Fails with [`ExtractError::Archive`] if the file is not a readable
/// zip, and with [`ExtractError::UnhandledExtension`] if an entry's
/// extension has no registered handler. A missing registration is an
/// error, never a silent skip.
pub fn extract(archive_path: &Path, table: &HandlerTable, layout: &Layout) -> ExtractResult<()> {
    let file = fs::File::open(archive_path)?;
    let mut archive = ZipArchive::new(file)?;

    let mut names = Vec::with_capacity(archive.len());
    for index in 0..archive.len() {
        names.push(archive.by_index(index)?.name().to_string());
    }

    let bar = progress::entries_bar(&archive_path.display().to_string(), names.len() as u64);
    for name in &names {
        let extension = extension_of(name);
        let handler =
            table
                .get(extension)
                .ok_or_else(|| ExtractError::UnhandledExtension {
                    entry: name.clone(),
                    extension: extension.to_string(),
                })?;
        handler.apply(&mut archive, name, layout)?;
        bar.inc(1);
    }
    bar.finish();

    Ok(())
}

/// File extension of an archive entry: the text after the last `.` of the
/// base name, leading dot included, or `""` if there is none. A leading
/// dot alone (`.hidden`) does not count as an extension.
pub fn extension_of(entry_name: &str) -> &str {
    let base = entry_name.rsplit('/').next().unwrap_or(entry_name);
    match base.rfind('.') {
        Some(0) | None => "",
        Some(index) => &base[index..],
    }
}

/// Extract one entry verbatim into `target`, preserving the entry's
/// relative path. Entries whose names escape the target directory are
/// skipped, as are directory placeholder entries (their contents arrive
/// as separate entries).
pub(crate) fn extract_entry<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    entry_name: &str,
    target: &Path,
) -> ExtractResult<()> {
    let mut entry = archive.by_name(entry_name)?;
    let relative = match entry.enclosed_name() {
        Some(path) => path,
        None => return Ok(()),
    };
    let outpath = target.join(relative);

    if entry.name().ends_with('/') {
        fs::create_dir_all(&outpath)?;
        return Ok(());
    }
    if let Some(parent) = outpath.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut outfile = fs::File::create(&outpath)?;
    io::copy(&mut entry, &mut outfile)?;
    Ok(())
}

/// Read one entry's bytes fully into memory
pub(crate) fn read_entry_bytes<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    entry_name: &str,
) -> ExtractResult<Vec<u8>> {
    let mut entry = archive.by_name(entry_name)?;
    let mut bytes = Vec::with_capacity(entry.size() as usize);
    entry.read_to_end(&mut bytes)?;
    Ok(bytes)
}
