//! Per-extension placement policies
//!
//! Each recognized extension maps to one [`Handler`] variant encoding
//! where entries of that type land on disk. The set is fixed and known,
//! so dispatch is an exhaustive match over an enum rather than a map of
//! closures.

use std::fs;
use std::io::{Cursor, Read, Seek};
use std::path::Path;

use tracing::debug;
use zip::ZipArchive;

use crate::app::extract::{extension_of, extract_entry, read_entry_bytes};
use crate::app::layout::Layout;
use crate::constants::files;
use crate::errors::ExtractResult;

/// Placement policy for one file type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Handler {
    /// Tabular data, extracted verbatim under the data directory
    Tabular,

    /// A nested archive, flattened into the data directory (see
    /// [`unpack_archive_bytes`])
    NestedArchive,

    /// Documentation, extracted to the root unless the name contains a
    /// space (space-containing names are nonessential variants and are
    /// dropped)
    Document,

    /// Plain text; `license.txt` is renamed to `<PREFIX>-DATA-LICENSE`
    /// at the root, anything else is extracted verbatim to the root
    PlainText { license_prefix: Option<String> },

    /// Extension-less files, written to the root as `<PREFIX>-<name>`
    /// (such files are assumed to be license-like artifacts)
    Extensionless { prefix: Option<String> },

    /// Consume the entry without writing anything
    Discard,
}

impl Handler {
    /// Apply this policy to one archive entry
    pub fn apply<R: Read + Seek>(
        &self,
        archive: &mut ZipArchive<R>,
        entry_name: &str,
        layout: &Layout,
    ) -> ExtractResult<()> {
        // Directory placeholder entries carry no bytes
        if entry_name.ends_with('/') {
            return Ok(());
        }
        match self {
            Handler::Tabular => extract_entry(archive, entry_name, &layout.data_dir()),
            Handler::NestedArchive => {
                let bytes = read_entry_bytes(archive, entry_name)?;
                unpack_archive_bytes(bytes, &layout.data_dir())
            }
            Handler::Document => {
                if entry_name.contains(' ') {
                    debug!("dropping nonessential document '{}'", entry_name);
                    Ok(())
                } else {
                    extract_entry(archive, entry_name, layout.root())
                }
            }
            Handler::PlainText { license_prefix } => {
                if base_name(entry_name) == files::LICENSE_ENTRY_NAME {
                    let output_name = match license_prefix {
                        Some(prefix) => format!("{prefix}-{}", files::LICENSE_OUTPUT_NAME),
                        None => files::LICENSE_OUTPUT_NAME.to_string(),
                    };
                    let bytes = read_entry_bytes(archive, entry_name)?;
                    fs::write(layout.root().join(output_name), bytes)?;
                    Ok(())
                } else {
                    extract_entry(archive, entry_name, layout.root())
                }
            }
            Handler::Extensionless { prefix } => {
                let output_name = match prefix {
                    Some(prefix) => format!("{prefix}-{entry_name}"),
                    None => entry_name.to_string(),
                };
                let bytes = read_entry_bytes(archive, entry_name)?;
                fs::write(layout.root().join(output_name), bytes)?;
                Ok(())
            }
            Handler::Discard => Ok(()),
        }
    }
}

/// Handler registrations for the fixed, known extension set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerTable {
    tabular: Handler,
    nested: Handler,
    document: Handler,
    plain_text: Handler,
    extensionless: Handler,
}

impl HandlerTable {
    /// Build the table for one dataset job.
    ///
    /// Tabular and nested-archive handling are unconditional; the three
    /// documentation-carrying types flip to [`Handler::Discard`] when
    /// `docs` is off. The license/file prefix is the dataset name
    /// upper-cased.
    pub fn for_dataset(name: &str, docs: bool) -> Self {
        let (document, plain_text, extensionless) = if docs {
            let prefix = name.to_uppercase();
            (
                Handler::Document,
                Handler::PlainText {
                    license_prefix: Some(prefix.clone()),
                },
                Handler::Extensionless {
                    prefix: Some(prefix),
                },
            )
        } else {
            (Handler::Discard, Handler::Discard, Handler::Discard)
        };
        Self {
            tabular: Handler::Tabular,
            nested: Handler::NestedArchive,
            document,
            plain_text,
            extensionless,
        }
    }

    /// Look up the handler registered for an extension
    pub fn get(&self, extension: &str) -> Option<&Handler> {
        match extension {
            ".csv" => Some(&self.tabular),
            ".zip" => Some(&self.nested),
            ".pdf" => Some(&self.document),
            ".txt" => Some(&self.plain_text),
            "" => Some(&self.extensionless),
            _ => None,
        }
    }
}

/// Unpack an in-memory zip into `target`.
///
/// Inner `.zip` entries are themselves read into memory and fully
/// extracted into `target/<entry stem>/` (created idempotently); every
/// other entry is extracted verbatim into `target`. Applied to a
/// nested-archive entry this flattens exactly two levels of nesting,
/// one directory per logical sub-experiment.
fn unpack_archive_bytes(bytes: Vec<u8>, target: &Path) -> ExtractResult<()> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;
    let mut names = Vec::with_capacity(archive.len());
    for index in 0..archive.len() {
        names.push(archive.by_index(index)?.name().to_string());
    }
    for name in names {
        let extension = extension_of(&name);
        if extension == ".zip" {
            let stem = &name[..name.len() - extension.len()];
            let directory = target.join(stem);
            fs::create_dir_all(&directory)?;
            let nested = read_entry_bytes(&mut archive, &name)?;
            ZipArchive::new(Cursor::new(nested))?.extract(&directory)?;
        } else {
            extract_entry(&mut archive, &name, target)?;
        }
    }
    Ok(())
}

fn base_name(entry_name: &str) -> &str {
    entry_name.rsplit('/').next().unwrap_or(entry_name)
}


#[cfg(test)]
mod tests {
    use super::test_support::{archive_from, zip_bytes};
    use super::*;
    use tempfile::tempdir;

    fn test_layout() -> (tempfile::TempDir, Layout) {
        let dir = tempdir().unwrap();
        let layout = Layout::new(dir.path().join("env"));
        fs::create_dir_all(layout.data_dir()).unwrap();
        (dir, layout)
    }

    #[test]
    fn test_tabular_preserves_relative_path() {
        let (_dir, layout) = test_layout();
        let mut archive = archive_from(zip_bytes(&[("trial1/results.csv", b"1,2,3")]));

        Handler::Tabular
            .apply(&mut archive, "trial1/results.csv", &layout)
            .unwrap();

        let written = layout.data_dir().join("trial1/results.csv");
        assert_eq!(fs::read(written).unwrap(), b"1,2,3");
    }

    #[test]
    fn test_document_drops_names_with_spaces() {
        let (_dir, layout) = test_layout();
        let mut archive = archive_from(zip_bytes(&[
            ("report.pdf", b"%PDF"),
            ("final report v2.pdf", b"%PDF"),
        ]));

        Handler::Document
            .apply(&mut archive, "report.pdf", &layout)
            .unwrap();
        Handler::Document
            .apply(&mut archive, "final report v2.pdf", &layout)
            .unwrap();

        assert!(layout.root().join("report.pdf").exists());
        assert!(!layout.root().join("final report v2.pdf").exists());
    }

    #[test]
    fn test_license_renamed_with_prefix() {
        let (_dir, layout) = test_layout();
        let mut archive = archive_from(zip_bytes(&[("license.txt", b"CC-BY 4.0")]));

        Handler::PlainText {
            license_prefix: Some("ORIG".to_string()),
        }
        .apply(&mut archive, "license.txt", &layout)
        .unwrap();

        let written = layout.root().join("ORIG-DATA-LICENSE");
        assert_eq!(fs::read(written).unwrap(), b"CC-BY 4.0");
        assert!(!layout.root().join("license.txt").exists());
    }

    #[test]
    fn test_license_renamed_without_prefix() {
        let (_dir, layout) = test_layout();
        let mut archive = archive_from(zip_bytes(&[("license.txt", b"CC0")]));

        Handler::PlainText {
            license_prefix: None,
        }
        .apply(&mut archive, "license.txt", &layout)
        .unwrap();

        assert!(layout.root().join("DATA-LICENSE").exists());
    }

    #[test]
    fn test_other_text_extracted_verbatim() {
        let (_dir, layout) = test_layout();
        let mut archive = archive_from(zip_bytes(&[("notes.txt", b"observations")]));

        Handler::PlainText {
            license_prefix: Some("ORIG".to_string()),
        }
        .apply(&mut archive, "notes.txt", &layout)
        .unwrap();

        assert_eq!(fs::read(layout.root().join("notes.txt")).unwrap(), b"observations");
    }

    #[test]
    fn test_extensionless_prefixed() {
        let (_dir, layout) = test_layout();
        let mut archive = archive_from(zip_bytes(&[("README", b"read me")]));

        Handler::Extensionless {
            prefix: Some("EXP".to_string()),
        }
        .apply(&mut archive, "README", &layout)
        .unwrap();

        assert_eq!(fs::read(layout.root().join("EXP-README")).unwrap(), b"read me");
    }

    #[test]
    fn test_nested_archive_flattens_two_levels() {
        let (_dir, layout) = test_layout();

        let third_level = zip_bytes(&[("a.csv", b"a")]);
        let inner = zip_bytes(&[("sub1.zip", &third_level), ("b.csv", b"b")]);
        let mut archive = archive_from(zip_bytes(&[("experiments.zip", &inner)]));

        Handler::NestedArchive
            .apply(&mut archive, "experiments.zip", &layout)
            .unwrap();

        assert_eq!(fs::read(layout.data_dir().join("sub1/a.csv")).unwrap(), b"a");
        assert_eq!(fs::read(layout.data_dir().join("b.csv")).unwrap(), b"b");
    }

    #[test]
    fn test_nested_archive_tolerates_existing_directory() {
        let (_dir, layout) = test_layout();
        fs::create_dir_all(layout.data_dir().join("sub1")).unwrap();

        let third_level = zip_bytes(&[("a.csv", b"a")]);
        let inner = zip_bytes(&[("sub1.zip", &third_level)]);
        let mut archive = archive_from(zip_bytes(&[("experiments.zip", &inner)]));

        Handler::NestedArchive
            .apply(&mut archive, "experiments.zip", &layout)
            .unwrap();

        assert!(layout.data_dir().join("sub1/a.csv").exists());
    }

    #[test]
    fn test_discard_writes_nothing() {
        let (_dir, layout) = test_layout();
        let mut archive = archive_from(zip_bytes(&[("license.txt", b"CC-BY")]));

        Handler::Discard
            .apply(&mut archive, "license.txt", &layout)
            .unwrap();

        let root_entries: Vec<_> = fs::read_dir(layout.root())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(root_entries, vec![std::ffi::OsString::from("data")]);
    }

    #[test]
    fn test_table_with_docs() {
        let table = HandlerTable::for_dataset("original", true);
        assert_eq!(table.get(".csv"), Some(&Handler::Tabular));
        assert_eq!(table.get(".zip"), Some(&Handler::NestedArchive));
        assert_eq!(table.get(".pdf"), Some(&Handler::Document));
        assert_eq!(
            table.get(".txt"),
            Some(&Handler::PlainText {
                license_prefix: Some("ORIGINAL".to_string())
            })
        );
        assert_eq!(
            table.get(""),
            Some(&Handler::Extensionless {
                prefix: Some("ORIGINAL".to_string())
            })
        );
        assert_eq!(table.get(".pptx"), None);
    }

    #[test]
    fn test_table_without_docs() {
        let table = HandlerTable::for_dataset("expansion", false);
        assert_eq!(table.get(".csv"), Some(&Handler::Tabular));
        assert_eq!(table.get(".zip"), Some(&Handler::NestedArchive));
        assert_eq!(table.get(".pdf"), Some(&Handler::Discard));
        assert_eq!(table.get(".txt"), Some(&Handler::Discard));
        assert_eq!(table.get(""), Some(&Handler::Discard));
    }
}
