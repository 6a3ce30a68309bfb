//! Resource collection: groups enumerated files into logical resources.
//!
//! Input paths are relative to the resource root and `/`-separated, e.g.
//! `drawable-en-xhdpi/icon.png`. The first segment names the resource type and
//! its qualifiers; the file stem is the resource's base name. All variants of
//! one base name merge into a single resource.
//!
//! Tables under `values*/` are the exception: each `name` they declare is a
//! resource of its own, and the table file is the variant's path.

use std::collections::{BTreeMap, BTreeSet};

use crate::{
    core::{
        qualifier::{QualifierSet, parse_qualifiers},
        values::parse_value_table,
    },
    error::GenerateError,
    runtime::ResourceType,
};

const FILES_DIR: &str = "files";
const VALUES_DIR: &str = "values";
const STRING_DIR: &str = "string";

/// One file variant of a logical resource.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QualifiedResourceItem {
    pub qualifiers: QualifierSet,
    /// Path relative to the resource root.
    pub path: String,
}

/// Variants of every logical resource of one type, keyed by base name.
pub type ResourceGroups = BTreeMap<String, BTreeSet<QualifiedResourceItem>>;

/// Contents of the value tables (`values*/*.xml`), keyed by root-relative path.
pub type ValueTables = BTreeMap<String, String>;

/// Why a file took no part in accessor generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Raw file under `files/`; addressed by path, no accessor.
    RawFile,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub path: String,
    pub reason: SkipReason,
}

#[derive(Debug, Default)]
pub struct CollectedResources {
    pub by_type: BTreeMap<ResourceType, ResourceGroups>,
    pub skipped: Vec<SkippedFile>,
}

impl CollectedResources {
    pub fn resource_count(&self) -> usize {
        self.by_type.values().map(BTreeMap::len).sum()
    }
}

/// True for paths whose content `collect_resources` needs in [`ValueTables`].
pub fn is_value_table(path: &str) -> bool {
    path.split_once('/').is_some_and(|(directory, file_name)| {
        directory.split('-').next() == Some(VALUES_DIR)
            && !file_name.contains('/')
            && file_name.ends_with(".xml")
    })
}

/// Group `files` into resources per type.
///
/// Every value table among `files` must have its content in `values`.
/// The input order does not matter: paths are processed in ordinal order so
/// that error reports are stable.
pub fn collect_resources<S: AsRef<str>>(
    files: &[S],
    values: &ValueTables,
) -> Result<CollectedResources, GenerateError> {
    let mut sorted: Vec<&str> = files.iter().map(AsRef::as_ref).collect();
    sorted.sort_unstable();
    sorted.dedup();

    let mut collected = CollectedResources::default();

    for path in sorted {
        let Some((directory, file_name)) = path.split_once('/') else {
            return Err(GenerateError::InvalidResourcePath {
                path: path.to_string(),
                reason: "files must be placed in a resource type directory".to_string(),
            });
        };

        let mut tokens = directory.split('-');
        let type_name = tokens.next().unwrap_or_default();
        let qualifier_tokens: Vec<&str> = tokens.collect();

        let resource_type = match type_name {
            FILES_DIR => {
                if !qualifier_tokens.is_empty() {
                    return Err(GenerateError::QualifiersNotSupported {
                        kind: FILES_DIR.to_string(),
                        directory: directory.to_string(),
                    });
                }
                collected.skipped.push(SkippedFile {
                    path: path.to_string(),
                    reason: SkipReason::RawFile,
                });
                continue;
            }
            VALUES_DIR => {
                let qualifiers = qualifiers_of(directory, &qualifier_tokens)?;
                collect_value_table(&mut collected, path, qualifiers, values)?;
                continue;
            }
            STRING_DIR => {
                return Err(GenerateError::ForbiddenDirectory {
                    directory: directory.to_string(),
                });
            }
            other => ResourceType::from_dir_name(other).ok_or_else(|| {
                GenerateError::UnknownResourceType {
                    directory: directory.to_string(),
                }
            })?,
        };

        if file_name.contains('/') {
            return Err(nested_directory(path, directory));
        }

        let qualifiers = qualifiers_of(directory, &qualifier_tokens)?;
        add_variant(
            &mut collected,
            resource_type,
            base_name(file_name),
            qualifiers,
            path,
        )?;
    }

    Ok(collected)
}

fn collect_value_table(
    collected: &mut CollectedResources,
    path: &str,
    qualifiers: QualifierSet,
    values: &ValueTables,
) -> Result<(), GenerateError> {
    if !is_value_table(path) {
        return Err(match path.split_once('/') {
            Some((directory, file_name)) if file_name.contains('/') => {
                nested_directory(path, directory)
            }
            _ => GenerateError::InvalidResourcePath {
                path: path.to_string(),
                reason: "value tables must be '.xml' files".to_string(),
            },
        });
    }

    let content = values
        .get(path)
        .ok_or_else(|| GenerateError::InvalidResourcePath {
            path: path.to_string(),
            reason: "the content of the value table was not loaded".to_string(),
        })?;
    let declarations =
        parse_value_table(content).map_err(|reason| GenerateError::InvalidValueTable {
            path: path.to_string(),
            reason,
        })?;

    for declaration in declarations {
        add_variant(
            collected,
            declaration.resource_type,
            &declaration.name,
            qualifiers.clone(),
            path,
        )?;
    }
    Ok(())
}

fn add_variant(
    collected: &mut CollectedResources,
    resource_type: ResourceType,
    base_name: &str,
    qualifiers: QualifierSet,
    path: &str,
) -> Result<(), GenerateError> {
    let variants = collected
        .by_type
        .entry(resource_type)
        .or_default()
        .entry(base_name.to_string())
        .or_default();

    if let Some(existing) = variants.iter().find(|item| item.qualifiers == qualifiers) {
        return Err(GenerateError::DuplicateResourceKey {
            resource_type,
            base_name: base_name.to_string(),
            first: existing.path.clone(),
            second: path.to_string(),
        });
    }

    variants.insert(QualifiedResourceItem {
        qualifiers,
        path: path.to_string(),
    });
    Ok(())
}

fn qualifiers_of(directory: &str, tokens: &[&str]) -> Result<QualifierSet, GenerateError> {
    parse_qualifiers(tokens).map_err(|reason| GenerateError::InvalidQualifier {
        directory: directory.to_string(),
        reason,
    })
}

fn nested_directory(path: &str, directory: &str) -> GenerateError {
    GenerateError::InvalidResourcePath {
        path: path.to_string(),
        reason: format!("nested directories are not supported in '{}'", directory),
    }
}

/// File name without its last extension. Names without a stem are kept whole.
fn base_name(file_name: &str) -> &str {
    match file_name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => file_name,
    }
}
