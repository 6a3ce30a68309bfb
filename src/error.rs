//! Errors raised while turning a resource tree into accessor modules.
//!
//! Every variant is a deterministic input-validation failure: generation aborts
//! on the first one and nothing is written.

use std::fmt;

use crate::core::{qualifier::QualifierError, values::ValueTableError};
use crate::runtime::ResourceType;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// Two files resolve to the same base name and qualifier set.
    DuplicateResourceKey {
        resource_type: ResourceType,
        base_name: String,
        first: String,
        second: String,
    },
    /// Two distinct base names normalize to the same identifier.
    IdentifierCollision {
        resource_type: ResourceType,
        identifier: String,
        first: String,
        second: String,
    },
    /// A directory suffix could not be parsed as a qualifier set.
    InvalidQualifier {
        directory: String,
        reason: QualifierError,
    },
    /// The directory prefix names no known resource type.
    UnknownResourceType { directory: String },
    /// `string*` directories; string tables belong in `values/`.
    ForbiddenDirectory { directory: String },
    /// A directory kind that takes no qualifiers was given some.
    QualifiersNotSupported { kind: String, directory: String },
    /// A file that is not `<type-dir>/<file>` shaped.
    InvalidResourcePath { path: String, reason: String },
    /// A `values*/*.xml` table that could not be read as declarations.
    InvalidValueTable {
        path: String,
        reason: ValueTableError,
    },
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::DuplicateResourceKey {
                resource_type,
                base_name,
                first,
                second,
            } => write!(
                f,
                "Duplicate {} resource '{}': '{}' and '{}' resolve to the same qualifiers.",
                resource_type, base_name, first, second
            ),
            GenerateError::IdentifierCollision {
                resource_type,
                identifier,
                first,
                second,
            } => write!(
                f,
                "Ambiguous {} resource names '{}' and '{}': both map to the identifier '{}'.",
                resource_type, first, second, identifier
            ),
            GenerateError::InvalidQualifier { directory, reason } => match reason {
                QualifierError::Unknown(_) | QualifierError::Repetitive(..) => {
                    write!(f, "The '{}' directory {}", directory, reason)
                }
                _ => write!(f, "The '{}' directory is invalid. {}", directory, reason),
            },
            GenerateError::UnknownResourceType { directory } => {
                write!(f, "Unknown resource type: '{}'.", directory)
            }
            GenerateError::ForbiddenDirectory { directory } => write!(
                f,
                "Forbidden directory name '{}'! String resources should be declared in 'values/strings.xml'.",
                directory
            ),
            GenerateError::QualifiersNotSupported { kind, directory } => write!(
                f,
                "The '{}' directory doesn't support qualifiers: '{}'.",
                kind, directory
            ),
            GenerateError::InvalidResourcePath { path, reason } => {
                write!(f, "Invalid resource path '{}': {}.", path, reason)
            }
            GenerateError::InvalidValueTable { path, reason } => {
                write!(f, "{} is not valid. {}", path, reason)
            }
        }
    }
}

impl std::error::Error for GenerateError {}
