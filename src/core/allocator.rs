//! Identifier allocation for resource base names.
//!
//! Base names come straight from file names, so they may contain characters
//! that are not valid in a Rust identifier, start with a digit, or be keywords.
//! Each base name is mapped to a unique identifier within its resource type;
//! two names landing on the same identifier are reported, never merged.

use std::{cmp::Ordering, collections::BTreeMap, fmt};

use crate::{
    core::collector::{QualifiedResourceItem, ResourceGroups},
    error::GenerateError,
    runtime::ResourceType,
};

/// Keywords that can be used as raw identifiers (`r#type`).
const RAW_KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do",
    "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in",
    "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "static", "struct", "trait", "true", "try", "type", "typeof", "unsafe",
    "unsized", "use", "virtual", "where", "while", "yield",
];

/// Keywords that cannot be raw identifiers; these get a `_` suffix instead.
const RESERVED_PATH_KEYWORDS: &[&str] = &["crate", "self", "Self", "super"];

/// A language-safe property identifier.
///
/// Ordering and equality use the logical name, which is also the lookup key in
/// generated code. `Display` renders the form to write into source.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    name: String,
}

impl Identifier {
    /// Derive the identifier of a base name.
    pub fn from_base_name(base_name: &str) -> Self {
        let mut name: String = base_name
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
            .collect();

        if name.is_empty() || name.starts_with(|c: char| c.is_ascii_digit()) {
            name.insert(0, '_');
        }
        if name == "_" {
            name.push('_');
        }
        if RESERVED_PATH_KEYWORDS.contains(&name.as_str()) {
            name.push('_');
        }

        Self { name }
    }

    /// Lookup key of the identifier (never carries the `r#` marker).
    pub fn as_str(&self) -> &str {
        &self.name
    }

    pub fn is_raw(&self) -> bool {
        RAW_KEYWORDS.contains(&self.name.as_str())
    }
}

impl Ord for Identifier {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}

impl PartialOrd for Identifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_raw() {
            write!(f, "r#{}", self.name)
        } else {
            f.write_str(&self.name)
        }
    }
}

/// One logical resource with its allocated identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceEntry {
    pub identifier: Identifier,
    pub base_name: String,
    /// Stable external key, `"<type>:<base name>"`.
    pub uri: String,
    /// Non-empty, ordered by qualifiers then path.
    pub items: Vec<QualifiedResourceItem>,
}

/// Allocate identifiers for every resource of one type.
///
/// Returns entries sorted by identifier under ordinal comparison.
pub fn allocate_identifiers(
    resource_type: ResourceType,
    groups: ResourceGroups,
) -> Result<Vec<ResourceEntry>, GenerateError> {
    let mut allocated: BTreeMap<Identifier, ResourceEntry> = BTreeMap::new();

    for (base_name, items) in groups {
        let identifier = Identifier::from_base_name(&base_name);

        if let Some(existing) = allocated.get(&identifier) {
            return Err(GenerateError::IdentifierCollision {
                resource_type,
                identifier: identifier.as_str().to_string(),
                first: existing.base_name.clone(),
                second: base_name,
            });
        }

        let entry = ResourceEntry {
            identifier: identifier.clone(),
            uri: format!("{}:{}", resource_type, base_name),
            base_name,
            items: items.into_iter().collect(),
        };
        allocated.insert(identifier, entry);
    }

    Ok(allocated.into_values().collect())
}
