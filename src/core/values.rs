//! Value tables: `values*/*.xml` files declaring strings, string arrays and
//! plurals.
//!
//! Only the declarations are read (element kind and `name` attribute); the
//! text content is opaque to the generator. A table looks like:
//!
//! ```xml
//! <resources>
//!     <string name="app_name">Demo</string>
//!     <string-array name="planets"><item>Mercury</item></string-array>
//!     <plurals name="apples"><item quantity="one">%d apple</item></plurals>
//! </resources>
//! ```

use std::{collections::BTreeSet, fmt};

use quick_xml::{
    Reader,
    events::{BytesStart, Event},
};

use crate::runtime::ResourceType;

const ROOT_ELEMENT: &[u8] = b"resources";
const NAME_ATTRIBUTE: &str = "name";

/// One resource declared in a value table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueDeclaration {
    pub resource_type: ResourceType,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueTableError {
    /// Not well-formed XML, or not a `<resources>` document.
    Malformed,
    /// An element that names no resource type at all.
    UnknownResourceType(String),
    /// A file resource type (`drawable`, `font`) used as a table element.
    UnknownStringResourceType(String),
    DuplicatedKey(String),
    MissingName,
}

impl fmt::Display for ValueTableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueTableError::Malformed => write!(f, "Check the file content."),
            ValueTableError::UnknownResourceType(tag) => {
                write!(f, "Unknown resource type: '{}'.", tag)
            }
            ValueTableError::UnknownStringResourceType(tag) => {
                write!(f, "Unknown string resource type: '{}'.", tag)
            }
            ValueTableError::DuplicatedKey(name) => write!(f, "Duplicated key '{}'.", name),
            ValueTableError::MissingName => {
                write!(f, "Attribute '{}' not found.", NAME_ATTRIBUTE)
            }
        }
    }
}

/// Read the declarations of one table, in document order.
pub fn parse_value_table(content: &str) -> Result<Vec<ValueDeclaration>, ValueTableError> {
    let mut reader = Reader::from_str(content);
    let mut declarations = Vec::new();
    let mut seen: BTreeSet<(ResourceType, String)> = BTreeSet::new();
    let mut in_root = false;
    let mut root_closed = false;

    loop {
        let event = reader.read_event().map_err(|_| ValueTableError::Malformed)?;
        match event {
            Event::Start(element) if !in_root => {
                if root_closed || element.name().as_ref() != ROOT_ELEMENT {
                    return Err(ValueTableError::Malformed);
                }
                in_root = true;
            }
            Event::Empty(element) if !in_root => {
                if root_closed || element.name().as_ref() != ROOT_ELEMENT {
                    return Err(ValueTableError::Malformed);
                }
                root_closed = true;
            }
            Event::Start(element) => {
                let declaration = declaration(&element)?;
                reader
                    .read_to_end(element.name())
                    .map_err(|_| ValueTableError::Malformed)?;
                push_unique(&mut declarations, &mut seen, declaration)?;
            }
            Event::Empty(element) => {
                let declaration = declaration(&element)?;
                push_unique(&mut declarations, &mut seen, declaration)?;
            }
            Event::End(_) => {
                // The reader rejects mismatched end tags; this one closes the root.
                in_root = false;
                root_closed = true;
            }
            Event::Text(text) => {
                if !text.iter().all(u8::is_ascii_whitespace) {
                    return Err(ValueTableError::Malformed);
                }
            }
            Event::CData(_) => return Err(ValueTableError::Malformed),
            Event::Comment(_) | Event::Decl(_) | Event::PI(_) | Event::DocType(_) => {}
            Event::Eof => break,
        }
    }

    if in_root || !root_closed {
        return Err(ValueTableError::Malformed);
    }
    Ok(declarations)
}

fn declaration(element: &BytesStart<'_>) -> Result<ValueDeclaration, ValueTableError> {
    let tag = std::str::from_utf8(element.name().as_ref())
        .map_err(|_| ValueTableError::Malformed)?
        .to_string();

    let resource_type = match ResourceType::from_name(&tag) {
        Some(ty) if ty.is_value() => ty,
        Some(_) => return Err(ValueTableError::UnknownStringResourceType(tag)),
        None => return Err(ValueTableError::UnknownResourceType(tag)),
    };

    let name = element
        .try_get_attribute(NAME_ATTRIBUTE)
        .map_err(|_| ValueTableError::Malformed)?
        .ok_or(ValueTableError::MissingName)?
        .unescape_value()
        .map_err(|_| ValueTableError::Malformed)?
        .into_owned();
    if name.is_empty() {
        return Err(ValueTableError::MissingName);
    }

    Ok(ValueDeclaration {
        resource_type,
        name,
    })
}

fn push_unique(
    declarations: &mut Vec<ValueDeclaration>,
    seen: &mut BTreeSet<(ResourceType, String)>,
    declaration: ValueDeclaration,
) -> Result<(), ValueTableError> {
    if !seen.insert((declaration.resource_type, declaration.name.clone())) {
        return Err(ValueTableError::DuplicatedKey(declaration.name));
    }
    declarations.push(declaration);
    Ok(())
}
