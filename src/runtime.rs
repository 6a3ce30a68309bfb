//! Runtime types referenced by generated accessor modules.
//!
//! Everything here is constructible in `const` context so that generated shard
//! modules can hold their descriptors in plain `static` items, built at compile
//! time and read-only afterwards.

use std::fmt;

/// Kind of resource an accessor points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ResourceType {
    Drawable,
    String,
    StringArray,
    Plurals,
    Font,
}

impl ResourceType {
    /// All accessor-generating types, in output order.
    pub const ALL: [ResourceType; 5] = [
        ResourceType::Drawable,
        ResourceType::String,
        ResourceType::StringArray,
        ResourceType::Plurals,
        ResourceType::Font,
    ];

    /// URI scheme of the type. File types also use it as their directory name.
    pub const fn as_str(self) -> &'static str {
        match self {
            ResourceType::Drawable => "drawable",
            ResourceType::String => "string",
            ResourceType::StringArray => "string-array",
            ResourceType::Plurals => "plurals",
            ResourceType::Font => "font",
        }
    }

    /// Name of the type in generated modules and functions (`string_array`).
    pub const fn module_name(self) -> &'static str {
        match self {
            ResourceType::StringArray => "string_array",
            other => other.as_str(),
        }
    }

    /// Variant name as written in generated code.
    pub const fn variant_name(self) -> &'static str {
        match self {
            ResourceType::Drawable => "Drawable",
            ResourceType::String => "String",
            ResourceType::StringArray => "StringArray",
            ResourceType::Plurals => "Plurals",
            ResourceType::Font => "Font",
        }
    }

    /// True for types declared as elements of `values*/*.xml` tables rather
    /// than as files of their own.
    pub const fn is_value(self) -> bool {
        matches!(
            self,
            ResourceType::String | ResourceType::StringArray | ResourceType::Plurals
        )
    }

    /// File type stored in the directory `name`.
    pub fn from_dir_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|ty| !ty.is_value() && ty.as_str() == name)
    }

    /// Any type by its URI scheme.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ty| ty.as_str() == name)
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub const fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub const fn variant_name(self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }
}

/// Screen density buckets, ordered from lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Density {
    Ldpi,
    Mdpi,
    Hdpi,
    Xhdpi,
    Xxhdpi,
    Xxxhdpi,
}

impl Density {
    pub const ALL: [Density; 6] = [
        Density::Ldpi,
        Density::Mdpi,
        Density::Hdpi,
        Density::Xhdpi,
        Density::Xxhdpi,
        Density::Xxxhdpi,
    ];

    /// Nominal dots per inch of the bucket.
    pub const fn dpi(self) -> u16 {
        match self {
            Density::Ldpi => 120,
            Density::Mdpi => 160,
            Density::Hdpi => 240,
            Density::Xhdpi => 320,
            Density::Xxhdpi => 480,
            Density::Xxxhdpi => 640,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Density::Ldpi => "ldpi",
            Density::Mdpi => "mdpi",
            Density::Hdpi => "hdpi",
            Density::Xhdpi => "xhdpi",
            Density::Xxhdpi => "xxhdpi",
            Density::Xxxhdpi => "xxxhdpi",
        }
    }

    pub const fn variant_name(self) -> &'static str {
        match self {
            Density::Ldpi => "Ldpi",
            Density::Mdpi => "Mdpi",
            Density::Hdpi => "Hdpi",
            Density::Xhdpi => "Xhdpi",
            Density::Xxhdpi => "Xxhdpi",
            Density::Xxxhdpi => "Xxxhdpi",
        }
    }
}

/// A tag narrowing which variant of a resource applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Qualifier {
    /// ISO 639 language code, e.g. `en`.
    Language(&'static str),
    /// ISO 3166 region code without the `r` prefix, e.g. `US`.
    Region(&'static str),
    Theme(Theme),
    Density(Density),
}

/// One file variant of a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResourceItem {
    qualifiers: &'static [Qualifier],
    path: &'static str,
}

impl ResourceItem {
    pub const fn new(qualifiers: &'static [Qualifier], path: &'static str) -> Self {
        Self { qualifiers, path }
    }

    /// Qualifiers of this variant; empty for the default variant.
    pub const fn qualifiers(&self) -> &'static [Qualifier] {
        self.qualifiers
    }

    /// Path of the file, relative to the resource root (plus the configured prefix).
    pub const fn path(&self) -> &'static str {
        self.path
    }

    pub const fn is_default(&self) -> bool {
        self.qualifiers.is_empty()
    }
}

/// Stable description of one logical resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResourceDescriptor {
    resource_type: ResourceType,
    uri: &'static str,
    items: &'static [ResourceItem],
}

impl ResourceDescriptor {
    pub const fn new(
        resource_type: ResourceType,
        uri: &'static str,
        items: &'static [ResourceItem],
    ) -> Self {
        Self {
            resource_type,
            uri,
            items,
        }
    }

    pub const fn resource_type(&self) -> ResourceType {
        self.resource_type
    }

    /// Stable key of the resource, `"<type>:<name>"`.
    pub const fn uri(&self) -> &'static str {
        self.uri
    }

    /// Logical name of the resource (the part of the URI after the type).
    pub fn name(&self) -> &'static str {
        match self.uri.split_once(':') {
            Some((_, name)) => name,
            None => self.uri,
        }
    }

    pub const fn items(&self) -> &'static [ResourceItem] {
        self.items
    }
}

impl fmt::Display for ResourceDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.uri)
    }
}
