//! Qualifier parsing for resource directory names.
//!
//! A directory such as `drawable-en-rUS-dark-xhdpi` carries a resource type
//! followed by `-`-separated qualifier tokens. Tokens are classified into
//! language, region, theme and density; at most one of each kind is allowed and
//! a region needs a language declared before it.

use std::{fmt, sync::LazyLock};

use regex::Regex;

use crate::runtime::{Density, Theme};

static LANGUAGE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]{2,3}$").expect("valid language regex"));

static REGION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^r[A-Z]{2}$").expect("valid region regex"));

/// A parsed qualifier. Variant order is the canonical order inside a set.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Qualifier {
    Language(String),
    /// Region code without the `r` prefix.
    Region(String),
    Theme(Theme),
    Density(Density),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QualifierKind {
    Language,
    Region,
    Theme,
    Density,
}

impl Qualifier {
    fn kind(&self) -> QualifierKind {
        match self {
            Qualifier::Language(_) => QualifierKind::Language,
            Qualifier::Region(_) => QualifierKind::Region,
            Qualifier::Theme(_) => QualifierKind::Theme,
            Qualifier::Density(_) => QualifierKind::Density,
        }
    }

    /// Classify a single directory token.
    pub fn parse(token: &str) -> Option<Qualifier> {
        if let Some(theme) = [Theme::Light, Theme::Dark]
            .into_iter()
            .find(|t| t.as_str() == token)
        {
            return Some(Qualifier::Theme(theme));
        }
        if let Some(density) = Density::ALL.into_iter().find(|d| d.as_str() == token) {
            return Some(Qualifier::Density(density));
        }
        if LANGUAGE_REGEX.is_match(token) {
            return Some(Qualifier::Language(token.to_string()));
        }
        if REGION_REGEX.is_match(token) {
            return Some(Qualifier::Region(token[1..].to_string()));
        }
        None
    }
}

impl fmt::Display for Qualifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Qualifier::Language(code) => f.write_str(code),
            Qualifier::Region(code) => write!(f, "r{}", code),
            Qualifier::Theme(theme) => f.write_str(theme.as_str()),
            Qualifier::Density(density) => f.write_str(density.as_str()),
        }
    }
}

/// Canonically ordered qualifiers of one resource variant.
///
/// The empty set is the default variant and sorts before every other set.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QualifierSet(Vec<Qualifier>);

impl QualifierSet {
    pub fn new(mut qualifiers: Vec<Qualifier>) -> Self {
        qualifiers.sort();
        Self(qualifiers)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Qualifier> {
        self.0.iter()
    }
}

impl fmt::Display for QualifierSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("default");
        }
        let tokens: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        f.write_str(&tokens.join("-"))
    }
}

/// Why a directory's qualifier tokens were rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QualifierError {
    Unknown(String),
    Repetitive(String, String),
    RegionBeforeLanguage { language: String, region: String },
    RegionWithoutLanguage,
}

impl fmt::Display for QualifierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QualifierError::Unknown(token) => {
                write!(f, "contains unknown qualifier: '{}'.", token)
            }
            QualifierError::Repetitive(first, second) => write!(
                f,
                "contains repetitive qualifiers: '{}' and '{}'.",
                first, second
            ),
            QualifierError::RegionBeforeLanguage { language, region } => write!(
                f,
                "Region qualifier must be declared after language: '{}-{}'.",
                language, region
            ),
            QualifierError::RegionWithoutLanguage => {
                write!(f, "Region qualifier must be used only with language.")
            }
        }
    }
}

/// Parse the qualifier tokens that follow the type in a directory name.
pub fn parse_qualifiers(tokens: &[&str]) -> Result<QualifierSet, QualifierError> {
    let mut parsed: Vec<(&str, Qualifier)> = Vec::with_capacity(tokens.len());

    for &token in tokens {
        let qualifier =
            Qualifier::parse(token).ok_or_else(|| QualifierError::Unknown(token.to_string()))?;
        if let Some((previous, _)) = parsed.iter().find(|(_, q)| q.kind() == qualifier.kind()) {
            return Err(QualifierError::Repetitive(
                previous.to_string(),
                token.to_string(),
            ));
        }
        parsed.push((token, qualifier));
    }

    let position = |kind: QualifierKind| parsed.iter().position(|(_, q)| q.kind() == kind);
    match (
        position(QualifierKind::Language),
        position(QualifierKind::Region),
    ) {
        (None, Some(_)) => return Err(QualifierError::RegionWithoutLanguage),
        (Some(lang), Some(region)) if region < lang => {
            return Err(QualifierError::RegionBeforeLanguage {
                language: parsed[lang].0.to_string(),
                region: parsed[region].0.to_string(),
            });
        }
        _ => {}
    }

    Ok(QualifierSet::new(
        parsed.into_iter().map(|(_, qualifier)| qualifier).collect(),
    ))
}
