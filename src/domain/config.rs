use std::{collections::BTreeSet, fmt, path::Path, str::FromStr};

use serde::{Deserialize, Serialize};

/// Field names that every load captures, regardless of configuration.
pub const REQUIRED_FIELDS: [&str; 6] = ["id", "alt_id", "name", "namespace", "is_a", "is_obsolete"];

/// An optional `[Term]` field that may be captured at load time.
///
/// Not loading these fields by default saves space and time; each one has to
/// be switched on explicitly through [`LoadOptions`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OptionalAttr {
    /// `comment`: free text.
    Comment,
    /// `def`: the textual definition of the term.
    Def,
    /// `is_class_level`
    IsClassLevel,
    /// `is_metadata_tag`
    IsMetadataTag,
    /// `is_transitive`
    IsTransitive,
    /// `transitive_over`
    TransitiveOver,
    /// `consider`: suggested replacements for an obsolete term.
    Consider,
    /// `replaced_by`: the replacement for an obsolete term.
    ReplacedBy,
    /// `subset`: slim memberships.
    Subset,
    /// `synonym`
    Synonym,
    /// `xref`: cross references into other databases.
    Xref,
    /// `relationship`: typed edges to other terms, `<typedef> <target-id>`.
    Relationship,
}

/// How the values of an [`OptionalAttr`] are stored on a term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrShape {
    /// Set at most once per term; a second occurrence is a parse error.
    Scalar,
    /// Every occurrence is collected into a set.
    Set,
    /// Collected into a map from typedef name to target identifiers.
    Nested,
}

impl OptionalAttr {
    /// Every optional attribute, in declaration order.
    pub const ALL: [Self; 12] = [
        Self::Comment,
        Self::Def,
        Self::IsClassLevel,
        Self::IsMetadataTag,
        Self::IsTransitive,
        Self::TransitiveOver,
        Self::Consider,
        Self::ReplacedBy,
        Self::Subset,
        Self::Synonym,
        Self::Xref,
        Self::Relationship,
    ];

    /// The field name as it appears in an OBO file.
    #[must_use]
    pub const fn field_name(self) -> &'static str {
        match self {
            Self::Comment => "comment",
            Self::Def => "def",
            Self::IsClassLevel => "is_class_level",
            Self::IsMetadataTag => "is_metadata_tag",
            Self::IsTransitive => "is_transitive",
            Self::TransitiveOver => "transitive_over",
            Self::Consider => "consider",
            Self::ReplacedBy => "replaced_by",
            Self::Subset => "subset",
            Self::Synonym => "synonym",
            Self::Xref => "xref",
            Self::Relationship => "relationship",
        }
    }

    /// The storage shape of this attribute.
    #[must_use]
    pub const fn shape(self) -> AttrShape {
        match self {
            Self::Comment
            | Self::Def
            | Self::IsClassLevel
            | Self::IsMetadataTag
            | Self::IsTransitive
            | Self::TransitiveOver => AttrShape::Scalar,
            Self::Consider | Self::ReplacedBy | Self::Subset | Self::Synonym | Self::Xref => {
                AttrShape::Set
            }
            Self::Relationship => AttrShape::Nested,
        }
    }

    /// Looks up the attribute for a field name read from a file.
    ///
    /// Unlike [`FromStr`], this does not accept the `defn` alias.
    #[must_use]
    pub fn from_field_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|attr| attr.field_name() == name)
    }
}

impl fmt::Display for OptionalAttr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

impl FromStr for OptionalAttr {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // `defn` is the name the definition is stored under, so accept it too
        let name = if s == "defn" { "def" } else { s };
        Self::from_field_name(name).ok_or_else(|| ConfigError::UnknownAttribute(s.to_string()))
    }
}

/// Errors raised while building or reading [`LoadOptions`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The name does not match any supported optional attribute.
    #[error("unknown optional attribute '{0}'")]
    UnknownAttribute(String),
    /// The options file could not be read or written.
    #[error("failed to access options file: {0}")]
    Io(#[from] std::io::Error),
    /// The options file is not valid TOML.
    #[error("failed to parse options file: {0}")]
    Parse(#[from] toml::de::Error),
    /// The options could not be serialized.
    #[error("failed to serialize options: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Options controlling what an ontology load captures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Versions", into = "Versions")]
pub struct LoadOptions {
    optional_attrs: BTreeSet<OptionalAttr>,

    /// Keep terms flagged `is_obsolete: true` in the assembled graph.
    pub load_obsolete: bool,
}

impl LoadOptions {
    /// Builds options that capture the named optional attributes.
    ///
    /// Names of the always-loaded fields are ignored. `defn` is accepted as an
    /// alias of `def`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownAttribute`] for a name that is neither a
    /// required field nor a supported optional attribute.
    pub fn with_attrs<I, S>(names: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut options = Self::default();
        for name in names {
            let name = name.as_ref();
            if REQUIRED_FIELDS.contains(&name) {
                continue;
            }
            options.optional_attrs.insert(name.parse()?);
        }
        Ok(options)
    }

    /// Loads the options from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML is invalid, or an
    /// attribute name is unknown.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Saves the options to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Enables capture of an optional attribute.
    ///
    /// Returns `true` if it was not already enabled.
    pub fn enable(&mut self, attr: OptionalAttr) -> bool {
        self.optional_attrs.insert(attr)
    }

    /// Sets whether obsolete terms are retained.
    #[must_use]
    pub fn with_obsolete(mut self, value: bool) -> Self {
        self.load_obsolete = value;
        self
    }

    /// Checks whether an optional attribute is captured.
    #[must_use]
    pub fn is_enabled(&self, attr: OptionalAttr) -> bool {
        self.optional_attrs.contains(&attr)
    }

    /// The enabled optional attributes.
    #[must_use]
    pub const fn optional_attrs(&self) -> &BTreeSet<OptionalAttr> {
        &self.optional_attrs
    }
}

/// The serialized versions of the load options.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        optional_attrs: Vec<String>,

        #[serde(default)]
        load_obsolete: bool,
    },
}

impl TryFrom<Versions> for LoadOptions {
    type Error = ConfigError;

    fn try_from(versions: Versions) -> Result<Self, Self::Error> {
        match versions {
            Versions::V1 {
                optional_attrs,
                load_obsolete,
            } => Ok(Self::with_attrs(optional_attrs)?.with_obsolete(load_obsolete)),
        }
    }
}

impl From<LoadOptions> for Versions {
    fn from(options: LoadOptions) -> Self {
        Self::V1 {
            optional_attrs: options
                .optional_attrs
                .iter()
                .map(ToString::to_string)
                .collect(),
            load_obsolete: options.load_obsolete,
        }
    }
}
