use std::{
    collections::{BTreeMap, BTreeSet},
    fmt,
};

use crate::domain::config::OptionalAttr;

/// Position of a [`Term`] in the arena owned by a
/// [`GoDag`](crate::domain::GoDag).
///
/// Links between terms are stored as indices, never as references, so the
/// graph owns every term exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TermIdx(pub(crate) usize);

impl TermIdx {
    /// The raw arena position.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Values of the optional attributes captured for a term.
///
/// Only attributes enabled in the
/// [`LoadOptions`](crate::domain::LoadOptions) are ever populated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionalFields {
    scalars: BTreeMap<OptionalAttr, String>,
    sets: BTreeMap<OptionalAttr, BTreeSet<String>>,
}

impl OptionalFields {
    /// The value of a scalar attribute.
    #[must_use]
    pub fn get(&self, attr: OptionalAttr) -> Option<&str> {
        self.scalars.get(&attr).map(String::as_str)
    }

    /// The values of a multi-valued attribute.
    #[must_use]
    pub fn values(&self, attr: OptionalAttr) -> Option<&BTreeSet<String>> {
        self.sets.get(&attr)
    }

    /// Iterates over every populated scalar attribute.
    pub fn scalars(&self) -> impl Iterator<Item = (OptionalAttr, &str)> {
        self.scalars.iter().map(|(attr, value)| (*attr, value.as_str()))
    }

    /// Iterates over every populated multi-valued attribute.
    pub fn sets(&self) -> impl Iterator<Item = (OptionalAttr, &BTreeSet<String>)> {
        self.sets.iter().map(|(attr, values)| (*attr, values))
    }

    /// Sets a scalar attribute.
    ///
    /// Returns the existing value, unchanged, if the attribute is already set.
    pub(crate) fn set_scalar(&mut self, attr: OptionalAttr, value: String) -> Result<(), &str> {
        if self.scalars.contains_key(&attr) {
            return Err(self.scalars[&attr].as_str());
        }
        self.scalars.insert(attr, value);
        Ok(())
    }

    pub(crate) fn insert(&mut self, attr: OptionalAttr, value: String) {
        self.sets.entry(attr).or_default().insert(value);
    }

    /// Checks whether no attribute is populated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scalars.is_empty() && self.sets.is_empty()
    }
}

/// A `[Term]` stanza as read from the file, before any links are resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermRecord {
    /// Primary identifier, e.g. `GO:0008150`.
    pub id: String,
    /// Alternate identifiers that alias the same term.
    pub alt_ids: Vec<String>,
    /// Display name.
    pub name: String,
    /// Namespace, e.g. `biological_process`.
    pub namespace: String,
    /// Whether the stanza carries `is_obsolete: true`.
    pub is_obsolete: bool,
    /// Raw `is_a` parent identifiers, in file order.
    pub parents: Vec<String>,
    /// Captured optional attributes.
    pub attrs: OptionalFields,
    /// Raw `relationship` targets, keyed by typedef name.
    pub relationships: BTreeMap<String, Vec<String>>,
}

/// A term in an assembled ontology graph.
///
/// Terms are only ever reachable through the graph that owns them; use
/// [`TermView`](crate::domain::TermView) to follow links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    /// Primary identifier.
    pub id: String,
    /// Alternate identifiers; each resolves to this term in the owning graph.
    pub alt_ids: Vec<String>,
    /// Display name.
    pub name: String,
    /// Namespace label.
    pub namespace: String,
    /// Obsolete flag.
    pub is_obsolete: bool,
    /// Captured optional attributes.
    pub attrs: OptionalFields,

    pub(crate) raw_parents: Vec<String>,
    pub(crate) raw_relationships: BTreeMap<String, Vec<String>>,

    pub(crate) parents: Vec<TermIdx>,
    pub(crate) children: Vec<TermIdx>,
    pub(crate) relationship: BTreeMap<String, BTreeSet<TermIdx>>,

    pub(crate) level: Option<usize>,
    pub(crate) depth: Option<usize>,
}

impl Term {
    /// Raw `is_a` identifiers as they appeared in the file.
    #[must_use]
    pub fn parent_ids(&self) -> &[String] {
        &self.raw_parents
    }

    /// Shortest distance to a root, once computed.
    #[must_use]
    pub const fn level(&self) -> Option<usize> {
        self.level
    }

    /// Longest distance to a root, once computed.
    #[must_use]
    pub const fn depth(&self) -> Option<usize> {
        self.depth
    }

    /// Checks whether the term has no parents.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parents.is_empty()
    }

    pub(crate) const fn has_metrics(&self) -> bool {
        self.level.is_some() && self.depth.is_some()
    }
}

impl From<TermRecord> for Term {
    fn from(record: TermRecord) -> Self {
        Self {
            id: record.id,
            alt_ids: record.alt_ids,
            name: record.name,
            namespace: record.namespace,
            is_obsolete: record.is_obsolete,
            attrs: record.attrs,
            raw_parents: record.parents,
            raw_relationships: record.relationships,
            parents: Vec::new(),
            children: Vec::new(),
            relationship: BTreeMap::new(),
            level: None,
            depth: None,
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t", self.id)?;
        if let Some(level) = self.level {
            write!(f, "level-{level:02}\t")?;
        }
        if let Some(depth) = self.depth {
            write!(f, "depth-{depth:02}\t")?;
        }
        write!(f, "{} [{}]", self.name, self.namespace)?;
        if self.is_obsolete {
            f.write_str("obsolete")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str) -> TermRecord {
        TermRecord {
            id: id.to_string(),
            name: "mitochondrion inheritance".to_string(),
            namespace: "biological_process".to_string(),
            ..TermRecord::default()
        }
    }

    #[test]
    fn display_omits_unset_metrics() {
        let term = Term::from(record("GO:0000001"));
        assert_eq!(
            term.to_string(),
            "GO:0000001\tmitochondrion inheritance [biological_process]"
        );
    }

    #[test]
    fn display_pads_metrics() {
        let mut term = Term::from(record("GO:0000001"));
        term.level = Some(3);
        term.depth = Some(12);
        assert_eq!(
            term.to_string(),
            "GO:0000001\tlevel-03\tdepth-12\tmitochondrion inheritance [biological_process]"
        );
    }

    #[test]
    fn display_flags_obsolete() {
        let mut record = record("GO:0000005");
        record.is_obsolete = true;
        assert!(Term::from(record).to_string().ends_with("]obsolete"));
    }

    #[test]
    fn scalar_attribute_is_set_once() {
        let mut fields = OptionalFields::default();
        fields
            .set_scalar(OptionalAttr::Def, "first".to_string())
            .unwrap();

        let existing = fields
            .set_scalar(OptionalAttr::Def, "second".to_string())
            .unwrap_err();

        assert_eq!(existing, "first");
        assert_eq!(fields.get(OptionalAttr::Def), Some("first"));
    }

    #[test]
    fn set_attribute_collects_distinct_values() {
        let mut fields = OptionalFields::default();
        fields.insert(OptionalAttr::Synonym, "a".to_string());
        fields.insert(OptionalAttr::Synonym, "b".to_string());
        fields.insert(OptionalAttr::Synonym, "a".to_string());

        assert_eq!(fields.values(OptionalAttr::Synonym).unwrap().len(), 2);
        assert!(fields.values(OptionalAttr::Xref).is_none());
    }
}
