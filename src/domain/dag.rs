//! The assembled ontology graph.
//!
//! [`GoDag`] owns every [`Term`] in an arena. Parent, child and relationship
//! links are arena indices, so the graph has no ownership cycles even though
//! the term hierarchy links in both directions.
//!
//! Assembly runs in a fixed order:
//!
//! 1. drop obsolete terms (unless requested) and index every primary and
//!    alternate identifier
//! 2. resolve `is_a` and `relationship` identifiers into links
//! 3. build the inverse (children) adjacency
//! 4. add inverse relationship edges from typedef `inverse_of` metadata
//! 5. reject cyclic `is_a` chains, then compute level and depth

use std::{
    collections::{BTreeMap, BTreeSet, HashMap},
    io::{self, BufRead},
    path::{Path, PathBuf},
};

use petgraph::{
    algo::{is_cyclic_directed, tarjan_scc},
    graphmap::DiGraphMap,
};
use tracing::instrument;

use crate::{
    domain::{
        config::{ConfigError, LoadOptions},
        term::{Term, TermIdx, TermRecord},
        typedef::Typedef,
        view::TermView,
    },
    storage::{OboReader, ParseError},
};

/// Errors that abort an ontology load.
///
/// No partial graph is ever returned alongside one of these.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The input file does not exist.
    #[error(
        "could not read {}: download the obo file first (e.g. http://geneontology.org/ontology/go-basic.obo)",
        .0.display()
    )]
    NotFound(PathBuf),
    /// The input file could not be opened.
    #[error("failed to open obo file: {0}")]
    Io(#[from] io::Error),
    /// The input is structurally malformed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The load options are invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The `is_a` hierarchy contains cycles; each entry lists the identifiers
    /// of one cycle.
    #[error("is_a hierarchy contains cycles: {0:?}")]
    Cycle(Vec<Vec<String>>),
}

/// An ontology loaded into a directed acyclic graph of terms.
///
/// The graph is immutable once constructed.
#[derive(Debug, Clone)]
pub struct GoDag {
    source: String,
    format_version: Option<String>,
    data_version: Option<String>,
    options: LoadOptions,

    /// Term arena. Each term appears exactly once.
    terms: Vec<Term>,

    /// Primary and alternate identifiers, all mapping into `terms`.
    index: HashMap<String, TermIdx>,

    typedefs: BTreeMap<String, Typedef>,

    /// Identifiers referenced by `is_a` or `relationship` but not defined.
    unresolved: BTreeSet<String>,
}

impl GoDag {
    /// Loads and assembles an ontology from an OBO file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or unreadable, is structurally
    /// malformed, or its `is_a` hierarchy is cyclic.
    #[instrument(skip(options))]
    pub fn load(path: &Path, options: &LoadOptions) -> Result<Self, LoadError> {
        tracing::info!("load obo file {}", path.display());
        let dag = Self::from_obo(OboReader::open(path, options)?, options)?;
        tracing::info!("{}", dag.version_summary());
        Ok(dag)
    }

    /// Loads and assembles an ontology from any buffered source.
    ///
    /// `source` labels the input in errors and in the version summary.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is structurally malformed or its `is_a`
    /// hierarchy is cyclic.
    pub fn from_reader<R: BufRead>(
        reader: R,
        source: &str,
        options: &LoadOptions,
    ) -> Result<Self, LoadError> {
        Self::from_obo(OboReader::new(reader, source, options), options)
    }

    /// Drains a reader and assembles the graph from its records.
    ///
    /// # Errors
    ///
    /// Returns the first parse error, or [`LoadError::Cycle`].
    pub fn from_obo<R: BufRead>(
        mut reader: OboReader<R>,
        options: &LoadOptions,
    ) -> Result<Self, LoadError> {
        let records = reader.by_ref().collect::<Result<Vec<_>, _>>()?;

        let source = reader.path().to_string();
        let format_version = reader.format_version().map(str::to_string);
        let data_version = reader.data_version().map(str::to_string);
        let typedefs = reader.into_typedefs();

        let mut dag = Self {
            source,
            format_version,
            data_version,
            options: options.clone(),
            terms: Vec::with_capacity(records.len()),
            index: HashMap::with_capacity(records.len()),
            typedefs,
            unresolved: BTreeSet::new(),
        };
        dag.assemble(records)?;
        Ok(dag)
    }

    fn assemble(&mut self, records: Vec<TermRecord>) -> Result<(), LoadError> {
        self.insert_records(records);
        self.resolve_links();
        self.link_children();
        self.invert_relationships();
        self.check_acyclic()?;
        self.propagate_metrics();

        if !self.unresolved.is_empty() {
            tracing::warn!(
                "{} referenced identifier(s) not found: {:?}",
                self.unresolved.len(),
                self.unresolved
            );
        }
        Ok(())
    }

    fn insert_records(&mut self, records: Vec<TermRecord>) {
        for record in records {
            if record.is_obsolete && !self.options.load_obsolete {
                continue;
            }

            let idx = match self.index.get(&record.id) {
                Some(&existing) if self.terms[existing.0].id == record.id => {
                    tracing::warn!("term {} is defined more than once; keeping the last", record.id);
                    for alt_id in &self.terms[existing.0].alt_ids {
                        if self.index.get(alt_id) == Some(&existing) {
                            self.index.remove(alt_id);
                        }
                    }
                    self.terms[existing.0] = Term::from(record);
                    existing
                }
                _ => {
                    self.terms.push(Term::from(record));
                    TermIdx(self.terms.len() - 1)
                }
            };

            let term = &self.terms[idx.0];
            self.index.insert(term.id.clone(), idx);
            for alt_id in &term.alt_ids {
                self.index.insert(alt_id.clone(), idx);
            }
        }
    }

    fn resolve(&mut self, ids: &[String]) -> Vec<TermIdx> {
        let mut resolved = Vec::with_capacity(ids.len());
        for id in ids {
            match self.index.get(id) {
                Some(idx) if !resolved.contains(idx) => resolved.push(*idx),
                Some(_) => {}
                None => {
                    self.unresolved.insert(id.clone());
                }
            }
        }
        resolved
    }

    fn resolve_links(&mut self) {
        for i in 0..self.terms.len() {
            let raw_parents = self.terms[i].raw_parents.clone();
            let parents = self.resolve(&raw_parents);

            let raw_relationships = self.terms[i].raw_relationships.clone();
            let mut relationship = BTreeMap::new();
            for (typedef, targets) in &raw_relationships {
                let targets: BTreeSet<_> = self.resolve(targets).into_iter().collect();
                relationship.insert(typedef.clone(), targets);
            }

            let term = &mut self.terms[i];
            term.parents = parents;
            term.relationship = relationship;
        }
    }

    fn link_children(&mut self) {
        for i in 0..self.terms.len() {
            let child = TermIdx(i);
            for parent in self.terms[i].parents.clone() {
                let children = &mut self.terms[parent.0].children;
                if !children.contains(&child) {
                    children.push(child);
                }
            }
        }
    }

    fn invert_relationships(&mut self) {
        let mut inverted = Vec::new();
        let mut unknown_typedefs = BTreeSet::new();

        for (i, term) in self.terms.iter().enumerate() {
            for (typedef, targets) in &term.relationship {
                let Some(definition) = self.typedefs.get(typedef) else {
                    unknown_typedefs.insert(typedef.as_str());
                    continue;
                };
                let Some(inverse) = definition.inverse_of.as_ref() else {
                    continue;
                };
                for target in targets {
                    inverted.push((*target, inverse.clone(), TermIdx(i)));
                }
            }
        }

        if !unknown_typedefs.is_empty() {
            tracing::warn!("relationships use undeclared typedef(s): {unknown_typedefs:?}");
        }

        for (target, inverse, source) in inverted {
            self.terms[target.0]
                .relationship
                .entry(inverse)
                .or_default()
                .insert(source);
        }
    }

    fn check_acyclic(&self) -> Result<(), LoadError> {
        let mut graph = DiGraphMap::<TermIdx, ()>::with_capacity(self.terms.len(), self.terms.len());
        for (i, term) in self.terms.iter().enumerate() {
            graph.add_node(TermIdx(i));
            for parent in &term.parents {
                graph.add_edge(TermIdx(i), *parent, ());
            }
        }

        if !is_cyclic_directed(&graph) {
            return Ok(());
        }

        let mut cycles: Vec<Vec<String>> = tarjan_scc(&graph)
            .into_iter()
            .filter(|component| {
                component.len() > 1 || graph.contains_edge(component[0], component[0])
            })
            .map(|component| {
                let mut ids: Vec<_> = component
                    .iter()
                    .map(|idx| self.terms[idx.0].id.clone())
                    .collect();
                ids.sort();
                ids
            })
            .collect();
        cycles.sort();
        Err(LoadError::Cycle(cycles))
    }

    /// Computes level and depth for every term that lacks them.
    ///
    /// Each term is evaluated once, after all of its parents, using an explicit
    /// stack. The `is_a` graph must be acyclic.
    pub(crate) fn propagate_metrics(&mut self) {
        let mut stack = Vec::new();
        for start in 0..self.terms.len() {
            if self.terms[start].has_metrics() {
                continue;
            }

            stack.push((TermIdx(start), false));
            while let Some((idx, parents_done)) = stack.pop() {
                if self.terms[idx.0].has_metrics() {
                    continue;
                }

                if !parents_done {
                    stack.push((idx, true));
                    stack.extend(
                        self.terms[idx.0]
                            .parents
                            .iter()
                            .filter(|parent| !self.terms[parent.0].has_metrics())
                            .map(|parent| (*parent, false)),
                    );
                    continue;
                }

                let (level, depth) = self.metrics_from_parents(idx);
                let term = &mut self.terms[idx.0];
                term.level = Some(level);
                term.depth = Some(depth);
            }
        }
    }

    fn metrics_from_parents(&self, idx: TermIdx) -> (usize, usize) {
        let parents = &self.terms[idx.0].parents;
        let level = parents
            .iter()
            .filter_map(|parent| self.terms[parent.0].level)
            .min()
            .map_or(0, |level| level + 1);
        let depth = parents
            .iter()
            .filter_map(|parent| self.terms[parent.0].depth)
            .max()
            .map_or(0, |depth| depth + 1);
        (level, depth)
    }
}

impl GoDag {
    /// Looks up a term by primary or alternate identifier.
    #[must_use]
    pub fn term(&self, id: &str) -> Option<TermView<'_>> {
        self.index.get(id).map(|idx| self.view(*idx))
    }

    /// Checks whether an identifier (primary or alternate) is known.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Iterates over every term once, in file order.
    pub fn terms(&self) -> impl Iterator<Item = TermView<'_>> {
        (0..self.terms.len()).map(|i| self.view(TermIdx(i)))
    }

    /// Iterates over every term without parents, in file order.
    pub fn roots(&self) -> impl Iterator<Item = TermView<'_>> {
        self.terms().filter(|term| term.is_root())
    }

    /// Iterates over every indexed identifier and the term it resolves to.
    pub fn ids(&self) -> impl Iterator<Item = (&str, TermView<'_>)> {
        self.index
            .iter()
            .map(|(id, idx)| (id.as_str(), self.view(*idx)))
    }

    /// The number of distinct terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Checks whether the graph holds no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// The number of indexed identifiers, counting alternate identifiers.
    #[must_use]
    pub fn id_count(&self) -> usize {
        self.index.len()
    }

    /// The typedef table, keyed by identifier.
    #[must_use]
    pub const fn typedefs(&self) -> &BTreeMap<String, Typedef> {
        &self.typedefs
    }

    /// The `format-version` header value.
    #[must_use]
    pub fn format_version(&self) -> Option<&str> {
        self.format_version.as_deref()
    }

    /// The `data-version` header value.
    #[must_use]
    pub fn data_version(&self) -> Option<&str> {
        self.data_version.as_deref()
    }

    /// The label of the source the graph was loaded from.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The options the graph was loaded with.
    #[must_use]
    pub const fn options(&self) -> &LoadOptions {
        &self.options
    }

    /// Identifiers referenced by `is_a` or `relationship` that are not in
    /// the graph. Links to them were dropped.
    #[must_use]
    pub const fn unresolved(&self) -> &BTreeSet<String> {
        &self.unresolved
    }

    /// A one-line description of the loaded release.
    ///
    /// For example `go-basic.obo: fmt(1.2) rel(2016-07-07) 47,000 GO Terms`.
    /// The count includes alternate identifiers.
    #[must_use]
    pub fn version_summary(&self) -> String {
        let release = self
            .data_version()
            .map(|version| version.strip_prefix("releases/").unwrap_or(version));
        format!(
            "{}: fmt({}) rel({}) {} GO Terms",
            self.source,
            self.format_version().unwrap_or("None"),
            release.unwrap_or("None"),
            group_thousands(self.id_count())
        )
    }

    pub(crate) const fn view(&self, idx: TermIdx) -> TermView<'_> {
        TermView::new(self, idx)
    }

    pub(crate) fn arena(&self, idx: TermIdx) -> &Term {
        &self.terms[idx.0]
    }

    pub(crate) fn idx_of(&self, id: &str) -> Option<TermIdx> {
        self.index.get(id).copied()
    }
}

fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use test_case::test_case;

    use super::*;
    use crate::fixtures::{self, load};

    #[test]
    fn minimal_file_assembles() {
        let dag = load(fixtures::MINIMAL, &LoadOptions::default());

        assert_eq!(dag.len(), 2);
        let root = dag.term("GO:0000001").unwrap();
        let child = dag.term("GO:0000002").unwrap();

        assert_eq!((root.level(), root.depth()), (Some(0), Some(0)));
        assert_eq!((child.level(), child.depth()), (Some(1), Some(1)));
        assert_eq!(
            root.children().map(|c| c.id()).collect::<Vec<_>>(),
            vec!["GO:0000002"]
        );
    }

    #[test]
    fn alt_id_resolves_to_same_term() {
        let dag = load(fixtures::ALT_AND_OBSOLETE, &LoadOptions::default());

        let primary = dag.term("GO:0000003").unwrap();
        let alias = dag.term("GO:0000099").unwrap();

        assert_eq!(primary, alias);
        assert!(std::ptr::eq(&*primary, &*alias));
    }

    #[test]
    fn every_alt_id_round_trips() {
        let dag = load(fixtures::DIAMOND, &LoadOptions::default());
        for term in dag.terms() {
            for alt_id in &term.alt_ids {
                assert_eq!(dag.term(alt_id).unwrap(), term);
            }
        }
    }

    #[test]
    fn obsolete_terms_are_dropped_by_default() {
        let dag = load(fixtures::ALT_AND_OBSOLETE, &LoadOptions::default());
        assert!(!dag.contains("GO:0000005"));
        assert_eq!(dag.len(), 1);
    }

    #[test]
    fn obsolete_terms_are_kept_on_request() {
        let options = LoadOptions::default().with_obsolete(true);
        let dag = load(fixtures::ALT_AND_OBSOLETE, &options);

        let obsolete = dag.term("GO:0000005").unwrap();
        assert!(obsolete.is_obsolete);
        assert_eq!(dag.len(), 2);
    }

    #[test]
    fn metric_invariants_hold() {
        let dag = load(fixtures::DIAMOND, &LoadOptions::default());

        for term in dag.terms() {
            let (level, depth) = (term.level().unwrap(), term.depth().unwrap());
            assert!(level <= depth, "{}: level {level} > depth {depth}", term.id);
            if term.is_root() {
                assert_eq!((level, depth), (0, 0));
            }
        }
    }

    #[test_case("GO:0000010", 0, 0; "root")]
    #[test_case("GO:0000011", 1, 1; "direct child")]
    #[test_case("GO:0000013", 1, 2; "shortcut to root")]
    #[test_case("GO:0000014", 2, 3; "below diamond")]
    fn level_and_depth(id: &str, level: usize, depth: usize) {
        let dag = load(fixtures::DIAMOND, &LoadOptions::default());
        let term = dag.term(id).unwrap();
        assert_eq!(term.level(), Some(level));
        assert_eq!(term.depth(), Some(depth));
    }

    #[test]
    fn isolated_term_is_a_root() {
        let dag = load(fixtures::DIAMOND, &LoadOptions::default());
        let isolated = dag.term("GO:0000019").unwrap();
        assert!(isolated.is_root());
        assert!(isolated.children().next().is_none());
        assert_eq!((isolated.level(), isolated.depth()), (Some(0), Some(0)));
    }

    #[test]
    fn children_are_linked_exactly_once() {
        let dag = load(fixtures::DIAMOND, &LoadOptions::default());

        for term in dag.terms() {
            for parent in term.parents() {
                let occurrences = parent.children().filter(|child| *child == term).count();
                assert_eq!(occurrences, 1, "{} under {}", term.id, parent.id);
            }
        }
    }

    #[test]
    fn repeated_is_a_links_once() {
        let text = "[Term]\nid: GO:1\n\n[Term]\nid: GO:2\nis_a: GO:1\nis_a: GO:1\n";
        let dag = load(text, &LoadOptions::default());
        assert_eq!(dag.term("GO:2").unwrap().parents().count(), 1);
        assert_eq!(dag.term("GO:1").unwrap().children().count(), 1);
    }

    #[test]
    fn children_follow_file_order() {
        let dag = load(fixtures::DIAMOND, &LoadOptions::default());
        let root = dag.term("GO:0000010").unwrap();
        let children: Vec<_> = root.children().map(|c| c.id()).collect();
        assert_eq!(children, vec!["GO:0000011", "GO:0000012", "GO:0000013"]);
    }

    #[test]
    fn propagating_metrics_twice_is_idempotent() {
        let mut dag = load(fixtures::DIAMOND, &LoadOptions::default());
        let before: Vec<_> = dag.terms().map(|t| (t.level(), t.depth())).collect();

        dag.propagate_metrics();

        let after: Vec<_> = dag.terms().map(|t| (t.level(), t.depth())).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn missing_parent_is_reported_not_fatal() {
        let text = "[Term]\nid: GO:2\nis_a: GO:404\n";
        let dag = load(text, &LoadOptions::default());

        assert_eq!(dag.unresolved().iter().collect::<Vec<_>>(), vec!["GO:404"]);
        let term = dag.term("GO:2").unwrap();
        assert!(term.is_root());
        assert_eq!(term.level(), Some(0));
    }

    #[test]
    fn obsolete_parent_is_unresolved() {
        let text = "[Term]\nid: GO:1\nis_obsolete: true\n\n[Term]\nid: GO:2\nis_a: GO:1\n";
        let dag = load(text, &LoadOptions::default());
        assert!(dag.unresolved().contains("GO:1"));
    }

    #[test]
    fn cycles_are_rejected() {
        let error = GoDag::from_reader(
            Cursor::new(fixtures::CYCLE),
            "test.obo",
            &LoadOptions::default(),
        )
        .unwrap_err();

        let LoadError::Cycle(cycles) = error else {
            panic!("expected a cycle error, got {error:?}");
        };
        assert_eq!(
            cycles,
            vec![vec![
                "GO:0000021".to_string(),
                "GO:0000022".to_string(),
                "GO:0000023".to_string()
            ]]
        );
    }

    #[test]
    fn self_parent_is_a_cycle() {
        let text = "[Term]\nid: GO:1\nis_a: GO:1\n";
        let error =
            GoDag::from_reader(Cursor::new(text), "test.obo", &LoadOptions::default()).unwrap_err();
        assert!(matches!(error, LoadError::Cycle(cycles) if cycles == vec![vec!["GO:1".to_string()]]));
    }

    #[test]
    fn parse_errors_abort_the_load() {
        let error = GoDag::from_reader(
            Cursor::new(fixtures::UNTERMINATED),
            "test.obo",
            &LoadOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(error, LoadError::Parse(ParseError { line: 4, .. })));
    }

    #[test]
    fn relationships_are_resolved_and_inverted() {
        let options = LoadOptions::with_attrs(["relationship"]).unwrap();
        let dag = load(fixtures::RELATIONSHIPS, &options);

        let part = dag.term("GO:0000003").unwrap();
        let whole = dag.term("GO:0000002").unwrap();

        let part_of: Vec<_> = part.relationship("part_of").collect();
        assert_eq!(part_of, vec![whole]);

        let has_part: Vec<_> = whole.relationship("has_part").collect();
        assert_eq!(has_part, vec![part]);
    }

    #[test]
    fn relationships_without_inverse_are_not_mirrored() {
        let options = LoadOptions::with_attrs(["relationship"]).unwrap();
        let dag = load(fixtures::RELATIONSHIPS, &options);

        let regulator = dag.term("GO:0000004").unwrap();
        let target = dag.term("GO:0000002").unwrap();

        assert_eq!(regulator.relationship("regulates").count(), 1);
        assert!(target.relationship_types().all(|typedef| typedef != "regulated_by"));
    }

    #[test]
    fn relationships_are_empty_unless_enabled() {
        let dag = load(fixtures::RELATIONSHIPS, &LoadOptions::default());
        assert!(dag.terms().all(|term| term.relationship_types().next().is_none()));
    }

    #[test]
    fn unknown_relationship_target_is_unresolved() {
        let options = LoadOptions::with_attrs(["relationship"]).unwrap();
        let text = "[Term]\nid: GO:1\nrelationship: part_of GO:404 ! missing\n";
        let dag = load(text, &options);
        assert!(dag.unresolved().contains("GO:404"));
        assert_eq!(dag.term("GO:1").unwrap().relationship("part_of").count(), 0);
    }

    #[test]
    fn duplicate_definition_keeps_last() {
        let text = "[Term]\nid: GO:1\nname: first\n\n[Term]\nid: GO:1\nname: second\n";
        let dag = load(text, &LoadOptions::default());
        assert_eq!(dag.len(), 1);
        assert_eq!(dag.term("GO:1").unwrap().name, "second");
    }

    #[test]
    fn duplicate_definition_drops_stale_alt_ids() {
        let text = "[Term]\nid: GO:1\nalt_id: GO:9\n\n[Term]\nid: GO:1\nalt_id: GO:8\n";
        let dag = load(text, &LoadOptions::default());

        assert!(!dag.contains("GO:9"));
        assert_eq!(dag.term("GO:8").unwrap().id(), "GO:1");
        assert_eq!(dag.id_count(), 2);
    }

    #[test]
    fn version_summary_strips_release_prefix() {
        let dag = load(fixtures::RELATIONSHIPS, &LoadOptions::default());
        assert_eq!(
            dag.version_summary(),
            "test.obo: fmt(1.2) rel(2016-07-07) 3 GO Terms"
        );
    }

    #[test]
    fn version_summary_without_header() {
        let dag = load(fixtures::MINIMAL, &LoadOptions::default());
        assert_eq!(dag.version_summary(), "test.obo: fmt(None) rel(None) 2 GO Terms");
    }

    #[test_case(0, "0")]
    #[test_case(999, "999")]
    #[test_case(1000, "1,000")]
    #[test_case(47_123, "47,123")]
    #[test_case(1_234_567, "1,234,567")]
    fn thousands_are_grouped(n: usize, expected: &str) {
        assert_eq!(group_thousands(n), expected);
    }

    #[test]
    fn load_missing_file_is_not_found() {
        let tmp = tempfile::tempdir().unwrap();
        let error = GoDag::load(&tmp.path().join("go-basic.obo"), &LoadOptions::default())
            .unwrap_err();

        assert!(matches!(error, LoadError::NotFound(_)));
        assert!(error.to_string().contains("download the obo file first"));
    }

    #[test]
    fn load_reads_file_from_disk() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("mini.obo");
        std::fs::write(&path, fixtures::MINIMAL).unwrap();

        let dag = GoDag::load(&path, &LoadOptions::default()).unwrap();

        assert_eq!(dag.len(), 2);
        assert_eq!(dag.source(), path.display().to_string());
    }
}
