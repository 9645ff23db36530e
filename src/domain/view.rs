// TermView - a borrowed handle on a term inside its owning graph.

use std::{
    collections::{BTreeSet, HashSet},
    fmt,
    ops::Deref,
};

use petgraph::Direction;

use crate::domain::{
    dag::GoDag,
    term::{Term, TermIdx},
};

/// A borrowed view of a term, able to follow links through the graph.
///
/// Views are cheap to copy. Two views are equal when they refer to the same
/// term of the same graph.
#[derive(Clone, Copy)]
pub struct TermView<'a> {
    dag: &'a GoDag,
    idx: TermIdx,
}

impl<'a> TermView<'a> {
    pub(crate) const fn new(dag: &'a GoDag, idx: TermIdx) -> Self {
        Self { dag, idx }
    }

    /// The term's position in the graph's arena.
    #[must_use]
    pub const fn idx(self) -> TermIdx {
        self.idx
    }

    /// The underlying term, borrowed for the lifetime of the graph.
    #[must_use]
    pub fn term(self) -> &'a Term {
        self.dag.arena(self.idx)
    }

    /// The term's primary identifier.
    #[must_use]
    pub fn id(self) -> &'a str {
        &self.term().id
    }

    /// Direct parents, in `is_a` order.
    pub fn parents(self) -> impl Iterator<Item = TermView<'a>> {
        self.neighbors(Direction::Outgoing)
    }

    /// Direct children, in the order they were linked during assembly.
    pub fn children(self) -> impl Iterator<Item = TermView<'a>> {
        self.neighbors(Direction::Incoming)
    }

    /// Targets of a relationship type, e.g. `part_of`.
    pub fn relationship(self, typedef: &str) -> impl Iterator<Item = TermView<'a>> {
        let dag = self.dag;
        self.term()
            .relationship
            .get(typedef)
            .into_iter()
            .flatten()
            .map(move |idx| dag.view(*idx))
    }

    /// Relationship types this term has at least one edge for.
    pub fn relationship_types(self) -> impl Iterator<Item = &'a str> {
        self.term().relationship.keys().map(String::as_str)
    }

    /// Every ancestor, each visited once.
    pub fn ancestors(self) -> Walk<'a> {
        Walk::new(self, Direction::Outgoing)
    }

    /// Every descendant, each visited once.
    pub fn descendants(self) -> Walk<'a> {
        Walk::new(self, Direction::Incoming)
    }

    /// Checks whether `id` names a direct or transitive parent.
    ///
    /// Alternate identifiers are accepted.
    #[must_use]
    pub fn has_parent(self, id: &str) -> bool {
        self.dag
            .idx_of(id)
            .is_some_and(|target| self.ancestors().any(|term| term.idx == target))
    }

    /// Checks whether `id` names a direct or transitive child.
    ///
    /// Alternate identifiers are accepted.
    #[must_use]
    pub fn has_child(self, id: &str) -> bool {
        self.dag
            .idx_of(id)
            .is_some_and(|target| self.descendants().any(|term| term.idx == target))
    }

    /// Identifiers of every ancestor.
    #[must_use]
    pub fn all_parents(self) -> BTreeSet<&'a str> {
        self.ancestors().map(TermView::id).collect()
    }

    /// Identifiers of every descendant.
    #[must_use]
    pub fn all_children(self) -> BTreeSet<&'a str> {
        self.descendants().map(TermView::id).collect()
    }

    /// Every `is_a` edge above this term, as `(child, parent)` pairs.
    #[must_use]
    pub fn all_parent_edges(self) -> BTreeSet<(&'a str, &'a str)> {
        std::iter::once(self)
            .chain(self.ancestors())
            .flat_map(|child| child.parents().map(move |parent| (child.id(), parent.id())))
            .collect()
    }

    /// Every `is_a` edge below this term, as `(child, parent)` pairs.
    #[must_use]
    pub fn all_child_edges(self) -> BTreeSet<(&'a str, &'a str)> {
        std::iter::once(self)
            .chain(self.descendants())
            .flat_map(|parent| parent.children().map(move |child| (child.id(), parent.id())))
            .collect()
    }

    /// Every path from a root down to this term.
    ///
    /// Paths are ordered root first and end with this term. A term reachable
    /// through several parents yields one path per distinct route.
    #[must_use]
    pub fn paths_to_top(self) -> Vec<Vec<TermView<'a>>> {
        if self.is_root() {
            return vec![vec![self]];
        }
        self.parents()
            .flat_map(TermView::paths_to_top)
            .map(|mut path| {
                path.push(self);
                path
            })
            .collect()
    }

    fn neighbors(self, direction: Direction) -> impl Iterator<Item = TermView<'a>> {
        let dag = self.dag;
        links(self.term(), direction)
            .iter()
            .map(move |idx| dag.view(*idx))
    }
}

fn links(term: &Term, direction: Direction) -> &[TermIdx] {
    match direction {
        Direction::Outgoing => &term.parents,
        Direction::Incoming => &term.children,
    }
}

impl Deref for TermView<'_> {
    type Target = Term;

    fn deref(&self) -> &Self::Target {
        self.term()
    }
}

impl PartialEq for TermView<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.dag, other.dag) && self.idx == other.idx
    }
}

impl Eq for TermView<'_> {}

impl fmt::Debug for TermView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TermView").field(&self.id()).finish()
    }
}

impl fmt::Display for TermView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.term(), f)
    }
}

/// Depth-first walk over the ancestors or descendants of a term.
///
/// The starting term is not yielded, and no term is yielded twice.
pub struct Walk<'a> {
    dag: &'a GoDag,
    direction: Direction,
    stack: Vec<TermIdx>,
    seen: HashSet<TermIdx>,
}

impl<'a> Walk<'a> {
    fn new(start: TermView<'a>, direction: Direction) -> Self {
        let mut stack: Vec<_> = links(start.term(), direction).to_vec();
        stack.reverse();
        Self {
            dag: start.dag,
            direction,
            stack,
            seen: HashSet::from([start.idx]),
        }
    }
}

impl<'a> Iterator for Walk<'a> {
    type Item = TermView<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(idx) = self.stack.pop() {
            if !self.seen.insert(idx) {
                continue;
            }
            let term = self.dag.arena(idx);
            self.stack
                .extend(links(term, self.direction).iter().rev().copied());
            return Some(self.dag.view(idx));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use crate::{
        domain::LoadOptions,
        fixtures::{self, load},
    };

    fn ids<'a>(path: &[super::TermView<'a>]) -> Vec<&'a str> {
        path.iter().map(|term| term.id()).collect()
    }

    #[test]
    fn has_parent_is_transitive() {
        let dag = load(fixtures::DIAMOND, &LoadOptions::default());
        let leaf = dag.term("GO:0000015").unwrap();

        assert!(leaf.has_parent("GO:0000014"));
        assert!(leaf.has_parent("GO:0000010"));
        assert!(leaf.has_parent("GO:0000090"), "alternate ids resolve");
        assert!(!leaf.has_parent("GO:0000015"));
        assert!(!leaf.has_parent("GO:0000019"));
        assert!(!leaf.has_parent("GO:404"));
    }

    #[test]
    fn has_child_is_transitive() {
        let dag = load(fixtures::DIAMOND, &LoadOptions::default());
        let root = dag.term("GO:0000010").unwrap();

        assert!(root.has_child("GO:0000011"));
        assert!(root.has_child("GO:0000015"));
        assert!(!root.has_child("GO:0000019"));
        assert!(!dag.term("GO:0000015").unwrap().has_child("GO:0000010"));
    }

    #[test]
    fn all_parents_collects_every_ancestor() {
        let dag = load(fixtures::DIAMOND, &LoadOptions::default());
        let ancestors = dag.term("GO:0000014").unwrap().all_parents();

        assert_eq!(
            ancestors,
            BTreeSet::from(["GO:0000010", "GO:0000011", "GO:0000012", "GO:0000013"])
        );
    }

    #[test]
    fn all_children_collects_every_descendant() {
        let dag = load(fixtures::DIAMOND, &LoadOptions::default());
        let descendants = dag.term("GO:0000012").unwrap().all_children();

        assert_eq!(descendants, BTreeSet::from(["GO:0000014", "GO:0000015", "GO:0000017"]));
        assert!(dag.term("GO:0000015").unwrap().all_children().is_empty());
    }

    #[test]
    fn parent_edges_point_child_to_parent() {
        let dag = load(fixtures::DIAMOND, &LoadOptions::default());
        let edges = dag.term("GO:0000013").unwrap().all_parent_edges();

        assert_eq!(
            edges,
            BTreeSet::from([
                ("GO:0000011", "GO:0000010"),
                ("GO:0000013", "GO:0000010"),
                ("GO:0000013", "GO:0000011"),
            ])
        );
    }

    #[test]
    fn child_edges_point_child_to_parent() {
        let dag = load(fixtures::DIAMOND, &LoadOptions::default());
        let edges = dag.term("GO:0000013").unwrap().all_child_edges();

        assert_eq!(
            edges,
            BTreeSet::from([("GO:0000014", "GO:0000013"), ("GO:0000015", "GO:0000014")])
        );
    }

    #[test]
    fn ancestors_visit_each_term_once() {
        let dag = load(fixtures::DIAMOND, &LoadOptions::default());
        let walked: Vec<_> = dag
            .term("GO:0000015")
            .unwrap()
            .ancestors()
            .map(|term| term.id())
            .collect();

        assert_eq!(walked.len(), 5);
        assert_eq!(walked.iter().collect::<BTreeSet<_>>().len(), 5);
    }

    #[test]
    fn two_parents_give_two_paths() {
        let dag = load(fixtures::DIAMOND, &LoadOptions::default());
        let paths = dag.term("GO:0000017").unwrap().paths_to_top();

        let paths: Vec<_> = paths.iter().map(|path| ids(path)).collect();
        assert_eq!(
            paths,
            vec![
                vec!["GO:0000010", "GO:0000011", "GO:0000017"],
                vec!["GO:0000010", "GO:0000012", "GO:0000017"],
            ]
        );
    }

    #[test]
    fn paths_enumerate_every_branch() {
        let dag = load(fixtures::DIAMOND, &LoadOptions::default());
        let paths = dag.term("GO:0000014").unwrap().paths_to_top();

        let paths: BTreeSet<_> = paths.iter().map(|path| ids(path)).collect();
        assert_eq!(
            paths,
            BTreeSet::from([
                vec!["GO:0000010", "GO:0000012", "GO:0000014"],
                vec!["GO:0000010", "GO:0000011", "GO:0000013", "GO:0000014"],
                vec!["GO:0000010", "GO:0000013", "GO:0000014"],
            ])
        );
    }

    #[test]
    fn root_path_is_itself() {
        let dag = load(fixtures::DIAMOND, &LoadOptions::default());
        let root = dag.term("GO:0000010").unwrap();
        assert_eq!(root.paths_to_top(), vec![vec![root]]);
    }
}
