//! Lineage subgraphs for a handful of query terms, exported as Graphviz DOT.
//!
//! Rendering the DOT text to an image is left to an external `dot` binary.

use std::{
    collections::{BTreeMap, BTreeSet},
    io::{self, Write},
};

use crate::domain::{dag::GoDag, view::TermView};

/// What to include in a [`Lineage`] and how to style it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineageOptions {
    /// Include every ancestor edge of the query terms.
    pub draw_parents: bool,
    /// Include every descendant edge of the query terms.
    pub draw_children: bool,
    /// Border colour of each node.
    pub node_color: String,
    /// Colour of each edge.
    pub edge_color: String,
    /// Resolution hint passed through to the renderer.
    pub dpi: u32,
}

impl Default for LineageOptions {
    fn default() -> Self {
        Self {
            draw_parents: true,
            draw_children: true,
            node_color: "mediumseagreen".to_string(),
            edge_color: "lightslateblue".to_string(),
            dpi: 96,
        }
    }
}

/// The `is_a` subgraph around a set of query terms.
#[derive(Debug)]
pub struct Lineage<'a> {
    nodes: BTreeMap<&'a str, TermView<'a>>,
    edges: BTreeSet<(&'a str, &'a str)>,
    queried: BTreeSet<&'a str>,
    options: LineageOptions,
}

impl<'a> Lineage<'a> {
    /// Every node, in identifier order.
    pub fn nodes(&self) -> impl Iterator<Item = TermView<'a>> + '_ {
        self.nodes.values().copied()
    }

    /// Every edge as a `(child, parent)` pair.
    pub fn edges(&self) -> impl Iterator<Item = (&'a str, &'a str)> + '_ {
        self.edges.iter().copied()
    }

    /// Checks whether `id` was one of the query terms.
    #[must_use]
    pub fn is_queried(&self, id: &str) -> bool {
        self.queried.contains(id)
    }

    /// The node label: the identifier, then the name broken at each comma.
    #[must_use]
    pub fn label(term: TermView<'_>) -> String {
        format!("{}\n{}", term.id(), term.name.replace(',', "\n"))
    }

    /// Writes the subgraph as a DOT digraph.
    ///
    /// Edges run parent to child and are drawn with `dir=back`, so arrows
    /// point from each child up to its parent in the usual top-down layout.
    ///
    /// # Errors
    ///
    /// Returns any error from writing to `out`.
    pub fn write_dot<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let options = &self.options;
        writeln!(out, "digraph \"GO tree\" {{")?;
        writeln!(out, "  graph [dpi={}];", options.dpi)?;
        writeln!(
            out,
            "  node [shape=box, style=\"rounded,filled\", fillcolor=beige, color={}];",
            quote(&options.node_color)
        )?;
        writeln!(
            out,
            "  edge [color={}, dir=back, label=is_a];",
            quote(&options.edge_color)
        )?;

        for (id, term) in &self.nodes {
            write!(out, "  {} [label={}", quote(id), quote(&Self::label(*term)))?;
            if self.is_queried(id) {
                write!(out, ", fillcolor=plum")?;
            }
            writeln!(out, "];")?;
        }
        for (child, parent) in &self.edges {
            writeln!(out, "  {} -> {};", quote(parent), quote(child))?;
        }
        writeln!(out, "}}")
    }
}

fn quote(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('"');
    for c in text.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            _ => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

impl GoDag {
    /// Collects the lineage of the given terms.
    ///
    /// Unknown identifiers are skipped with a warning. Alternate identifiers
    /// resolve to their primary term.
    pub fn lineage<'a, I, S>(&'a self, ids: I, options: LineageOptions) -> Lineage<'a>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let query: Vec<_> = ids
            .into_iter()
            .filter_map(|id| self.query_term(id.as_ref()))
            .collect();

        let mut edges = BTreeSet::new();
        for term in &query {
            if options.draw_parents {
                edges.extend(term.all_parent_edges());
            }
            if options.draw_children {
                edges.extend(term.all_child_edges());
            }
        }

        let mut nodes: BTreeMap<_, _> = query.iter().map(|term| (term.id(), *term)).collect();
        for (child, parent) in &edges {
            for id in [*child, *parent] {
                if let Some(term) = self.term(id) {
                    nodes.entry(id).or_insert(term);
                }
            }
        }

        Lineage {
            nodes,
            edges,
            queried: query.iter().map(|term| term.id()).collect(),
            options,
        }
    }
}
