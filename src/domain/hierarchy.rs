//! Plain-text rendering of the term hierarchy.
//!
//! Each line of a hierarchy report looks like
//!
//! ```text
//! -- GO:0000011	L-01	D-01	child
//! ```
//!
//! with one dash per level below the starting term. With
//! [`HierOptions::short_prt`] a subtree is expanded only the first time it is
//! reached; later occurrences are drawn with `=` instead of `-`.

use std::{
    collections::{BTreeSet, HashSet},
    io::{self, Write},
};

use crate::domain::{dag::GoDag, term::TermIdx, view::TermView};

/// Options for [`TermView::write_hier_rec`] and friends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HierOptions {
    /// Minimum width of the dash column, or `None` to omit it.
    pub len_dash: Option<usize>,
    /// Deepest level to print, counting the starting term as 1.
    pub max_depth: Option<usize>,
    /// Prefix each line with the number of descendants.
    pub num_child: bool,
    /// Expand each subtree only once.
    pub short_prt: bool,
    /// Print only these terms (and stop descending at any other).
    pub include_only: Option<BTreeSet<String>>,
    /// Flag these terms with `>` in a leading mark column.
    pub marks: Option<BTreeSet<String>>,
}

impl Default for HierOptions {
    fn default() -> Self {
        Self {
            len_dash: Some(1),
            max_depth: None,
            num_child: false,
            short_prt: false,
            include_only: None,
            marks: None,
        }
    }
}

impl TermView<'_> {
    /// Writes the subtree rooted at this term, depth first.
    ///
    /// `printed` tracks the terms already written when
    /// [`HierOptions::short_prt`] is set, and may be shared across calls.
    /// `depth` is the depth of this term in the report, starting at 1.
    /// Children are visited in the order they were linked.
    ///
    /// # Errors
    ///
    /// Returns any error from writing to `out`.
    pub fn write_hier_rec<W: Write>(
        self,
        out: &mut W,
        printed: &mut HashSet<TermIdx>,
        options: &HierOptions,
        depth: usize,
    ) -> io::Result<()> {
        let id = self.id();
        if options
            .include_only
            .as_ref()
            .is_some_and(|only| !only.contains(id))
        {
            return Ok(());
        }

        let already_printed = options.short_prt && printed.contains(&self.idx());

        if let Some(marks) = &options.marks {
            let mark = if marks.contains(id) { '>' } else { ' ' };
            write!(out, "{mark} ")?;
        }
        if let Some(width) = options.len_dash {
            let letter = if already_printed && !self.children.is_empty() {
                '='
            } else {
                '-'
            };
            let dashes: String = std::iter::repeat_n(letter, depth).collect();
            write!(out, "{dashes:<width$} ")?;
        }
        if options.num_child {
            write!(out, "{:>5} ", self.all_children().len())?;
        }
        writeln!(
            out,
            "{id}\tL-{:02}\tD-{:02}\t{}",
            self.level().unwrap_or_default(),
            self.depth().unwrap_or_default(),
            self.name
        )?;

        if options.short_prt {
            printed.insert(self.idx());
        }
        if already_printed {
            return Ok(());
        }

        let depth = depth + 1;
        if options.max_depth.is_some_and(|max| depth > max) {
            return Ok(());
        }
        for child in self.children() {
            child.write_hier_rec(out, printed, options, depth)?;
        }
        Ok(())
    }
}

impl GoDag {
    /// Writes the hierarchy below a single term.
    ///
    /// # Errors
    ///
    /// Returns an [`io::ErrorKind::NotFound`] error if the term is unknown,
    /// or any error from writing to `out`.
    pub fn write_hier<W: Write>(&self, id: &str, out: &mut W, options: &HierOptions) -> io::Result<()> {
        let term = self.term(id).ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("term {id} not found"))
        })?;
        term.write_hier_rec(out, &mut HashSet::new(), options, 1)
    }

    /// Writes the hierarchy below every root, in identifier order.
    ///
    /// # Errors
    ///
    /// Returns any error from writing to `out`.
    pub fn write_hier_all<W: Write>(&self, out: &mut W, options: &HierOptions) -> io::Result<()> {
        let mut roots: Vec<_> = self.roots().collect();
        roots.sort_by_key(|root| root.id());
        for root in roots {
            root.write_hier_rec(out, &mut HashSet::new(), options, 1)?;
        }
        Ok(())
    }

    /// Writes one summary line per term, in identifier order.
    ///
    /// # Errors
    ///
    /// Returns any error from writing to `out`.
    pub fn write_dag<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let mut terms: Vec<_> = self.terms().collect();
        terms.sort_by_key(|term| term.id());
        for term in terms {
            writeln!(out, "{term}")?;
        }
        Ok(())
    }
}
