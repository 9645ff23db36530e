use std::{
    collections::{BTreeSet, HashMap, HashSet},
    hash::Hash,
};

use crate::domain::{dag::GoDag, view::TermView};

impl GoDag {
    /// Looks up a term, logging a warning if it is unknown.
    #[must_use]
    pub fn query_term(&self, id: &str) -> Option<TermView<'_>> {
        let term = self.term(id);
        if term.is_none() {
            tracing::warn!("term {id} not found");
        }
        term
    }

    /// Every path from a root down to the given term.
    ///
    /// Returns `None` (and logs a warning) if the term is unknown. See
    /// [`TermView::paths_to_top`].
    #[must_use]
    pub fn paths_to_top(&self, id: &str) -> Option<Vec<Vec<TermView<'_>>>> {
        self.query_term(id).map(TermView::paths_to_top)
    }

    /// Expands each identifier set in an association table with every
    /// ancestor of its members.
    ///
    /// A typical table maps gene identifiers to their annotated term
    /// identifiers. Identifiers not found in the graph are left in place and
    /// returned; they do not stop the remaining sets from being expanded.
    pub fn update_association<K>(
        &self,
        association: &mut HashMap<K, HashSet<String>>,
    ) -> BTreeSet<String>
    where
        K: Eq + Hash,
    {
        let mut not_found = BTreeSet::new();

        for ids in association.values_mut() {
            let mut ancestors = HashSet::new();
            for id in ids.iter() {
                match self.term(id) {
                    Some(term) => ancestors.extend(term.all_parents().into_iter().map(str::to_string)),
                    None => {
                        not_found.insert(id.trim().to_string());
                    }
                }
            }
            ids.extend(ancestors);
        }

        if !not_found.is_empty() {
            tracing::warn!("term ids not found: {not_found:?}");
        }
        not_found
    }

    /// The numeric part of a `GO:NNNNNNN` identifier.
    #[must_use]
    pub fn id2int(id: &str) -> Option<u32> {
        id.strip_prefix("GO:")?.parse().ok()
    }
}
