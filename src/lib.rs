//! Gene Ontology graphs loaded from OBO flat files.
//!
//! An OBO file is read one stanza at a time by [`OboReader`], and the
//! resulting records are assembled into a [`GoDag`]: every `is_a` link is
//! resolved to a term in the same arena, relationships are inverted where a
//! typedef declares an inverse, and each term is given its shortest
//! (`level`) and longest (`depth`) distance to a root.
//!
//! ```no_run
//! use godag::{GoDag, LoadOptions};
//!
//! let options = LoadOptions::with_attrs(["relationship"])?;
//! let dag = GoDag::load("go-basic.obo".as_ref(), &options)?;
//!
//! let term = dag.term("GO:0005739").expect("mitochondrion is in go-basic");
//! for path in term.paths_to_top() {
//!     let ids: Vec<_> = path.iter().map(|t| t.id()).collect();
//!     println!("{}", ids.join(" > "));
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod domain;
pub use domain::{
    GoDag, HierOptions, Lineage, LineageOptions, LoadError, LoadOptions, OptionalAttr, Term,
    TermView, Typedef,
};

/// Reading ontologies from disk.
pub mod storage;
pub use storage::{OboReader, ParseError};

#[cfg(test)]
mod fixtures;
