//! In-memory model of an ontology: terms, typedefs and the assembled graph.

/// Options controlling which fields are loaded.
pub mod config;
pub use config::{AttrShape, ConfigError, LoadOptions, OptionalAttr};

mod dag;
pub use dag::{GoDag, LoadError};

mod hierarchy;
pub use hierarchy::HierOptions;

mod lineage;
pub use lineage::{Lineage, LineageOptions};

mod query;

mod term;
pub use term::{OptionalFields, Term, TermIdx, TermRecord};

mod typedef;
pub use typedef::Typedef;

mod view;
pub use view::{TermView, Walk};
