/// Streaming reader for the OBO flat file format.
pub mod obo;

pub use obo::{OboReader, ParseError, ParseErrorKind, StanzaKind};
