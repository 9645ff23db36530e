use std::fmt;

/// A `[Typedef]` stanza: a named relationship type.
///
/// Only the tags needed for relationship inversion are kept; the others are
/// skipped while parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Typedef {
    /// Identifier, e.g. `part_of`.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Typedefs this relation is transitive over.
    pub transitive_over: Vec<String>,
    /// The typedef that is the logical inverse of this one.
    pub inverse_of: Option<String>,
}

impl fmt::Display for Typedef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Typedef - {} ({}):", self.id, self.name)?;
        write!(
            f,
            "  Inverse of: {}",
            self.inverse_of.as_deref().unwrap_or("None")
        )?;
        if !self.transitive_over.is_empty() {
            f.write_str("\n  Transitive over:")?;
            for typedef in &self.transitive_over {
                write!(f, "\n    - {typedef}")?;
            }
        }
        Ok(())
    }
}
