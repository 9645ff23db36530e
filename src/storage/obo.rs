//! Streaming reader for the OBO flat-file format.
//!
//! An OBO file is a header of `tag: value` lines followed by stanzas. Each
//! stanza opens with a `[Term]` or `[Typedef]` line and ends at the next blank
//! line:
//!
//! ```text
//! format-version: 1.2
//! data-version: releases/2016-07-07
//!
//! [Term]
//! id: GO:0000002
//! name: mitochondrial genome maintenance
//! namespace: biological_process
//! is_a: GO:0007005 ! mitochondrion organization
//!
//! [Typedef]
//! id: part_of
//! name: part of
//! ```
//!
//! [`OboReader`] yields one [`TermRecord`] per `[Term]` stanza and collects
//! the `[Typedef]` stanzas into a table that is complete once the iterator is
//! exhausted.

use std::{
    collections::BTreeMap,
    fmt,
    fs::File,
    io::{self, BufRead, BufReader},
    mem,
    path::Path,
    sync::LazyLock,
};

use regex::Regex;

use crate::domain::{
    config::{AttrShape, LoadOptions, OptionalAttr},
    LoadError, TermRecord, Typedef,
};

static FIELD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\S+):\s*(\S.*)$").expect("field pattern is valid"));

/// The kind of an OBO stanza.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StanzaKind {
    /// `[Term]`
    Term,
    /// `[Typedef]`
    Typedef,
}

impl StanzaKind {
    /// Recognises a stanza header line, ignoring ASCII case.
    fn from_header(line: &str) -> Option<Self> {
        let starts_with = |prefix: &str| {
            line.get(..prefix.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
        };
        if starts_with("[term]") {
            Some(Self::Term)
        } else if starts_with("[typedef]") {
            Some(Self::Typedef)
        } else {
            None
        }
    }
}

impl fmt::Display for StanzaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Term => f.write_str("Term"),
            Self::Typedef => f.write_str("Typedef"),
        }
    }
}

/// A fatal error while reading an OBO file.
#[derive(Debug, thiserror::Error)]
#[error("{path}({line}): {kind}")]
pub struct ParseError {
    /// Name of the source being read, usually its path.
    pub path: String,
    /// 1-based number of the offending line.
    pub line: usize,
    /// What went wrong.
    pub kind: ParseErrorKind,
}

/// The ways an OBO file can be malformed.
#[derive(Debug, thiserror::Error)]
pub enum ParseErrorKind {
    /// A stanza header appeared before the open stanza's blank-line terminator.
    #[error("previous {0} was not terminated as expected")]
    UnterminatedStanza(StanzaKind),
    /// A line inside a stanza is not of the form `name: value`.
    #[error("unexpected field content: {0}")]
    MalformedField(String),
    /// A set-once field occurred twice in one stanza.
    #[error("field '{field}' is already initialized ({existing})")]
    FieldAlreadySet {
        /// The repeated field.
        field: String,
        /// The value it was first set to.
        existing: String,
    },
    /// A bracketed header other than `[Term]` or `[Typedef]`.
    #[error("unknown stanza type: {0}")]
    UnknownStanza(String),
    /// A `relationship` value that is not `<typedef> <target-id>`.
    #[error("malformed relationship: {0}")]
    MalformedRelationship(String),
    /// A stanza ended without an `id` field.
    #[error("{0} has no id")]
    MissingId(StanzaKind),
    /// The underlying source could not be read.
    #[error("read failed: {0}")]
    Io(#[source] io::Error),
}

#[derive(Debug, Default)]
struct PartialTerm {
    id: Option<String>,
    name: Option<String>,
    namespace: Option<String>,
    record: TermRecord,
}

#[derive(Debug, Default)]
struct PartialTypedef {
    id: Option<String>,
    name: Option<String>,
    inverse_of: Option<String>,
    transitive_over: Vec<String>,
}

/// The stanza currently being read. At most one is ever open.
#[derive(Debug, Default)]
enum Stanza {
    #[default]
    Closed,
    Term(PartialTerm),
    Typedef(PartialTypedef),
}

/// A lazy, single-pass reader over the `[Term]` stanzas of an OBO source.
///
/// The underlying source is dropped as soon as the input is exhausted or a
/// fatal error is returned; the iterator yields nothing further after either.
pub struct OboReader<R> {
    path: String,
    lines: Option<io::Lines<R>>,
    line: usize,
    options: LoadOptions,
    in_header: bool,
    format_version: Option<String>,
    data_version: Option<String>,
    typedefs: BTreeMap<String, Typedef>,
    stanza: Stanza,
}

impl OboReader<BufReader<File>> {
    /// Opens an OBO file for reading.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::NotFound`] if the file does not exist, or
    /// [`LoadError::Io`] if it cannot be opened.
    pub fn open(path: &Path, options: &LoadOptions) -> Result<Self, LoadError> {
        let file = File::open(path).map_err(|io_error| match io_error.kind() {
            io::ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
            _ => LoadError::Io(io_error),
        })?;
        Ok(Self::new(
            BufReader::new(file),
            path.display().to_string(),
            options,
        ))
    }
}

impl<R: BufRead> OboReader<R> {
    /// Creates a reader over any buffered source.
    ///
    /// `path` is only used to label errors.
    pub fn new(reader: R, path: impl Into<String>, options: &LoadOptions) -> Self {
        Self {
            path: path.into(),
            lines: Some(reader.lines()),
            line: 0,
            options: options.clone(),
            in_header: true,
            format_version: None,
            data_version: None,
            typedefs: BTreeMap::new(),
            stanza: Stanza::Closed,
        }
    }

    /// The label used for this source in errors.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The `format-version` header value, if one has been read.
    #[must_use]
    pub fn format_version(&self) -> Option<&str> {
        self.format_version.as_deref()
    }

    /// The `data-version` header value, if one has been read.
    #[must_use]
    pub fn data_version(&self) -> Option<&str> {
        self.data_version.as_deref()
    }

    /// The typedefs finalized so far.
    ///
    /// The table is only complete once the iterator is exhausted.
    #[must_use]
    pub const fn typedefs(&self) -> &BTreeMap<String, Typedef> {
        &self.typedefs
    }

    /// Consumes the reader, returning the typedef table.
    #[must_use]
    pub fn into_typedefs(self) -> BTreeMap<String, Typedef> {
        self.typedefs
    }

    fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError {
            path: self.path.clone(),
            line: self.line,
            kind,
        }
    }

    fn advance(&mut self) -> Result<Option<TermRecord>, ParseError> {
        loop {
            let next = match self.lines.as_mut() {
                Some(lines) => lines.next(),
                None => return Ok(None),
            };
            match next {
                None => return self.finish_input(),
                Some(Err(io_error)) => return Err(self.error(ParseErrorKind::Io(io_error))),
                Some(Ok(line)) => {
                    self.line += 1;
                    if let Some(record) = self.read_line(&line)? {
                        return Ok(Some(record));
                    }
                }
            }
        }
    }

    fn finish_input(&mut self) -> Result<Option<TermRecord>, ParseError> {
        self.lines = None;
        self.close_stanza()
    }

    fn read_line(&mut self, line: &str) -> Result<Option<TermRecord>, ParseError> {
        if self.in_header {
            self.read_header(line);
        }

        if let Some(kind) = StanzaKind::from_header(line) {
            self.open_stanza(kind)?;
            return Ok(None);
        }

        let line = line.trim_end();
        if matches!(self.stanza, Stanza::Closed) {
            if line.starts_with('[') && line.ends_with(']') {
                return Err(self.error(ParseErrorKind::UnknownStanza(line.to_string())));
            }
            return Ok(None);
        }

        if line.is_empty() {
            return self.close_stanza();
        }

        let Some(captures) = FIELD.captures(line) else {
            let kind = if line.starts_with('[') {
                ParseErrorKind::UnknownStanza(line.to_string())
            } else {
                ParseErrorKind::MalformedField(line.to_string())
            };
            return Err(self.error(kind));
        };
        let (_, [name, value]) = captures.extract();

        let result = match &mut self.stanza {
            Stanza::Term(term) => add_term_field(term, &self.options, name, value),
            Stanza::Typedef(typedef) => add_typedef_field(typedef, name, value),
            Stanza::Closed => Ok(()),
        };
        result.map_err(|kind| self.error(kind))?;
        Ok(None)
    }

    fn read_header(&mut self, line: &str) {
        if let Some(value) = line.strip_prefix("format-version:") {
            if self.format_version.is_none() {
                self.format_version = Some(value.trim().to_string());
            }
        } else if let Some(value) = line.strip_prefix("data-version:") {
            if self.data_version.is_none() {
                self.data_version = Some(value.trim().to_string());
            }
        }
    }

    fn open_stanza(&mut self, kind: StanzaKind) -> Result<(), ParseError> {
        self.in_header = false;
        match &self.stanza {
            Stanza::Closed => {}
            Stanza::Term(_) => {
                return Err(self.error(ParseErrorKind::UnterminatedStanza(StanzaKind::Term)));
            }
            Stanza::Typedef(_) => {
                return Err(self.error(ParseErrorKind::UnterminatedStanza(StanzaKind::Typedef)));
            }
        }
        self.stanza = match kind {
            StanzaKind::Term => Stanza::Term(PartialTerm::default()),
            StanzaKind::Typedef => Stanza::Typedef(PartialTypedef::default()),
        };
        Ok(())
    }

    /// Closes the open stanza, returning it if it was a term.
    fn close_stanza(&mut self) -> Result<Option<TermRecord>, ParseError> {
        match mem::take(&mut self.stanza) {
            Stanza::Closed => Ok(None),
            Stanza::Term(term) => {
                let Some(id) = term.id else {
                    return Err(self.error(ParseErrorKind::MissingId(StanzaKind::Term)));
                };
                Ok(Some(TermRecord {
                    id,
                    name: term.name.unwrap_or_default(),
                    namespace: term.namespace.unwrap_or_default(),
                    ..term.record
                }))
            }
            Stanza::Typedef(typedef) => {
                let Some(id) = typedef.id else {
                    return Err(self.error(ParseErrorKind::MissingId(StanzaKind::Typedef)));
                };
                tracing::trace!("read typedef {id}");
                self.typedefs.insert(
                    id.clone(),
                    Typedef {
                        id,
                        name: typedef.name.unwrap_or_default(),
                        transitive_over: typedef.transitive_over,
                        inverse_of: typedef.inverse_of,
                    },
                );
                Ok(None)
            }
        }
    }
}

impl<R: BufRead> Iterator for OboReader<R> {
    type Item = Result<TermRecord, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.advance().transpose();
        if matches!(next, Some(Err(_))) {
            self.lines = None;
            self.stanza = Stanza::Closed;
        }
        next
    }
}

fn set_once(slot: &mut Option<String>, field: &str, value: &str) -> Result<(), ParseErrorKind> {
    if let Some(existing) = slot.as_ref().filter(|existing| !existing.is_empty()) {
        return Err(ParseErrorKind::FieldAlreadySet {
            field: field.to_string(),
            existing: existing.clone(),
        });
    }
    *slot = Some(value.to_string());
    Ok(())
}

/// Strips a trailing `! comment` from a value.
fn strip_comment(value: &str) -> &str {
    value.split('!').next().unwrap_or_default().trim_end()
}

fn add_term_field(
    term: &mut PartialTerm,
    options: &LoadOptions,
    name: &str,
    value: &str,
) -> Result<(), ParseErrorKind> {
    match name {
        "id" => set_once(&mut term.id, name, value)?,
        "alt_id" => term.record.alt_ids.push(value.to_string()),
        "name" => set_once(&mut term.name, name, value)?,
        "namespace" => set_once(&mut term.namespace, name, value)?,
        "is_a" => {
            if let Some(parent) = value.split_whitespace().next() {
                term.record.parents.push(parent.to_string());
            }
        }
        "is_obsolete" => {
            if value == "true" {
                term.record.is_obsolete = true;
            }
        }
        _ => {
            if let Some(attr) =
                OptionalAttr::from_field_name(name).filter(|attr| options.is_enabled(*attr))
            {
                add_optional(&mut term.record, attr, value)?;
            }
        }
    }
    Ok(())
}

fn add_optional(
    record: &mut TermRecord,
    attr: OptionalAttr,
    value: &str,
) -> Result<(), ParseErrorKind> {
    match attr.shape() {
        AttrShape::Scalar => record
            .attrs
            .set_scalar(attr, value.to_string())
            .map_err(|existing| ParseErrorKind::FieldAlreadySet {
                field: attr.to_string(),
                existing: existing.to_string(),
            }),
        AttrShape::Set => {
            record.attrs.insert(attr, value.to_string());
            Ok(())
        }
        AttrShape::Nested => {
            let mut parts = strip_comment(value).split_whitespace();
            match (parts.next(), parts.next(), parts.next()) {
                (Some(typedef), Some(target), None) => {
                    record
                        .relationships
                        .entry(typedef.to_string())
                        .or_default()
                        .push(target.to_string());
                    Ok(())
                }
                _ => Err(ParseErrorKind::MalformedRelationship(value.to_string())),
            }
        }
    }
}

fn add_typedef_field(
    typedef: &mut PartialTypedef,
    name: &str,
    value: &str,
) -> Result<(), ParseErrorKind> {
    let value = strip_comment(value);
    match name {
        "id" => set_once(&mut typedef.id, name, value)?,
        "name" => set_once(&mut typedef.name, name, value)?,
        "transitive_over" => typedef.transitive_over.push(value.to_string()),
        "inverse_of" => set_once(&mut typedef.inverse_of, name, value)?,
        _ => {}
    }
    Ok(())
}
