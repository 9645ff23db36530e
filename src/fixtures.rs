//! Small ontologies shared by the unit tests.

use std::io::Cursor;

use crate::domain::{GoDag, LoadOptions};

/// Parses and assembles `text`, panicking on any error.
pub fn load(text: &str, options: &LoadOptions) -> GoDag {
    GoDag::from_reader(Cursor::new(text), "test.obo", options).unwrap()
}

pub const MINIMAL: &str = "\
[Term]
id: GO:0000001
name: root
namespace: biological_process

[Term]
id: GO:0000002
name: child
namespace: biological_process
is_a: GO:0000001 ! root
";

/// The second `[Term]` header (line 4) opens before the first stanza closes.
pub const UNTERMINATED: &str = "\
[Term]
id: GO:0000001
name: root
[Term]
id: GO:0000002
name: child
";

pub const ALT_AND_OBSOLETE: &str = "\
[Term]
id: GO:0000003
name: aliased
namespace: cellular_component
alt_id: GO:0000099

[Term]
id: GO:0000005
name: retired
namespace: cellular_component
is_obsolete: true
";

/// ```text
/// 10 ── 11 ── 13 ── 14 ── 15
///  ├──────────┘     │
///  ├─ 12 ───────────┘
///  │   └─ 17 (also under 11)
/// 19 (isolated)
/// ```
pub const DIAMOND: &str = "\
format-version: 1.2

[Term]
id: GO:0000010
name: root
namespace: biological_process
alt_id: GO:0000090

[Term]
id: GO:0000011
name: left
namespace: biological_process
is_a: GO:0000010 ! root

[Term]
id: GO:0000012
name: right
namespace: biological_process
is_a: GO:0000010 ! root

[Term]
id: GO:0000013
name: shortcut
namespace: biological_process
is_a: GO:0000011 ! left
is_a: GO:0000010 ! root

[Term]
id: GO:0000014
name: join
namespace: biological_process
is_a: GO:0000012 ! right
is_a: GO:0000013 ! shortcut

[Term]
id: GO:0000015
name: leaf
namespace: biological_process
alt_id: GO:0000095
is_a: GO:0000014 ! join

[Term]
id: GO:0000017
name: twin
namespace: biological_process
is_a: GO:0000011 ! left
is_a: GO:0000012 ! right

[Term]
id: GO:0000019
name: island
namespace: molecular_function
";

pub const CYCLE: &str = "\
[Term]
id: GO:0000021
name: a
is_a: GO:0000023

[Term]
id: GO:0000022
name: b
is_a: GO:0000021

[Term]
id: GO:0000023
name: c
is_a: GO:0000022
";

pub const RELATIONSHIPS: &str = "\
format-version: 1.2
data-version: releases/2016-07-07
ontology: go

[Term]
id: GO:0000002
name: whole
namespace: cellular_component

[Term]
id: GO:0000003
name: part
namespace: cellular_component
relationship: part_of GO:0000002 ! whole

[Term]
id: GO:0000004
name: regulator
namespace: biological_process
relationship: regulates GO:0000002 ! whole

[Typedef]
id: part_of
name: part of
inverse_of: has_part ! has part

[Typedef]
id: has_part
name: has part

[Typedef]
id: regulates
name: regulates
transitive_over: part_of ! part of
";

pub const OPTIONAL_FIELDS: &str = "\
[Term]
id: GO:0000002
name: mitochondrial genome maintenance
namespace: biological_process
def: \"The maintenance of the structure of the mitochondrial genome.\" [GOC:ai]
comment: A comment.
synonym: \"mitochondrial genome upkeep\" EXACT []
synonym: \"mtDNA maintenance\" NARROW []
xref: Wikipedia:Mitochondrial_DNA
relationship: part_of GO:0000001 ! whole
";
