//! proto3 text rendering.

use std::fmt::Write as FmtWrite;

use crate::model::{MessageEntity, Registry};

pub const SYNTAX_LINE: &str = "syntax = \"proto3\";";

/// Render one message block (comment, fields, edges), ending in a newline.
///
/// Fields are numbered from 1 in map order; edges continue the numbering as
/// `repeated string` fields.
pub fn render_message(entity: &MessageEntity) -> String {
    let mut out = String::new();

    if let Some(comment) = &entity.comment {
        let _ = writeln!(out, "/*\n{comment}\n*/");
    }

    let _ = writeln!(out, "message {} {{", entity.name);
    let mut number = 0;
    for (name, field_type) in &entity.fields {
        number += 1;
        let _ = writeln!(out, "    {field_type} {name} = {number};");
    }
    for edge in &entity.edges {
        number += 1;
        let _ = writeln!(out, "    repeated string {edge} = {number};");
    }
    out.push_str("}\n");

    out
}

/// Render the whole schema: header lines, then every message in registry
/// order, each preceded by a blank line.
pub fn render_schema(registry: &Registry, package: &str) -> String {
    let mut out = String::new();
    out.push_str(SYNTAX_LINE);
    out.push('\n');
    let _ = writeln!(out, "package {package};");

    for entity in registry.iter() {
        out.push('\n');
        out.push_str(&render_message(entity));
    }

    out
}
