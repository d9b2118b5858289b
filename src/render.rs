//! Recursive example renderer.
//!
//! Walks a materialized [`SchemaNode`] tree and emits an indented,
//! comment-annotated pseudo-JSON document: one line per property with a
//! sample value and a trailing `// description` comment. The output is
//! deliberately not valid JSON.

use crate::error::JsonExampleGenError;
use crate::schema::{SchemaKind, SchemaNode};
use serde_json::Value;
use std::io::Write;

/// Render `node` as a `{ ... }` block into `writer`.
///
/// `indent` is the indentation level (one tab per level) applied to the
/// node's properties; the closing brace is written one level shallower and
/// without a trailing newline. The document root renders at level 1.
///
/// On failure the render unwinds immediately; text already written to
/// `writer` is not rolled back.
///
/// # Errors
///
/// Returns `JsonExampleGenError` if a primitive property has no example
/// value, a comment-emitting property has no description, or writing to
/// `writer` fails.
pub fn render_to_writer<W: Write>(
    node: &SchemaNode,
    indent: usize,
    writer: &mut W,
) -> Result<(), JsonExampleGenError> {
    writer.write_all(b"{\n")?;

    for (key, child) in &node.properties {
        write_indent(writer, indent)?;

        match child.kind {
            SchemaKind::Nested => {
                write!(writer, "\"{key}\": ")?;
                render_to_writer(child, indent + 1, writer)?;
                writeln!(writer, "\t\t// {}", description(key, child)?)?;
            }
            SchemaKind::Array => {
                // The whole examples list is one array literal.
                let literal: String = serde_json::to_string(&child.examples)?;
                writeln!(writer, "\"{key}\": {literal}\t\t// {}", description(key, child)?)?;
            }
            SchemaKind::Boolean | SchemaKind::Number | SchemaKind::String => {
                let value: String = example_literal(first_example(key, child)?);
                writeln!(writer, "\"{key}\": {value}\t\t// {}", description(key, child)?)?;
            }
            SchemaKind::Integer => {
                // Integers carry no trailing comment.
                let value: String = example_literal(first_example(key, child)?);
                writeln!(writer, "\"{key}\": {value}")?;
            }
            SchemaKind::Null => {
                // Always the literal token, whatever the examples hold.
                writeln!(writer, "\"{key}\": null\t\t// {}", description(key, child)?)?;
            }
            SchemaKind::Object => {}
        }
    }

    write_indent(writer, indent.saturating_sub(1))?;
    writer.write_all(b"}")?;
    Ok(())
}

fn write_indent<W: Write>(writer: &mut W, level: usize) -> std::io::Result<()> {
    for _ in 0..level {
        writer.write_all(b"\t")?;
    }
    Ok(())
}

fn description<'a>(key: &str, node: &'a SchemaNode) -> Result<&'a str, JsonExampleGenError> {
    node.description
        .as_deref()
        .ok_or_else(|| JsonExampleGenError::MissingDescription(key.to_string()))
}

fn first_example<'a>(key: &str, node: &'a SchemaNode) -> Result<&'a Value, JsonExampleGenError> {
    node.examples
        .first()
        .ok_or_else(|| JsonExampleGenError::MissingExample(key.to_string()))
}

/// String examples render bare; everything else uses its compact JSON form.
fn example_literal(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
