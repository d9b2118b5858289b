use indexmap::IndexMap;
use serde_json::Value;

/// Resolved type of a schema node, as read from its declared type tag.
///
/// `Nested` covers nodes without a primitive type tag as well as `object`
/// nodes that carry a subschema; both render as recursive `{ ... }` blocks.
/// `Object` is a type-tagged object with no subschema and renders nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaKind {
    Nested,
    Array,
    Boolean,
    Integer,
    Null,
    Number,
    String,
    Object,
}

/// One node in a fully materialized JSON Schema tree.
///
/// The tree is built once per derivation (see `derive_schema`) and is not
/// mutated afterwards; rendering walks it read-only.
/// Uses `IndexMap` so properties keep their declaration order, making the
/// rendered output deterministic.
#[derive(Debug, Clone)]
pub struct SchemaNode {
    pub kind: SchemaKind,

    /// Human-readable annotation, emitted as a trailing `// ...` comment.
    pub description: Option<String>,

    /// Ordered example values attached to the node. Primitive nodes render
    /// their first example; array nodes render the whole list as one JSON
    /// array literal.
    pub examples: Vec<Value>,

    pub properties: IndexMap<String, SchemaNode>,
}
