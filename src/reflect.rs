//! Schema derivation boundary.
//!
//! Turns a [`schemars`]-generated JSON Schema into a fully materialized
//! [`SchemaNode`] tree before any rendering happens: `$ref` nodes are
//! resolved against the root definitions and single-element `allOf`
//! metadata wrappers are unwrapped, so the renderer never has to look a
//! type up at render time.

use crate::error::JsonExampleGenError;
use crate::schema::{SchemaKind, SchemaNode};
use indexmap::IndexMap;
use schemars::r#gen::{SchemaGenerator, SchemaSettings};
use schemars::schema::{InstanceType, RootSchema, Schema, SchemaObject, SingleOrVec};
use schemars::{JsonSchema, Map};

/// Derive the materialized schema tree for `T`.
///
/// A fresh generator is built per call; nothing is cached or shared between
/// derivations. Subschemas are inlined so the resulting tree is
/// self-contained.
///
/// # Errors
///
/// Returns `JsonExampleGenError` if the derived schema contains a `$ref`
/// that cannot be resolved or a shape that cannot be materialized.
pub fn derive_schema<T: JsonSchema>() -> Result<SchemaNode, JsonExampleGenError> {
    let mut settings: SchemaSettings = SchemaSettings::draft07();
    settings.inline_subschemas = true;

    let generator = SchemaGenerator::new(settings);
    let root: RootSchema = generator.into_root_schema_for::<T>();

    materialize_object(&root.schema, &root.definitions, "")
}

fn materialize(
    schema: &Schema,
    definitions: &Map<String, Schema>,
    path: &str,
) -> Result<SchemaNode, JsonExampleGenError> {
    match schema {
        Schema::Object(object) => materialize_object(object, definitions, path),
        Schema::Bool(_) => Err(JsonExampleGenError::UnsupportedSchema(path.to_string())),
    }
}

fn materialize_object(
    object: &SchemaObject,
    definitions: &Map<String, Schema>,
    path: &str,
) -> Result<SchemaNode, JsonExampleGenError> {
    if let Some(reference) = &object.reference {
        let name: &str = reference.rsplit('/').next().unwrap_or(reference.as_str());
        let Some(target) = definitions.get(name) else {
            return Err(JsonExampleGenError::UnresolvedReference(reference.clone()));
        };
        let mut node: SchemaNode = materialize(target, definitions, path)?;
        overlay_metadata(&mut node, object);
        return Ok(node);
    }

    // Field metadata over a referenced type arrives as `allOf: [inner]`;
    // unwrap it and let the field's own description/examples win.
    if object.instance_type.is_none()
        && let Some(subschemas) = &object.subschemas
        && let Some(all_of) = &subschemas.all_of
        && let [inner] = all_of.as_slice()
    {
        let mut node: SchemaNode = materialize(inner, definitions, path)?;
        overlay_metadata(&mut node, object);
        return Ok(node);
    }

    let mut properties: IndexMap<String, SchemaNode> = IndexMap::new();
    if let Some(validation) = &object.object {
        for (key, child) in &validation.properties {
            let child_path: String = format!("{path}/{key}");
            properties.insert(key.clone(), materialize(child, definitions, &child_path)?);
        }
    }

    let kind: SchemaKind = match declared_type(object) {
        None => SchemaKind::Nested,
        Some(InstanceType::Object) => {
            if properties.is_empty() {
                SchemaKind::Object
            } else {
                SchemaKind::Nested
            }
        }
        Some(InstanceType::Array) => SchemaKind::Array,
        Some(InstanceType::Boolean) => SchemaKind::Boolean,
        Some(InstanceType::Integer) => SchemaKind::Integer,
        Some(InstanceType::Null) => SchemaKind::Null,
        Some(InstanceType::Number) => SchemaKind::Number,
        Some(InstanceType::String) => SchemaKind::String,
    };

    let description: Option<String> = object
        .metadata
        .as_ref()
        .and_then(|metadata| metadata.description.clone());
    let examples: Vec<serde_json::Value> = object
        .metadata
        .as_ref()
        .map_or_else(Vec::new, |metadata| metadata.examples.clone());

    Ok(SchemaNode {
        kind,
        description,
        examples,
        properties,
    })
}

/// Resolves the declared type tag. Nullable types declare `[base, null]`;
/// the first entry wins.
fn declared_type(object: &SchemaObject) -> Option<InstanceType> {
    match &object.instance_type {
        None => None,
        Some(SingleOrVec::Single(single)) => Some(**single),
        Some(SingleOrVec::Vec(types)) => types.first().copied(),
    }
}

fn overlay_metadata(node: &mut SchemaNode, object: &SchemaObject) {
    let Some(metadata) = &object.metadata else {
        return;
    };
    if metadata.description.is_some() {
        node.description.clone_from(&metadata.description);
    }
    if !metadata.examples.is_empty() {
        node.examples.clone_from(&metadata.examples);
    }
}
