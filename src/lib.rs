//! Render a commented example JSON document from a type's derived JSON Schema.
//!
//! The schema is derived once, upfront, into a materialized [`SchemaNode`]
//! tree (descriptions come from doc comments, sample values from
//! `#[schemars(example = "...")]` attributes); the renderer then walks that
//! tree and emits annotated pseudo-JSON, one `"field": value\t\t// comment`
//! line per property.

mod error;
mod reflect;
mod render;
mod schema;

pub use error::JsonExampleGenError;
pub use reflect::derive_schema;
pub use render::render_to_writer;
pub use schema::{SchemaKind, SchemaNode};

use schemars::JsonSchema;
use std::io::Write;

/// Derive the schema for `T` and render its example document to `writer`.
///
/// The writer can be any type implementing `Write`, such as `Stdout`,
/// `Vec<u8>`, or `Cursor<Vec<u8>>`, enabling easy unit testing without
/// file system interaction.
///
/// # Errors
///
/// Returns `JsonExampleGenError` if schema derivation fails, a property
/// violates the example/description contract, or writing to the writer
/// fails. Text already written to `writer` is not rolled back on failure.
pub fn render_example_to_writer<T: JsonSchema, W: Write>(
    writer: &mut W,
) -> Result<(), JsonExampleGenError> {
    let root: SchemaNode = derive_schema::<T>()?;
    render_to_writer(&root, 1, writer)
}

/// Derive the schema for `T` and render its example document to a `String`.
///
/// # Errors
///
/// Returns `JsonExampleGenError` under the same conditions as
/// [`render_example_to_writer`]. On failure no partial document is
/// returned.
pub fn render_example_to_string<T: JsonSchema>() -> Result<String, JsonExampleGenError> {
    let mut buffer: Vec<u8> = Vec::new();
    render_example_to_writer::<T, _>(&mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    fn example_name() -> &'static str {
        "John"
    }

    fn example_amount() -> f64 {
        20.6
    }

    fn example_success() -> bool {
        true
    }

    fn example_true() -> bool {
        true
    }

    fn example_false() -> bool {
        false
    }

    fn example_a() -> &'static str {
        "A"
    }

    fn example_b() -> &'static str {
        "B"
    }

    fn example_c() -> &'static str {
        "C"
    }

    fn example_one() -> i32 {
        1
    }

    fn example_two() -> i32 {
        2
    }

    fn example_three() -> i32 {
        3
    }

    fn example_count() -> u32 {
        3
    }

    #[derive(Serialize, JsonSchema)]
    struct Family {
        /// This is a string array
        #[schemars(example = "example_a")]
        #[schemars(example = "example_b")]
        #[schemars(example = "example_c")]
        children: Vec<String>,
    }

    #[derive(Serialize, JsonSchema)]
    #[serde(rename_all = "camelCase")]
    struct Payload {
        /// A string
        #[schemars(example = "example_name")]
        name: String,
        /// A number
        #[schemars(example = "example_amount")]
        amount: f64,
        /// A boolean
        #[schemars(example = "example_success")]
        success: bool,
        /// A bool array
        #[schemars(example = "example_true")]
        #[schemars(example = "example_false")]
        bool_array: Vec<bool>,
        /// A string array
        #[schemars(example = "example_a")]
        #[schemars(example = "example_b")]
        #[schemars(example = "example_c")]
        string_array: Vec<String>,
        /// A number array
        #[schemars(example = "example_one")]
        #[schemars(example = "example_two")]
        #[schemars(example = "example_three")]
        number_array: Vec<f64>,
        /// A family
        family: Family,
    }

    #[derive(Serialize, JsonSchema)]
    struct Counters {
        /// Not emitted for integers
        #[schemars(example = "example_count")]
        count: u32,
    }

    #[test]
    fn payload_renders_full_annotated_document() {
        let expected: &str = concat!(
            "{\n",
            "\t\"name\": John\t\t// A string\n",
            "\t\"amount\": 20.6\t\t// A number\n",
            "\t\"success\": true\t\t// A boolean\n",
            "\t\"boolArray\": [true,false]\t\t// A bool array\n",
            "\t\"stringArray\": [\"A\",\"B\",\"C\"]\t\t// A string array\n",
            "\t\"numberArray\": [1,2,3]\t\t// A number array\n",
            "\t\"family\": {\n",
            "\t\t\"children\": [\"A\",\"B\",\"C\"]\t\t// This is a string array\n",
            "\t}\t\t// A family\n",
            "}",
        );

        let actual: String =
            render_example_to_string::<Payload>().expect("render should succeed");

        assert_eq!(expected, actual, "expected output to match exactly");
    }

    #[test]
    fn integer_field_renders_without_comment() {
        let expected: &str = "{\n\t\"count\": 3\n}";

        let actual: String =
            render_example_to_string::<Counters>().expect("render should succeed");

        assert_eq!(expected, actual);
    }

    #[test]
    fn derive_and_render_twice_is_byte_identical() {
        let first: String = render_example_to_string::<Payload>().expect("render should succeed");
        let second: String = render_example_to_string::<Payload>().expect("render should succeed");
        assert_eq!(first, second);
    }

    #[test]
    fn writer_variant_matches_string_variant() {
        let mut buffer: Vec<u8> = Vec::new();
        render_example_to_writer::<Payload, _>(&mut buffer).expect("render should succeed");

        let via_writer: String = String::from_utf8(buffer).expect("output should be valid UTF-8");
        let via_string: String =
            render_example_to_string::<Payload>().expect("render should succeed");

        assert_eq!(via_writer, via_string);
    }
}
