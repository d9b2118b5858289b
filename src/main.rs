//! Binary that prints a commented example JSON document for the built-in
//! `Payload` shape.
//!
//! Usage: `json-example`
//!
//! The document is annotated pseudo-JSON: every field shows a sample value
//! and a trailing `//` comment with its description.

use std::process;

use json_example_rs::render_example_to_string;
use schemars::JsonSchema;
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

#[derive(Debug, Serialize, JsonSchema)]
struct Family {
    /// This is a string array
    #[schemars(example = "example_a")]
    #[schemars(example = "example_b")]
    #[schemars(example = "example_c")]
    children: Vec<String>,
}

#[derive(Debug, Serialize, JsonSchema)]
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

fn main() {
    // Render into memory first; a failed render prints no partial document.
    match render_example_to_string::<Payload>() {
        Ok(document) => println!("{document}"),
        Err(error) => {
            eprintln!("Error: {error}");
            process::exit(1);
        }
    }
}
