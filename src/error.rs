use std::error;
use std::fmt;

/// Error type for schema derivation and example rendering operations.
#[derive(Debug)]
pub enum JsonExampleGenError {
    /// A `$ref` in the derived schema points at a definition that does not
    /// exist; the referenced type could not be materialized.
    UnresolvedReference(String),

    /// The derived schema contains a shape the renderer does not model
    /// (e.g. a boolean schema). Carries the `/`-joined field path.
    UnsupportedSchema(String),

    /// A primitive property has an empty `examples` list, so there is no
    /// value to render. Carries the property name.
    MissingExample(String),

    /// A property that emits a trailing comment has no description.
    /// Carries the property name.
    MissingDescription(String),

    /// I/O error while writing rendered output.
    Io(std::io::Error),

    /// JSON serialization error while formatting example values.
    Json(serde_json::Error),

    /// Rendered bytes were not valid UTF-8.
    Utf8(std::string::FromUtf8Error),
}

impl error::Error for JsonExampleGenError {}

impl fmt::Display for JsonExampleGenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnresolvedReference(reference) => {
                write!(f, "unresolved schema reference `{reference}`")
            }
            Self::UnsupportedSchema(path) => {
                write!(f, "unsupported schema shape at `{path}`")
            }
            Self::MissingExample(field) => {
                write!(f, "schema property `{field}` has no example value")
            }
            Self::MissingDescription(field) => {
                write!(f, "schema property `{field}` has no description")
            }
            Self::Io(io_error) => fmt::Display::fmt(io_error, f),
            Self::Json(json_error) => fmt::Display::fmt(json_error, f),
            Self::Utf8(utf8_error) => fmt::Display::fmt(utf8_error, f),
        }
    }
}

impl From<std::io::Error> for JsonExampleGenError {
    fn from(io_error: std::io::Error) -> Self {
        Self::Io(io_error)
    }
}

impl From<serde_json::Error> for JsonExampleGenError {
    fn from(json_error: serde_json::Error) -> Self {
        Self::Json(json_error)
    }
}

impl From<std::string::FromUtf8Error> for JsonExampleGenError {
    fn from(utf8_error: std::string::FromUtf8Error) -> Self {
        Self::Utf8(utf8_error)
    }
}
