// error.rs - Bridge error taxonomy

use thiserror::Error;

/// Declared semantic type of a configuration value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    Bool,
    Int,
    Double,
    Float,
    Text,
}

impl ValueType {
    pub fn description(&self) -> &'static str {
        match self {
            ValueType::Bool => "boolean",
            ValueType::Int => "integer",
            ValueType::Double => "double",
            ValueType::Float => "float",
            ValueType::Text => "string",
        }
    }
}

impl std::fmt::Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Fatal errors raised by the embedding bridge.
///
/// Every variant aborts the call it occurs in. Settings already applied by
/// completed pipeline steps are not rolled back, so callers must not assume
/// the settings block is unchanged after a failed call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BridgeError {
    /// A configuration value's dynamic type does not match the schema
    #[error("expected {expected} value for key '{key}'")]
    TypeMismatch { key: String, expected: ValueType },

    /// An `ml_model` outside the fixed jtt/wag/lg/jc/gtr set
    #[error("unknown ML model: {0}")]
    UnknownModel(String),

    /// A free argument that cannot be represented as a C string
    #[error("argument is not representable as text: {0}")]
    InvalidArgument(String),

    /// The engine entry point returned a non-zero status
    #[error("FastTree returned abnormal exit code: {0}")]
    ToolExecutionFailed(i32),
}
