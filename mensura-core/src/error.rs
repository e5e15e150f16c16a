//! Error types for quantity arithmetic, wire codecs and string parsing.

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Error raised by checked quantity arithmetic and conversion.
///
/// The panicking operators (`+`, `-`, `/`, [`Quantity::convert_to`](crate::Quantity::convert_to)) use the
/// `Display` text of these variants as their panic message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuantityError {
    /// The operands belong to different dimensions.
    #[error("dimension mismatch: cannot combine {left} with {right}")]
    DimensionMismatch {
        /// Dimension of the left-hand operand (or the source unit).
        left: String,
        /// Dimension of the right-hand operand (or the target unit).
        right: String,
    },

    /// A quantity was divided by a zero scalar.
    #[error("division by zero")]
    DivisionByZero,
}

/// Error raised while detecting, decoding or encoding a wire payload.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CodecError {
    /// The bytes are not valid JSON, or not a JSON object.
    #[error("malformed JSON: {0}")]
    MalformedJson(String),

    /// A required top-level field is absent.
    #[error("missing '{0}' field")]
    MissingField(&'static str),

    /// `value` is present but is not a JSON number.
    #[error("invalid value: {0}")]
    MalformedNumber(String),

    /// The payload has a `unit` but matches none of the wire shapes.
    #[error("could not determine format")]
    UnrecognizedShape,

    /// The payload encodes a different dimension than the one requested.
    #[error("dimension mismatch: expected {expected}, got {found}")]
    DimensionMismatch {
        /// Dimension the decoder was asked for.
        expected: String,
        /// Dimension tag found in the payload.
        found: String,
    },

    /// Known dimension, unknown symbol or key.
    #[error("unknown {dimension} unit: {unit}")]
    UnknownUnit {
        /// Dimension whose registry was searched.
        dimension: String,
        /// The symbol or key that matched nothing.
        unit: String,
    },

    /// The dimension tag is not one of the built-in dimensions.
    #[error("unknown dimension: {0}")]
    UnknownDimension(String),
}

impl CodecError {
    /// Whether a cross-dimension decoder may replace this failure by a general-unit quantity.
    ///
    /// Only "the payload is a quantity, but not one we know" qualifies. Syntax errors and unrecognized shapes mean the
    /// document is not a quantity at all.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            CodecError::UnknownUnit { .. } | CodecError::UnknownDimension(_)
        )
    }
}

impl From<serde_json::Error> for CodecError {
    fn from(err: serde_json::Error) -> Self {
        CodecError::MalformedJson(err.to_string())
    }
}

/// Error raised by the string parser (`"101.3 kPa"`).
#[cfg(feature = "parse")]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("failed to parse measurement '{input}': {message}")]
pub struct ParseError {
    /// The rejected input, verbatim.
    pub input: String,
    /// What went wrong.
    pub message: String,
}

#[cfg(feature = "parse")]
impl ParseError {
    pub(crate) fn new(input: &str, message: impl Into<String>) -> Self {
        ParseError {
            input: input.to_string(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recoverable_errors() {
        assert!(CodecError::UnknownDimension("warp".into()).is_recoverable());
        assert!(CodecError::UnknownUnit {
            dimension: "pressure".into(),
            unit: "zz".into()
        }
        .is_recoverable());
        assert!(!CodecError::UnrecognizedShape.is_recoverable());
        assert!(!CodecError::MissingField("unit").is_recoverable());
        assert!(!CodecError::MalformedJson("eof".into()).is_recoverable());
        assert!(!CodecError::MalformedNumber("\"x\"".into()).is_recoverable());
    }

    #[test]
    fn messages() {
        assert_eq!(
            CodecError::MissingField("unit").to_string(),
            "missing 'unit' field"
        );
        assert_eq!(
            CodecError::UnrecognizedShape.to_string(),
            "could not determine format"
        );
        assert_eq!(
            QuantityError::DimensionMismatch {
                left: "pressure".into(),
                right: "temperature".into()
            }
            .to_string(),
            "dimension mismatch: cannot combine pressure with temperature"
        );
    }

    #[test]
    fn serde_json_errors_become_malformed_json() {
        let err: CodecError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, CodecError::MalformedJson(_)));
    }

    #[cfg(feature = "parse")]
    #[test]
    fn parse_error_message() {
        let err = ParseError::new("abc", "invalid number: abc");
        assert_eq!(
            err.to_string(),
            "failed to parse measurement 'abc': invalid number: abc"
        );
    }
}
