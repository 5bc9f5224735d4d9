//! Error type for parsing `R G B` triplets.

use std::num::ParseIntError;

use thiserror::Error;

/// Error returned when a decimal `R G B` triplet cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// Fewer than three components were present.
    #[error("expected 3 color components, found {found}")]
    MissingComponent {
        /// Number of components actually found
        found: usize,
    },

    /// More than three components were present.
    #[error("unexpected trailing input after 3 color components: {0:?}")]
    TrailingInput(String),

    /// A component was not a decimal integer.
    #[error("invalid color component {text:?}: {source}")]
    InvalidComponent {
        /// The offending token
        text: String,
        /// Underlying integer parse failure
        #[source]
        source: ParseIntError,
    },

    /// A component was an integer outside `0..=255`.
    #[error("color component {0} is out of range (0..=255)")]
    OutOfRange(i64),
}

impl ParseColorError {
    /// Classify a single token, producing the component value on success.
    pub(crate) fn component(text: &str) -> Result<u8, Self> {
        let value: i64 = text
            .parse()
            .map_err(|source| ParseColorError::InvalidComponent {
                text: text.to_string(),
                source,
            })?;
        u8::try_from(value).map_err(|_| ParseColorError::OutOfRange(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_in_range() {
        assert_eq!(ParseColorError::component("0"), Ok(0));
        assert_eq!(ParseColorError::component("255"), Ok(255));
    }

    #[test]
    fn test_component_out_of_range() {
        assert_eq!(
            ParseColorError::component("256"),
            Err(ParseColorError::OutOfRange(256))
        );
        assert_eq!(
            ParseColorError::component("-1"),
            Err(ParseColorError::OutOfRange(-1))
        );
    }

    #[test]
    fn test_component_not_a_number() {
        let err = ParseColorError::component("red").unwrap_err();
        assert!(matches!(err, ParseColorError::InvalidComponent { .. }));
        assert!(err.to_string().contains("\"red\""));
    }
}
