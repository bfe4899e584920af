use thiserror::Error;

use crate::patterns::Category;

pub type Result<T> = std::result::Result<T, ExtractError>;

#[derive(Debug, Error)]
pub enum ExtractError {
    /// The input handed to the extractor was not text.
    #[error("Invalid input: not valid UTF-8 text (invalid sequence at byte {valid_up_to})")]
    InvalidInput { valid_up_to: usize },

    #[error("Pattern `{category}` failed to compile: {source}")]
    Pattern {
        category: Category,
        #[source]
        source: regex::Error,
    },
}

impl From<std::str::Utf8Error> for ExtractError {
    fn from(err: std::str::Utf8Error) -> Self {
        Self::InvalidInput {
            valid_up_to: err.valid_up_to(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_error_maps_to_invalid_input() {
        let bytes = [b'o', b'k', 0xff, b'!'];
        let Err(utf8) = std::str::from_utf8(&bytes) else {
            panic!("0xff must not decode as UTF-8");
        };
        let err = ExtractError::from(utf8);
        assert!(matches!(err, ExtractError::InvalidInput { valid_up_to: 2 }));
        assert!(err.to_string().contains("byte 2"));
    }
}
