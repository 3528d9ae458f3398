use thiserror::Error;

/// Per-line rejections. These are expected noise in real input, not run failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LineError {
    #[error("Malformed line: {0:?}")]
    MalformedLine(String),

    #[error("Malformed value: {0:?}")]
    MalformedValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formats_correctly() {
        assert_eq!(
            LineError::MalformedLine("NoSeparatorHere".to_string()).to_string(),
            "Malformed line: \"NoSeparatorHere\""
        );
        assert_eq!(
            LineError::MalformedValue("abc".to_string()).to_string(),
            "Malformed value: \"abc\""
        );
    }

    #[test]
    fn error_is_cloneable() {
        let err = LineError::MalformedValue("x".to_string());
        let cloned = err.clone();
        assert_eq!(err, cloned);
    }

    #[test]
    fn error_comparison_works() {
        assert_ne!(
            LineError::MalformedLine("a".to_string()),
            LineError::MalformedValue("a".to_string())
        );
    }
}
