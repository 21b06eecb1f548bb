//! Error types for the munsell_engine library

use thiserror::Error;

/// Result type alias for munsell_engine operations
pub type Result<T> = std::result::Result<T, MunsellError>;

/// Error types for Munsell conversion, parsing and table construction
///
/// Colors outside the tabulated gamut are not errors: conversions still
/// succeed and report the condition through `Conversion::saturated`.
#[derive(Error, Debug)]
pub enum MunsellError {
    /// Hue name such as "5R" or "10YR" could not be parsed
    #[error("Invalid Munsell hue name: {name:?}")]
    InvalidHueName { name: String },

    /// Full notation such as "5R 4.0/14.0" could not be parsed
    #[error("Invalid Munsell notation {notation:?}: {reason}")]
    InvalidNotation { notation: String, reason: String },

    /// Invalid input parameters
    #[error("Invalid parameter: {parameter} = {value}")]
    InvalidParameter { parameter: String, value: String },

    /// Chromaticity table source data is inconsistent
    #[error("Malformed Munsell table at level {level}, hue step {hue}: {reason}")]
    MalformedTable {
        level: usize,
        hue: usize,
        reason: String,
    },

    /// Configuration could not be loaded or saved
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl MunsellError {
    /// Create a configuration error with context
    pub fn config<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ConfigError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(parameter: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            value: value.to_string(),
        }
    }

    /// Check if this error came from parsing user supplied text
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            MunsellError::InvalidHueName { .. } | MunsellError::InvalidNotation { .. }
        )
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            MunsellError::InvalidHueName { name } => {
                format!(
                    "\"{}\" is not a Munsell hue. Use a number from 0 to 10 followed by R, YR, Y, GY, G, BG, B, PB, P or RP (e.g. 5R).",
                    name
                )
            }
            MunsellError::InvalidNotation { notation, .. } => {
                format!(
                    "\"{}\" is not a Munsell color. Use the form \"5R 4.0/14.0\" or \"N 5.0\".",
                    notation
                )
            }
            MunsellError::ConfigError { message, .. } => {
                format!("Could not use the configuration file: {}", message)
            }
            _ => "Munsell conversion failed. Please check the input values.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_errors_are_classified() {
        let err = MunsellError::InvalidHueName {
            name: "5Q".to_string(),
        };
        assert!(err.is_parse_error());
        assert!(err.user_message().contains("5Q"));

        let err = MunsellError::invalid_parameter("search_window", 0);
        assert!(!err.is_parse_error());
        assert_eq!(err.to_string(), "Invalid parameter: search_window = 0");
    }

    #[test]
    fn test_config_error_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = MunsellError::config("reading config.json", io);
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.user_message().contains("config.json"));
    }
}
