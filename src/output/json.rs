//! JSON output formatter

use serde::Serialize;

/// JSON body returned when a check cannot produce a result
#[derive(Debug, Serialize)]
pub struct ErrorOutput {
    pub error: String,
}

impl ErrorOutput {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Print any serializable value as pretty JSON to stdout
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

/// Serialize a value as a single JSON line
pub fn to_json_line<T: Serialize>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_output_shape() {
        let line = to_json_line(&ErrorOutput::new("Invalid domain")).unwrap();
        assert_eq!(line, r#"{"error":"Invalid domain"}"#);
    }
}
