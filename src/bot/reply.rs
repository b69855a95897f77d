//! Replies written back to the user

use serde::Serialize;
use serde_json::Value;

/// How replies are written to the output stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Plain message text followed by a blank line
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Answer to a single command
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reply {
    /// Which command this answers
    pub command: &'static str,
    /// `false` when the command could not be carried out
    pub ok: bool,
    /// Human-readable text
    pub message: String,
    /// Structured result of the command, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl Reply {
    /// A successful reply carrying only text
    pub fn text(command: &'static str, message: impl Into<String>) -> Self {
        Self {
            command,
            ok: true,
            message: message.into(),
            data: None,
        }
    }

    /// A successful reply with the handler's response attached
    pub fn with_data<T: Serialize>(
        command: &'static str,
        message: impl Into<String>,
        data: &T,
    ) -> Result<Self, serde_json::Error> {
        Ok(Self {
            command,
            ok: true,
            message: message.into(),
            data: Some(serde_json::to_value(data)?),
        })
    }

    /// A failed command
    pub fn error(command: &'static str, message: impl Into<String>) -> Self {
        Self {
            command,
            ok: false,
            message: message.into(),
            data: None,
        }
    }

    /// Render this reply, without a trailing newline
    pub fn render(&self, format: OutputFormat) -> Result<String, serde_json::Error> {
        match format {
            OutputFormat::Text => Ok(self.message.clone()),
            OutputFormat::Json => serde_json::to_string(self),
        }
    }
}
