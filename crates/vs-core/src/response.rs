//! Outbound envelope returned to the voice platform.

use serde::{Deserialize, Serialize};

pub const RESPONSE_VERSION: &str = "1.0";
pub const PLAIN_TEXT: &str = "PlainText";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub version: String,
    pub response: ResponseBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBody {
    pub output_speech: OutputSpeech,
    pub should_end_session: bool,
}

/// Speech payload the platform synthesizes to audio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSpeech {
    #[serde(rename = "type")]
    pub speech_type: String,
    pub text: String,
}

impl Response {
    pub fn speech_text(&self) -> &str {
        &self.response.output_speech.text
    }
}

/// Say `text` as plain speech and end the session.
///
/// The text is passed through untouched; the platform enforces its own
/// length limits.
pub fn build_speech_response(text: impl Into<String>) -> Response {
    Response {
        version: RESPONSE_VERSION.into(),
        response: ResponseBody {
            output_speech: OutputSpeech {
                speech_type: PLAIN_TEXT.into(),
                text: text.into(),
            },
            should_end_session: true,
        },
    }
}
