pub mod config;
pub mod error;
pub mod request;
pub mod response;

pub use config::SkillConfig;
pub use error::{Result, SkillError};
pub use request::{Context, Intent, Request, RequestBody, RequestKind, Session, Slot};
pub use response::{build_speech_response, OutputSpeech, Response, ResponseBody};
