use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("duplicate bone name '{name}' in bone list")]
    DuplicateBoneName { name: String },

    #[cfg(feature = "json")]
    #[error("failed to parse bone list JSON: {message}")]
    JsonParse { message: String },

    #[cfg(feature = "json")]
    #[error("unknown bone category '{value}' for bone '{bone}'")]
    JsonUnknownCategory { bone: String, value: String },

    #[cfg(feature = "json")]
    #[error("unknown bone side '{value}' for bone '{bone}'")]
    JsonUnknownSide { bone: String, value: String },

    #[cfg(feature = "json")]
    #[error("missing or empty bone name at index {index}")]
    JsonMissingBoneName { index: usize },
}
