use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Meeting not found: {id}")]
    MeetingNotFound { id: String },

    #[error("Transcript not yet available: {id}")]
    TranscriptNotReady { id: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Source file not found: {path}")]
    SourceNotFound { path: String },

    #[error("Source file corrupt ({stage}): {message}")]
    SourceCorrupt { stage: String, message: String },
}

impl DomainError {
    pub fn meeting_not_found(id: impl Into<String>) -> Self {
        Self::MeetingNotFound { id: id.into() }
    }

    pub fn transcript_not_ready(id: impl Into<String>) -> Self {
        Self::TranscriptNotReady { id: id.into() }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn source_not_found(path: impl Into<String>) -> Self {
        Self::SourceNotFound { path: path.into() }
    }

    pub fn source_corrupt(stage: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SourceCorrupt {
            stage: stage.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meeting_not_found_error() {
        let error = DomainError::meeting_not_found("mtg-1");
        assert_eq!(error.to_string(), "Meeting not found: mtg-1");
    }

    #[test]
    fn test_validation_error() {
        let error = DomainError::validation("title must not be empty");
        assert_eq!(
            error.to_string(),
            "Validation error: title must not be empty"
        );
    }

    #[test]
    fn test_source_corrupt_error_names_stage() {
        let error = DomainError::source_corrupt("outer envelope", "unexpected token");
        assert_eq!(
            error.to_string(),
            "Source file corrupt (outer envelope): unexpected token"
        );
    }
}
