//! Domain-level error taxonomy for buildbrief.

/// Errors produced when interpreting collaborator-supplied strings.
///
/// The compaction pipeline itself is total: malformed traces and absent
/// fields are values, never errors. Only the typed boundary (status and
/// severity strings from the build-invocation collaborator) can fail.
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("unknown build status: {0}")]
    UnknownBuildStatus(String),

    #[error("unknown severity: {0}")]
    UnknownSeverity(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_build_status_display() {
        let err = DomainError::UnknownBuildStatus("CANCELLED".to_string());
        assert!(err.to_string().contains("unknown build status"));
        assert!(err.to_string().contains("CANCELLED"));
    }

    #[test]
    fn test_unknown_severity_display() {
        let err = DomainError::UnknownSeverity("FATAL".to_string());
        assert!(err.to_string().contains("unknown severity"));
        assert!(err.to_string().contains("FATAL"));
    }
}
