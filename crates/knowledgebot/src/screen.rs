//! Upstream file screening.
//!
//! Runs before a task exists: a rejected file never enters the state
//! machine, so `Error` stays unreachable for started tasks. Rejections
//! are surfaced to the user as shell notifications by the caller.

use thiserror::Error;

use knowledgebot_core::models::FileMeta;

use crate::config::ScreeningConfig;

/// Why a file was refused before ingestion.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RejectError {
    #[error("Invalid file type: {name}")]
    UnsupportedMediaType { name: String, media_type: String },

    #[error("File too large: {name} (Max {max_mb}MB)")]
    TooLarge { name: String, size: u64, max_mb: u64 },
}

/// Check a file against the screening bounds.
pub fn screen(meta: &FileMeta, config: &ScreeningConfig) -> Result<(), RejectError> {
    if !config
        .allowed_media_types
        .iter()
        .any(|t| t == &meta.media_type)
    {
        return Err(RejectError::UnsupportedMediaType {
            name: meta.name.clone(),
            media_type: meta.media_type.clone(),
        });
    }

    if meta.size > config.max_file_bytes {
        return Err(RejectError::TooLarge {
            name: meta.name.clone(),
            size: meta.size,
            max_mb: config.max_file_bytes / (1024 * 1024),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(name: &str, size: u64, media_type: &str) -> FileMeta {
        FileMeta {
            name: name.to_string(),
            size,
            media_type: media_type.to_string(),
        }
    }

    #[test]
    fn accepts_all_default_media_types() {
        let config = ScreeningConfig::default();
        for media_type in &config.allowed_media_types {
            assert!(screen(&meta("a", 1024, media_type), &config).is_ok());
        }
    }

    #[test]
    fn rejects_unknown_media_type() {
        let config = ScreeningConfig::default();
        let err = screen(&meta("photo.png", 1024, "image/png"), &config).unwrap_err();
        assert!(matches!(err, RejectError::UnsupportedMediaType { .. }));
        assert_eq!(err.to_string(), "Invalid file type: photo.png");
    }

    #[test]
    fn rejects_oversized_file() {
        let config = ScreeningConfig::default();
        let err = screen(
            &meta("big.pdf", 11 * 1024 * 1024, "application/pdf"),
            &config,
        )
        .unwrap_err();
        assert!(matches!(err, RejectError::TooLarge { .. }));
        assert_eq!(err.to_string(), "File too large: big.pdf (Max 10MB)");
    }

    #[test]
    fn size_bound_is_inclusive() {
        let config = ScreeningConfig::default();
        let at_limit = meta("edge.pdf", 10 * 1024 * 1024, "application/pdf");
        assert!(screen(&at_limit, &config).is_ok());
    }

    #[test]
    fn media_type_check_runs_first() {
        // Mirrors the original's ordering: an oversized file of an
        // unsupported type reports the type problem.
        let config = ScreeningConfig::default();
        let err = screen(&meta("big.png", 11 * 1024 * 1024, "image/png"), &config).unwrap_err();
        assert!(matches!(err, RejectError::UnsupportedMediaType { .. }));
    }
}
