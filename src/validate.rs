//! Attachment validation: declared MIME type and size only. File content is
//! never inspected.

use thiserror::Error;

/// Documents the service accepts: PDF, plain text, and both Word formats.
pub const ALLOWED_MIME_TYPES: [&str; 4] = [
    "application/pdf",
    "text/plain",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

/// 10 MiB cap per file.
pub const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Why a file was refused. The display strings are user-facing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RejectReason {
    #[error("unsupported type")]
    UnsupportedType,
    #[error("too large")]
    TooLarge,
}

/// Checks a file's declared type and size against the acceptance policy.
/// The type check runs first; the first failing rule wins.
pub fn validate(mime_type: &str, size_bytes: u64) -> Result<(), RejectReason> {
    if !ALLOWED_MIME_TYPES.contains(&mime_type) {
        return Err(RejectReason::UnsupportedType);
    }
    if size_bytes > MAX_FILE_SIZE_BYTES {
        return Err(RejectReason::TooLarge);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_accepts_allowed_types_within_limit() {
        for mime in ALLOWED_MIME_TYPES {
            assert_eq!(validate(mime, 1024), Ok(()));
        }
        assert_eq!(validate("application/pdf", MAX_FILE_SIZE_BYTES), Ok(()));
    }

    #[test]
    fn test_rejects_disallowed_type() {
        assert_matches!(
            validate("image/png", 10),
            Err(RejectReason::UnsupportedType)
        );
        assert_matches!(
            validate("application/zip", 10),
            Err(RejectReason::UnsupportedType)
        );
    }

    #[test]
    fn test_rejects_oversized_file() {
        assert_matches!(
            validate("application/pdf", MAX_FILE_SIZE_BYTES + 1),
            Err(RejectReason::TooLarge)
        );
        assert_matches!(
            validate("text/plain", 20 * 1024 * 1024),
            Err(RejectReason::TooLarge)
        );
    }

    #[test]
    fn test_type_check_runs_before_size_check() {
        // A file failing both rules reports the type failure.
        assert_matches!(
            validate("image/png", 20 * 1024 * 1024),
            Err(RejectReason::UnsupportedType)
        );
    }

    #[test]
    fn test_reject_reason_display() {
        assert_eq!(RejectReason::UnsupportedType.to_string(), "unsupported type");
        assert_eq!(RejectReason::TooLarge.to_string(), "too large");
    }
}
