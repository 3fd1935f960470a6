use std::fmt;

/// Classification of a transport-level failure.
///
/// A small slice of the usual RPC status-code set: only the
/// codes the backends and the channel itself actually produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Code {
    /// The backend could not be reached or the channel is closed.
    Unavailable,
    /// The call outlived the transport's deadline.
    DeadlineExceeded,
    /// The backend rejected the request as malformed.
    InvalidArgument,
    /// The backend has no record matching the request.
    NotFound,
    /// The backend failed internally.
    Internal,
    /// The backend does not implement the called operation.
    Unimplemented,
    /// Anything the transport could not classify.
    Unknown,
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Code::Unavailable => "unavailable",
            Code::DeadlineExceeded => "deadline exceeded",
            Code::InvalidArgument => "invalid argument",
            Code::NotFound => "not found",
            Code::Internal => "internal",
            Code::Unimplemented => "unimplemented",
            Code::Unknown => "unknown",
        })
    }
}

/// Error signal reported by the transport for a failed remote call.
///
/// This is what separates "the call itself went wrong" (connection refused,
/// deadline, server-reported error) from local failures such as marshaling;
/// both end up collapsed at the client boundary, but they are tagged
/// differently on the way there.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{code}: {message}")]
pub struct Status {
    code: Code,
    message: String,
}

impl Status {
    pub fn new(code: Code, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(Code::Unavailable, message)
    }

    pub fn deadline_exceeded(message: impl Into<String>) -> Self {
        Self::new(Code::DeadlineExceeded, message)
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(Code::InvalidArgument, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(Code::NotFound, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(Code::Internal, message)
    }

    pub fn unimplemented(message: impl Into<String>) -> Self {
        Self::new(Code::Unimplemented, message)
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self::new(Code::Unknown, message)
    }

    pub fn code(&self) -> Code {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_carries_code_and_message() {
        let status = Status::unavailable("connection refused");
        assert_eq!(status.to_string(), "unavailable: connection refused");
        assert_eq!(status.code(), Code::Unavailable);
    }

    #[test]
    fn test_statuses_compare_by_code_and_message() {
        assert_eq!(
            Status::not_found("user 7"),
            Status::new(Code::NotFound, "user 7")
        );
        assert_ne!(Status::not_found("user 7"), Status::internal("user 7"));
    }
}
