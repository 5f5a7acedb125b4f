//! Registry error types.

use thiserror::Error;

/// Errors that can occur during registry operations.
///
/// Every variant is recoverable by the caller; the registry never logs,
/// retries, or exits the process on failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolError {
    /// The code is already held by a registered protocol.
    #[error("protocol code {code} already taken by {holder:?}")]
    DuplicateCode {
        /// The colliding code.
        code: u64,
        /// Name of the protocol currently holding the code.
        holder: String,
    },

    /// The name is already registered.
    #[error("protocol by the name {0:?} already exists")]
    DuplicateName(String),

    /// The descriptor's name is empty.
    #[error("protocol name must not be empty")]
    EmptyName,

    /// A path segment did not resolve to any registered protocol.
    #[error("no protocol with name: {0}")]
    UnknownProtocol(String),
}

/// A specialized Result type for registry operations.
pub type Result<T> = std::result::Result<T, ProtocolError>;

/// Error returned by a [`Transcoder`](crate::Transcoder) that could not
/// convert a value between its textual and binary forms.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid protocol value: {message}")]
pub struct ValueError {
    message: String,
}

impl ValueError {
    /// Creates a new value error with the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn duplicate_code_display() {
        let err = ProtocolError::DuplicateCode {
            code: 4,
            holder: "ip4".to_owned(),
        };
        assert_eq!(err.to_string(), "protocol code 4 already taken by \"ip4\"");
    }

    #[test]
    fn duplicate_name_display() {
        let err = ProtocolError::DuplicateName("tcp".to_owned());
        assert_eq!(
            err.to_string(),
            "protocol by the name \"tcp\" already exists"
        );
    }

    #[test]
    fn unknown_protocol_display() {
        let err = ProtocolError::UnknownProtocol("bogus".to_owned());
        assert_eq!(err.to_string(), "no protocol with name: bogus");
    }

    #[test]
    fn value_error_display() {
        let err = ValueError::new("not a port");
        assert_eq!(err.to_string(), "invalid protocol value: not a port");
    }
}
