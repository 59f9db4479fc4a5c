use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    /// Coarse classification of this error, as reported by the status-code surface.
    pub fn status(&self) -> Status {
        self.kind().status()
    }

    pub fn allocation_failure(size: usize) -> Error {
        Error(ErrorKind::AllocationFailure { size }.into())
    }

    pub fn out_of_range(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::OutOfRange {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn overflow(context: impl Into<String>) -> Error {
        Error(
            ErrorKind::Overflow {
                context: context.into(),
            }
            .into(),
        )
    }

    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidArgument {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("allocation of {size} bytes failed")]
    AllocationFailure { size: usize },

    #[error("{name} out of range: {message}")]
    OutOfRange { name: String, message: String },

    #[error("size computation overflows: {context}")]
    Overflow { context: String },

    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },
}

impl ErrorKind {
    pub fn status(&self) -> Status {
        match self {
            ErrorKind::AllocationFailure { .. } => Status::AllocationFailure,
            ErrorKind::OutOfRange { .. } | ErrorKind::Overflow { .. } => Status::RangeOrOverflow,
            ErrorKind::InvalidArgument { .. } => Status::InvalidArgument,
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}

/// Outcome of a container operation, flattened to a status code.
///
/// Range violations and size overflows share one code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Ok,
    AllocationFailure,
    RangeOrOverflow,
    InvalidArgument,
}

impl Status {
    pub fn of<T>(result: &crate::Result<T>) -> Status {
        match result {
            Ok(_) => Status::Ok,
            Err(e) => e.status(),
        }
    }

    pub fn is_ok(self) -> bool {
        self == Status::Ok
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Status::Ok => "ok",
            Status::AllocationFailure => "allocation failure",
            Status::RangeOrOverflow => "range or overflow error",
            Status::InvalidArgument => "invalid argument",
        })
    }
}
