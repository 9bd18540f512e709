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

    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidArgument {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn out_of_memory(size: usize, align: usize) -> Error {
        Error(ErrorKind::OutOfMemory { size, align }.into())
    }

    pub fn corruption(offset: usize, expected: u8, found: u8) -> Error {
        Error(
            ErrorKind::CorruptionDetected {
                offset,
                expected,
                found,
            }
            .into(),
        )
    }

    pub fn clock_unavailable(source: std::io::Error) -> Error {
        Error(ErrorKind::ClockUnavailable { source }.into())
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },

    #[error("allocation of {size} bytes with alignment {align} failed")]
    OutOfMemory { size: usize, align: usize },

    #[error(
        "pad canary mismatch {offset} byte(s) before the aligned address: \
         expected {expected:#04x}, found {found:#04x}"
    )]
    CorruptionDetected {
        offset: usize,
        expected: u8,
        found: u8,
    },

    #[error("wall clock query failed: {source}")]
    ClockUnavailable { source: std::io::Error },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}
