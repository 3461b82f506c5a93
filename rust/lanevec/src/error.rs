use lanevec_alloc::AllocError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

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

    pub fn alignment(count: usize, lane_bytes: usize, source: AllocError) -> Error {
        Error(
            ErrorKind::Alignment {
                count,
                lane_bytes,
                source,
            }
            .into(),
        )
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("cannot allocate {count} elements aligned to {lane_bytes}-byte lanes: {source}")]
    Alignment {
        count: usize,
        lane_bytes: usize,
        source: AllocError,
    },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}
