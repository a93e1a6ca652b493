use core::fmt;
use std::collections::TryReserveError;
use std::error::Error;

#[derive(Debug)]
pub struct GraphError {
    kind: GraphErrorKind,
    msg: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphErrorKind {
    InvalidArgument,
    AllocationFailure,
    IoFailure,
}

impl fmt::Display for GraphErrorKind {
    fn fmt(&self, f: &mut ::std::fmt::Formatter) -> Result<(), ::std::fmt::Error> {
        match *self {
            Self::InvalidArgument => f.write_str("InvalidArgument"),
            Self::AllocationFailure => f.write_str("AllocationFailure"),
            Self::IoFailure => f.write_str("IoFailure"),
        }
    }
}

impl GraphError {
    pub fn new(kind: GraphErrorKind, msg: &str) -> Self {
        Self {
            kind,
            msg: String::from(msg),
        }
    }

    pub(crate) fn vertex_out_of_range(v: usize, order: usize) -> Self {
        let msg = format!("vertex {} is outside of [1, {}]", v, order);
        Self::new(GraphErrorKind::InvalidArgument, &msg)
    }

    pub fn kind(&self) -> GraphErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.msg
    }
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.msg)
    }
}

impl Error for GraphError {}

impl From<std::io::Error> for GraphError {
    fn from(err: std::io::Error) -> Self {
        Self::new(GraphErrorKind::IoFailure, &err.to_string())
    }
}

impl From<TryReserveError> for GraphError {
    fn from(err: TryReserveError) -> Self {
        Self::new(GraphErrorKind::AllocationFailure, &err.to_string())
    }
}
