use std::fmt::{self, Debug, Display};
use std::io;

pub type Error = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Returned from `main`, so that a startup failure prints its message rather than its `Debug` form.
pub struct DisplayError(Error);

impl Debug for DisplayError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl<T: Into<Error>> From<T> for DisplayError {
    fn from(display: T) -> Self {
        DisplayError(display.into())
    }
}

pub trait IoErrorExt {
    fn applies_to(&self) -> AppliesTo;
}

impl IoErrorExt for io::Error {
    fn applies_to(&self) -> AppliesTo {
        match self.kind() {
            io::ErrorKind::ConnectionRefused
            | io::ErrorKind::ConnectionAborted
            | io::ErrorKind::ConnectionReset
            | io::ErrorKind::Interrupted => AppliesTo::Connection,
            _ => AppliesTo::Listener,
        }
    }
}

/// Whether an accept error only lost one pending connection, or broke the listener itself.
#[derive(Debug, PartialEq, Eq)]
pub enum AppliesTo {
    Connection,
    Listener,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_accept_errors() {
        let reset = io::Error::from(io::ErrorKind::ConnectionReset);
        assert_eq!(reset.applies_to(), AppliesTo::Connection);

        let denied = io::Error::from(io::ErrorKind::PermissionDenied);
        assert_eq!(denied.applies_to(), AppliesTo::Listener);
    }

    #[test]
    fn display_error_debug_is_display() {
        let err = DisplayError::from("cannot read url mapping file");
        assert_eq!(format!("{:?}", err), "cannot read url mapping file");
    }
}
