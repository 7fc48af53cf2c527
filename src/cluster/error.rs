use std::error::Error as StdError;
use std::fmt;
use std::ops::Deref;
use std::result;

/// An error type for an error that occurred in a cluster admin service.
///
/// Admin services are external collaborators, so their failures are carried opaquely: this type
/// wraps whatever error the service produced and surfaces in the crate-level error enum as
/// [`Error::Cluster`].
///
/// [`Error::Cluster`]: crate::Error::Cluster
#[derive(Debug)]
pub struct Error {
    inner: anyhow::Error,
}

impl Error {
    /// Construct a new `Error` that wraps the given `error`.
    pub fn new<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self {
            inner: anyhow::Error::new(error),
        }
    }

    /// Construct a new `Error` from a plain message.
    pub fn msg<M>(message: M) -> Self
    where
        M: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        Self {
            inner: anyhow::Error::msg(message),
        }
    }

    /// Wrap this error with `context` describing the operation that failed.
    ///
    /// The context becomes the displayed message; the wrapped error stays reachable through the
    /// source chain.
    pub fn context<C>(self, context: C) -> Self
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        Self {
            inner: self.inner.context(context),
        }
    }
}

impl<E> From<E> for Error
where
    E: StdError + Send + Sync + 'static,
{
    fn from(error: E) -> Self {
        Self::new(error)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl AsRef<dyn StdError + Send + Sync + 'static> for Error {
    fn as_ref(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self.inner.as_ref()
    }
}

impl Deref for Error {
    type Target = dyn StdError + Send + Sync + 'static;

    fn deref(&self) -> &Self::Target {
        self.inner.deref()
    }
}

/// A result type for an error that occurred in a cluster admin service.
pub type Result<T> = result::Result<T, Error>;
