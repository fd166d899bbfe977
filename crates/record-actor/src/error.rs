//! # Framework Errors
//!
//! Errors raised by the record actor plumbing itself. Failures coming out of a
//! record's own hooks travel boxed inside [`FrameworkError::RecordError`] and can
//! be recovered with [`FrameworkError::into_record_error`].

/// Errors that can occur within the record actor framework.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Record not found: {0}")]
    NotFound(String),
    #[error("Record error: {0}")]
    RecordError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Recovers the concrete error a record hook returned.
    ///
    /// Returns `Err(self)` unchanged when this is not a `RecordError` or the
    /// boxed error is of a different type.
    pub fn into_record_error<E>(self) -> Result<E, Self>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        match self {
            FrameworkError::RecordError(inner) => inner
                .downcast::<E>()
                .map(|e| *e)
                .map_err(FrameworkError::RecordError),
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error, PartialEq)]
    #[error("stale")]
    struct Stale;

    #[derive(Debug, thiserror::Error)]
    #[error("other")]
    struct Other;

    #[test]
    fn record_error_downcasts_to_its_own_type() {
        let err = FrameworkError::RecordError(Box::new(Stale));
        assert_eq!(err.into_record_error::<Stale>().unwrap(), Stale);
    }

    #[test]
    fn foreign_errors_are_handed_back() {
        let err = FrameworkError::RecordError(Box::new(Other));
        let back = err.into_record_error::<Stale>().unwrap_err();
        assert!(matches!(back, FrameworkError::RecordError(_)));

        let closed = FrameworkError::ActorClosed.into_record_error::<Stale>();
        assert!(matches!(closed, Err(FrameworkError::ActorClosed)));
    }
}
