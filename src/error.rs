use crate::prelude::*;

/// Broad classification of a [`DateError`], for callers that branch on the
/// kind of failure rather than its details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ErrorKind {
    #[display(fmt = "missing argument")]
    MissingArgument,
    #[display(fmt = "invalid argument")]
    InvalidArgument,
    #[display(fmt = "out of range")]
    OutOfRange,
    #[display(fmt = "internal inconsistency")]
    InternalInconsistency,
}

impl ErrorKind {
    /// Whether the caller can fix the failure by changing its input.
    /// An internal inconsistency is a defect in the day tables and is not.
    pub const fn is_recoverable(self) -> bool {
        !matches!(self, Self::InternalInconsistency)
    }
}

/// Error returned by every fallible routine in this crate.
///
/// Each variant names the routine that failed and the offending value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// A required input was empty.
    #[error("{routine}: missing argument `{argument}`")]
    MissingArgument {
        routine:  &'static str,
        argument: &'static str,
    },

    /// An input had the wrong shape, e.g. a non-numeric ordinal day or a non-positive year.
    #[error("{routine}: invalid argument `{argument}`: {value}")]
    InvalidArgument {
        routine:  &'static str,
        argument: &'static str,
        value:    String,
    },

    /// The ordinal day falls outside `1..=max` for the resolved year kind.
    #[error("{routine}: ordinal day {value} out of range (must be 1-{max})")]
    OutOfRange {
        routine: &'static str,
        value:   String,
        max:     u16,
    },

    /// No month interval contains a validated ordinal day.
    #[error("{routine}: no month contains ordinal day {value}, cumulative day table is inconsistent")]
    InternalInconsistency { routine: &'static str, value: u16 },
}

impl DateError {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingArgument { .. } => ErrorKind::MissingArgument,
            Self::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Self::OutOfRange { .. } => ErrorKind::OutOfRange,
            Self::InternalInconsistency { .. } => ErrorKind::InternalInconsistency,
        }
    }

    /// Name of the routine that reported the error
    pub const fn routine(&self) -> &'static str {
        match self {
            Self::MissingArgument { routine, .. }
            | Self::InvalidArgument { routine, .. }
            | Self::OutOfRange { routine, .. }
            | Self::InternalInconsistency { routine, .. } => *routine,
        }
    }

    /// Reports the error as coming from `routine`, for public entry points
    /// that delegate to lower-level constructors.
    #[must_use]
    pub fn with_routine(self, routine: &'static str) -> Self {
        match self {
            Self::MissingArgument { argument, .. } => Self::MissingArgument { routine, argument },
            Self::InvalidArgument { argument, value, .. } => Self::InvalidArgument {
                routine,
                argument,
                value,
            },
            Self::OutOfRange { value, max, .. } => Self::OutOfRange {
                routine,
                value,
                max,
            },
            Self::InternalInconsistency { value, .. } => {
                Self::InternalInconsistency { routine, value }
            }
        }
    }

    pub(crate) fn invalid(
        routine: &'static str,
        argument: &'static str,
        value: impl std::fmt::Display,
    ) -> Self {
        Self::InvalidArgument {
            routine,
            argument,
            value: crate::validate::strstr(value),
        }
    }
}
