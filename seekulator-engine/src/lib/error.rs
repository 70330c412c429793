use std::fmt::{self, Display, Formatter};

/// Error type for rejected simulation inputs. The engine never returns a
/// partial schedule: validation happens up front and this is the only way a
/// run can fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidInput {
    desc: String,
}

impl InvalidInput {
    /// Convenient creation.
    pub(crate) fn new<S>(desc: S) -> Self
        where S: Into<String>
    {
        InvalidInput {
            desc: desc.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.desc
    }
}

impl Display for InvalidInput {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.desc)
    }
}

impl std::error::Error for InvalidInput {}

/// Result type alias.
pub type SchedResult<T> = Result<T, InvalidInput>;

/// Return an InvalidInput with the given message if the provided condition
/// is false.
macro_rules! validate_or_error {
    ($condition:expr, $message:expr) => {{
        if !$condition {
            return Err(InvalidInput::new($message));
        }
    }}
}
