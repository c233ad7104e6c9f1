use gridwalk_core_types::{RequestId, TraceId};
use thiserror::Error;

/// Result type alias using GridError
pub type Result<T> = std::result::Result<T, GridError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that is used in structured logs and
/// by the HTTP layer to pick a response status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Validation
    InvalidInput,

    // Computation
    ArithmeticOverflow,

    // Integration/IO
    Io,
    Serialization,
    Persistence,
    Configuration,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::ArithmeticOverflow => "ERR_ARITHMETIC_OVERFLOW",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::Configuration => "ERR_CONFIGURATION",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }

    /// Whether the error was caused by the caller's input rather than by the
    /// service itself
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ExErrorKind::InvalidInput | ExErrorKind::ArithmeticOverflow
        )
    }
}

/// Canonical structured error type
///
/// Carries a classification for programmatic handling plus optional context
/// for debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    move_index: Option<usize>,
    request_id: Option<RequestId>,
    trace_id: Option<TraceId>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            move_index: None,
            request_id: None,
            trace_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add the index of the offending move
    pub fn with_move_index(mut self, index: usize) -> Self {
        self.move_index = Some(index);
        self
    }

    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    pub fn with_trace_id(mut self, trace_id: TraceId) -> Self {
        self.trace_id = Some(trace_id);
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn move_index(&self) -> Option<usize> {
        self.move_index
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    pub fn trace_id(&self) -> Option<&TraceId> {
        self.trace_id.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(index) = self.move_index {
            write!(f, " (move_index: {})", index)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy of the coverage engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Direction token is not one of north/south/east/west
    #[error("command {index}: invalid direction '{token}'")]
    InvalidDirection { index: usize, token: String },

    /// Step count is below zero
    #[error("command {index}: steps must be >= 0, got {steps}")]
    NegativeSteps { index: usize, steps: i64 },

    /// Step count is absent
    #[error("command {index}: steps is missing")]
    MissingSteps { index: usize },

    /// The command list is empty
    #[error("commands must not be empty")]
    NoCommands,

    /// Cursor left the 64-bit coordinate range
    #[error("command {index}: coordinate overflow")]
    ArithmeticOverflow { index: usize },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl GridError {
    /// Re-tag a move-level error with its position in the command list.
    pub(crate) fn at_index(self, index: usize) -> Self {
        match self {
            GridError::InvalidDirection { token, .. } => {
                GridError::InvalidDirection { index, token }
            }
            GridError::NegativeSteps { steps, .. } => GridError::NegativeSteps { index, steps },
            GridError::MissingSteps { .. } => GridError::MissingSteps { index },
            GridError::ArithmeticOverflow { .. } => GridError::ArithmeticOverflow { index },
            other => other,
        }
    }
}

impl From<GridError> for ExError {
    fn from(err: GridError) -> Self {
        let message = err.to_string();
        match err {
            GridError::InvalidDirection { index, .. }
            | GridError::NegativeSteps { index, .. }
            | GridError::MissingSteps { index } => ExError::new(ExErrorKind::InvalidInput)
                .with_op("validate_commands")
                .with_move_index(index)
                .with_message(message),

            GridError::NoCommands => ExError::new(ExErrorKind::InvalidInput)
                .with_op("validate_commands")
                .with_message(message),

            GridError::ArithmeticOverflow { index } => {
                ExError::new(ExErrorKind::ArithmeticOverflow)
                    .with_op("trace_path")
                    .with_move_index(index)
                    .with_message(message)
            }

            GridError::Internal { .. } => {
                ExError::new(ExErrorKind::Internal).with_message(message)
            }
        }
    }
}
