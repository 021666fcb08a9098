use thiserror::Error;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing, and alert routing. Normalization and rendering
/// never produce errors; these kinds cover configuration, structured
/// (de)serialization, artifact I/O and the external parser/differ ports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Input/Validation
    InvalidInput,
    InvalidConfig,
    MalformedNode,
    NotFound,

    // Integration/IO
    Io,
    Serialization,
    Parse,
    DiffEngine,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
            ExErrorKind::MalformedNode => "ERR_MALFORMED_NODE",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Parse => "ERR_PARSE",
            ExErrorKind::DiffEngine => "ERR_DIFF_ENGINE",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification kind plus optional context about which
/// operation, screen and side the failure belongs to.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    screen: Option<String>,
    side: Option<String>,
    key: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            screen: None,
            side: None,
            key: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add screen name context
    pub fn with_screen(mut self, screen: impl Into<String>) -> Self {
        self.screen = Some(screen.into());
        self
    }

    /// Add side context ("current" / "preview")
    pub fn with_side(mut self, side: impl Into<String>) -> Self {
        self.side = Some(side.into());
        self
    }

    /// Add artifact key context
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the screen context, if any
    pub fn screen(&self) -> Option<&str> {
        self.screen.as_deref()
    }

    /// Get the side context, if any
    pub fn side(&self) -> Option<&str> {
        self.side.as_deref()
    }

    /// Get the artifact key context, if any
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Get the error message
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
        if let Some(screen) = &self.screen {
            write!(f, " (screen: {})", screen)?;
        }
        if let Some(side) = &self.side {
            write!(f, " (side: {})", side)?;
        }
        if let Some(key) = &self.key {
            write!(f, " (key: {})", key)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Concrete failures raised outside the (infallible) normalize/render core
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScreenDiffError {
    /// A required configuration key is absent
    #[error("Missing configuration key: {key}")]
    MissingConfig { key: String },

    /// A configuration key is present but unusable
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    /// A serialized node violates the element/character-data invariants
    #[error("Malformed node {node_name}: {reason}")]
    MalformedNode { node_name: String, reason: String },

    /// Structured dump could not be produced or read back
    #[error("Serialization error: {reason}")]
    Serialization { reason: String },

    /// Screen name cannot be used to build an artifact key
    #[error("Invalid screen name: {screen}")]
    InvalidScreenName { screen: String },
}

impl From<ScreenDiffError> for ExError {
    fn from(err: ScreenDiffError) -> Self {
        match err {
            ScreenDiffError::MissingConfig { key } => ExError::new(ExErrorKind::InvalidConfig)
                .with_key(key)
                .with_message("Required configuration key is missing"),

            ScreenDiffError::InvalidConfig { reason } => {
                ExError::new(ExErrorKind::InvalidConfig).with_message(reason)
            }

            ScreenDiffError::MalformedNode { node_name, reason } => {
                ExError::new(ExErrorKind::MalformedNode)
                    .with_message(format!("{}: {}", node_name, reason))
            }

            ScreenDiffError::Serialization { reason } => {
                ExError::new(ExErrorKind::Serialization).with_message(reason)
            }

            ScreenDiffError::InvalidScreenName { screen } => {
                ExError::new(ExErrorKind::InvalidInput)
                    .with_screen(screen)
                    .with_message("Screen name must be a single non-empty path segment")
            }
        }
    }
}

impl From<serde_json::Error> for ScreenDiffError {
    fn from(err: serde_json::Error) -> Self {
        ScreenDiffError::Serialization {
            reason: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for ScreenDiffError {
    fn from(err: serde_yaml::Error) -> Self {
        ScreenDiffError::Serialization {
            reason: err.to_string(),
        }
    }
}

impl From<::config::ConfigError> for ScreenDiffError {
    fn from(err: ::config::ConfigError) -> Self {
        match err {
            ::config::ConfigError::NotFound(key) => ScreenDiffError::MissingConfig { key },
            ::config::ConfigError::Message(msg) if msg.starts_with("missing field") => {
                let key = msg
                    .trim_start_matches("missing field")
                    .trim()
                    .trim_matches('`')
                    .to_string();
                ScreenDiffError::MissingConfig { key }
            }
            other => ScreenDiffError::InvalidConfig {
                reason: other.to_string(),
            },
        }
    }
}

impl From<serde_json::Error> for ExError {
    fn from(err: serde_json::Error) -> Self {
        ScreenDiffError::from(err).into()
    }
}

impl From<serde_yaml::Error> for ExError {
    fn from(err: serde_yaml::Error) -> Self {
        ScreenDiffError::from(err).into()
    }
}

impl From<::config::ConfigError> for ExError {
    fn from(err: ::config::ConfigError) -> Self {
        ScreenDiffError::from(err).into()
    }
}
