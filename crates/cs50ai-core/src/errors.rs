use thiserror::Error;

/// Result type alias using AiError
pub type Result<T> = std::result::Result<T, AiError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// This taxonomy provides a stable, structured classification of all errors
/// raised by the games, the logic engine and the file formats. Each kind maps
/// to a stable error code usable by tests and by `--json` consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Input/Validation
    InvalidInput,
    InvalidBoard,
    InvalidPuzzle,
    InvalidConfig,
    ParseError,

    // Moves
    OutOfBounds,
    CellOccupied,
    GameOver,

    // Inference
    UnknownSymbol,
    TooManySymbols,
    InconsistentKnowledge,

    // Integration/IO
    Io,
    Serialization,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::InvalidBoard => "ERR_INVALID_BOARD",
            ExErrorKind::InvalidPuzzle => "ERR_INVALID_PUZZLE",
            ExErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
            ExErrorKind::ParseError => "ERR_PARSE",
            ExErrorKind::OutOfBounds => "ERR_OUT_OF_BOUNDS",
            ExErrorKind::CellOccupied => "ERR_CELL_OCCUPIED",
            ExErrorKind::GameOver => "ERR_GAME_OVER",
            ExErrorKind::UnknownSymbol => "ERR_UNKNOWN_SYMBOL",
            ExErrorKind::TooManySymbols => "ERR_TOO_MANY_SYMBOLS",
            ExErrorKind::InconsistentKnowledge => "ERR_INCONSISTENT_KNOWLEDGE",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries the classification (`kind`), the operation that failed and the
/// subject it failed on (a cell, a symbol, a file path), plus a message.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    subject: Option<String>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            subject: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add the subject the operation failed on
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Add a human-readable message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Chain an underlying error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
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

    /// Get the subject context, if any
    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
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
        if let Some(subject) = &self.subject {
            write!(f, " (subject: {})", subject)?;
        }
        if let Some(source) = &self.source {
            write!(f, "; caused by {}", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Error taxonomy for the games and the logic engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AiError {
    // ===== Move Errors =====
    /// Cell coordinates fall outside the board
    #[error("Cell ({row}, {col}) is outside a {height}x{width} board")]
    OutOfBounds {
        row: usize,
        col: usize,
        height: usize,
        width: usize,
    },

    /// Cell already holds a mark
    #[error("Cell ({row}, {col}) is already occupied")]
    CellOccupied { row: usize, col: usize },

    /// A move was requested on a finished game
    #[error("Game is already over")]
    GameOver,

    /// Board text or contents do not describe a reachable position
    #[error("Invalid board: {reason}")]
    InvalidBoard { reason: String },

    /// Minesweeper dimensions cannot hold the requested mines
    #[error("Invalid minesweeper dimensions: {height}x{width} with {mines} mines")]
    InvalidDimensions {
        height: usize,
        width: usize,
        mines: usize,
    },

    // ===== Inference Errors =====
    /// Sentence references a symbol the model does not assign
    #[error("Variable {symbol} not in model")]
    SymbolNotInModel { symbol: String },

    /// Model checking would enumerate too many assignments
    #[error("Model checking over {count} symbols exceeds the limit of {max}")]
    TooManySymbols { count: usize, max: usize },

    /// Minesweeper knowledge contradicts itself
    #[error("Inconsistent minesweeper knowledge: {reason}")]
    InconsistentKnowledge { reason: String },

    // ===== Formula/Puzzle Errors =====
    /// Formula text could not be parsed
    #[error("Parse error at offset {offset}: {reason}")]
    Parse { offset: usize, reason: String },

    /// Puzzle references a character that was never introduced
    #[error("Unknown character: {name}")]
    UnknownCharacter { name: String },

    /// Puzzle introduces the same character twice
    #[error("Duplicate character: {name}")]
    DuplicateCharacter { name: String },

    /// Speaker was given an empty list of possible statements
    #[error("Character {speaker} must say at least one statement")]
    EmptyStatement { speaker: String },

    // ===== Generic Errors =====
    /// Generic internal error
    #[error("Internal error: {message}")]
    Internal { message: String },
}

fn cell_subject(row: usize, col: usize) -> String {
    format!("({}, {})", row, col)
}

/// Conversion from AiError to ExError
///
/// Lets engine and store code report domain failures through the canonical
/// facility while core keeps its precise enum.
impl From<AiError> for ExError {
    fn from(err: AiError) -> Self {
        let message = err.to_string();
        match err {
            AiError::OutOfBounds { row, col, .. } => ExError::new(ExErrorKind::OutOfBounds)
                .with_subject(cell_subject(row, col))
                .with_message(message),

            AiError::CellOccupied { row, col } => ExError::new(ExErrorKind::CellOccupied)
                .with_subject(cell_subject(row, col))
                .with_message(message),

            AiError::GameOver => ExError::new(ExErrorKind::GameOver).with_message(message),

            AiError::InvalidBoard { .. } => {
                ExError::new(ExErrorKind::InvalidBoard).with_message(message)
            }

            AiError::InvalidDimensions { .. } => {
                ExError::new(ExErrorKind::InvalidInput).with_message(message)
            }

            AiError::SymbolNotInModel { symbol } => ExError::new(ExErrorKind::UnknownSymbol)
                .with_subject(symbol)
                .with_message(message),

            AiError::TooManySymbols { .. } => {
                ExError::new(ExErrorKind::TooManySymbols).with_message(message)
            }

            AiError::InconsistentKnowledge { .. } => {
                ExError::new(ExErrorKind::InconsistentKnowledge).with_message(message)
            }

            AiError::Parse { .. } => ExError::new(ExErrorKind::ParseError).with_message(message),

            AiError::UnknownCharacter { name }
            | AiError::DuplicateCharacter { name }
            | AiError::EmptyStatement { speaker: name } => {
                ExError::new(ExErrorKind::InvalidPuzzle)
                    .with_subject(name)
                    .with_message(message)
            }

            AiError::Internal { .. } => ExError::new(ExErrorKind::Internal).with_message(message),
        }
    }
}
