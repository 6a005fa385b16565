//! Unified error types for finwell.
//!
//! Only configuration defects surface as errors: a malformed weight table,
//! an incomplete action catalog, an unreadable config file or a store that
//! cannot be written. Malformed user input (bad answer indices, corrupt
//! persisted JSON) is recovered locally and never reaches this module.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for finwell operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum FinwellError {
    /// The question/weight table failed load-time validation
    #[error("Invalid weight table: {context}")]
    Table {
        context: String,
        #[source]
        source: TableErrorKind,
    },

    /// The action catalog failed build-time validation
    #[error("Invalid action catalog: {context}")]
    Catalog {
        context: String,
        #[source]
        source: CatalogErrorKind,
    },

    /// A key-value store could not be read or written
    #[error("Progress store failed: {context}")]
    Store {
        context: String,
        #[source]
        source: StoreErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific weight table error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum TableErrorKind {
    #[error("Table declares no questions")]
    Empty,

    #[error("Question with empty id at position {0}")]
    EmptyId(usize),

    #[error("Duplicate question id: {0}")]
    DuplicateId(String),

    #[error("Choice question '{0}' has no options")]
    NoOptions(String),

    #[error("Slider question '{0}' lists no dimensions")]
    NoSliderDimensions(String),

    #[error("Question '{0}' carries no non-zero weight on any dimension")]
    NoWeights(String),

    #[error("Invalid YAML structure: {0}")]
    InvalidYaml(String),
}

/// Specific action catalog error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CatalogErrorKind {
    #[error("Duplicate step id: {0}")]
    DuplicateStep(String),

    #[error("Step '{step}' referenced by {slot} is not in the catalog")]
    UnknownStep { step: String, slot: String },

    #[error("Dimension '{dimension}' has no {variant} step")]
    MissingVariant { dimension: String, variant: String },

    #[error("Fallback list is empty")]
    EmptyFallback,
}

/// Specific store error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum StoreErrorKind {
    #[error("Serialization failed: {0}")]
    Serialization(String),
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for finwell operations
pub type Result<T> = std::result::Result<T, FinwellError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl FinwellError {
    /// Create a weight table error with context
    pub fn table(context: impl Into<String>, source: TableErrorKind) -> Self {
        Self::Table {
            context: context.into(),
            source,
        }
    }

    /// Create a catalog error with context
    pub fn catalog(context: impl Into<String>, source: CatalogErrorKind) -> Self {
        Self::Catalog {
            context: context.into(),
            source,
        }
    }

    /// Create a store error with context
    pub fn store(context: impl Into<String>, source: StoreErrorKind) -> Self {
        Self::Store {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for FinwellError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for FinwellError {
    fn from(err: serde_json::Error) -> Self {
        Self::store(
            "JSON serialization",
            StoreErrorKind::Serialization(err.to_string()),
        )
    }
}

impl From<serde_yaml_ng::Error> for FinwellError {
    fn from(err: serde_yaml_ng::Error) -> Self {
        Self::table(
            "YAML deserialization",
            TableErrorKind::InvalidYaml(err.to_string()),
        )
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// ```ignore
/// use finwell::error::ErrorContext;
///
/// let table = WeightTable::from_yaml_str(&text)
///     .with_context(|| format!("loading questions from {}", path.display()))?;
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error, prepending it to any existing context.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, only evaluated on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<FinwellError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: FinwellError, new_ctx: &str) -> FinwellError {
    match err {
        FinwellError::Table {
            context: existing,
            source,
        } => FinwellError::Table {
            context: chain_context(new_ctx, &existing),
            source,
        },
        FinwellError::Catalog {
            context: existing,
            source,
        } => FinwellError::Catalog {
            context: chain_context(new_ctx, &existing),
            source,
        },
        FinwellError::Store {
            context: existing,
            source,
        } => FinwellError::Store {
            context: chain_context(new_ctx, &existing),
            source,
        },
        FinwellError::Io {
            path,
            message,
            source,
        } => FinwellError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        FinwellError::Config(msg) => FinwellError::Config(chain_context(new_ctx, &msg)),
        FinwellError::Validation(msg) => FinwellError::Validation(chain_context(new_ctx, &msg)),
    }
}

/// Chain two context strings together as "`new`: `existing`".
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

/// Extension trait for Option types to convert to errors with context.
pub trait OptionContext<T> {
    /// Convert None to an error with the given context.
    fn context_none(self, context: impl Into<String>) -> Result<T>;

    /// Convert None to an error with context from a closure.
    fn with_context_none<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T> OptionContext<T> for Option<T> {
    fn context_none(self, context: impl Into<String>) -> Result<T> {
        self.ok_or_else(|| FinwellError::validation(context))
    }

    fn with_context_none<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.ok_or_else(|| FinwellError::validation(f()))
    }
}
