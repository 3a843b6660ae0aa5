use thiserror::Error;

// Re-export a simple Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal errors. Recoverable conditions (skipped tokens, ignored flags) are
/// reported through the logger instead.
#[derive(Error, Debug)]
pub enum Error {
    // ---- Command line -------------------------------------------------------
    /// Malformed command line (e.g. a file flag without its path).
    #[error("Parse error: {0}")]
    Parse(String),

    /// `-sortingType` missing its value or given an unknown one.
    #[error("No sorting type defined!")]
    InvalidSortingType,

    /// `-dataType` missing its value or given an unknown one.
    #[error("No data type defined!")]
    InvalidDataType,

    // ---- Config -------------------------------------------------------------
    /// Any issue reading the config file (missing explicit path, invalid JSON, etc.)
    #[error("Config error: {0}")]
    Config(String),

    // ---- Plumbing / Wrappers ------------------------------------------------
    /// IO passthrough (input source, output file).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// ----------------------- Convenience constructors ----------------------------

impl Error {
    /// Helper to create a parse error from any displayable value.
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        Error::Parse(msg.into())
    }
    /// Helper to create a generic config error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }
}

/// Map an `Option<T>` into `Result<T, Error::Parse>` with a custom message.
pub fn require_parse<T, S: Into<String>>(opt: Option<T>, msg: S) -> Result<T> {
    opt.ok_or_else(|| Error::Parse(msg.into()))
}
