//! Error types for level and settings loading
//!
//! Only setup work can fail. The per-tick simulation never returns errors;
//! degenerate geometry resolves to zero vectors instead.

/// Level definition errors
#[derive(thiserror::Error, Debug)]
pub enum LevelError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A wall references a mesh the loader never registered
    #[error("Unknown mesh: {0}")]
    UnknownMesh(String),

    /// Ghost waypoints must span a rectangle with initial >= final on x and z
    #[error("Ghost {index} has an invalid patrol rectangle")]
    InvalidPatrol { index: usize },

    /// A box read with min and max swapped on some axis
    #[error("Level {0} box has min above max")]
    InvertedBox(&'static str),

    /// Nothing to eat means the level is won before it starts
    #[error("Level has no pellets")]
    EmptyLevel,
}

/// Settings errors
#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
