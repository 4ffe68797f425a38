use thiserror::Error;

/// Errors that can occur while loading or validating the catalog tables.
#[derive(Error, Debug, Clone)]
pub enum CatalogError {
    #[error("Failed to parse catalog table '{table}': {message}")]
    JsonParseError { table: String, message: String },

    #[error("Table '{table}' declares id '{id}' more than once")]
    DuplicateId { table: String, id: String },

    #[error(
        "Record '{source_id}' in table '{table}' references '{missing_id}', which does not exist"
    )]
    UnresolvedReference {
        table: String,
        source_id: String,
        missing_id: String,
    },

    #[error("Quiz '{quiz}' is malformed: {message}")]
    MalformedQuiz { quiz: String, message: String },
}

/// Errors that can occur when writing or reading a binary catalog snapshot.
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("Could not access snapshot file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Snapshot encoding failed: {0}")]
    Encode(String),

    #[error("Snapshot decoding failed: {0}")]
    Decode(String),

    #[error("Snapshot contents are invalid: {0}")]
    Invalid(#[from] CatalogError),
}

/// Errors that can occur when encoding or decoding a share code.
#[derive(Error, Debug)]
pub enum ShareError {
    #[error("Share code is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Share code has a broken percent escape: {0}")]
    Escape(#[from] std::string::FromUtf8Error),

    #[error("Share payload is not valid JSON for this tool: {0}")]
    Json(#[from] serde_json::Error),
}
