//! Error types for schema synthesis and DDL emission

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while synthesizing a schema or emitting DDL
#[derive(Error, Debug)]
pub enum SchemaError {
    /// The root type descriptor was missing or carried no usable name.
    /// Raised before any table is created.
    #[error("root type descriptor is missing or unnamed")]
    InvalidInput,

    /// Directory creation or file write failed while emitting DDL files.
    /// Remaining writes are aborted; files already written are left in place.
    #[error("failed to write DDL to {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;
