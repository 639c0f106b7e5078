use thiserror::Error;

/// Everything that can abort the pipeline.  Each stage returns one of these;
/// the driver decides which stages are fatal.
#[derive(Error, Debug)]
pub enum EtlError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Malformed numeric text, or the page no longer has the expected
    /// table structure.
    #[error("parse error: {0}")]
    Parse(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("database error: {0}")]
    Db(#[from] duckdb::Error),
}
