use engine::EngineError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error("expense {index} ({description}): {source}")]
    Snapshot {
        index: usize,
        description: String,
        source: EngineError,
    },
}
