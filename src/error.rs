use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Setup-time failures. A controller is never built from a configuration
/// that produces one of these.
#[derive(Debug, Error)]
pub enum Error {
    #[error("axle count is {axle_count} but only {available} axles were supplied")]
    MissingAxles { axle_count: usize, available: usize },

    #[error("axle {index} requests motor or steering but has no wheels")]
    AxleWithoutWheels { index: usize },

    #[error("limit `{name}` is not a finite number ({value})")]
    NonFiniteLimit { name: &'static str, value: f64 },

    #[error("failed to read controller config")]
    Io(#[from] std::io::Error),

    #[error("failed to parse controller config")]
    Json(#[from] serde_json::Error),
}
