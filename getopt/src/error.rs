#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("bad option spec {spec:?}: {message}")]
    BadSpec { spec: String, message: String },

    #[error("option not found: {0}")]
    NotFound(String),

    #[error("option {0} expects a value but none was given")]
    MissingValue(String),

    #[error("option {0} is a switch and carries no value")]
    NoValue(String),

    #[error("bad value {value:?} for option {key}: {reason}")]
    BadValue {
        key: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn bad_spec(spec: &str, message: &str) -> Self {
        Error::BadSpec {
            spec: spec.to_string(),
            message: message.to_string(),
        }
    }
}
