use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("Malformed transaction amount '{value}': {source}")]
    MalformedAmount {
        value: String,
        #[source]
        source: crate::domain::money::MoneyError,
    },
    #[error("Raw response rendering failed: {0}")]
    Audit(String),
    #[error("Form decoding error: {0}")]
    Form(#[from] serde_urlencoded::de::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Configuration error: {0}")]
    Configuration(String),
}

pub type Result<T> = std::result::Result<T, PaymentError>;
