use thiserror::Error;

#[derive(Error, Debug)]
pub enum WheelError {
    #[error("Store is not configured. Please run 'wheel auth --url <URL> --key <KEY>' or set WHEEL_STORE_URL and WHEEL_STORE_KEY.")]
    StoreNotConfigured,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("API request failed: {0}")]
    ApiError(String),

    #[error("Store error: {0}")]
    StoreError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Terminal error: {0}")]
    TerminalError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

pub type WheelResult<T> = Result<T, WheelError>;

pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> WheelResult<T>;
    fn with_context<F>(self, f: F) -> WheelResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn context(self, msg: &str) -> WheelResult<T> {
        self.map_err(|e| WheelError::Unknown(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> WheelResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| WheelError::Unknown(format!("{}: {}", f(), e)))
    }
}

#[macro_export]
macro_rules! wheel_error {
    ($error_type:ident, $msg:expr) => {
        $crate::error::WheelError::$error_type($msg.to_string())
    };
    ($error_type:ident, $fmt:expr, $($arg:tt)*) => {
        $crate::error::WheelError::$error_type(format!($fmt, $($arg)*))
    };
}
