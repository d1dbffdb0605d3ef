use thiserror::Error;

/// Failure of a call to the REST backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Ошибка сети: {0}")]
    Network(String),
    #[error("Ошибка сервера {status}: {message}")]
    Status { status: u16, message: String },
    #[error("Запись не найдена")]
    NotFound,
    #[error("Требуется авторизация")]
    Unauthorized,
    #[error("Ошибка парсинга: {0}")]
    Decode(String),
}

impl FetchError {
    /// Maps a non-2xx HTTP status to an error
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        match status {
            401 | 403 => FetchError::Unauthorized,
            404 => FetchError::NotFound,
            _ => FetchError::Status {
                status,
                message: message.into(),
            },
        }
    }
}
