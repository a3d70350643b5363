use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Duplicate contact. A contact with this name already exists.")]
    DuplicateName(String),

    #[error("Invalid phone number. Please enter a valid phone number.")]
    InvalidPhoneNumber(String),

    #[error("Contact not found.")]
    NotFound(String),

    #[error("Contact name must not be empty.")]
    InvalidName,

    #[error("Invalid choice. Please try again.")]
    ParseCommand(String),

    #[error("I/O error while reading or writing the console: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Store rejections the menu reports and moves past.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, AppError::Io(_) | AppError::Config(_))
    }
}
