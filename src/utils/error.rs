use thiserror::Error;

#[derive(Error, Debug)]
pub enum NavigationPageError {
    #[error("CMS page not found: {page_id}")]
    PageNotFound { page_id: String },

    #[error("Header carries no active navigation entry")]
    NavigationNotActive,

    #[error("Navigation entry not found: {navigation_id}")]
    NavigationNotFound { navigation_id: String },

    #[error("Navigation entry {navigation_id} does not reference a CMS page")]
    MissingCmsPageReference { navigation_id: String },

    #[error("Slot data resolver returned {actual} slots for {expected} submitted")]
    SlotResolutionMismatch { expected: usize, actual: usize },

    #[error("Slot data resolution failed for slot {slot_id}: {message}")]
    SlotResolutionError { slot_id: String, message: String },

    #[error("Subscriber {subscriber} failed: {message}")]
    SubscriberError { subscriber: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

impl NavigationPageError {
    /// 是否為「找不到」類錯誤，請求層可據此回應 not-found
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            NavigationPageError::PageNotFound { .. } | NavigationPageError::NavigationNotFound { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, NavigationPageError>;
