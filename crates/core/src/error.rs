/// Errors raised while resolving or disclosing a referral record.
///
/// `Display` carries the internal detail and is meant for server-side logs only. Callers that
/// build a response should use [`ReferralError::status_code`] and
/// [`ReferralError::public_message`], which never include upstream bodies or credentials.
#[derive(Debug, thiserror::Error)]
pub enum ReferralError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("key is required")]
    MissingKey,
    #[error("phone number is required for verification")]
    MissingPhone,
    #[error("no referral record for key {key}")]
    NotFound { key: String },
    #[error("phone number does not match record for key {key}")]
    PhoneMismatch { key: String },
    #[error("record store returned {status}: {detail}")]
    Upstream { status: u16, detail: String },
    #[error("record store request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("failed to decode record store response: {0}")]
    Decode(serde_json::Error),
}

impl ReferralError {
    /// HTTP status class this error should be reported with.
    ///
    /// Upstream failures mirror the store's status when it is an error code; anything else
    /// becomes `502`.
    pub fn status_code(&self) -> u16 {
        match self {
            ReferralError::MissingKey | ReferralError::MissingPhone => 400,
            ReferralError::PhoneMismatch { .. } => 401,
            ReferralError::NotFound { .. } => 404,
            ReferralError::Upstream { status, .. } if (400..=599).contains(status) => *status,
            ReferralError::Upstream { .. } => 502,
            ReferralError::Configuration(_)
            | ReferralError::Transport(_)
            | ReferralError::Decode(_) => 500,
        }
    }

    /// Short error label safe to return to a caller.
    pub fn public_error(&self) -> &'static str {
        match self {
            ReferralError::Configuration(_) => "Config error",
            ReferralError::MissingKey => "Key is required",
            ReferralError::MissingPhone => "Phone number is required",
            ReferralError::NotFound { .. } => "Not found",
            ReferralError::PhoneMismatch { .. } => "Unauthorized",
            ReferralError::Upstream { .. } => "Record store error",
            ReferralError::Transport(_) | ReferralError::Decode(_) => "Server error",
        }
    }

    /// Optional human-readable message safe to return to a caller.
    pub fn public_message(&self) -> Option<&'static str> {
        match self {
            ReferralError::NotFound { .. } => Some("Referral record not found"),
            ReferralError::PhoneMismatch { .. } => Some("Phone number does not match"),
            ReferralError::Transport(_) | ReferralError::Decode(_) => {
                Some("An unexpected error occurred")
            }
            _ => None,
        }
    }

    /// Whether the failure is a caller mistake rather than a fault on our side.
    ///
    /// Upstream failures are never the caller's fault, even when the mirrored status is a 4xx
    /// (a revoked store token answers 401).
    pub fn is_client_error(&self) -> bool {
        match self {
            ReferralError::Upstream { .. } => false,
            _ => (400..500).contains(&self.status_code()),
        }
    }
}

pub type ReferralResult<T> = std::result::Result<T, ReferralError>;
