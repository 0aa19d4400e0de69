pub const SUCCESS_MESSAGE: &str = "Subscription successful";
pub const GENERIC_FAILURE_MESSAGE: &str = "Subscription failed. Please try again later.";
pub const ALREADY_SUBSCRIBED_FRAGMENT: &str = "is already a list member";
pub const ALREADY_SUBSCRIBED_MESSAGE: &str =
    "You have already subscribed to receive emails from Eliza.";

/// Structured rejection reported by the mailing-list provider.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UpstreamError {
    pub status: Option<u16>,
    pub detail: Option<String>,
    pub title: Option<String>,
}

/// Why a member could not be added.
#[derive(Debug)]
pub enum ProviderError {
    /// The request never produced a structured provider response.
    Transport(reqwest::Error),
    /// The provider answered with an error body.
    Rejected(UpstreamError),
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderError::Transport(e) => write!(f, "provider unreachable: {e}"),
            ProviderError::Rejected(u) => write!(
                f,
                "provider rejected request (status {:?}): {}",
                u.status,
                u.detail
                    .as_deref()
                    .or(u.title.as_deref())
                    .unwrap_or("no detail")
            ),
        }
    }
}

impl std::error::Error for ProviderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProviderError::Transport(e) => Some(e),
            ProviderError::Rejected(_) => None,
        }
    }
}

/// The status and message the subscribe endpoint returns for a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscribeRejection {
    pub status: u16,
    pub message: String,
}

/// Maps a provider failure to the user-facing rejection.
///
/// Message preference: provider detail, then title, then the generic
/// fallback. The known "already a list member" rejection is rewritten to a
/// friendlier message with the upstream status left as-is.
pub fn resolve_rejection(err: &ProviderError) -> SubscribeRejection {
    let (status, mut message) = match err {
        ProviderError::Transport(_) => (500, GENERIC_FAILURE_MESSAGE.to_string()),
        ProviderError::Rejected(upstream) => (
            upstream.status.unwrap_or(500),
            upstream
                .detail
                .clone()
                .or_else(|| upstream.title.clone())
                .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string()),
        ),
    };

    if message.contains(ALREADY_SUBSCRIBED_FRAGMENT) {
        message = ALREADY_SUBSCRIBED_MESSAGE.to_string();
    }

    SubscribeRejection { status, message }
}
