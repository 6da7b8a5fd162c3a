use serde::{Deserialize, Serialize};

/// License tier of the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SubscriptionTier {
    #[default]
    Free,
    Premium,
}

impl SubscriptionTier {
    /// Anything other than `"premium"` is the free tier.
    pub fn from_api(value: &str) -> Self {
        if value.eq_ignore_ascii_case("premium") {
            SubscriptionTier::Premium
        } else {
            SubscriptionTier::Free
        }
    }

    pub fn is_premium(self) -> bool {
        self == SubscriptionTier::Premium
    }
}
