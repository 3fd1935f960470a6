use serde::{Serialize, Deserialize};
use std::fmt;

/// Identifier of a user account.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Subscription plan attached to a user account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tariff {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: i64,
    pub features: Vec<String>,
}

/// Full profile of a user account.
///
/// A pure copy of the backend's profile record: subscription plan, the
/// subscription window (dates stay strings, exactly as the backend sends
/// them), usage counters, and capability flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub user_id: UserId,
    pub tariff: Tariff,
    pub start_date: String,
    pub end_date: Option<String>,
    pub count_lawyers: u32,
    pub consultations_total: u32,
    pub consultations_used: u32,
    pub can_use_ai: bool,
    pub can_create_custom_templates: bool,
    pub unlimited_documents: bool,
}
