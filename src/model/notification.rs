use serde::{Serialize, Deserialize};

use super::user::UserId;

/// Push notification addressed to a set of users.
///
/// `message` is a free-form, string-keyed payload; it is converted into the
/// backend's generic structured wire value at call time, and that conversion
/// can fail (see [`MarshalError`](crate::wire::MarshalError)). `user_ids`
/// left as `None` reaches the backend as an empty recipient list, not as an
/// absent field. `is_base` is forwarded only when set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PushRequest {
    pub message: serde_json::Map<String, serde_json::Value>,
    pub user_ids: Option<Vec<UserId>>,
    pub is_base: Option<bool>,
}

impl PushRequest {
    /// Creates a push request carrying only the message payload.
    pub fn new(message: serde_json::Map<String, serde_json::Value>) -> Self {
        Self {
            message,
            user_ids: None,
            is_base: None,
        }
    }

    /// Sets the explicit recipient list.
    pub fn with_user_ids(mut self, user_ids: Vec<UserId>) -> Self {
        self.user_ids = Some(user_ids);
        self
    }

    /// Marks whether the push targets the base audience.
    pub fn with_is_base(mut self, is_base: bool) -> Self {
        self.is_base = Some(is_base);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn message() -> serde_json::Map<String, serde_json::Value> {
        match json!({ "title": "Hi" }) {
            serde_json::Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_new_leaves_recipients_and_base_flag_unset() {
        let request = PushRequest::new(message());
        assert_eq!(request.user_ids, None);
        assert_eq!(request.is_base, None);
    }

    #[test]
    fn test_builders_fill_optional_fields() {
        let request = PushRequest::new(message())
            .with_user_ids(vec![UserId(1), UserId(2)])
            .with_is_base(true);
        assert_eq!(request.user_ids, Some(vec![UserId(1), UserId(2)]));
        assert_eq!(request.is_base, Some(true));
    }
}
