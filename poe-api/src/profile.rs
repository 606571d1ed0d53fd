//! Account profile API.
//!
//! Endpoint: `GET /api/profile`
//!
//! No parameters; the account is identified by the `POESESSID` cookie.
//!
//! Response:
//! ```json
//! {
//!   "uuid": "0a1b2c3d-...",
//!   "name": "盲将盲将",
//!   "realm": "pc",
//!   "locale": "zh_CN"
//! }
//! ```

use crate::client::PoeClient;
use crate::error::Result;
use crate::types::Profile;

impl PoeClient {
    /// Get the profile of the account owning the session cookie.
    ///
    /// # Errors
    ///
    /// - [`PoeError::Http`](crate::PoeError::Http) — network failure
    /// - [`PoeError::Status`](crate::PoeError::Status) — non-200 status,
    ///   typically [`StatusError::SessionExpired`](crate::StatusError::SessionExpired)
    /// - [`PoeError::Json`](crate::PoeError::Json) — 200 with a malformed body
    pub fn get_profile(&self) -> Result<Profile> {
        let body = self.get(&self.endpoints().profile)?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use crate::types::Profile;
    use serde_json::json;

    #[test]
    fn decodes_known_and_unknown_fields() {
        let body = r#"{"uuid":"u-1","name":"foo","realm":"pc","locale":"zh_CN","guild":{"id":7}}"#;
        let p: Profile = serde_json::from_str(body).unwrap();
        assert_eq!(p.uuid.as_deref(), Some("u-1"));
        assert_eq!(p.name.as_deref(), Some("foo"));
        assert_eq!(p.realm.as_deref(), Some("pc"));
        assert_eq!(p.locale.as_deref(), Some("zh_CN"));
        assert!(p.twitch.is_none());
        assert_eq!(p.extra.get("guild"), Some(&json!({"id": 7})));
    }

    #[test]
    fn empty_object_is_a_valid_profile() {
        let p: Profile = serde_json::from_str("{}").unwrap();
        assert_eq!(p, Profile::default());
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(serde_json::from_str::<Profile>(r#"{"name":"foo""#).is_err());
        assert!(serde_json::from_str::<Profile>("<html>login</html>").is_err());
    }
}
