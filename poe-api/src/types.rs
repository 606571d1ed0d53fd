//! Data types for Path of Exile API responses.
//!
//! Only the account profile is decoded. Character, item, and passive skill
//! payloads are returned as raw JSON text; their schema is undocumented and
//! changes between leagues, so parsing them is left to the caller.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Account profile of the session owner.
///
/// Returned by [`PoeClient::get_profile`](crate::PoeClient::get_profile).
///
/// API JSON fields: `uuid`, `name`, `realm`, `locale`, `twitch`. Any other
/// field the service sends is kept in [`extra`](Self::extra).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Account UUID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    /// Account name, used as `accountName` in character-window requests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Default realm of the account (e.g. `pc`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub realm: Option<String>,
    /// Account locale (e.g. `zh_CN`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// Linked Twitch account, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitch: Option<Value>,
    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
