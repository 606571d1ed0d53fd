//! Path of Exile web API client library.
//!
//! Reads a player's profile, character list, items, and passive skill tree
//! through the `character-window` endpoints of the Path of Exile website
//! (by default the Tencent realm, `poe.game.qq.com`).
//!
//! # Authentication
//!
//! All calls are authenticated by a `POESESSID` cookie taken from a logged-in
//! browser session. It is placed in the client's cookie jar at construction
//! and never validated locally; an expired value shows up as
//! [`StatusError::SessionExpired`].
//!
//! ```no_run
//! use poe_api::{PoeClient, DEFAULT_HOST, DEFAULT_REALM};
//!
//! let client = PoeClient::new(DEFAULT_HOST, "YOUR_POESESSID").unwrap();
//! let characters = client.get_characters("account", DEFAULT_REALM).unwrap();
//! println!("{characters}");
//! ```
//!
//! # API endpoint mapping
//!
//! | Method                            | Request                                     | Returns     |
//! |-----------------------------------|---------------------------------------------|-------------|
//! | [`PoeClient::get_profile`]        | `GET /api/profile`                          | [`Profile`] |
//! | [`PoeClient::get_characters`]     | `POST /character-window/get-characters`     | raw JSON    |
//! | [`PoeClient::get_items`]          | `POST /character-window/get-items`          | raw JSON    |
//! | [`PoeClient::get_passive_skills`] | `POST /character-window/get-passive-skills` | raw JSON    |
//!
//! # Errors
//!
//! Non-200 statuses are translated by [`classify`] into a [`StatusError`].
//! Nothing is retried; [`StatusError::is_retryable`] only reports whether
//! backing off could help.

mod characters;
pub mod client;
pub mod config;
pub mod error;
mod items;
mod passives;
mod profile;
pub mod types;

pub use client::{Endpoints, PoeClient, SESSION_COOKIE};
pub use config::{ClientConfig, DEFAULT_HOST, DEFAULT_REALM};
pub use error::{PoeError, Result, StatusError, classify};
pub use types::Profile;
