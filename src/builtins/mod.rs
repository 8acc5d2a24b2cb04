//! Privileged built-in functions
//!
//! - `SaveUserName`: binds a username hash to an account
//! - `AuthorizationSet`: DNS addresses allowed to call it
//! - `EventSink`: where processing events are reported

pub mod auth;
pub mod events;
pub mod username;

pub use auth::AuthorizationSet;
pub use events::{BuiltinEvent, EventSink, MemorySink, NoopSink, TracingSink};
pub use username::{SaveUserName, USER_NAME_HASH_LENGTH};
