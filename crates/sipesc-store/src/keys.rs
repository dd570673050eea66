//! Key naming for persisted sessions.
//!
//! A session lives under a namespace as two entries, `{namespace}:token` and
//! `{namespace}:user`. The CLI uses one fixed namespace; the server gives each
//! login its own `session:{sid}` namespace.

/// Namespace of the single-user session kept by the CLI.
pub const DEFAULT_NAMESPACE: &str = "sipesc";

/// Prefix shared by every server-side session namespace.
pub const SESSION_PREFIX: &str = "session:";

const TOKEN_SUFFIX: &str = ":token";
const USER_SUFFIX: &str = ":user";

pub fn token_key(namespace: &str) -> String {
    format!("{namespace}{TOKEN_SUFFIX}")
}

pub fn user_key(namespace: &str) -> String {
    format!("{namespace}{USER_SUFFIX}")
}

pub fn session_namespace(sid: &str) -> String {
    format!("{SESSION_PREFIX}{sid}")
}

/// Recovers the namespace from a user key, if `key` is one.
pub fn namespace_of_user_key(key: &str) -> Option<&str> {
    key.strip_suffix(USER_SUFFIX)
}
