/// Application name
pub const APP_NAME: &str = "Partage";

/// How long (in minutes) a donor may delete their own listing after
/// creating it, provided nobody has claimed it
pub const DELETE_WINDOW_MINUTES: i64 = 10;

/// Minimum accepted credential (PIN) length at login
pub const MIN_CREDENTIAL_LEN: usize = 4;

/// Store namespace keys.  Versioned so a future format change can read
/// the old key and write the new one.
pub const NS_LISTINGS: &str = "listings:v2";
pub const NS_USERS: &str = "users:v1";
pub const NS_SESSION: &str = "session:v1";
