//! Request guards and cookie plumbing.

pub mod auth;
pub mod cookies;

pub use auth::CurrentUser;
pub use cookies::{REFRESH_COOKIE, RefreshCookie, extract_cookie};
