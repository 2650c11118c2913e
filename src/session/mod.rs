//! Session module
//!
//! The operator-facing side of the ledger:
//! - `auth` - Static admin credential check
//! - `menu` - Login and administration menus over any input/output pair

pub mod auth;
pub mod menu;

pub use auth::{AdminCredential, DEFAULT_ADMIN_PASSWORD};
pub use menu::{Session, SessionSettings};
