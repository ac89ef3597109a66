//! Well-known role name constants.
//!
//! Mutation endpoints (create, update, delete) require the `admin` role;
//! read endpoints accept any authenticated role.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_VIEWER: &str = "viewer";
