//! The catalog API surface.
//!
//! [`http::Client`] owns the credentials and the cached access token. The operations in
//! [`catalog`] borrow a client and never touch token state directly.

pub mod catalog;
pub mod http;
pub mod product;
