//! SDK for accessing the external catalog API from cMatch assistant services.
//!
//! This crate provides:
//!
//! - A wrapped HTTP client that manages the OAuth2 `client_credentials` access token for the
//!   catalog authorization server transparently.
//! - Text based and image based product search operations.
//! - Best effort mapping from upstream product records to [`api::product::Product`] values.

pub mod api;
