//! The cMatch fashion assistant web backend.
//!
//! This service provides:
//!
//! - User accounts with password login and store-backed session tokens.
//! - A wishlist/closet item store per user.
//! - Profile management (style preferences, favorite brands, colors, sizes).
//! - Text and visual product search proxied to the external catalog API through
//!   [`cmatch_sdk`].
//! - Image upload to a public image host, so visual search can reference uploaded photos.
//! - Screenshot capture of product pages through a WebDriver endpoint.
//!
//!
//! # Mount cmatch-assistant in your axum App
//!
//! You can simply mount cmatch-assistant into your axum App:
//!
//! ```rust,no_run
//! use axum::Router;
//! use clap::Command;
//! use std::net::SocketAddr;
//! use cmatch_assistant::{libs, routes};
//! use tokio::{self, net::TcpListener};
//!
//! #[tokio::main]
//! async fn main() -> std::io::Result<()> {
//!     let args = Command::new("your-project-name").get_matches();
//!
//!     let conf = libs::config::read_args(&args);
//!     let state = match routes::new_state("/assistant", &conf).await {
//!         Err(e) => {
//!             println!("Error: {}", e);
//!             return Ok(());
//!         }
//!         Ok(state) => state,
//!     };
//!     let app = Router::new().merge(routes::new_service(&state));
//!     let listener = TcpListener::bind("0.0.0.0:3080").await.unwrap();
//!     axum::serve(
//!         listener,
//!         app.into_make_service_with_connect_info::<SocketAddr>(),
//!     )
//!     .await
//! }
//! ```
//!
//! Please see `src/bin/cmatch-assistant.rs` to get the real world example.

pub mod libs;
pub mod models;
pub mod routes;
