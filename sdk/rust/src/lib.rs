//! Client SDK for the cart service.
//!
//! `proto` holds the wire contract shared by the server handler and clients;
//! `client` is a typed HTTP client over it.

pub mod client;
pub mod proto;

pub use client::{CartClient, ClientError};
