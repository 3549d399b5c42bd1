//! # Builders
//!
//! Fluent construction of [`CipherConfig`](crate::CipherConfig) values.
//!
//! ## Modules
//!
//! - [`cipher_config_builder`] - Builder for the secret / IV / tail-policy triple
//!
//! ## Usage
//!
//! Production code uses the protocol defaults; the builder exists for fixture
//! secrets in tests and for pinning the short-tail policy.

pub mod cipher_config_builder;

pub use cipher_config_builder::CipherConfigBuilder;
