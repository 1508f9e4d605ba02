//! # vp-core
//!
//! Core types for Veriport, the certificate-verification portal.
//!
//! This crate provides the foundational types shared across all Veriport
//! crates:
//! - The `Identity` record issued by the credential directory
//! - The closed `Role` enum and its dashboard mapping
//! - Cross-cutting error types

pub mod enums;
pub mod errors;
pub mod identity;

pub use enums::{Dashboard, Role};
pub use errors::CoreError;
pub use identity::Identity;
