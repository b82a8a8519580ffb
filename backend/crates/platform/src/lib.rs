//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (Argon2id) and the registration strength policy
//! - Cookie management
//! - Outbound mail delivery (SMTP or log-only)

pub mod cookie;
pub mod mail;
pub mod password;
