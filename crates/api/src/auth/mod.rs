//! Validation of tokens minted by the external identity service.
//!
//! The engine never issues tokens: login, sign-up, and invites live in
//! the external identity service, which mints HS256 JWTs with the shared
//! secret. This module only validates them and extracts the actor id.

pub mod jwt;
