// src/infrastructure/security/mod.rs
pub mod turnstile;

pub use turnstile::TurnstileVerifier;
