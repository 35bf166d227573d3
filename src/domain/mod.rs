// src/domain/mod.rs
pub mod contact;
pub mod errors;
pub mod slug;
