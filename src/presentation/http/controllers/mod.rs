// src/presentation/http/controllers/mod.rs
pub mod contact;
pub mod slugs;
