pub mod commands;
pub mod dto;
pub mod emails;
pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationResult;
