pub mod commands;
pub mod dispatch;
pub mod dto;
pub mod error;
pub mod locks;
pub mod ports;
pub mod queries;
pub mod services;

pub use error::ApplicationResult;
