//! Wire-format models at the process boundaries: upstream API payloads and
//! server configuration.

pub mod api;
pub mod config;
