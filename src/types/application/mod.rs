//! Application command entities.

pub mod command;
pub mod role_connection;
