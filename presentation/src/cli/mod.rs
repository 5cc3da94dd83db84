//! CLI layer

pub mod commands;
pub mod dispatch;
