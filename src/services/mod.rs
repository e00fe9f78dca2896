//! Background services and utilities

pub mod call_timer;
pub mod notifications;
