//! egui user interface

pub mod components;
pub mod theme;
pub mod views;
pub mod widgets;
