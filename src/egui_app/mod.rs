//! egui UI: state, controller, and renderer for the feedback form.

pub mod controller;
pub mod state;
pub mod ui;
pub mod view_model;
