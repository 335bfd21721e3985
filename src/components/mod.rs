pub mod app;
pub mod exit_button;
pub mod image_stage;
pub mod toolbar;
