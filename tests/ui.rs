#[path = "ui/app_component.rs"]
mod app_component;
#[path = "ui/core.rs"]
mod ui_core;
#[path = "ui/screens.rs"]
mod screens;
