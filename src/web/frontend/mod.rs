pub mod filters;
pub mod frontend_controller;
pub mod server;
