pub mod server;
pub mod session_controller;
