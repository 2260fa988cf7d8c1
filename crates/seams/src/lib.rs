pub mod errors;
pub mod manifest;
pub mod models;
pub mod services;
pub mod session_file;
pub mod summary;
pub mod systems;
pub mod trace;
