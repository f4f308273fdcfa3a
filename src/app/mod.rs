pub mod components;
pub mod pages;
pub mod routes;
pub mod shell;
pub mod views;

pub use routes::Route;
pub use shell::App;
