pub mod app;
pub mod components;
pub mod hooks;
pub mod language;
pub mod router;
pub mod routes;
pub mod util;

pub use app::App;
