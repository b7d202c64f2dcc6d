//! AIChef browser client.
//!
//! Search for recipes by ingredients or category, read a recipe with the
//! chef's consultancy note, keep favorites, and switch between local
//! profiles. All persistence is the browser's `localStorage`.

pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod models;
pub mod pages;
pub mod profile;
pub mod routes;
pub mod storage;

pub use app::App;
pub use config::ClientConfig;
