pub mod classify;
pub mod models;

pub use classify::{Category, classify};
