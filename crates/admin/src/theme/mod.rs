//! Template rendering via Tera.

mod engine;

pub use engine::ThemeEngine;
