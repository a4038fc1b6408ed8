pub mod demo;
pub mod loader;

pub use loader::{resolve, Source};
