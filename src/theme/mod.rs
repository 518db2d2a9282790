//! Palette catalog and selection

pub mod catalog;
pub mod palette;
pub mod selector;

pub use catalog::Catalog;
pub use palette::{GRADIENT_STOPS, Palette};
