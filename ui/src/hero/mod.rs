//! Animated landing hero (decor generation + the rendered section).

pub mod decor;
mod view;

pub use view::Hero;
