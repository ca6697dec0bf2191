pub mod browser;
pub mod gate;
pub mod hook;

pub use hook::use_scroll_animation;
