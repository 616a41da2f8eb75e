pub mod card_animated;
pub mod ui;

pub use card_animated::CardAnimated;
