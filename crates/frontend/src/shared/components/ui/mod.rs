pub mod button;
pub mod field;

pub use button::Button;
pub use field::TextField;
