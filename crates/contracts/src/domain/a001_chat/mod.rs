pub mod aggregate;
pub mod conversation;
