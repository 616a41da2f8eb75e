pub mod file_input;
pub mod upload_card;

pub use upload_card::UploadCard;
