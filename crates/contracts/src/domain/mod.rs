pub mod a001_chat;
pub mod a002_file_metadata;
pub mod a003_upload;
pub mod common;
