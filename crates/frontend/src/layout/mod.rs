pub mod dashboard;
pub mod modal_service;

pub use dashboard::DashboardPage;
pub use modal_service::{use_modal, ModalService, UploadModal};
