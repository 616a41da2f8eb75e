pub mod sidebar;

pub use sidebar::FileSidebar;
