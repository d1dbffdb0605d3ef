pub mod sidebar;

pub use sidebar::{Left, Sidebar};
