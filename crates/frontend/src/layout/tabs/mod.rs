//! Табы рабочей области
//!
//! - `page` - обёртка контента таба
//! - `registry` - tab.key → View
//! - `tab_labels` - заголовки табов

pub mod page;
pub mod registry;
pub mod tab_labels;

pub use page::TabPage;
pub use tab_labels::{detail_tab_label, tab_label_for_key};
