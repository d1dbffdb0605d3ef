pub mod api_utils;
pub mod components;
pub mod data_view;
pub mod icons;
pub mod list_utils;
pub mod resource;
