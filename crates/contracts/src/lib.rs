//! Типы, общие для фронтенда и REST-бэкенда админки.

pub mod domain;
pub mod shared;
pub mod system;
