//! HTTP handlers.

pub mod lists;
pub mod pages;
pub mod todos;
