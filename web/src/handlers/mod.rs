//! HTTP handlers shared by every Listmark service.

pub mod health;

pub use health::health_check;
