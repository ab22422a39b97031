//! Common types and traits shared by all domain records.

pub mod entity;
pub mod timestamps;

pub use entity::Entity;
pub use timestamps::Timestamps;
