pub mod entity;
pub mod repository;

pub use entity::{BusinessProfile, BusinessUnit, Location, Objective};
pub use repository::BusinessProfileRepository;
