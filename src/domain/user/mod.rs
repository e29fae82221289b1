// src/domain/user/mod.rs
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Plan, User, UserUsageUpdate};
pub use repository::{PlanRepository, UserRepository};
pub use value_objects::{OnboardingStep, PlanId, UserId};
