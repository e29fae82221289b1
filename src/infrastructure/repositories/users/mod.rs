mod postgres;

pub use postgres::{PostgresPlanRepository, PostgresUserRepository};
