// Library for tests to access modules

pub mod benchmark;
pub mod config;
pub mod models;
pub mod platform_repo;
pub mod routes;
pub mod stats;
pub mod version;
