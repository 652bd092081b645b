pub mod config;
pub mod dispatcher;
pub mod error;
pub mod handler;
pub mod model;
pub mod resolver;
pub mod response;
pub mod schedule;
