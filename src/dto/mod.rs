pub mod auth;
pub mod common;
pub mod health;
pub mod matches;
pub mod sse;
pub mod teams;
