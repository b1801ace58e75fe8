pub mod auth;
pub mod dashboards;
pub mod notice;
pub mod session;
