//! Framework glue shared by the Campus services: error pages, HTML layout,
//! flash messages, uploads, health checks, request ids and tracing.

pub mod error;
pub mod flash;
pub mod health;
pub mod html;
pub mod media;
pub mod middleware;
pub mod sea_ext;
pub mod tracing;
