//! Auth types shared across Campus services.
//!
//! Provides session-token issuing and validation, cookie builders, password
//! hashing and the `SessionUser` extractor.

pub mod cookie;
pub mod identity;
pub mod password;
pub mod session;
