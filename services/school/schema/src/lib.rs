//! sea-orm entities for the school panel.

pub mod custom_users;
