//! Request/Response data transfer objects

pub mod history;
pub mod voter;
