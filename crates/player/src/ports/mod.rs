//! Port traits the application layer depends on

pub mod outbound;
