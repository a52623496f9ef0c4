//! Application layer - state and use cases over the outbound ports

pub mod services;
