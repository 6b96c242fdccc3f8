//! Trait boundaries between the services and the infrastructure.

pub mod outbound;
