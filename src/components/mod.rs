//! Reusable view components.

pub mod private_route;
