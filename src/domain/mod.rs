// Domain layer: payload models and the ports the client depends on.

pub mod model;
pub mod ports;
