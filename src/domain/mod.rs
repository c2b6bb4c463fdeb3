// Domain layer: models, user-facing messages and the host/service ports.

pub mod messages;
pub mod model;
pub mod ports;
