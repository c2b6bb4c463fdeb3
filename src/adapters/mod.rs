// Adapters layer: concrete host implementations for the domain ports.

pub mod console;
pub mod host;
