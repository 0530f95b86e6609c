// Domain layer: session/participant entities and registry primitives.

pub mod entities;
pub mod ids;
pub mod ports;
pub mod validation;

pub use entities::{Participant, Session};
