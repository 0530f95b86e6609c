// Use cases layer: the session registry and its operation set.

pub mod registry;

pub use registry::SessionRegistry;
