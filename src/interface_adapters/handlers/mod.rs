// HTTP handlers split by resource.

pub mod participants;
pub mod sessions;
