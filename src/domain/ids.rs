use sha2::{Digest, Sha256};
use uuid::Uuid;

// Fixed length of every session and participant identifier.
pub const ID_LEN: usize = 10;

// Generate a fresh opaque entity id: the hex digest of a random UUID,
// truncated to ID_LEN characters.
pub fn generate_entity_id() -> String {
    let digest = Sha256::digest(Uuid::new_v4().to_string().as_bytes());
    format!("{digest:x}")[..ID_LEN].to_string()
}

// Returns true when the given value has the expected id shape:
// exactly ID_LEN characters from the alphanumeric-plus-symbol charset.
pub fn is_well_formed_id(value: &str) -> bool {
    value.len() == ID_LEN
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '=' | '+' | '-'))
}
