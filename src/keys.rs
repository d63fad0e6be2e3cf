//! Cache key conventions used by the cache's call sites.
//!
//! The cache treats keys as opaque strings. Storage wrappers namespace them
//! with a prefix: `file_<id>` for uploaded documents, `ls_<key>` for
//! mirrored settings, and `ai_<sha256>` for generated analyses.

use sha2::{Digest, Sha256};

pub const FILE_PREFIX: &str = "file_";
pub const LOCAL_PREFIX: &str = "ls_";
pub const AI_PREFIX: &str = "ai_";

pub fn file_key(id: impl std::fmt::Display) -> String {
    format!("{}{}", FILE_PREFIX, id)
}

pub fn local_key(key: &str) -> String {
    format!("{}{}", LOCAL_PREFIX, key)
}

/// Key for a generated response: SHA-256 of `(model, prompt)`.
///
/// Each part is length-prefixed so that `("a|b", "c")` and `("a", "b|c")`
/// hash differently.
pub fn ai_key(model: &str, prompt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update((model.len() as u64).to_le_bytes());
    hasher.update(model.as_bytes());
    hasher.update((prompt.len() as u64).to_le_bytes());
    hasher.update(prompt.as_bytes());
    format!("{}{}", AI_PREFIX, hex::encode(hasher.finalize()))
}
