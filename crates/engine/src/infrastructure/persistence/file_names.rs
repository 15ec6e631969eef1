//! File naming for per-id JSON documents.

use sha2::{Digest, Sha256};

const HASH_HEX_LEN: usize = 16;

// Outside the safe set, so no safe id can spell a hashed stem.
const HASH_SEPARATOR: char = '~';

/// True when the id can be used verbatim as a file stem.
pub fn is_safe_stem(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// File stem for an arbitrary id.
///
/// Safe ids map to themselves. Anything else is sanitized and suffixed with
/// `~` and a hash of the original id. Safe stems never contain `~`, so
/// distinct ids never share a file.
pub fn stem_for(id: &str) -> String {
    if is_safe_stem(id) {
        return id.to_string();
    }

    let sanitized: String = id
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    let digest = hex::encode(Sha256::digest(id.as_bytes()));
    format!("{}{}{}", sanitized, HASH_SEPARATOR, &digest[..HASH_HEX_LEN])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn safe_ids_are_used_verbatim() {
        assert_eq!(stem_for("guest_42"), "guest_42");
        assert_eq!(stem_for("u-1"), "u-1");
    }

    #[test]
    fn unsafe_ids_are_sanitized_and_hashed() {
        let stem = stem_for("../etc/passwd");
        assert!(stem.starts_with("___etc_passwd~"));
        assert_eq!(stem.len(), "___etc_passwd~".len() + HASH_HEX_LEN);
        assert!(!stem.contains('/'));
    }

    #[test]
    fn distinct_unsafe_ids_do_not_collide() {
        assert_ne!(stem_for("a b"), stem_for("a/b"));
        assert_ne!(stem_for(""), stem_for("_"));
    }

    #[test]
    fn safe_id_cannot_claim_a_hashed_stem() {
        let hashed = stem_for("a b");
        let lookalike = hashed.replace(HASH_SEPARATOR, "-");
        assert!(is_safe_stem(&lookalike));
        assert_ne!(stem_for(&lookalike), hashed);
        // Feeding a hashed stem back in hashes it again.
        assert_ne!(stem_for(&hashed), hashed);
    }
}
