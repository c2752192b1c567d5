/// Base64 of the 8-byte PNG signature. Enough to pass image validation.
pub const PNG_SIGNATURE_B64: &str = "iVBORw0KGgo=";

/// A well-formed generation response body with the given stats.
pub fn fingerprint_body(total: u64, unique: u64, collisions: u64, max_level: u64) -> String {
    format!(
        r#"{{
            "raw_image": "{img}",
            "enhanced_image": "{img}",
            "stats": {{
                "totalWords": {total},
                "uniqueWords": {unique},
                "collisions": {collisions},
                "maxCollisionLevel": {max_level}
            }}
        }}"#,
        img = PNG_SIGNATURE_B64,
    )
}
