//! Compile-time build information, reported by `codebreaker --version`.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// One-line version string: `codebreaker <version> (<date>, <commit>)`.
pub fn version_line() -> String {
    format!(
        "codebreaker {} ({}, {})",
        env!("CARGO_PKG_VERSION"),
        BUILD_DATE,
        BUILD_COMMIT
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_commit_is_short_hash_or_unknown() {
        assert!(!BUILD_COMMIT.is_empty());
        if BUILD_COMMIT != "unknown" && BUILD_COMMIT.len() == 7 {
            assert!(BUILD_COMMIT.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn test_build_date_is_iso_day() {
        let bytes = BUILD_DATE.as_bytes();
        assert_eq!(bytes.len(), 10, "unexpected date {}", BUILD_DATE);
        for (i, b) in bytes.iter().enumerate() {
            match i {
                4 | 7 => assert_eq!(*b, b'-'),
                _ => assert!(b.is_ascii_digit(), "unexpected date {}", BUILD_DATE),
            }
        }
    }

    #[test]
    fn test_version_line_names_package_and_build() {
        let line = version_line();
        assert!(line.starts_with(&format!("codebreaker {} (", env!("CARGO_PKG_VERSION"))));
        assert!(line.contains(BUILD_DATE));
        assert!(line.ends_with(&format!("{})", BUILD_COMMIT)));
    }
}
