//! Report artifact writers: CSV tables, markdown document, chart images.

pub mod artifacts;
pub mod charts;

/// Make a column name safe to use as a file name.
pub fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_file_name() {
        assert_eq!(sanitize_file_name("city"), "city");
        assert_eq!(sanitize_file_name("first name"), "first_name");
        assert_eq!(sanitize_file_name("a/b\\c"), "a_b_c");
    }
}
