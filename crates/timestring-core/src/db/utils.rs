//! Identifier quoting and field name validation.

impl super::Database {
    /// Quotes an identifier for use in SQL text.
    pub(crate) fn quote_identifier(name: &str) -> String {
        format!("\"{}\"", name.replace('"', "\"\""))
    }

    /// Applies the workspace's field naming rules to a name.
    ///
    /// Characters other than ASCII letters, digits and `_` become `_`, a name
    /// starting with a digit gets a leading `_`, and an empty name becomes
    /// `_`. Uniqueness is not checked here.
    pub fn validate_field_name(name: &str) -> String {
        let mut validated: String = name
            .trim()
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
            .collect();

        if validated.is_empty() || validated.starts_with(|c: char| c.is_ascii_digit()) {
            validated.insert(0, '_');
        }
        validated
    }
}

#[cfg(test)]
mod tests {
    use crate::db::Database;

    #[test]
    fn test_quote_identifier() {
        assert_eq!(Database::quote_identifier("fid"), "\"fid\"");
        assert_eq!(Database::quote_identifier("a\"b"), "\"a\"\"b\"");
    }

    #[test]
    fn test_validate_field_name() {
        assert_eq!(Database::validate_field_name("CreatedDT_str"), "CreatedDT_str");
        assert_eq!(Database::validate_field_name("created at"), "created_at");
        assert_eq!(Database::validate_field_name("date-str%"), "date_str_");
        assert_eq!(Database::validate_field_name("2021_label"), "_2021_label");
        assert_eq!(Database::validate_field_name("  "), "_");
        assert_eq!(Database::validate_field_name("été"), "_t_");
    }
}
