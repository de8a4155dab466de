//! Database schema definitions

/// SQL to create the address table
///
/// Columns are left untyped and there is no primary key; values keep
/// whatever affinity they were bound with.
pub const CREATE_ADDRESS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS address (
    longitude,
    latitude,
    name
)
"#;

/// SQL to create indexes
pub const CREATE_INDEXES: &[&str] = &[
    "CREATE UNIQUE INDEX IF NOT EXISTS idx_address_name ON address(name)",
];

/// All schema creation statements
pub fn all_schema_statements() -> Vec<&'static str> {
    let mut stmts = vec![CREATE_ADDRESS_TABLE];
    stmts.extend(CREATE_INDEXES.iter().copied());
    stmts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_created_before_indexes() {
        let stmts = all_schema_statements();
        assert_eq!(stmts[0], CREATE_ADDRESS_TABLE);
        assert!(stmts[1].starts_with("CREATE UNIQUE INDEX"));
    }
}
