//! SQL statement builders for the restaurants table.

use crate::error::PostgreSQLStoreError;

/// Columns rewritten by an update, in parameter order after `place_id`.
pub const DETAIL_COLUMNS: &[&str] = &[
    "name",
    "cover_image_url",
    "address",
    "city",
    "state",
    "zip_code",
    "latitude",
    "longitude",
    "phone",
    "website",
    "cuisine_types",
    "price_level",
    "hours",
];

/// System-managed columns, written only on insert.
pub const SYSTEM_COLUMNS: &[&str] = &["post_count", "average_rating", "meals_donated", "is_claimed"];

/// Key columns preceding the details in every full row.
pub const KEY_COLUMNS: &[&str] = &["id", "place_id", "slug"];

/// Statements issued by the store, prepared once per table name.
#[derive(Debug, Clone)]
pub struct Statements {
    pub find_by_place_id: String,
    pub slug_exists: String,
    pub update_details: String,
    pub insert: String,
    pub count: String,
}

impl Statements {
    pub fn new(table: &str) -> Result<Self, PostgreSQLStoreError> {
        let table = quote_table(table)?;
        let all = all_columns();
        let select_list = quote_list(&all);

        let assignments: Vec<String> = DETAIL_COLUMNS
            .iter()
            .enumerate()
            .map(|(i, c)| format!("\"{c}\" = ${}", i + 2))
            .collect();

        let placeholders: Vec<String> = (1..=all.len()).map(|i| format!("${i}")).collect();

        Ok(Self {
            find_by_place_id: format!("SELECT {select_list} FROM {table} WHERE \"place_id\" = $1"),
            slug_exists: format!("SELECT EXISTS (SELECT 1 FROM {table} WHERE \"slug\" = $1)"),
            update_details: format!(
                "UPDATE {table} SET {} WHERE \"place_id\" = $1",
                assignments.join(", ")
            ),
            insert: format!(
                "INSERT INTO {table} ({select_list}) VALUES ({})",
                placeholders.join(", ")
            ),
            count: format!("SELECT COUNT(*) FROM {table}"),
        })
    }
}

/// Every column of a full row, in select and insert order.
pub fn all_columns() -> Vec<&'static str> {
    KEY_COLUMNS
        .iter()
        .chain(DETAIL_COLUMNS)
        .chain(SYSTEM_COLUMNS)
        .copied()
        .collect()
}

/// Quote a plain (`restaurants`) or schema-qualified (`public.restaurants`)
/// table name.
pub fn quote_table(name: &str) -> Result<String, PostgreSQLStoreError> {
    let parts: Vec<&str> = name.split('.').collect();
    if parts.len() > 2 || !parts.iter().all(|p| is_identifier(p)) {
        return Err(PostgreSQLStoreError::InvalidTableName(name.to_string()));
    }
    Ok(parts
        .iter()
        .map(|p| format!("\"{p}\""))
        .collect::<Vec<_>>()
        .join("."))
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    s.len() <= 63 && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn quote_list(columns: &[&str]) -> String {
    columns
        .iter()
        .map(|c| format!("\"{c}\""))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Generate the CREATE TABLE statement matching the columns above. The real
/// table is created by migrations; this is a fixture for integration tests.
pub fn generate_create_table(table: &str) -> Result<String, PostgreSQLStoreError> {
    let table = quote_table(table)?;
    Ok(format!(
        "CREATE TABLE IF NOT EXISTS {table} (\
\"id\" UUID NOT NULL PRIMARY KEY, \
\"place_id\" TEXT NOT NULL UNIQUE, \
\"slug\" TEXT NOT NULL UNIQUE, \
\"name\" TEXT NOT NULL, \
\"cover_image_url\" TEXT, \
\"address\" TEXT NOT NULL, \
\"city\" TEXT NOT NULL, \
\"state\" TEXT NOT NULL, \
\"zip_code\" TEXT NOT NULL, \
\"latitude\" DOUBLE PRECISION NOT NULL, \
\"longitude\" DOUBLE PRECISION NOT NULL, \
\"phone\" TEXT, \
\"website\" TEXT, \
\"cuisine_types\" TEXT[] NOT NULL DEFAULT '{{}}', \
\"price_level\" SMALLINT, \
\"hours\" JSONB, \
\"post_count\" INTEGER NOT NULL DEFAULT 0, \
\"average_rating\" DOUBLE PRECISION NOT NULL DEFAULT 0, \
\"meals_donated\" INTEGER NOT NULL DEFAULT 0, \
\"is_claimed\" BOOLEAN NOT NULL DEFAULT FALSE)"
    ))
}

/// Generate DROP TABLE statement.
pub fn generate_drop_table(table: &str) -> Result<String, PostgreSQLStoreError> {
    Ok(format!("DROP TABLE IF EXISTS {}", quote_table(table)?))
}
