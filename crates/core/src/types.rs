/// Movie primary keys are PostgreSQL BIGSERIAL (always positive).
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Parse a path segment into a [`DbId`].
///
/// Returns `None` for anything that cannot name a stored row: non-numeric
/// input, zero, or negative values.
pub fn parse_db_id(raw: &str) -> Option<DbId> {
    raw.trim().parse::<DbId>().ok().filter(|id| *id > 0)
}
