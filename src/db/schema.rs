//! SQL text for the name tables.

/// Creates both name tables in one script.
/// - `id` SERIAL surrogate key
/// - `name` VARCHAR(100) UNIQUE NOT NULL
/// - Separate non-unique index on `name` (redundant with UNIQUE, kept so
///   the plan does not depend on the constraint's implicit index)
pub const POSTGRES_INIT: &str = r#"
CREATE TABLE first_names (
    id   SERIAL,
    name VARCHAR(100) UNIQUE NOT NULL
);

CREATE INDEX first_names_ix ON first_names (name);

CREATE TABLE last_names (
    id   SERIAL,
    name VARCHAR(100) UNIQUE NOT NULL
);

CREATE INDEX last_names_ix ON last_names (name);
"#;

pub const TABLE_EXISTS: &str = "SELECT EXISTS (SELECT 1 FROM information_schema.tables WHERE table_catalog = $1 AND table_name = $2)";

pub const INSERT_FIRST_NAME: &str =
    "INSERT INTO first_names (name) VALUES ($1) ON CONFLICT (name) DO NOTHING";

pub const INSERT_LAST_NAME: &str =
    "INSERT INTO last_names (name) VALUES ($1) ON CONFLICT (name) DO NOTHING";

pub const SELECT_FIRST_NAMES: &str = "SELECT id, name FROM first_names ORDER BY id";

pub const SELECT_LAST_NAMES: &str = "SELECT id, name FROM last_names ORDER BY id";
