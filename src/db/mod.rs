/// Database module with palette queries and migrations.
mod migrations;
mod palette;
mod swatch;

use anyhow::Result;
use rusqlite::Connection;

// Re-export all public functions
pub use palette::{
    check_palette_exists, create_palette, delete_palette, query_palette_by_id, query_palettes,
};

/// Opens (or creates) the SQLite database and runs migrations.
pub fn init(db_path: &str) -> Result<Connection> {
    let conn = Connection::open(db_path)?;
    migrations::run_migrations(&conn)?;
    Ok(conn)
}

/// Migrated in-memory database for tests.
#[cfg(test)]
pub fn init_in_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory()?;
    migrations::run_migrations(&conn)?;
    Ok(conn)
}

/// Returns the default database path inside the user's data directory.
/// Falls back to `./palettr.db` when no data dir is found.
pub fn default_db_path() -> String {
    if let Some(data_dir) = dirs::data_local_dir() {
        let palettr_dir = data_dir.join("palettr");
        std::fs::create_dir_all(&palettr_dir).ok();
        palettr_dir
            .join("palettr.db")
            .to_string_lossy()
            .into_owned()
    } else {
        "palettr.db".to_string()
    }
}
