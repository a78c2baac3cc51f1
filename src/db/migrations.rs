/// Database migrations and schema management.
use anyhow::Result;
use rusqlite::Connection;

/// Creates the initial schema if it doesn't exist yet.
pub fn run_migrations(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS palettes (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            created_at  TEXT    NOT NULL
        );

        CREATE TABLE IF NOT EXISTS swatches (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            palette_id  INTEGER NOT NULL,
            position    INTEGER NOT NULL,
            hex         TEXT    NOT NULL,
            FOREIGN KEY (palette_id) REFERENCES palettes(id) ON DELETE CASCADE
        );
        ",
    )?;
    Ok(())
}
