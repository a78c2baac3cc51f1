/// Swatch rows: the ordered hex colors belonging to a palette.
use anyhow::Result;
use rusqlite::Connection;

use crate::types::PaletteId;

pub fn create_swatch(
    palette_id: PaletteId,
    position: usize,
    hex: &str,
    conn: &Connection,
) -> Result<()> {
    conn.execute(
        "INSERT INTO swatches (palette_id, position, hex) VALUES (?1, ?2, ?3)",
        rusqlite::params![palette_id, position as u32, hex],
    )?;
    Ok(())
}

pub fn query_swatches_by_palette_id(
    palette_id: PaletteId,
    conn: &Connection,
) -> Result<Vec<String>> {
    let mut stmt =
        conn.prepare("SELECT hex FROM swatches WHERE palette_id = ?1 ORDER BY position")?;
    let rows = stmt.query_map([palette_id], |row| row.get(0))?;
    let mut colors = Vec::new();
    for row in rows {
        colors.push(row?);
    }
    Ok(colors)
}

pub fn delete_swatches_by_palette_id(palette_id: PaletteId, conn: &Connection) -> Result<()> {
    conn.execute("DELETE FROM swatches WHERE palette_id = ?1", [palette_id])?;
    Ok(())
}
