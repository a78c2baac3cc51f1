/// Palette database queries.
use anyhow::Result;
use chrono::{DateTime, Local};
use rusqlite::Connection;

use crate::db::swatch::{
    create_swatch, delete_swatches_by_palette_id, query_swatches_by_palette_id,
};
use crate::types::{Palette, PaletteId};

pub fn create_palette(colors: &[String], conn: &Connection) -> Result<PaletteId> {
    conn.execute(
        "INSERT INTO palettes (created_at) VALUES (?1)",
        [Local::now().to_rfc3339()],
    )?;
    let palette_id = conn.last_insert_rowid() as PaletteId;
    for (position, hex) in colors.iter().enumerate() {
        create_swatch(palette_id, position, hex, conn)?;
    }
    Ok(palette_id)
}

pub fn query_palettes(conn: &Connection) -> Result<Vec<Palette>> {
    let mut stmt = conn.prepare("SELECT id, created_at FROM palettes ORDER BY id")?;
    let rows = stmt.query_map([], |row| {
        Ok(Palette {
            id: Some(row.get(0)?),
            colors: Vec::new(),
            created_at: DateTime::parse_from_rfc3339(&row.get::<_, String>(1)?)
                .unwrap()
                .with_timezone(&Local),
        })
    })?;
    let mut palettes = Vec::new();
    for row in rows {
        palettes.push(row?);
    }
    for palette in &mut palettes {
        if let Some(id) = palette.id {
            palette.colors = query_swatches_by_palette_id(id, conn)?;
        }
    }
    Ok(palettes)
}

pub fn query_palette_by_id(id: PaletteId, conn: &Connection) -> Result<Option<Palette>> {
    let mut stmt = conn.prepare("SELECT id, created_at FROM palettes WHERE id = ?1")?;
    let mut rows = stmt.query([id])?;
    if let Some(row) = rows.next()? {
        let mut palette = Palette {
            id: Some(row.get(0)?),
            colors: Vec::new(),
            created_at: DateTime::parse_from_rfc3339(&row.get::<_, String>(1)?)
                .unwrap()
                .with_timezone(&Local),
        };
        if let Some(id) = palette.id {
            palette.colors = query_swatches_by_palette_id(id, conn)?;
        }
        Ok(Some(palette))
    } else {
        Ok(None)
    }
}

/// True if a saved palette holds exactly this ordered color sequence.
/// Duplicate detection is by value, not by row identity.
pub fn check_palette_exists(colors: &[String], conn: &Connection) -> Result<bool> {
    for palette in query_palettes(conn)? {
        if palette.colors == colors {
            return Ok(true);
        }
    }
    Ok(false)
}

pub fn delete_palette(id: PaletteId, conn: &Connection) -> Result<()> {
    // The cascade only fires with the foreign_keys pragma enabled, so the
    // swatches are removed explicitly.
    delete_swatches_by_palette_id(id, conn)?;
    conn.execute("DELETE FROM palettes WHERE id = ?1", [id])?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_conn() -> Connection {
        crate::db::init_in_memory().unwrap()
    }

    fn sample_colors() -> Vec<String> {
        ["#ff0000", "#00ff55", "#1a001a", "#aa00ff", "#ff0055"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn create_then_query_preserves_color_order() {
        let conn = test_conn();
        let colors = sample_colors();
        let id = create_palette(&colors, &conn).unwrap();

        let palette = query_palette_by_id(id, &conn).unwrap().unwrap();
        assert_eq!(palette.id, Some(id));
        assert_eq!(palette.colors, colors);
    }

    #[test]
    fn query_palettes_lists_in_insertion_order() {
        let conn = test_conn();
        let first = sample_colors();
        let mut second = sample_colors();
        second.reverse();
        let first_id = create_palette(&first, &conn).unwrap();
        let second_id = create_palette(&second, &conn).unwrap();

        let palettes = query_palettes(&conn).unwrap();
        assert_eq!(palettes.len(), 2);
        assert_eq!(palettes[0].id, Some(first_id));
        assert_eq!(palettes[0].colors, first);
        assert_eq!(palettes[1].id, Some(second_id));
        assert_eq!(palettes[1].colors, second);
    }

    #[test]
    fn delete_removes_the_palette_and_its_swatches() {
        let conn = test_conn();
        let id = create_palette(&sample_colors(), &conn).unwrap();
        delete_palette(id, &conn).unwrap();

        assert!(query_palette_by_id(id, &conn).unwrap().is_none());
        let orphans: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM swatches WHERE palette_id = ?1",
                [id],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(orphans, 0);
    }

    #[test]
    fn duplicate_check_compares_by_value() {
        let conn = test_conn();
        let colors = sample_colors();
        create_palette(&colors, &conn).unwrap();

        // A fresh vector with the same sequence counts as a duplicate.
        assert!(check_palette_exists(&colors.clone(), &conn).unwrap());

        // Same colors in a different order do not.
        let mut reordered = colors.clone();
        reordered.reverse();
        assert!(!check_palette_exists(&reordered, &conn).unwrap());
    }

    #[test]
    fn missing_id_queries_return_none() {
        let conn = test_conn();
        assert!(query_palette_by_id(42, &conn).unwrap().is_none());
    }
}
