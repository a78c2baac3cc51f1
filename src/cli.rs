/// CLI argument parsing and command handling.
use anyhow::Result;
use clap::{Parser, Subcommand};
use rusqlite::Connection;

use crate::color::is_valid_hex;
use crate::palette::PALETTE_SIZE;
use crate::types::PaletteId;
use crate::{db, palette, updater};

#[derive(Parser)]
#[command(
    name = "palettr",
    version,
    about = "Palettr - A terminal-based color palette generator"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    Generate {
        #[arg(short = 's', long = "save")]
        save: bool,
    },
    Save {
        colors: Vec<String>,
    },
    List,
    Show {
        id: PaletteId,
    },
    Delete {
        id: PaletteId,
    },
    Update,
}

/// Execute a CLI command (generate, list, show, delete, or update).
pub fn run(command: Command, conn: &Connection) -> Result<()> {
    match command {
        Command::Generate { save } => handle_generate(save, conn)?,
        Command::Save { colors } => handle_save(colors, conn)?,
        Command::List => handle_list(conn)?,
        Command::Show { id } => handle_show(id, conn)?,
        Command::Delete { id } => handle_delete(id, conn)?,
        Command::Update => updater::perform_update()?,
    }
    Ok(())
}

fn handle_generate(save: bool, conn: &Connection) -> Result<()> {
    let colors = palette::generate_palette();
    for color in &colors {
        println!("{color}");
    }
    if save {
        if db::check_palette_exists(&colors, conn)? {
            println!("Palette already saved.");
            return Ok(());
        }
        let id = db::create_palette(&colors, conn)?;
        println!("Saved as palette {id}.");
    }
    Ok(())
}

fn handle_save(colors: Vec<String>, conn: &Connection) -> Result<()> {
    if colors.len() != PALETTE_SIZE {
        println!("A palette is exactly {PALETTE_SIZE} colors.");
        return Ok(());
    }
    let colors: Vec<String> = colors.iter().map(|c| c.to_lowercase()).collect();
    for color in &colors {
        if !is_valid_hex(color) {
            println!("Invalid color '{color}'. Please provide hex codes like #rrggbb.");
            return Ok(());
        }
    }
    if db::check_palette_exists(&colors, conn)? {
        println!("Palette already saved.");
        return Ok(());
    }
    let id = db::create_palette(&colors, conn)?;
    println!("Saved as palette {id}.");
    Ok(())
}

fn handle_list(conn: &Connection) -> Result<()> {
    let palettes = db::query_palettes(conn)?;
    if palettes.is_empty() {
        println!("No palettes saved yet.");
        return Ok(());
    }
    for palette in palettes {
        println!(
            "{:>4}  {}  saved {}",
            palette.id.unwrap_or(0),
            palette.colors.join(" "),
            palette.created_at.format("%Y-%m-%d %H:%M")
        );
    }
    Ok(())
}

fn handle_show(id: PaletteId, conn: &Connection) -> Result<()> {
    match db::query_palette_by_id(id, conn)? {
        Some(palette) => {
            for color in &palette.colors {
                println!("{color}");
            }
        }
        None => println!("Palette {id} not found."),
    }
    Ok(())
}

fn handle_delete(id: PaletteId, conn: &Connection) -> Result<()> {
    if db::query_palette_by_id(id, conn)?.is_none() {
        println!("Palette {id} not found.");
        return Ok(());
    }
    db::delete_palette(id, conn)?;
    println!("Deleted palette {id}.");
    Ok(())
}
