use chrono::{DateTime, Local};

pub type PaletteId = u32;

/// A saved or freshly generated palette: five hex colors, the primary
/// first and each later entry a variant of the one before it. `id` is
/// None until the palette has been persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Palette {
    pub id: Option<PaletteId>,
    pub colors: Vec<String>,
    pub created_at: DateTime<Local>,
}
