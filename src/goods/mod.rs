// Goods domain: color catalog, raw records and display-ready goods

pub(crate) mod catalog;
mod seed;

pub use catalog::ColorCatalog;
pub use seed::seed_goods;

use serde::{Deserialize, Serialize};

pub type ColorId = u32;
pub type GoodId = i64;

/// A selectable color. `name` doubles as the terminal color value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub id: ColorId,
    pub name: String,
}

impl Color {
    pub fn new(id: ColorId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Terminal color for this entry, if the name is one ratatui understands.
    pub fn to_terminal_color(&self) -> Option<ratatui::style::Color> {
        self.name.parse().ok()
    }
}

/// A good as it arrives before being joined with the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoodRecord {
    pub id: GoodId,
    pub name: String,
    pub color_id: ColorId,
}

/// A display-ready good. `color` is resolved once, when the good is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Good {
    pub id: GoodId,
    pub name: String,
    pub color_id: ColorId,
    pub color: Option<Color>,
}

impl Good {
    /// Attach `catalog`'s entry for `record.color_id`, or `None` if there is none.
    pub fn from_record(record: GoodRecord, catalog: &ColorCatalog) -> Self {
        let color = catalog.get(record.color_id).cloned();
        Self {
            id: record.id,
            name: record.name,
            color_id: record.color_id,
            color,
        }
    }

    /// Build a good for a color the caller already resolved.
    pub fn with_color(id: GoodId, name: impl Into<String>, color: Color) -> Self {
        Self {
            id,
            name: name.into(),
            color_id: color.id,
            color: Some(color),
        }
    }
}
