use std::collections::HashMap;

use super::{Color, ColorId};

/// Id of the "Select Value" option. Never assigned to a real color.
pub const PLACEHOLDER_COLOR_ID: ColorId = 0;

const BUILTIN_COLORS: &[(ColorId, &str)] = &[(1, "red"), (2, "green"), (3, "blue")];

/// Fixed, ordered set of selectable colors with an id index.
#[derive(Debug, Clone)]
pub struct ColorCatalog {
    colors: Vec<Color>,
    index: HashMap<ColorId, usize>,
}

impl ColorCatalog {
    /// Build a catalog from `colors`, keeping their order.
    ///
    /// Entries using the placeholder id are skipped, and for a repeated id
    /// the first entry wins.
    pub fn new(colors: impl IntoIterator<Item = Color>) -> Self {
        let mut list = Vec::new();
        let mut index = HashMap::new();

        for color in colors {
            if color.id == PLACEHOLDER_COLOR_ID {
                tracing::warn!("Ignoring color '{}' with reserved id {}", color.name, color.id);
                continue;
            }
            if index.contains_key(&color.id) {
                tracing::warn!("Ignoring duplicate color id {} ('{}')", color.id, color.name);
                continue;
            }
            index.insert(color.id, list.len());
            list.push(color);
        }

        Self { colors: list, index }
    }

    pub fn builtin() -> Self {
        Self::new(
            BUILTIN_COLORS
                .iter()
                .map(|&(id, name)| Color::new(id, name)),
        )
    }

    pub fn get(&self, id: ColorId) -> Option<&Color> {
        self.index.get(&id).map(|&pos| &self.colors[pos])
    }

    pub fn position(&self, id: ColorId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    #[cfg(test)]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn nth(&self, pos: usize) -> Option<&Color> {
        self.colors.get(pos)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color after `current` in catalog order, wrapping. From no selection
    /// this is the first color.
    pub fn next_after(&self, current: Option<ColorId>) -> Option<&Color> {
        if self.is_empty() {
            return None;
        }
        let next = match current.and_then(|id| self.position(id)) {
            Some(pos) => (pos + 1) % self.len(),
            None => 0,
        };
        self.colors.get(next)
    }

    /// Color before `current` in catalog order, wrapping. From no selection
    /// this is the last color.
    pub fn prev_before(&self, current: Option<ColorId>) -> Option<&Color> {
        if self.is_empty() {
            return None;
        }
        let prev = match current.and_then(|id| self.position(id)) {
            Some(0) | None => self.len() - 1,
            Some(pos) => pos - 1,
        };
        self.colors.get(prev)
    }
}
