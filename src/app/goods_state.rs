// GoodsState - the authoritative, append-only goods sequence

use crate::goods::{seed_goods, ColorCatalog, Good};

#[derive(Debug, Clone, Default)]
pub struct GoodsState {
    goods: Vec<Good>,
}

impl GoodsState {
    /// Start from the seed records joined against `colors`.
    pub fn seeded(colors: &ColorCatalog) -> Self {
        Self {
            goods: seed_goods(colors),
        }
    }

    pub fn goods(&self) -> &[Good] {
        &self.goods
    }

    pub fn len(&self) -> usize {
        self.goods.len()
    }

    /// Append without validation or dedup; the form already checked it.
    pub fn append_good(&mut self, good: Good) {
        tracing::info!(
            "Appending good {} '{}' (color_id={})",
            good.id,
            good.name,
            good.color_id
        );
        self.goods.push(good);
    }
}
