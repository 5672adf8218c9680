use super::{ColorCatalog, ColorId, Good, GoodId, GoodRecord};

/// Goods present at startup, before any submission.
pub const SEED_RECORDS: &[(GoodId, ColorId, &str)] = &[
    (1, 1, "Dumplings"),
    (2, 2, "Carrot"),
    (3, 3, "Eggs"),
    (4, 1, "Ice cream"),
    (5, 2, "Apple"),
    (6, 3, "Bread"),
    (7, 1, "Fish"),
    (8, 2, "Honey"),
    (9, 3, "Jam"),
    (10, 1, "Garlic"),
];

pub fn seed_records() -> Vec<GoodRecord> {
    SEED_RECORDS
        .iter()
        .map(|&(id, color_id, name)| GoodRecord {
            id,
            name: name.to_string(),
            color_id,
        })
        .collect()
}

/// Attach catalog colors to `records`, preserving order.
pub fn join(records: impl IntoIterator<Item = GoodRecord>, catalog: &ColorCatalog) -> Vec<Good> {
    records
        .into_iter()
        .map(|record| Good::from_record(record, catalog))
        .collect()
}

/// The initial goods sequence: seed records joined against `catalog`.
pub fn seed_goods(catalog: &ColorCatalog) -> Vec<Good> {
    join(seed_records(), catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_seed_goods_in_order() {
        let catalog = ColorCatalog::builtin();
        let goods = seed_goods(&catalog);
        let names: Vec<&str> = goods.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Dumplings", "Carrot", "Eggs", "Ice cream", "Apple", "Bread", "Fish", "Honey",
                "Jam", "Garlic"
            ]
        );
    }

    #[test]
    fn test_seed_goods_colored_by_join() {
        let catalog = ColorCatalog::builtin();
        for good in seed_goods(&catalog) {
            let color = good.color.expect("seed colors exist in the builtin catalog");
            assert_eq!(color.id, good.color_id);
        }
    }

    #[test]
    fn test_join_tolerates_missing_color() {
        let catalog = ColorCatalog::builtin();
        let goods = join(
            vec![
                GoodRecord {
                    id: 1,
                    name: "Plum".to_string(),
                    color_id: 3,
                },
                GoodRecord {
                    id: 2,
                    name: "Ghost".to_string(),
                    color_id: 77,
                },
            ],
            &catalog,
        );
        assert_eq!(goods.len(), 2);
        assert_eq!(goods[0].color.as_ref().map(|c| c.name.as_str()), Some("blue"));
        assert!(goods[1].color.is_none());
    }
}
