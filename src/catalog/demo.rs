//! Mock menu used by the standalone filter demo.

use crate::models::{Category, MenuEntry};

fn dish(id: u32, title: &str, category: Category, description: &str, price: &str) -> MenuEntry {
    MenuEntry {
        id,
        title: title.to_string(),
        category: category.as_str().to_string(),
        description: description.to_string(),
        price: price.to_string(),
        badge: None,
        badge_class: None,
    }
}

/// Six sample dishes, one or two per category.
pub fn demo_menu() -> Vec<MenuEntry> {
    vec![
        dish(
            1,
            "Bruschetta me Domate",
            Category::Fillestar,
            "Bagetë, domate, borzilok",
            "5.50",
        ),
        dish(
            2,
            "Sallatë Ceasar",
            Category::Fillestar,
            "Marule, parmixhan, croutons",
            "6.90",
        ),
        dish(
            3,
            "Risotto me Kërpudha",
            Category::Kryesor,
            "Arborio, kërpudha, parmixhan",
            "10.90",
        ),
        dish(
            4,
            "Fileto Viçi",
            Category::Kryesor,
            "Fileto me salcë piper",
            "14.50",
        ),
        dish(
            5,
            "Tiramisu Klasik",
            Category::Embelsira,
            "Mascarpone, biskota, espresso",
            "4.90",
        ),
        dish(
            6,
            "Limonadë e Freskët",
            Category::Pije,
            "Limona, mente, akull",
            "2.50",
        ),
    ]
}
