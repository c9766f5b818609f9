//! Category and price-range encodings used by the trained clustering models.
//!
//! The forward table (code → name) is the single hand-maintained source of
//! truth; every reverse lookup is derived from it, so the bijection cannot
//! drift when entries change.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Category_encoded 對照表，順序沿用訓練階段的定義
pub const CATEGORY_TABLE: [(u8, &str); 35] = [
    (8, "Café"),
    (4, "Bakery"),
    (5, "Breakfast"),
    (9, "Donuts"),
    (7, "Burgers"),
    (25, "Restaurant"),
    (27, "Sandwich Spot"),
    (23, "Pizza"),
    (22, "Middle Eastern"),
    (19, "Japanese"),
    (29, "Shawarma Restaurant"),
    (31, "Steakhouse"),
    (12, "Fast Food"),
    (18, "Italian"),
    (17, "Indian"),
    (26, "Salad"),
    (14, "Food Truck"),
    (15, "French"),
    (1, "Armenian"),
    (13, "Food Court"),
    (21, "Mediterranean"),
    (30, "Snacks"),
    (20, "Lebanese"),
    (3, "BBQ"),
    (11, "Falafel"),
    (16, "Fried Chicken"),
    (24, "Poke Restaurant"),
    (33, "Swiss"),
    (32, "Sushi"),
    (34, "Vegan and Vegetarian Restaurant"),
    (6, "Buffet"),
    (28, "Seafood"),
    (0, "American"),
    (2, "Asian"),
    (10, "Eastern European"),
];

pub const PRICE_RANGE_TABLE: [(&str, u8); 3] = [("$", 0), ("$$", 1), ("$$$", 2)];

fn reverse_category_table() -> &'static HashMap<&'static str, u8> {
    static REVERSE: OnceLock<HashMap<&'static str, u8>> = OnceLock::new();
    REVERSE.get_or_init(|| CATEGORY_TABLE.iter().map(|&(code, name)| (name, code)).collect())
}

pub fn category_name(code: u8) -> Option<&'static str> {
    CATEGORY_TABLE
        .iter()
        .find(|&&(c, _)| c == code)
        .map(|&(_, name)| name)
}

pub fn category_code(name: &str) -> Option<u8> {
    reverse_category_table().get(name).copied()
}

/// Display order of the category selector; the first entry is the default.
pub fn category_names() -> impl Iterator<Item = &'static str> {
    CATEGORY_TABLE.iter().map(|&(_, name)| name)
}

pub fn default_category() -> &'static str {
    CATEGORY_TABLE[0].1
}

pub fn price_range_code(symbol: &str) -> Option<u8> {
    PRICE_RANGE_TABLE
        .iter()
        .find(|&&(s, _)| s == symbol)
        .map(|&(_, code)| code)
}

pub fn price_range_symbols() -> impl Iterator<Item = &'static str> {
    PRICE_RANGE_TABLE.iter().map(|&(s, _)| s)
}
