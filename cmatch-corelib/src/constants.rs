//! Common constants for cMatch assistant modules.

pub struct DbEngine;
pub struct ItemKind;

impl DbEngine {
    pub const SQLITE: &'static str = "sqlite";
}

impl ItemKind {
    pub const WISHLIST: &'static str = "wishlist";
    pub const CLOSET: &'static str = "closet";
}
