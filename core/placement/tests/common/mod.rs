//! 測試共用：棋子目錄 TOML 與輔助函式

#![allow(dead_code)]

use placement::catalog::{Piece, PieceCatalog};

pub const PIECE_SOLDIER: u32 = 1;
pub const PIECE_ARCHER: u32 = 2;
pub const PIECE_KNIGHT: u32 = 3;
pub const PIECE_CATAPULT: u32 = 4;
pub const PIECE_DRAGON: u32 = 5;

/// 花費 1 / 2 / 3 / 5 / 9 的目錄（9 永遠超出預算）
pub const PIECES_TOML: &str = r#"
[[pieces]]
id = 1
name = "Soldier"
health = 3
attack = 1
range = 1
cost = 1

[[pieces]]
id = 2
name = "Archer"
health = 2
attack = 2
range = 3
cost = 2

[[pieces]]
id = 3
name = "Knight"
health = 5
attack = 3
range = 1
cost = 3

[[pieces]]
id = 4
name = "Catapult"
health = 4
attack = 5
range = 5
cost = 5

[[pieces]]
id = 5
name = "Dragon"
health = 9
attack = 9
range = 4
cost = 9
"#;

pub fn setup_catalog() -> PieceCatalog {
    PieceCatalog::from_toml(PIECES_TOML).expect("測試目錄應可載入")
}

pub fn piece(catalog: &PieceCatalog, id: u32) -> Piece {
    catalog.get(id).cloned().expect("測試目錄應包含該棋子")
}
