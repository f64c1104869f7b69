//! 遊戲常數定義

use crate::alias::{Cost, PieceId};

/// 棋盤格數
pub const PLAYFIELD_SIZE: usize = 8;

/// 棋盤顯示欄數（2 列 × 4 欄）
pub const PLAYFIELD_COLUMNS: usize = 4;

/// 初始花費預算
pub const INITIAL_BUDGET: Cost = 8;

/// 空格在提交編碼中的 ID
pub const EMPTY_CELL_ID: PieceId = 0;
