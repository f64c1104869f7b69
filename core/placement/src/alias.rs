//! 型別別名

/// 棋子 ID（0 保留給空格）
pub type PieceId = u32;
/// 花費
pub type Cost = u32;
/// 棋盤格子索引
pub type CellIndex = usize;
/// 對戰 ID（僅供顯示）
pub type BattleId = u64;
/// 提交用的隨機值
pub type Salt = u64;
