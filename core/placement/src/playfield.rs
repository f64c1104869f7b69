//! 8 格棋盤

use crate::alias::{CellIndex, Cost, PieceId};
use crate::catalog::Piece;
use crate::constants::{EMPTY_CELL_ID, PLAYFIELD_COLUMNS, PLAYFIELD_SIZE};

/// 棋盤格子：空格或放置了一個棋子
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Piece),
}

impl Cell {
    pub fn piece(&self) -> Option<&Piece> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(piece) => Some(piece),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// 提交編碼用的 ID，空格為 0
    pub fn encoded_id(&self) -> PieceId {
        self.piece().map_or(EMPTY_CELL_ID, |piece| piece.id)
    }
}

/// 固定 8 格的有序棋盤
///
/// 長度由型別保證，不會增減；格子只能整格替換。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Playfield {
    cells: [Cell; PLAYFIELD_SIZE],
}

impl Playfield {
    /// 8 個空格
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn cells(&self) -> &[Cell; PLAYFIELD_SIZE] {
        &self.cells
    }

    pub fn get(&self, index: CellIndex) -> Option<&Cell> {
        self.cells.get(index)
    }

    /// 回傳替換指定格子後的新棋盤，索引超出範圍時回傳 None
    pub fn with_cell(&self, index: CellIndex, cell: Cell) -> Option<Self> {
        if index >= PLAYFIELD_SIZE {
            return None;
        }
        let mut next = self.clone();
        next.cells[index] = cell;
        Some(next)
    }

    /// 依顯示用的列分組（每列 PLAYFIELD_COLUMNS 格）
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(PLAYFIELD_COLUMNS)
    }

    /// 目前棋盤上所有棋子的花費總和
    pub fn occupied_cost(&self) -> Cost {
        self.cells
            .iter()
            .filter_map(Cell::piece)
            .map(|piece| piece.cost)
            .sum()
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// 逐格編碼成棋子 ID，空格為 0
    pub fn encode(&self) -> [PieceId; PLAYFIELD_SIZE] {
        std::array::from_fn(|index| self.cells[index].encoded_id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn knight() -> Piece {
        Piece {
            id: 4,
            name: "Knight".to_string(),
            health: 5,
            attack: 3,
            range: 1,
            cost: 3,
        }
    }

    #[test]
    fn test_empty_playfield_has_eight_cells() {
        let field = Playfield::empty();
        assert_eq!(field.cells().len(), PLAYFIELD_SIZE);
        assert!(field.cells().iter().all(Cell::is_empty));
        assert_eq!(field.encode(), [0; PLAYFIELD_SIZE]);
        assert_eq!(field.occupied_cost(), 0);
    }

    #[test]
    fn test_with_cell_replaces_only_target() {
        let field = Playfield::empty();
        let next = field
            .with_cell(2, Cell::Occupied(knight()))
            .expect("索引 2 應在範圍內");

        assert!(field.get(2).is_some_and(Cell::is_empty), "原棋盤不應被修改");
        assert_eq!(next.get(2).and_then(Cell::piece), Some(&knight()));
        assert_eq!(next.encode(), [0, 0, 4, 0, 0, 0, 0, 0]);
        assert_eq!(next.occupied_count(), 1);
        assert_eq!(next.occupied_cost(), 3);
    }

    #[test]
    fn test_with_cell_out_of_range() {
        assert!(Playfield::empty()
            .with_cell(PLAYFIELD_SIZE, Cell::Occupied(knight()))
            .is_none());
    }

    #[test]
    fn test_rows_layout() {
        let field = Playfield::empty();
        let rows: Vec<usize> = field.rows().map(<[Cell]>::len).collect();
        assert_eq!(rows, vec![PLAYFIELD_COLUMNS, PLAYFIELD_COLUMNS]);
    }
}
