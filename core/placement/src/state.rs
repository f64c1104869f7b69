//! 佈陣狀態機
//!
//! 所有玩家操作都以 `Action` 表示，經由 `PlacementState::apply` 單一入口處理。
//! `apply` 不修改原狀態，成功時回傳新狀態，被拒絕時回傳 `Rejection`。
//!
//! 狀態組合：{未選格, 已選格} × {有預算, 預算用盡}，重置永遠回到初始狀態。

use crate::alias::{CellIndex, Cost};
use crate::catalog::{Piece, PieceCatalog};
use crate::constants::{INITIAL_BUDGET, PLAYFIELD_SIZE};
use crate::error::Rejection;
use crate::playfield::{Cell, Playfield};

/// 玩家操作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// 點擊格子：選取或取消選取
    SelectCell(CellIndex),
    /// 把棋子放到目前選取的格子
    AssignPiece(Piece),
    /// 清空棋盤並恢復預算
    Reset,
}

/// 佈陣畫面的完整狀態
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementState {
    playfield: Playfield,
    remaining: Cost,
    cursor: Option<CellIndex>,
    has_assignment: bool,
}

impl Default for PlacementState {
    fn default() -> Self {
        Self::new()
    }
}

impl PlacementState {
    pub fn new() -> Self {
        Self {
            playfield: Playfield::empty(),
            remaining: INITIAL_BUDGET,
            cursor: None,
            has_assignment: false,
        }
    }

    pub fn playfield(&self) -> &Playfield {
        &self.playfield
    }

    pub fn remaining(&self) -> Cost {
        self.remaining
    }

    pub fn cursor(&self) -> Option<CellIndex> {
        self.cursor
    }

    /// 是否曾經成功放置過棋子（重置不會清除）
    pub fn has_assignment(&self) -> bool {
        self.has_assignment
    }

    /// 目前選取的格子是否能放置該棋子
    pub fn can_assign(&self, piece: &Piece) -> bool {
        self.cursor.is_some() && PieceCatalog::is_affordable(piece, self.remaining)
    }

    /// 處理玩家操作，回傳新狀態
    pub fn apply(&self, action: &Action) -> Result<Self, Rejection> {
        match action {
            Action::SelectCell(index) => self.select_cell(*index),
            Action::AssignPiece(piece) => self.assign_piece(piece),
            Action::Reset => Ok(self.reset()),
        }
    }

    /// 點擊格子
    ///
    /// - 預算用盡時忽略
    /// - 點擊其他格子：游標移到該格
    /// - 點擊已選取的格子：取消選取
    fn select_cell(&self, index: CellIndex) -> Result<Self, Rejection> {
        if self.remaining == 0 {
            return Err(Rejection::BudgetExhausted);
        }
        if index >= PLAYFIELD_SIZE {
            return Err(Rejection::CellOutOfRange { index });
        }

        let cursor = match self.cursor {
            Some(current) if current == index => None,
            _ => Some(index),
        };
        Ok(Self {
            cursor,
            ..self.clone()
        })
    }

    /// 放置棋子
    ///
    /// - 花費超過剩餘預算時忽略
    /// - 未選取格子時忽略
    /// - 覆蓋已有棋子的格子時，不退還原棋子的花費
    fn assign_piece(&self, piece: &Piece) -> Result<Self, Rejection> {
        if !PieceCatalog::is_affordable(piece, self.remaining) {
            return Err(Rejection::InsufficientBudget {
                cost: piece.cost,
                remaining: self.remaining,
            });
        }
        let index = self.cursor.ok_or(Rejection::NoSelection)?;
        let playfield = self
            .playfield
            .with_cell(index, Cell::Occupied(piece.clone()))
            .ok_or(Rejection::CellOutOfRange { index })?;

        Ok(Self {
            playfield,
            remaining: self.remaining - piece.cost,
            cursor: None,
            has_assignment: true,
        })
    }

    fn reset(&self) -> Self {
        Self {
            has_assignment: self.has_assignment,
            ..Self::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn piece(id: u32, cost: Cost) -> Piece {
        Piece {
            id,
            name: format!("piece-{id}"),
            health: 1,
            attack: 1,
            range: 1,
            cost,
        }
    }

    #[test]
    fn test_initial_state() {
        let state = PlacementState::new();
        assert_eq!(state.remaining(), INITIAL_BUDGET);
        assert_eq!(state.cursor(), None);
        assert!(!state.has_assignment());
        assert_eq!(state.playfield(), &Playfield::empty());
    }

    #[test]
    fn test_apply_does_not_mutate_original() {
        let state = PlacementState::new();
        let next = state.apply(&Action::SelectCell(3)).expect("選格應成功");
        assert_eq!(state.cursor(), None, "原狀態不應改變");
        assert_eq!(next.cursor(), Some(3));
    }

    #[test]
    fn test_select_out_of_range_is_rejected() {
        let state = PlacementState::new();
        assert_eq!(
            state.apply(&Action::SelectCell(PLAYFIELD_SIZE)),
            Err(Rejection::CellOutOfRange {
                index: PLAYFIELD_SIZE
            })
        );
    }

    #[test]
    fn test_assign_without_selection_is_rejected() {
        let state = PlacementState::new();
        assert_eq!(
            state.apply(&Action::AssignPiece(piece(1, 1))),
            Err(Rejection::NoSelection)
        );
    }

    #[test]
    fn test_can_assign() {
        let state = PlacementState::new();
        assert!(!state.can_assign(&piece(1, 1)), "未選格時不可放置");

        let state = state.apply(&Action::SelectCell(0)).expect("選格應成功");
        assert!(state.can_assign(&piece(1, INITIAL_BUDGET)));
        assert!(!state.can_assign(&piece(1, INITIAL_BUDGET + 1)));
    }

    #[test]
    fn test_reset_keeps_assignment_flag() {
        let state = PlacementState::new()
            .apply(&Action::SelectCell(1))
            .and_then(|s| s.apply(&Action::AssignPiece(piece(1, 2))))
            .and_then(|s| s.apply(&Action::Reset))
            .expect("操作序列應成功");

        assert!(state.has_assignment(), "重置後仍保留「曾放置」旗標");
        assert_eq!(state.remaining(), INITIAL_BUDGET);
        assert_eq!(state.playfield(), &Playfield::empty());
    }
}
