//! 棋子目錄
//!
//! 目錄由外部提供（TOML），本模組只負責解析、驗證與唯讀查詢。
//!
//! ```toml
//! [[pieces]]
//! id = 1
//! name = "Soldier"
//! health = 3
//! attack = 1
//! range = 1
//! cost = 1
//! ```

use crate::alias::{Cost, PieceId};
use crate::constants::EMPTY_CELL_ID;
use crate::error::{CatalogError, LoadError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use strum_macros::{Display, EnumIter};

/// 棋子定義
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub id: PieceId,
    pub name: String,
    pub health: u32,
    pub attack: u32,
    pub range: u32,
    pub cost: Cost,
}

/// 棋子數值欄位（目錄表格的欄）
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, Display)]
pub enum PieceStat {
    #[strum(to_string = "生命")]
    Health,
    #[strum(to_string = "攻擊")]
    Attack,
    #[strum(to_string = "射程")]
    Range,
    #[strum(to_string = "花費")]
    Cost,
}

impl PieceStat {
    /// 取得棋子的對應數值
    pub fn value(&self, piece: &Piece) -> u32 {
        match self {
            Self::Health => piece.health,
            Self::Attack => piece.attack,
            Self::Range => piece.range,
            Self::Cost => piece.cost,
        }
    }
}

/// 唯讀、有序的棋子目錄
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PieceCatalog {
    pieces: Vec<Piece>,
}

impl PieceCatalog {
    /// 建立目錄並驗證
    ///
    /// - 不可為空
    /// - ID 0 保留給空格
    /// - ID 不可重複
    pub fn new(pieces: Vec<Piece>) -> Result<Self> {
        if pieces.is_empty() {
            return Err(CatalogError::Empty.into());
        }

        let mut seen = HashSet::new();
        for piece in &pieces {
            if piece.id == EMPTY_CELL_ID {
                return Err(CatalogError::ReservedPieceId {
                    name: piece.name.clone(),
                }
                .into());
            }
            if !seen.insert(piece.id) {
                return Err(CatalogError::DuplicatePieceId { id: piece.id }.into());
            }
        }

        Ok(Self { pieces })
    }

    /// 從 TOML 字串載入
    pub fn from_toml(content: &str) -> Result<Self> {
        #[derive(Deserialize)]
        struct CatalogFile {
            pieces: Vec<Piece>,
        }

        let file: CatalogFile = toml::from_str(content).map_err(|e| LoadError::DeserializeError {
            format: "TOML".to_string(),
            reason: e.to_string(),
        })?;
        Self::new(file.pieces)
    }

    /// 序列化成 TOML 字串
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| {
            LoadError::SerializeError {
                format: "TOML".to_string(),
                reason: e.to_string(),
            }
            .into()
        })
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn get(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.iter().find(|piece| piece.id == id)
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// 目前剩餘花費是否足以放置該棋子
    pub fn is_affordable(piece: &Piece, remaining: Cost) -> bool {
        piece.cost <= remaining
    }
}
