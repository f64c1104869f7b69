//! 錯誤處理系統
//!
//! 分成兩類：
//! - `Error`：載入資料失敗等真正的錯誤，附帶 context 鏈
//! - `Rejection`：玩家操作被拒絕的原因，狀態保持不變，UI 不需顯示

use crate::alias::{CellIndex, Cost, PieceId};
use thiserror::Error as ThisError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// 頂層錯誤，包含原始錯誤和 context 鏈
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    contexts: Vec<String>,
}

/// 錯誤種類
#[derive(Debug, ThisError)]
pub enum ErrorKind {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// 格式載入錯誤
#[derive(Debug, ThisError)]
pub enum LoadError {
    #[error("{format} 反序列化失敗: {reason}")]
    DeserializeError { format: String, reason: String },
    #[error("{format} 序列化失敗: {reason}")]
    SerializeError { format: String, reason: String },
}

/// 棋子目錄錯誤
#[derive(Debug, ThisError)]
pub enum CatalogError {
    #[error("棋子目錄為空")]
    Empty,
    #[error("棋子 ID 0 保留給空格，無法使用: {name}")]
    ReservedPieceId { name: String },
    #[error("棋子 ID 重複: {id}")]
    DuplicatePieceId { id: PieceId },
}

/// 玩家操作被拒絕的原因
#[derive(Debug, Clone, Copy, PartialEq, Eq, ThisError)]
pub enum Rejection {
    #[error("花費已用盡，無法選擇格子")]
    BudgetExhausted,
    #[error("格子索引超出棋盤: {index}")]
    CellOutOfRange { index: CellIndex },
    #[error("花費不足: 需要 {cost}，剩餘 {remaining}")]
    InsufficientBudget { cost: Cost, remaining: Cost },
    #[error("尚未選擇格子")]
    NoSelection,
    #[error("尚未連接帳戶")]
    NotConnected,
}

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// 添加錯誤上下文，自動記錄呼叫位置
    #[track_caller]
    pub fn context<C: Into<String>>(mut self, context: C) -> Self {
        let loc = std::panic::Location::caller();
        let msg = format!("{} [{}:{}]", context.into(), loc.file(), loc.line());
        self.contexts.push(msg);
        self
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind)?;
        for ctx in &self.contexts {
            write!(f, "\n  {}", ctx)?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}

impl<E: Into<ErrorKind>> From<E> for Error {
    fn from(error: E) -> Self {
        Self {
            kind: error.into(),
            contexts: Vec::new(),
        }
    }
}

/// Result 擴展 trait，用於添加錯誤上下文
pub trait Context<T> {
    fn context<C: Into<String>>(self, context: C) -> Result<T>;
}

impl<T> Context<T> for Result<T> {
    #[track_caller]
    fn context<C: Into<String>>(self, context: C) -> Result<T> {
        // map_err 的閉包會吃掉 track_caller，先在這裡取得位置
        match self {
            Ok(value) => Ok(value),
            Err(e) => Err(e.context(context)),
        }
    }
}
