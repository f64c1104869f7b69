//! 棋盤佈陣核心函式庫
//!
//! 提供回合制對戰中「佈陣」畫面的所有遊戲邏輯，與 UI 完全分離：
//! - 棋子目錄（TOML 載入與驗證）
//! - 8 格棋盤與花費預算
//! - 佈陣狀態機（選格、放置棋子、重置）
//! - 提交編碼（棋子 ID 序列 + 隨機 salt）

pub mod account;
pub mod alias;
pub mod catalog;
pub mod constants;
pub mod error;
pub mod playfield;
pub mod session;
pub mod state;
pub mod submission;

// 重新導出常用類型
pub use account::{Account, AccountProvider};
pub use catalog::{Piece, PieceCatalog, PieceStat};
pub use error::{Error, ErrorKind, Rejection, Result};
pub use playfield::{Cell, Playfield};
pub use session::PlacementSession;
pub use state::{Action, PlacementState};
pub use submission::Commit;
