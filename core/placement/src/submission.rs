//! 提交編碼
//!
//! 把棋盤逐格轉成棋子 ID（空格為 0），再配上一個隨機 64 位元 salt。
//! 目前只寫入 log，不做任何傳輸或持久化。

use crate::account::AccountProvider;
use crate::alias::{PieceId, Salt};
use crate::constants::PLAYFIELD_SIZE;
use crate::error::{LoadError, Rejection, Result};
use crate::playfield::Playfield;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// 棋盤選擇 + salt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    pub input: [PieceId; PLAYFIELD_SIZE],
    pub salt: Salt,
}

impl Commit {
    pub fn new(playfield: &Playfield, salt: Salt) -> Self {
        Self {
            input: playfield.encode(),
            salt,
        }
    }

    /// 以亂數產生器產生 salt
    pub fn generate<R: Rng>(playfield: &Playfield, rng: &mut R) -> Self {
        Self::new(playfield, rng.random())
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| {
            LoadError::SerializeError {
                format: "JSON".to_string(),
                reason: e.to_string(),
            }
            .into()
        })
    }
}

/// 提交棋盤
///
/// 未連接帳戶時不做任何事並回傳 `Rejection::NotConnected`；
/// 否則產生 commit 並寫入 log。
pub fn submit<A, R>(playfield: &Playfield, accounts: &A, rng: &mut R) -> Result<Commit, Rejection>
where
    A: AccountProvider + ?Sized,
    R: Rng,
{
    let Some(account) = accounts.current_account() else {
        tracing::debug!("submission skipped: no connected account");
        return Err(Rejection::NotConnected);
    };

    let commit = Commit::generate(playfield, rng);
    match commit.to_json() {
        Ok(json) => tracing::info!(account = %account, commit = %json, "placement submitted"),
        Err(e) => tracing::warn!(account = %account, error = %e, "placement commit not serializable"),
    }
    Ok(commit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::Account;
    use crate::catalog::Piece;
    use crate::playfield::Cell;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn field_with_piece_at(index: usize, id: PieceId) -> Playfield {
        let piece = Piece {
            id,
            name: "Archer".to_string(),
            health: 2,
            attack: 2,
            range: 3,
            cost: 2,
        };
        Playfield::empty()
            .with_cell(index, Cell::Occupied(piece))
            .expect("索引應在範圍內")
    }

    #[test]
    fn test_commit_encodes_cells_in_order() {
        let commit = Commit::new(&field_with_piece_at(5, 9), 42);
        assert_eq!(commit.input, [0, 0, 0, 0, 0, 9, 0, 0]);
        assert_eq!(commit.salt, 42);
    }

    #[test]
    fn test_commit_json_shape() {
        let json = Commit::new(&Playfield::empty(), 7)
            .to_json()
            .expect("序列化應成功");
        assert_eq!(json, r#"{"input":[0,0,0,0,0,0,0,0],"salt":7}"#);
    }

    #[test]
    fn test_submit_without_account_is_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        let no_account: Option<Account> = None;
        let result = submit(&field_with_piece_at(0, 1), &no_account, &mut rng);
        assert_eq!(result, Err(Rejection::NotConnected));
    }

    #[test]
    fn test_submit_salt_comes_from_rng() {
        let field = field_with_piece_at(0, 1);
        let account = Some(Account::new("0xabc"));

        let first = submit(&field, &account, &mut StdRng::seed_from_u64(7)).expect("應成功提交");
        let again = submit(&field, &account, &mut StdRng::seed_from_u64(7)).expect("應成功提交");
        let other = submit(&field, &account, &mut StdRng::seed_from_u64(8)).expect("應成功提交");

        assert_eq!(first, again, "相同種子應產生相同 salt");
        assert_ne!(first.salt, other.salt, "不同種子應產生不同 salt");
        assert_eq!(first.input, field.encode());
    }
}
