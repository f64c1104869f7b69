//! 單場對戰的佈陣工作階段
//!
//! 持有目前的 `PlacementState`，每次操作成功就整個替換成新狀態。
//! 被拒絕的操作不改變狀態，只留下 debug log。

use crate::account::AccountProvider;
use crate::alias::BattleId;
use crate::error::Rejection;
use crate::state::{Action, PlacementState};
use crate::submission::{self, Commit};
use rand::Rng;

#[derive(Debug, Clone)]
pub struct PlacementSession {
    battle_id: BattleId,
    state: PlacementState,
}

impl PlacementSession {
    pub fn new(battle_id: BattleId) -> Self {
        Self {
            battle_id,
            state: PlacementState::new(),
        }
    }

    pub fn battle_id(&self) -> BattleId {
        self.battle_id
    }

    pub fn state(&self) -> &PlacementState {
        &self.state
    }

    /// 處理玩家操作
    pub fn dispatch(&mut self, action: Action) -> Result<(), Rejection> {
        match self.state.apply(&action) {
            Ok(next) => {
                tracing::debug!(
                    battle_id = self.battle_id,
                    ?action,
                    remaining = next.remaining(),
                    cursor = ?next.cursor(),
                    "placement action applied"
                );
                self.state = next;
                Ok(())
            }
            Err(rejection) => {
                tracing::debug!(
                    battle_id = self.battle_id,
                    ?action,
                    %rejection,
                    "placement action ignored"
                );
                Err(rejection)
            }
        }
    }

    /// 以系統亂數產生 salt 並提交
    pub fn submit<A>(&self, accounts: &A) -> Result<Commit, Rejection>
    where
        A: AccountProvider + ?Sized,
    {
        self.submit_with_rng(accounts, &mut rand::rng())
    }

    pub fn submit_with_rng<A, R>(&self, accounts: &A, rng: &mut R) -> Result<Commit, Rejection>
    where
        A: AccountProvider + ?Sized,
        R: Rng,
    {
        let span = tracing::info_span!("submit", battle_id = self.battle_id);
        let _guard = span.enter();
        submission::submit(self.state.playfield(), accounts, rng)
    }
}
