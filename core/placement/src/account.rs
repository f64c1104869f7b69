//! 帳戶（錢包）協作者
//!
//! 提交前必須有已連接的帳戶，實際的錢包連線由外部實作。

use serde::{Deserialize, Serialize};
use std::fmt;

/// 已連接的帳戶地址
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Account(String);

impl Account {
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    pub fn address(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 提供目前帳戶的來源，未連接時回傳 None
pub trait AccountProvider {
    fn current_account(&self) -> Option<&Account>;
}

impl AccountProvider for Option<Account> {
    fn current_account(&self) -> Option<&Account> {
        self.as_ref()
    }
}
