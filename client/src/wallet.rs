//! 本機錢包
//!
//! 只記錄地址與連線狀態，提交時作為帳戶來源。

use placement::account::{Account, AccountProvider};

#[derive(Debug, Default)]
pub struct LocalWallet {
    /// 輸入中的地址
    pub address: String,
    connected: Option<Account>,
}

impl LocalWallet {
    /// 依設定建立，有地址時直接連線
    pub fn from_config(account: Option<&str>) -> Self {
        let mut wallet = Self {
            address: account.unwrap_or_default().to_string(),
            connected: None,
        };
        if account.is_some() {
            wallet.connect();
        }
        wallet
    }

    /// 以目前輸入的地址連線，地址為空時不連線
    pub fn connect(&mut self) -> bool {
        let address = self.address.trim();
        if address.is_empty() {
            return false;
        }
        let account = Account::new(address);
        tracing::info!(account = %account, "wallet connected");
        self.connected = Some(account);
        true
    }

    pub fn disconnect(&mut self) {
        if let Some(account) = self.connected.take() {
            tracing::info!(account = %account, "wallet disconnected");
        }
    }

    pub fn is_connected(&self) -> bool {
        self.connected.is_some()
    }
}

impl AccountProvider for LocalWallet {
    fn current_account(&self) -> Option<&Account> {
        self.connected.as_ref()
    }
}
