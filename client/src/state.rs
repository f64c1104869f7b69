use crate::config::{self, ClientConfig};
use crate::views::battle_view::BattleView;
use crate::views::lobby_view::LobbyState;
use crate::wallet::LocalWallet;
use placement::catalog::PieceCatalog;

/// 目前顯示的畫面
#[derive(Debug, Default)]
pub enum Screen {
    #[default]
    Lobby,
    Battle(BattleView),
}

/// 客戶端應用程式狀態
#[derive(Debug)]
pub struct ClientApp {
    pub config: ClientConfig,
    pub catalog: PieceCatalog,
    pub wallet: LocalWallet,
    pub lobby: LobbyState,
    pub screen: Screen,
}

impl ClientApp {
    pub fn new(config: ClientConfig, catalog: PieceCatalog) -> Self {
        let wallet = LocalWallet::from_config(config.account.as_deref());
        Self {
            config,
            catalog,
            wallet,
            lobby: LobbyState::default(),
            screen: Screen::default(),
        }
    }

    /// 讀取設定與棋子目錄並建立應用程式
    pub fn load() -> anyhow::Result<Self> {
        let config = config::load_config_or_default(&config::config_path());
        let catalog = config::load_catalog_or_builtin(&config.catalog_path)?;
        Ok(Self::new(config, catalog))
    }
}
