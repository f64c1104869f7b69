//! 大廳：錢包連線與對戰列表

use crate::config::ClientConfig;
use crate::constants::*;
use crate::wallet::LocalWallet;
use placement::account::AccountProvider;
use placement::alias::BattleId;

/// 大廳 UI 狀態
#[derive(Debug, Default)]
pub struct LobbyState {
    /// 手動輸入的對戰 ID
    pub custom_battle_id: BattleId,
}

/// 渲染大廳，回傳玩家要進入的對戰 ID
pub fn show(
    ui: &mut egui::Ui,
    config: &ClientConfig,
    lobby: &mut LobbyState,
    wallet: &mut LocalWallet,
) -> Option<BattleId> {
    let mut entered = None;

    ui.heading("錢包");
    ui.add_space(SPACING_SMALL);
    render_wallet(ui, wallet);

    ui.add_space(SPACING_LARGE);
    ui.separator();
    ui.heading("對戰列表");
    ui.add_space(SPACING_SMALL);

    if config.battles.is_empty() {
        ui.label("設定檔中沒有任何對戰");
    }

    egui::Grid::new("battle_list_grid")
        .striped(true)
        .spacing([SPACING_LARGE, SPACING_MEDIUM])
        .show(ui, |ui| {
            for battle_id in &config.battles {
                ui.label(format!("對戰 #{}", battle_id));
                if ui.button("進入").clicked() {
                    entered = Some(*battle_id);
                }
                ui.end_row();
            }
        });

    ui.add_space(SPACING_MEDIUM);
    ui.horizontal(|ui| {
        ui.label("對戰 ID：");
        ui.add(egui::DragValue::new(&mut lobby.custom_battle_id));
        if ui.button("進入").clicked() {
            entered = Some(lobby.custom_battle_id);
        }
    });

    entered
}

fn render_wallet(ui: &mut egui::Ui, wallet: &mut LocalWallet) {
    ui.horizontal(|ui| {
        let connected = wallet.is_connected();
        ui.add_enabled(
            !connected,
            egui::TextEdit::singleline(&mut wallet.address)
                .hint_text("0x...")
                .desired_width(ADDRESS_INPUT_WIDTH),
        );

        if connected {
            if ui.button("中斷連線").clicked() {
                wallet.disconnect();
            }
        } else if ui.button("連線").clicked() {
            wallet.connect();
        }
    });

    match wallet.current_account() {
        Some(account) => ui.colored_label(egui::Color32::GREEN, format!("已連線：{}", account)),
        None => ui.colored_label(egui::Color32::GRAY, "尚未連線，無法提交棋盤"),
    };
}
