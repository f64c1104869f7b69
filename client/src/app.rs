use crate::state::{ClientApp, Screen};
use crate::views::battle_view::{BattleView, BattleViewEvent};
use crate::views::lobby_view;
use placement::account::AccountProvider;

impl eframe::App for ClientApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!("棋子目錄：{} 種", self.catalog.len()));
                ui.separator();
                match self.wallet.current_account() {
                    Some(account) => ui.label(format!("帳戶：{}", account)),
                    None => ui.label("帳戶：未連線"),
                };
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let next_screen = match &mut self.screen {
                Screen::Lobby => {
                    lobby_view::show(ui, &self.config, &mut self.lobby, &mut self.wallet).map(
                        |battle_id| {
                            tracing::info!(battle_id, "entering battle");
                            Screen::Battle(BattleView::new(battle_id))
                        },
                    )
                }
                Screen::Battle(view) => match view.show(ui, &self.catalog, &self.wallet) {
                    Some(BattleViewEvent::Back) => Some(Screen::Lobby),
                    None => None,
                },
            };

            if let Some(screen) = next_screen {
                self.screen = screen;
            }
        });
    }
}
