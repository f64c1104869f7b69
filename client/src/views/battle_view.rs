//! 佈陣畫面
//!
//! 上方是 2×4 棋盤，下方是棋子目錄。點擊格子選取，再從目錄選擇棋子放置。
//! 被拒絕的操作不顯示任何提示。

use crate::constants::*;
use crate::wallet::LocalWallet;
use egui_extras::{Column, TableBuilder};
use placement::alias::{BattleId, CellIndex};
use placement::catalog::{PieceCatalog, PieceStat};
use placement::constants::{PLAYFIELD_COLUMNS, PLAYFIELD_SIZE};
use placement::playfield::Cell;
use placement::session::PlacementSession;
use placement::state::{Action, PlacementState};
use strum::IntoEnumIterator;

/// 佈陣畫面通知上層的事件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleViewEvent {
    /// 返回上一頁
    Back,
}

/// 本幀收集到的操作，在 UI 閉包外統一處理
#[derive(Debug, Default)]
struct FrameInput {
    actions: Vec<Action>,
    submit: bool,
    back: bool,
}

#[derive(Debug)]
pub struct BattleView {
    session: PlacementSession,
}

impl BattleView {
    pub fn new(battle_id: BattleId) -> Self {
        Self {
            session: PlacementSession::new(battle_id),
        }
    }

    pub fn session(&self) -> &PlacementSession {
        &self.session
    }

    /// 渲染佈陣畫面
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        catalog: &PieceCatalog,
        wallet: &LocalWallet,
    ) -> Option<BattleViewEvent> {
        let mut input = FrameInput::default();
        let state = self.session().state();

        render_header(ui, self.session().battle_id(), &mut input);

        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading("你的棋盤");
                    ui.label("點擊格子，再從下方選擇棋子");
                    ui.add_space(SPACING_MEDIUM);

                    render_playfield(ui, state, &mut input);

                    // 放置過棋子後才顯示重置 / 提交
                    if state.has_assignment() {
                        ui.add_space(SPACING_LARGE);
                        render_action_buttons(ui, wallet, &mut input);
                    }

                    ui.add_space(SPACING_LARGE);
                    ui.heading(format!("剩餘花費：{}", state.remaining()));
                    ui.add_space(SPACING_MEDIUM);
                });

                render_catalog_table(ui, catalog, state, &mut input);
            });

        self.apply_input(input, wallet)
    }

    fn apply_input(&mut self, input: FrameInput, wallet: &LocalWallet) -> Option<BattleViewEvent> {
        // 被拒絕的操作保持靜默，原因已由 session 寫入 debug log
        for action in input.actions {
            let _ = self.session.dispatch(action);
        }
        if input.submit {
            let _ = self.session.submit(wallet);
        }
        input.back.then_some(BattleViewEvent::Back)
    }
}

/// 頂部：返回按鈕與對戰 ID
fn render_header(ui: &mut egui::Ui, battle_id: BattleId, input: &mut FrameInput) {
    ui.horizontal(|ui| {
        if ui.button("←").on_hover_text("返回").clicked() {
            input.back = true;
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(format!("目前對戰 ID：{}", battle_id));
        });
    });
    ui.separator();
}

/// 計算棋盤所需尺寸
fn playfield_dimensions() -> egui::Vec2 {
    let rows = PLAYFIELD_SIZE.div_ceil(PLAYFIELD_COLUMNS);
    let step = PLAYFIELD_CELL_SIZE + PLAYFIELD_GRID_SPACING;
    egui::vec2(
        PLAYFIELD_COLUMNS as f32 * step - PLAYFIELD_GRID_SPACING,
        rows as f32 * step - PLAYFIELD_GRID_SPACING,
    )
}

/// 第 index 格在畫面上的位置
fn cell_rect(rect: egui::Rect, index: CellIndex) -> egui::Rect {
    let step = PLAYFIELD_CELL_SIZE + PLAYFIELD_GRID_SPACING;
    let x = (index % PLAYFIELD_COLUMNS) as f32;
    let y = (index / PLAYFIELD_COLUMNS) as f32;
    egui::Rect::from_min_size(
        egui::pos2(rect.min.x + x * step, rect.min.y + y * step),
        egui::vec2(PLAYFIELD_CELL_SIZE, PLAYFIELD_CELL_SIZE),
    )
}

/// 螢幕座標轉成格子索引，落在間隔或棋盤外時回傳 None
fn cell_index_at(rect: egui::Rect, pos: egui::Pos2) -> Option<CellIndex> {
    (0..PLAYFIELD_SIZE).find(|&index| cell_rect(rect, index).contains(pos))
}

/// 格子內顯示的文字
fn cell_label(cell: &Cell) -> String {
    match cell {
        Cell::Empty => String::new(),
        Cell::Occupied(piece) => piece.name.clone(),
    }
}

/// 渲染 2×4 棋盤
fn render_playfield(ui: &mut egui::Ui, state: &PlacementState, input: &mut FrameInput) {
    let (rect, response) = ui.allocate_exact_size(playfield_dimensions(), egui::Sense::click());

    if response.clicked() {
        if let Some(index) = response
            .interact_pointer_pos()
            .and_then(|p| cell_index_at(rect, p))
        {
            input.actions.push(Action::SelectCell(index));
        }
    }

    let painter = ui.painter();
    for (index, cell) in state.playfield().cells().iter().enumerate() {
        let cell_rect = cell_rect(rect, index);
        let bg_color = match cell {
            Cell::Empty => PLAYFIELD_COLOR_EMPTY,
            Cell::Occupied(_) => PLAYFIELD_COLOR_OCCUPIED,
        };
        painter.rect_filled(cell_rect, 0.0, bg_color);
        painter.text(
            cell_rect.center(),
            egui::Align2::CENTER_CENTER,
            cell_label(cell),
            egui::FontId::proportional(PLAYFIELD_TEXT_SIZE),
            PLAYFIELD_COLOR_TEXT,
        );

        if state.cursor() == Some(index) {
            painter.rect_stroke(
                cell_rect,
                0.0,
                egui::Stroke::new(PLAYFIELD_STROKE_WIDTH, PLAYFIELD_COLOR_SELECTED),
                egui::epaint::StrokeKind::Outside,
            );
        }
    }

    if let Some(piece) = response
        .hover_pos()
        .and_then(|p| cell_index_at(rect, p))
        .and_then(|index| state.playfield().get(index))
        .and_then(Cell::piece)
    {
        response.on_hover_text(format!(
            "{}（生命 {} / 攻擊 {} / 射程 {}）",
            piece.name, piece.health, piece.attack, piece.range
        ));
    }
}

/// 重置與提交按鈕
fn render_action_buttons(ui: &mut egui::Ui, wallet: &LocalWallet, input: &mut FrameInput) {
    let size = egui::vec2(ACTION_BUTTON_WIDTH, ACTION_BUTTON_HEIGHT);
    ui.horizontal(|ui| {
        // 讓按鈕列置中
        let total = size.x * 2.0 + ui.spacing().item_spacing.x;
        ui.add_space(((ui.available_width() - total) / 2.0).max(0.0));

        if ui
            .add_sized(size, egui::Button::new("重置").fill(BUTTON_COLOR_RESET))
            .clicked()
        {
            input.actions.push(Action::Reset);
        }

        let submit = ui.add_sized(size, egui::Button::new("提交").fill(BUTTON_COLOR_SUBMIT));
        let submit = if wallet.is_connected() {
            submit
        } else {
            submit.on_hover_text("尚未連接錢包")
        };
        if submit.clicked() {
            input.submit = true;
        }
    });
}

/// 棋子目錄表格
fn render_catalog_table(
    ui: &mut egui::Ui,
    catalog: &PieceCatalog,
    state: &PlacementState,
    input: &mut FrameInput,
) {
    let stat_count = PieceStat::iter().count();

    TableBuilder::new(ui)
        .striped(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::auto().at_least(120.0))
        .columns(Column::auto().at_least(60.0), stat_count)
        .column(Column::remainder())
        .header(TABLE_HEADER_HEIGHT, |mut header| {
            header.col(|ui| {
                ui.strong("棋子");
            });
            for stat in PieceStat::iter() {
                header.col(|ui| {
                    ui.strong(stat.to_string());
                });
            }
            header.col(|_| {});
        })
        .body(|mut body| {
            for piece in catalog.pieces() {
                body.row(TABLE_ROW_HEIGHT, |mut row| {
                    row.col(|ui| {
                        ui.label(&piece.name);
                    });
                    for stat in PieceStat::iter() {
                        row.col(|ui| {
                            ui.label(stat.value(piece).to_string());
                        });
                    }
                    row.col(|ui| {
                        if ui
                            .add_enabled(state.can_assign(piece), egui::Button::new("選擇"))
                            .clicked()
                        {
                            input.actions.push(Action::AssignPiece(piece.clone()));
                        }
                    });
                });
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_rect() -> egui::Rect {
        egui::Rect::from_min_size(egui::pos2(10.0, 20.0), playfield_dimensions())
    }

    #[test]
    fn test_cell_index_at_maps_two_rows_of_four() {
        let rect = board_rect();
        for index in 0..PLAYFIELD_SIZE {
            let center = cell_rect(rect, index).center();
            assert_eq!(cell_index_at(rect, center), Some(index), "格子 {index} 中心");
        }
    }

    #[test]
    fn test_cell_index_at_ignores_gaps_and_outside() {
        let rect = board_rect();
        let gap = egui::pos2(
            rect.min.x + PLAYFIELD_CELL_SIZE + PLAYFIELD_GRID_SPACING / 2.0,
            rect.min.y + PLAYFIELD_CELL_SIZE / 2.0,
        );
        assert_eq!(cell_index_at(rect, gap), None, "格子間隔不屬於任何格子");
        assert_eq!(cell_index_at(rect, egui::pos2(0.0, 0.0)), None);
    }

    #[test]
    fn test_apply_input_dispatches_and_reports_back() {
        let mut view = BattleView::new(3);
        let wallet = LocalWallet::default();
        let input = FrameInput {
            actions: vec![Action::SelectCell(1), Action::SelectCell(5)],
            submit: true,
            back: true,
        };

        let event = view.apply_input(input, &wallet);
        assert_eq!(event, Some(BattleViewEvent::Back));
        assert_eq!(view.session().state().cursor(), Some(5));
    }
}
