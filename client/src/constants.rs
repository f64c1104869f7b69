use placement::alias::BattleId;

pub const APP_TITLE: &str = "佈陣";
pub const FONT_FILE_PATH: &str = "fonts/NotoSans.ttf";
pub const FONT_NAME: &str = "NotoSans";

// 字體大小
pub const FONT_SIZE_HEADING: f32 = 32.0;
pub const FONT_SIZE_BODY: f32 = 20.0;
pub const FONT_SIZE_MONOSPACE: f32 = 20.0;
pub const FONT_SIZE_BUTTON: f32 = 20.0;
pub const FONT_SIZE_SMALL: f32 = 16.0;

// 視窗
pub const WINDOW_WIDTH: f32 = 960.0;
pub const WINDOW_HEIGHT: f32 = 900.0;

// UI 間距
pub const SPACING_SMALL: f32 = 5.0;
pub const SPACING_MEDIUM: f32 = 10.0;
pub const SPACING_LARGE: f32 = 20.0;

// UI 尺寸
pub const ACTION_BUTTON_WIDTH: f32 = 100.0;
pub const ACTION_BUTTON_HEIGHT: f32 = 32.0;
pub const TABLE_ROW_HEIGHT: f32 = 28.0;
pub const TABLE_HEADER_HEIGHT: f32 = 24.0;
pub const ADDRESS_INPUT_WIDTH: f32 = 420.0;

// 檔案相關
pub const DATA_DIRECTORY_PATH: &str = "data/";
pub const CONFIG_FILE_NAME: &str = "client.toml";
pub const CONFIG_PATH_ENV_VAR: &str = "PLAYFIELD_CLIENT_CONFIG";
pub const BUILTIN_CATALOG_TOML: &str = include_str!("../data/pieces.toml");

// 大廳
pub const DEFAULT_BATTLES: [BattleId; 3] = [1, 2, 3];

// 棋盤
pub const PLAYFIELD_CELL_SIZE: f32 = 96.0;
pub const PLAYFIELD_GRID_SPACING: f32 = 8.0;
pub const PLAYFIELD_TEXT_SIZE: f32 = 18.0;
pub const PLAYFIELD_STROKE_WIDTH: f32 = 3.0;

// 棋盤 - 顏色
pub const PLAYFIELD_COLOR_EMPTY: egui::Color32 = egui::Color32::DARK_GRAY;
pub const PLAYFIELD_COLOR_OCCUPIED: egui::Color32 = egui::Color32::LIGHT_BLUE;
pub const PLAYFIELD_COLOR_SELECTED: egui::Color32 = egui::Color32::YELLOW;
pub const PLAYFIELD_COLOR_TEXT: egui::Color32 = egui::Color32::BLACK;

// 按鈕顏色
pub const BUTTON_COLOR_RESET: egui::Color32 = egui::Color32::from_rgb(190, 50, 50);
pub const BUTTON_COLOR_SUBMIT: egui::Color32 = egui::Color32::from_rgb(40, 150, 70);
