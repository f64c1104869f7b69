pub mod battle_view;
pub mod lobby_view;
