pub mod add_event_popup;
pub mod bird_game;
pub mod calendar_date_cell;
pub mod calendar_grid;
pub mod calendar_navigation;
pub mod character_customization_popup;
pub mod clicked_date_popup;
pub mod events_list;
pub mod events_panel;
pub mod game_selector;
pub mod header;
pub mod lobby_player_selector;
pub mod quick_actions;
pub mod view_all_events_popup;
