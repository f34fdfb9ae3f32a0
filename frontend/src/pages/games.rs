use serde::{Deserialize, Serialize};
use shared::games::{Lobby, FLAPPY_BIRD};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::game_selector::GameSelector;
use crate::components::lobby_player_selector::LobbyPlayerSelector;
use crate::router::Route;
use crate::services::roster::load_roster;

/// Query string handed to the bird game.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BirdQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
}

#[function_component(Games)]
pub fn games() -> Html {
    let members = use_state(load_roster);
    let lobby = use_state(Lobby::new);
    let navigator = use_navigator();

    let on_toggle = {
        let lobby = lobby.clone();
        Callback::from(move |member_id: String| {
            let mut next = (*lobby).clone();
            next.toggle_player(&member_id);
            lobby.set(next);
        })
    };

    let on_select = {
        let lobby = lobby.clone();
        Callback::from(move |game_id: &'static str| {
            let mut next = (*lobby).clone();
            if next.select_game(game_id) {
                lobby.set(next);
            }
        })
    };

    let on_start = {
        let lobby = lobby.clone();
        let members = members.clone();
        Callback::from(move |_| {
            let Some(game) = lobby.selected_game() else {
                return;
            };
            tracing::info!(game = game.id, players = lobby.players().len(), "starting game");
            if game.id == FLAPPY_BIRD {
                let query = BirdQuery {
                    emoji: lobby.lead_emoji(&members),
                };
                if let Some(navigator) = &navigator {
                    if let Err(e) = navigator.push_with_query(&Route::BirdGame, &query) {
                        tracing::error!("Failed to open the bird game: {}", e);
                    }
                }
            } else {
                gloo::dialogs::alert(&format!("{} is coming soon!", game.name));
            }
        })
    };

    html! {
        <div class="games-page">
            <h1>{ "Games" }</h1>
            <LobbyPlayerSelector
                members={(*members).clone()}
                lobby={(*lobby).clone()}
                {on_toggle}
            />
            <GameSelector lobby={(*lobby).clone()} {on_select} />
            <button
                type="button"
                class="start-game-button"
                disabled={!lobby.can_start()}
                onclick={on_start}
            >
                { "Start Game" }
            </button>
        </div>
    }
}
