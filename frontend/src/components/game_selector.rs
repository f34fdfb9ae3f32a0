use shared::games::{Lobby, GAMES};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct GameSelectorProps {
    pub lobby: Lobby,
    pub on_select: Callback<&'static str>,
}

#[function_component(GameSelector)]
pub fn game_selector(props: &GameSelectorProps) -> Html {
    let player_count = props.lobby.players().len();
    let selected = props.lobby.selected_game().map(|g| g.id);

    html! {
        <div class="game-selector">
            <h2>{ "Select a game" }</h2>
            <div class="game-grid">
                { for GAMES.iter().map(|game| {
                    let locked = game.is_locked(player_count);
                    let on_select = props.on_select.clone();
                    let id = game.id;
                    html! {
                        <button
                            key={game.id}
                            type="button"
                            class={classes!(
                                "game-box",
                                (selected == Some(game.id)).then_some("selected"),
                                locked.then_some("locked"),
                            )}
                            disabled={locked}
                            onclick={Callback::from(move |_| on_select.emit(id))}
                        >
                            <span class="emoji">{ game.emoji }</span>
                            <span class="name">{ game.name }</span>
                            if locked {
                                if let Some(message) = game.lock_message() {
                                    <span class="lock-msg">{ message }</span>
                                }
                            }
                        </button>
                    }
                }) }
            </div>
        </div>
    }
}
