use std::rc::Rc;

use gloo::events::EventListener;
use gloo::timers::callback::Interval;
use shared::flappy::{
    FlappyGame, Phase, TickOutcome, BIRD_SIZE, BIRD_X, GAME_HEIGHT, GAME_WIDTH, PIPE_WIDTH, TICK_MS,
};
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

const DEFAULT_BIRD: &str = "🐦";

enum GameAction {
    Flap,
    Tick,
}

#[derive(PartialEq)]
struct GameState {
    game: FlappyGame,
    /// Score of the round that just ended, shown until the next flap.
    last_score: Option<u32>,
}

impl Reducible for GameState {
    type Action = GameAction;

    fn reduce(self: Rc<Self>, action: GameAction) -> Rc<Self> {
        let mut game = self.game.clone();
        let mut last_score = self.last_score;
        match action {
            GameAction::Flap => {
                game.flap();
                last_score = None;
            }
            GameAction::Tick => {
                let mut random = js_sys::Math::random;
                match game.tick(&mut random) {
                    TickOutcome::Idle => return self,
                    TickOutcome::Running => {}
                    TickOutcome::GameOver { score } => last_score = Some(score),
                }
            }
        }
        Rc::new(Self { game, last_score })
    }
}

#[derive(Properties, PartialEq)]
pub struct BirdGameProps {
    /// Replaces the bird when set.
    #[prop_or_default]
    pub emoji: Option<String>,
}

#[function_component(BirdGame)]
pub fn bird_game(props: &BirdGameProps) -> Html {
    let state = use_reducer(|| GameState {
        game: FlappyGame::new(),
        last_score: None,
    });

    {
        let dispatcher = state.dispatcher();
        use_effect_with((), move |_| {
            let interval = Interval::new(TICK_MS, move || dispatcher.dispatch(GameAction::Tick));
            move || drop(interval)
        });
    }

    {
        let dispatcher = state.dispatcher();
        use_effect_with((), move |_| {
            let listener = web_sys::window().map(|window| {
                EventListener::new(&window, "keydown", move |event| {
                    if let Some(key) = event.dyn_ref::<KeyboardEvent>() {
                        if key.code() == "Space" {
                            key.prevent_default();
                            dispatcher.dispatch(GameAction::Flap);
                        }
                    }
                })
            });
            move || drop(listener)
        });
    }

    let on_click = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_| dispatcher.dispatch(GameAction::Flap))
    };

    let game = &state.game;
    let bird = props
        .emoji
        .as_deref()
        .filter(|e| !e.is_empty())
        .unwrap_or(DEFAULT_BIRD);

    html! {
        <div class="gamewindow-container">
            <div
                class="game-board"
                style={format!("width: {}px; height: {}px", GAME_WIDTH, GAME_HEIGHT)}
                onclick={on_click}
            >
                <div
                    class="bird"
                    style={format!(
                        "left: {}px; top: {}px; width: {}px; height: {}px",
                        BIRD_X, game.bird_y(), BIRD_SIZE, BIRD_SIZE
                    )}
                >
                    { bird }
                </div>
                { for game.pipes().iter().flat_map(|pipe| [
                    html! {
                        <div
                            key={format!("top-{}", pipe.id)}
                            class="pipe pipe-top"
                            style={format!("left: {}px; top: 0; width: {}px; height: {}px", pipe.x, PIPE_WIDTH, pipe.top_height)}
                        />
                    },
                    html! {
                        <div
                            key={format!("bottom-{}", pipe.id)}
                            class="pipe pipe-bottom"
                            style={format!(
                                "left: {}px; top: {}px; width: {}px; height: {}px",
                                pipe.x, pipe.gap_bottom(), PIPE_WIDTH, pipe.bottom_height()
                            )}
                        />
                    },
                ]) }
                <div class="score">{ format!("Score: {}  Best: {}", game.score(), game.best()) }</div>
                if game.phase() == Phase::Ready {
                    <div class="game-message">
                        if let Some(score) = state.last_score {
                            <p>{ format!("Game over! Score: {}", score) }</p>
                        }
                        <p>{ "Press space to flap" }</p>
                    </div>
                }
            </div>
        </div>
    }
}
