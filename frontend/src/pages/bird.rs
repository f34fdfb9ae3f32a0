use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::bird_game::BirdGame;
use crate::pages::games::BirdQuery;
use crate::router::Route;

#[function_component(BirdGamePage)]
pub fn bird_game_page() -> Html {
    let location = use_location();
    let query = location
        .and_then(|l| l.query::<BirdQuery>().ok())
        .unwrap_or_default();

    html! {
        <div class="bird-game-page">
            <Link<Route> to={Route::Games}>{ "← Tilbake til spill" }</Link<Route>>
            <BirdGame emoji={query.emoji} />
        </div>
    }
}
