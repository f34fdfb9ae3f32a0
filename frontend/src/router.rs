use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{bird::BirdGamePage, games::Games, home::Home, not_found::NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/games")]
    Games,
    #[at("/games/bird")]
    BirdGame,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <Home /> },
        Route::Games => html! { <Games /> },
        Route::BirdGame => html! { <BirdGamePage /> },
        Route::NotFound => html! { <NotFound /> },
    }
}
