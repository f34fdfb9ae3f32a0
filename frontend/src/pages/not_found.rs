use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="container">
            <div class="empty-state">
                <h2>{ "404 - Siden finnes ikke" }</h2>
                <p>{ "Siden du leter etter finnes ikke." }</p>
                <Link<Route> to={Route::Home}>
                    <button class="btn btn-primary">{ "Til kalenderen" }</button>
                </Link<Route>>
            </div>
        </div>
    }
}
