mod components;
mod hooks;
mod pages;
mod router;
mod services;

use yew::prelude::*;
use yew_router::BrowserRouter;

use crate::hooks::use_current_time::use_current_time;
use crate::router::{switch, Route};

#[function_component(App)]
fn app() -> Html {
    let clock = use_current_time();

    html! {
        <BrowserRouter>
            <div id="app">
                <components::header::Header today={clock.today()} />
                <ContextProvider<shared::clock::Clock> context={clock}>
                    <yew_router::Switch<Route> render={switch} />
                </ContextProvider<shared::clock::Clock>>
            </div>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize tracing
    tracing_wasm::set_as_global_default();

    yew::Renderer::<App>::new().render();
}
