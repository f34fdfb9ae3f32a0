use chrono::NaiveDate;
use shared::calendar::format_long;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub today: NaiveDate,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    html! {
        <header class="calendar-header">
            <div class="container">
                <h1 class="calendar-title">{ "Familiekalender" }</h1>
                <p class="header-date">{ format_long(props.today) }</p>
                <nav>
                    <Link<Route> to={Route::Home}>{ "Kalender" }</Link<Route>>
                    { " | " }
                    <Link<Route> to={Route::Games}>{ "Spill" }</Link<Route>>
                </nav>
            </div>
        </header>
    }
}
