use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CalendarNavigationProps {
    pub title: AttrValue,
    pub on_previous_month: Callback<()>,
    pub on_today: Callback<()>,
    pub on_next_month: Callback<()>,
}

#[function_component(CalendarNavigation)]
pub fn calendar_navigation(props: &CalendarNavigationProps) -> Html {
    html! {
        <div class="calendar-nav">
            <h2 class="card-title">{ props.title.clone() }</h2>
            <div class="nav-buttons">
                <button class="nav-button nav-button-prev" onclick={props.on_previous_month.reform(|_| ())}>
                    { "←" }
                </button>
                <button class="nav-button nav-button-today" onclick={props.on_today.reform(|_| ())}>
                    { "I dag" }
                </button>
                <button class="nav-button nav-button-next" onclick={props.on_next_month.reform(|_| ())}>
                    { "→" }
                </button>
            </div>
        </div>
    }
}
