use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct QuickActionsProps {
    pub on_add_event: Callback<()>,
    pub on_view_all_events: Callback<()>,
    pub on_family_settings: Callback<()>,
}

#[function_component(QuickActions)]
pub fn quick_actions(props: &QuickActionsProps) -> Html {
    html! {
        <div class="quick-actions">
            <button class="action-button button-blue" onclick={props.on_add_event.reform(|_| ())}>
                { "Legg til hendelse" }
            </button>
            <button class="action-button button-green" onclick={props.on_view_all_events.reform(|_| ())}>
                { "Se alle hendelser" }
            </button>
            <button class="action-button button-purple" onclick={props.on_family_settings.reform(|_| ())}>
                { "Familieinnstillinger" }
            </button>
        </div>
    }
}
