use shared::attendees::render_attendees;
use shared::family::FamilyMember;
use shared::models::Event;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct EventsListProps {
    pub events: Vec<Event>,
    pub members: Vec<FamilyMember>,
    pub loading: bool,
    pub error: Option<String>,
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
    pub empty_message: AttrValue,
}

#[function_component(EventsList)]
pub fn events_list(props: &EventsListProps) -> Html {
    if props.loading {
        return html! { <p class="event-details">{ "Laster hendelser..." }</p> };
    }

    if let Some(err) = &props.error {
        return html! {
            <div>
                <p class="event-details error">{ err }</p>
                if let Some(on_retry) = &props.on_retry {
                    <button class="nav-button nav-button-today" onclick={on_retry.reform(|_| ())}>
                        { "Prøv igjen" }
                    </button>
                }
            </div>
        };
    }

    if props.events.is_empty() {
        return html! { <p class="event-details">{ props.empty_message.clone() }</p> };
    }

    html! {
        <>
            { for props.events.iter().map(|event| {
                let attendees = render_attendees(&props.members, &event.attendees);
                html! {
                    <div key={event.id.to_string()} class={classes!("event-item", event.event_type.css_class())}>
                        <p class="event-title">{ &event.title }</p>
                        <p class="event-details">
                            { &event.time }
                            if !attendees.is_empty() {
                                { format!(" - {}", attendees) }
                            }
                        </p>
                    </div>
                }
            }) }
        </>
    }
}
