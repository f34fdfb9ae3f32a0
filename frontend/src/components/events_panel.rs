use shared::family::FamilyMember;
use shared::models::Event;
use yew::prelude::*;

use crate::components::events_list::EventsList;

#[derive(Properties, PartialEq)]
pub struct EventsPanelProps {
    pub todays_events: Vec<Event>,
    pub tomorrows_events: Vec<Event>,
    pub members: Vec<FamilyMember>,
    pub loading: bool,
    pub error: Option<String>,
    pub on_retry: Callback<()>,
}

#[function_component(EventsPanel)]
pub fn events_panel(props: &EventsPanelProps) -> Html {
    html! {
        <div class="events-card">
            <h2 class="card-title">{ "Kommende hendelser" }</h2>

            <div class="events-section">
                <h3 class="section-title">{ "I dag" }</h3>
                <div class="events-list">
                    <EventsList
                        events={props.todays_events.clone()}
                        members={props.members.clone()}
                        loading={props.loading}
                        error={props.error.clone()}
                        on_retry={props.on_retry.clone()}
                        empty_message="Ingen hendelser planlagt for i dag"
                    />
                </div>
            </div>

            <div class="events-section">
                <h3 class="section-title">{ "I morgen" }</h3>
                <div class="events-list">
                    <EventsList
                        events={props.tomorrows_events.clone()}
                        members={props.members.clone()}
                        loading={props.loading}
                        error={props.error.clone()}
                        on_retry={props.on_retry.clone()}
                        empty_message="Ingen hendelser planlagt for i morgen"
                    />
                </div>
            </div>
        </div>
    }
}
