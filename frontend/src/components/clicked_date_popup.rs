use chrono::NaiveDate;
use shared::attendees::render_attendees;
use shared::calendar::{count_events, events_on, format_long, is_past, DayLabel};
use shared::family::FamilyMember;
use shared::models::Event;
use uuid::Uuid;
use yew::prelude::*;

use crate::services::api::ApiService;

pub const DELETE_CONFIRMATION: &str = "Er du sikker på at du vil slette denne hendelsen?";

#[derive(Properties, PartialEq)]
pub struct ClickedDatePopupProps {
    pub date: NaiveDate,
    pub today: NaiveDate,
    /// Loaded events; only those on `date` are shown.
    pub events: Vec<Event>,
    pub members: Vec<FamilyMember>,
    pub on_close: Callback<()>,
    pub on_add_event: Callback<NaiveDate>,
    pub on_refresh: Callback<()>,
}

#[function_component(ClickedDatePopup)]
pub fn clicked_date_popup(props: &ClickedDatePopupProps) -> Html {
    let deleting = use_state(|| None::<Uuid>);

    let day_events = events_on(&props.events, props.date);
    let past = is_past(props.date, props.today);

    let on_delete = {
        let deleting = deleting.clone();
        let on_refresh = props.on_refresh.clone();
        Callback::from(move |id: Uuid| {
            if !gloo::dialogs::confirm(DELETE_CONFIRMATION) {
                return;
            }
            deleting.set(Some(id));
            let deleting = deleting.clone();
            let on_refresh = on_refresh.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match ApiService::delete_event(id).await {
                    Ok(()) => {
                        tracing::info!(event_id = %id, "event deleted");
                        on_refresh.emit(());
                    }
                    Err(e) => {
                        tracing::error!("Failed to delete event {}: {}", id, e);
                        gloo::dialogs::alert("Kunne ikke slette hendelsen");
                    }
                }
                deleting.set(None);
            });
        })
    };

    let on_add = {
        let on_add_event = props.on_add_event.clone();
        let date = props.date;
        Callback::from(move |_| on_add_event.emit(date))
    };

    html! {
        <div class="popup-overlay">
            <div class="popup-container">
                <div class="popup-header">
                    <div class="header-content">
                        <h2 class="popup-title">{ format_long(props.date) }</h2>
                        <div class="date-badge">{ DayLabel::of(props.date, props.today).text() }</div>
                    </div>
                    <button type="button" class="popup-close-button" onclick={props.on_close.reform(|_| ())}>
                        { "×" }
                    </button>
                </div>

                <div class="popup-content">
                    if day_events.is_empty() {
                        <div class="empty-state">
                            <div class="empty-icon">{ "📅" }</div>
                            <h3 class="empty-title">{ "Ingen hendelser planlagt" }</h3>
                            <p class="empty-text">{ "Det er ingen hendelser planlagt for denne dagen." }</p>
                        </div>
                    } else {
                        <div class="events-list">
                            <div class="events-header">
                                <h3 class="events-count">{ count_events(day_events.len()) }</h3>
                            </div>
                            <div class="events-container">
                                { for day_events.iter().map(|event| {
                                    let id = event.id;
                                    let busy = *deleting == Some(id);
                                    let attendees = render_attendees(&props.members, &event.attendees);
                                    let delete = on_delete.clone();
                                    html! {
                                        <div
                                            key={id.to_string()}
                                            class={classes!("event-item", event.event_type.css_class(), past.then_some("past-event"))}
                                        >
                                            <div class="event-main">
                                                <div class="event-header">
                                                    <h4 class="event-title">{ &event.title }</h4>
                                                    <span class="event-type-badge">{ event.event_type.label() }</span>
                                                </div>
                                                <div class="event-details">
                                                    <div class="event-detail">
                                                        <span class="detail-icon">{ "🕐" }</span>
                                                        <span class="detail-text">{ &event.time }</span>
                                                    </div>
                                                    if !attendees.is_empty() {
                                                        <div class="event-detail">
                                                            <span class="detail-icon">{ "👥" }</span>
                                                            <span class="detail-text">{ attendees }</span>
                                                        </div>
                                                    }
                                                </div>
                                            </div>
                                            <div class="event-actions">
                                                <button
                                                    class="delete-btn"
                                                    title="Slett hendelse"
                                                    disabled={busy}
                                                    onclick={Callback::from(move |_| delete.emit(id))}
                                                >
                                                    { if busy { "⏳" } else { "🗑️" } }
                                                </button>
                                            </div>
                                        </div>
                                    }
                                }) }
                            </div>
                        </div>
                    }
                </div>

                <div class="popup-footer">
                    <button class="add-event-btn" onclick={on_add}>
                        <span class="btn-icon">{ "➕" }</span>
                        { "Legg til hendelse" }
                    </button>
                    <button class="close-btn" onclick={props.on_close.reform(|_| ())}>{ "Lukk" }</button>
                </div>
            </div>
        </div>
    }
}
