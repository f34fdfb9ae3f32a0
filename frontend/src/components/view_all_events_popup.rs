use std::str::FromStr;

use chrono::NaiveDate;
use shared::api::EventQuery;
use shared::attendees::{matches_search, summarize_attendees};
use shared::calendar::{count_events, format_long, format_short, group_by_date, is_past};
use shared::family::FamilyMember;
use shared::models::{self, EventType};
use uuid::Uuid;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::clicked_date_popup::DELETE_CONFIRMATION;
use crate::hooks::use_latest_request::use_latest_request;
use crate::services::api::ApiService;

#[derive(Properties, PartialEq)]
pub struct ViewAllEventsPopupProps {
    pub today: NaiveDate,
    pub members: Vec<FamilyMember>,
    pub on_close: Callback<()>,
    /// Tells the calendar to reload after a deletion.
    pub on_refresh: Callback<()>,
}

/// Server-side part of the filters; the search term is applied locally.
#[derive(Clone, Default, PartialEq)]
struct Filters {
    event_type: Option<EventType>,
    from: String,
    to: String,
}

impl Filters {
    fn query(&self) -> EventQuery {
        EventQuery {
            event_type: self.event_type,
            from: parse_date(&self.from),
            to: parse_date(&self.to),
            ..EventQuery::default()
        }
    }

    fn is_active(&self) -> bool {
        self.event_type.is_some() || !self.from.is_empty() || !self.to.is_empty()
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

#[function_component(ViewAllEventsPopup)]
pub fn view_all_events_popup(props: &ViewAllEventsPopupProps) -> Html {
    let events = use_state(Vec::<models::Event>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let filters = use_state(Filters::default);
    let search = use_state(String::new);
    let refresh_trigger = use_state(|| 0u32);
    let generation = use_latest_request();

    {
        let events = events.clone();
        let loading = loading.clone();
        let error = error.clone();
        let query = filters.query();

        use_effect_with(((*filters).clone(), *refresh_trigger), move |_| {
            let ticket = generation.borrow_mut().begin();
            loading.set(true);
            error.set(None);
            wasm_bindgen_futures::spawn_local(async move {
                let result = ApiService::list_all_events(query).await;
                if !generation.borrow().is_current(ticket) {
                    tracing::debug!("dropping stale events response");
                    return;
                }
                match result {
                    Ok(data) => events.set(data),
                    Err(e) => {
                        tracing::error!("Failed to fetch events: {}", e);
                        error.set(Some(e));
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    let on_retry = {
        let refresh_trigger = refresh_trigger.clone();
        Callback::from(move |_| refresh_trigger.set(*refresh_trigger + 1))
    };

    let on_search_input = {
        let search = search.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            search.set(input.value());
        })
    };

    let on_type_change = {
        let filters = filters.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*filters).clone();
            next.event_type = EventType::from_str(&select.value()).ok();
            filters.set(next);
        })
    };

    let on_from_change = {
        let filters = filters.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*filters).clone();
            next.from = input.value();
            filters.set(next);
        })
    };

    let on_to_change = {
        let filters = filters.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*filters).clone();
            next.to = input.value();
            filters.set(next);
        })
    };

    let on_reset = {
        let filters = filters.clone();
        let search = search.clone();
        Callback::from(move |_| {
            filters.set(Filters::default());
            search.set(String::new());
        })
    };

    // The row disappears right away; a failed delete reloads the list.
    let on_delete = {
        let events = events.clone();
        let refresh_trigger = refresh_trigger.clone();
        let on_refresh = props.on_refresh.clone();
        Callback::from(move |id: Uuid| {
            if !gloo::dialogs::confirm(DELETE_CONFIRMATION) {
                return;
            }
            events.set(events.iter().filter(|e| e.id != id).cloned().collect());
            let refresh_trigger = refresh_trigger.clone();
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
                        refresh_trigger.set(*refresh_trigger + 1);
                    }
                }
            });
        })
    };

    let visible: Vec<models::Event> = events
        .iter()
        .filter(|e| matches_search(e, &search, &props.members))
        .cloned()
        .collect();
    let total = visible.len();
    let groups = group_by_date(&visible);
    let filtered = filters.is_active() || !search.trim().is_empty();

    let body = if *loading {
        html! {
            <div class="loading-state"><p>{ "Laster hendelser..." }</p></div>
        }
    } else if let Some(err) = &*error {
        html! {
            <div class="error-state">
                <p class="error-text">{ err }</p>
                <button class="retry-btn" onclick={on_retry}>{ "Prøv igjen" }</button>
            </div>
        }
    } else if groups.is_empty() {
        html! {
            <div class="empty-state">
                <p>{ "Ingen hendelser funnet" }</p>
                if filtered {
                    <p class="empty-subtitle">{ "Prøv å justere filtrene dine" }</p>
                }
            </div>
        }
    } else {
        html! {
            <div class="events-list">
                { for groups.iter().map(|(date, day_events)| {
                    let past = is_past(*date, props.today);
                    html! {
                        <div key={date.to_string()} class="date-group">
                            <div class={classes!("date-header", past.then_some("past"))}>
                                <h3 class="date-title">{ format_long(*date) }</h3>
                                <span class="event-count">{ count_events(day_events.len()) }</span>
                            </div>
                            <div class="day-events">
                                { for day_events.iter().map(|event| {
                                    let id = event.id;
                                    let delete = on_delete.clone();
                                    html! {
                                        <div
                                            key={id.to_string()}
                                            class={classes!("event-card", event.event_type.css_class(), past.then_some("past-event"))}
                                        >
                                            <div class="event-main">
                                                <div class="event-header">
                                                    <h4 class="event-title">{ &event.title }</h4>
                                                    <span class="event-type-badge">{ event.event_type.label() }</span>
                                                </div>
                                                <div class="event-details">
                                                    <span class="event-time">{ format!("🕐 {}", event.time) }</span>
                                                    <span class="event-attendees">
                                                        { format!("👥 {}", summarize_attendees(&props.members, &event.attendees)) }
                                                    </span>
                                                    <span class="event-date">{ format!("📅 {}", format_short(event.date)) }</span>
                                                </div>
                                            </div>
                                            <div class="event-actions">
                                                <button
                                                    class="delete-btn"
                                                    title="Slett hendelse"
                                                    onclick={Callback::from(move |_| delete.emit(id))}
                                                >
                                                    { "🗑️" }
                                                </button>
                                            </div>
                                        </div>
                                    }
                                }) }
                            </div>
                        </div>
                    }
                }) }
            </div>
        }
    };

    html! {
        <div class="popup-overlay">
            <div class="popup-container large">
                <div class="popup-header">
                    <h2 class="popup-title">{ "Alle hendelser" }</h2>
                    <button type="button" class="popup-close-button" onclick={props.on_close.reform(|_| ())}>
                        { "×" }
                    </button>
                </div>

                <div class="filters-section">
                    <div class="filters-row">
                        <div class="filter-group">
                            <label class="filter-label">{ "Søk:" }</label>
                            <input
                                type="text"
                                class="filter-input"
                                placeholder="Søk etter tittel eller deltakere"
                                value={(*search).clone()}
                                oninput={on_search_input}
                            />
                        </div>
                        <div class="filter-group">
                            <label class="filter-label">{ "Type:" }</label>
                            <select class="filter-select" onchange={on_type_change}>
                                <option value="alle" selected={filters.event_type.is_none()}>{ "Alle typer" }</option>
                                { for EventType::ALL.iter().map(|t| html! {
                                    <option value={t.as_str()} selected={filters.event_type == Some(*t)}>{ t.label() }</option>
                                }) }
                            </select>
                        </div>
                    </div>
                    <div class="filters-row">
                        <div class="filter-group">
                            <label class="filter-label">{ "Fra dato:" }</label>
                            <input type="date" class="filter-input" value={filters.from.clone()} onchange={on_from_change} />
                        </div>
                        <div class="filter-group">
                            <label class="filter-label">{ "Til dato:" }</label>
                            <input type="date" class="filter-input" value={filters.to.clone()} onchange={on_to_change} />
                        </div>
                        <div class="filter-group">
                            <button class="clear-filters-btn" onclick={on_reset}>{ "Tilbakestill" }</button>
                        </div>
                    </div>
                </div>

                <div class="events-content">{ body }</div>

                <div class="popup-footer">
                    <div class="events-summary">{ format!("Totalt: {}", count_events(total)) }</div>
                    <button class="close-btn" onclick={props.on_close.reform(|_| ())}>{ "Lukk" }</button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filters_build_query() {
        let filters = Filters {
            event_type: Some(EventType::School),
            from: "2026-10-01".to_string(),
            to: String::new(),
        };
        let query = filters.query();
        assert_eq!(query.event_type, Some(EventType::School));
        assert_eq!(query.from, NaiveDate::from_ymd_opt(2026, 10, 1));
        assert_eq!(query.to, None);
        assert!(filters.is_active());
    }

    #[test]
    fn test_unparseable_dates_are_ignored() {
        let filters = Filters {
            from: "18.10.2026".to_string(),
            ..Filters::default()
        };
        assert_eq!(filters.query().from, None);
        assert!(!Filters::default().is_active());
    }
}
