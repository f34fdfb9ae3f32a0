use chrono::{Local, NaiveDate};
use shared::api::EventQuery;
use shared::calendar::{events_on, first_of_month, next_month, previous_month, GridWindow, MonthView};
use shared::clock::Clock;
use shared::family::FamilyMember;
use shared::models::Event;
use yew::prelude::*;

use crate::components::add_event_popup::AddEventPopup;
use crate::components::calendar_grid::CalendarGrid;
use crate::components::character_customization_popup::CharacterCustomizationPopup;
use crate::components::clicked_date_popup::ClickedDatePopup;
use crate::components::events_panel::EventsPanel;
use crate::components::quick_actions::QuickActions;
use crate::components::view_all_events_popup::ViewAllEventsPopup;
use crate::hooks::use_latest_request::use_latest_request;
use crate::services::api::ApiService;
use crate::services::roster::{load_roster, save_roster};

/// At most one popup is open at a time.
#[derive(Clone, Copy, PartialEq)]
enum Popup {
    Closed,
    AddEvent(NaiveDate),
    ClickedDate(NaiveDate),
    ViewAll,
    Customize,
}

/// Days to load: the visible grid plus today and tomorrow for the events
/// panel, even when another month is displayed.
fn fetch_range(displayed: NaiveDate, today: NaiveDate, tomorrow: NaiveDate) -> (NaiveDate, NaiveDate) {
    let window = GridWindow::for_month(displayed);
    (window.first.min(today), window.last.max(tomorrow))
}

#[function_component(Home)]
pub fn home() -> Html {
    let clock = use_context::<Clock>().unwrap_or_else(|| Clock::new(Local::now().naive_local()));
    let today = clock.today();
    let tomorrow = clock.tomorrow().unwrap_or(today);

    let displayed = use_state(|| first_of_month(today));
    let roster = use_state(load_roster);
    let events = use_state(Vec::<Event>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let refresh_trigger = use_state(|| 0u32);
    let popup = use_state(|| Popup::Closed);
    let generation = use_latest_request();

    let range = fetch_range(*displayed, today, tomorrow);

    {
        let events = events.clone();
        let loading = loading.clone();
        let error = error.clone();

        use_effect_with((range, *refresh_trigger), move |deps| {
            let ((from, to), _) = *deps;
            let ticket = generation.borrow_mut().begin();
            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                let result = ApiService::list_all_events(EventQuery::between(from, to)).await;
                if !generation.borrow().is_current(ticket) {
                    tracing::debug!(%from, %to, "dropping stale events response");
                    return;
                }
                match result {
                    Ok(data) => {
                        events.set(data);
                        error.set(None);
                    }
                    Err(e) => {
                        tracing::error!("Failed to fetch events: {}", e);
                        error.set(Some(format!("Kunne ikke hente hendelser: {}", e)));
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    let refresh = {
        let refresh_trigger = refresh_trigger.clone();
        Callback::from(move |_: ()| refresh_trigger.set(*refresh_trigger + 1))
    };

    let on_previous_month = {
        let displayed = displayed.clone();
        Callback::from(move |_| displayed.set(previous_month(*displayed)))
    };
    let on_next_month = {
        let displayed = displayed.clone();
        Callback::from(move |_| displayed.set(next_month(*displayed)))
    };
    let on_today = {
        let displayed = displayed.clone();
        Callback::from(move |_| displayed.set(first_of_month(today)))
    };

    let open = |target: Popup| {
        let popup = popup.clone();
        Callback::from(move |_: ()| popup.set(target))
    };
    let on_close = open(Popup::Closed);

    let on_date_click = {
        let popup = popup.clone();
        Callback::from(move |date: NaiveDate| popup.set(Popup::ClickedDate(date)))
    };
    let on_add_for_date = {
        let popup = popup.clone();
        Callback::from(move |date: NaiveDate| popup.set(Popup::AddEvent(date)))
    };

    let on_event_added = {
        let popup = popup.clone();
        let refresh = refresh.clone();
        Callback::from(move |_: Event| {
            popup.set(Popup::Closed);
            refresh.emit(());
        })
    };

    let on_roster_saved = {
        let roster = roster.clone();
        let popup = popup.clone();
        Callback::from(move |members: Vec<FamilyMember>| {
            if let Err(e) = save_roster(&members) {
                tracing::error!("Failed to save family roster: {}", e);
                gloo::dialogs::alert("Kunne ikke lagre endringene");
            }
            roster.set(members);
            popup.set(Popup::Closed);
        })
    };

    let month = MonthView::build(*displayed, today, &events);
    let members = (*roster).clone();

    let popup_view = match *popup {
        Popup::Closed => html! {},
        Popup::AddEvent(date) => html! {
            <AddEventPopup
                initial_date={date}
                members={members.clone()}
                on_close={on_close.clone()}
                {on_event_added}
            />
        },
        Popup::ClickedDate(date) => html! {
            <ClickedDatePopup
                {date}
                {today}
                events={(*events).clone()}
                members={members.clone()}
                on_close={on_close.clone()}
                on_add_event={on_add_for_date}
                on_refresh={refresh.clone()}
            />
        },
        Popup::ViewAll => html! {
            <ViewAllEventsPopup
                {today}
                members={members.clone()}
                on_close={on_close.clone()}
                on_refresh={refresh.clone()}
            />
        },
        Popup::Customize => html! {
            <CharacterCustomizationPopup
                members={members.clone()}
                on_close={on_close.clone()}
                on_save={on_roster_saved}
            />
        },
    };

    html! {
        <div class="container">
            <div class="main-grid">
                <CalendarGrid
                    {month}
                    members={members.clone()}
                    {on_previous_month}
                    {on_today}
                    {on_next_month}
                    {on_date_click}
                />
                <div class="sidebar">
                    <EventsPanel
                        todays_events={events_on(&events, today)}
                        tomorrows_events={events_on(&events, tomorrow)}
                        members={members.clone()}
                        loading={*loading}
                        error={(*error).clone()}
                        on_retry={refresh}
                    />
                    <QuickActions
                        on_add_event={open(Popup::AddEvent(today))}
                        on_view_all_events={open(Popup::ViewAll)}
                        on_family_settings={open(Popup::Customize)}
                    />
                </div>
            </div>
            { popup_view }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_fetch_range_covers_current_grid() {
        let today = date(2026, 10, 18);
        let (from, to) = fetch_range(date(2026, 10, 1), today, date(2026, 10, 19));
        assert_eq!(from, date(2026, 9, 27));
        assert_eq!(to, date(2026, 11, 7));
    }

    #[test]
    fn test_fetch_range_stretches_to_today_from_other_month() {
        let today = date(2026, 10, 18);
        let (from, to) = fetch_range(date(2026, 12, 1), today, date(2026, 10, 19));
        assert_eq!(from, today);
        assert!(to > date(2026, 12, 31));
    }
}
