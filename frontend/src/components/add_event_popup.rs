use std::str::FromStr;

use chrono::NaiveDate;
use shared::family::FamilyMember;
use shared::forms::EventDraft;
use shared::models::{self, EventType};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::services::api::ApiService;

#[derive(Properties, PartialEq)]
pub struct AddEventPopupProps {
    /// Pre-filled date: the clicked day, or today.
    pub initial_date: NaiveDate,
    pub members: Vec<FamilyMember>,
    pub on_close: Callback<()>,
    pub on_event_added: Callback<models::Event>,
}

#[function_component(AddEventPopup)]
pub fn add_event_popup(props: &AddEventPopupProps) -> Html {
    let initial_date = props.initial_date;
    let draft = use_state(|| EventDraft::new(initial_date));
    let submitting = use_state(|| false);
    let error = use_state(|| None::<String>);

    let update = {
        let draft = draft.clone();
        move |edit: fn(&mut EventDraft, String)| {
            let draft = draft.clone();
            Callback::from(move |value: String| {
                let mut next = (*draft).clone();
                edit(&mut next, value);
                draft.set(next);
            })
        }
    };

    let on_title_input = update(|d, v| d.title = v)
        .reform(|e: InputEvent| e.target_unchecked_into::<HtmlInputElement>().value());
    let on_date_change = update(|d, v| d.date = v)
        .reform(|e: Event| e.target_unchecked_into::<HtmlInputElement>().value());
    let on_time_change = update(|d, v| d.time = v)
        .reform(|e: Event| e.target_unchecked_into::<HtmlInputElement>().value());
    let on_type_change = update(|d, v| {
        if let Ok(event_type) = EventType::from_str(&v) {
            d.event_type = event_type;
        }
    })
    .reform(|e: Event| e.target_unchecked_into::<HtmlSelectElement>().value());

    let on_toggle_attendee = update(|d, id| d.toggle_attendee(&id));

    let on_toggle_all = {
        let draft = draft.clone();
        let members = props.members.clone();
        Callback::from(move |_| {
            let mut next = (*draft).clone();
            next.toggle_all(&members);
            draft.set(next);
        })
    };

    let on_close = {
        let on_close = props.on_close.clone();
        let submitting = submitting.clone();
        Callback::from(move |_| {
            if !*submitting {
                on_close.emit(());
            }
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let submitting = submitting.clone();
        let error = error.clone();
        let on_event_added = props.on_event_added.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            let input = match draft.to_input() {
                Ok(input) => input,
                Err(err) => {
                    error.set(Some(err.to_string()));
                    return;
                }
            };

            submitting.set(true);
            error.set(None);
            let submitting = submitting.clone();
            let error = error.clone();
            let on_event_added = on_event_added.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match ApiService::create_event(&input).await {
                    Ok(event) => {
                        tracing::info!(event_id = %event.id, "event created");
                        on_event_added.emit(event);
                    }
                    Err(e) => {
                        tracing::error!("Failed to create event: {}", e);
                        error.set(Some(e));
                        submitting.set(false);
                    }
                }
            });
        })
    };

    let busy = *submitting;

    html! {
        <div class="popup-overlay">
            <div class="popup-container">
                <div class="popup-header">
                    <h2 class="popup-title">{ "Legg til ny hendelse" }</h2>
                    <button type="button" class="popup-close-button" onclick={on_close.clone()} disabled={busy}>
                        { "×" }
                    </button>
                </div>

                <form class="popup-form" onsubmit={on_submit}>
                    if let Some(err) = &*error {
                        <div class="error-message">{ err }</div>
                    }

                    <div class="form-group">
                        <label for="title" class="form-label">{ "Tittel *" }</label>
                        <input
                            type="text"
                            id="title"
                            class="form-input"
                            required=true
                            placeholder="Skriv inn hendelsens tittel"
                            value={draft.title.clone()}
                            oninput={on_title_input}
                            disabled={busy}
                        />
                    </div>

                    <div class="form-group">
                        <label for="type" class="form-label">{ "Type hendelse *" }</label>
                        <select id="type" class="form-select" onchange={on_type_change} disabled={busy}>
                            { for EventType::ALL.iter().map(|t| html! {
                                <option value={t.as_str()} selected={*t == draft.event_type}>{ t.label() }</option>
                            }) }
                        </select>
                    </div>

                    <div class="form-row">
                        <div class="form-group">
                            <label for="date" class="form-label">{ "Dato *" }</label>
                            <input
                                type="date"
                                id="date"
                                class="form-input"
                                required=true
                                value={draft.date.clone()}
                                onchange={on_date_change}
                                disabled={busy}
                            />
                        </div>
                        <div class="form-group">
                            <label for="time" class="form-label">{ "Tidspunkt *" }</label>
                            <input
                                type="time"
                                id="time"
                                class="form-input"
                                required=true
                                value={draft.time.clone()}
                                onchange={on_time_change}
                                disabled={busy}
                            />
                        </div>
                    </div>

                    <div class="form-group">
                        <div class="attendees-header">
                            <label class="form-label">{ "Deltakere" }</label>
                            <button type="button" class="select-all-btn" onclick={on_toggle_all} disabled={busy}>
                                { draft.select_all_label(&props.members) }
                            </button>
                        </div>
                        <div class="attendees-grid">
                            { for props.members.iter().map(|member| {
                                let selected = draft.is_attending(&member.id);
                                let id = member.id.clone();
                                let toggle = on_toggle_attendee.clone();
                                html! {
                                    <button
                                        key={member.id.clone()}
                                        type="button"
                                        class={classes!("attendee-button", selected.then_some("selected"))}
                                        onclick={Callback::from(move |_| toggle.emit(id.clone()))}
                                        disabled={busy}
                                    >
                                        <span class="attendee-checkmark">{ if selected { "✓" } else { "" } }</span>
                                        { member.avatar() }{ " " }{ &member.name }
                                    </button>
                                }
                            }) }
                        </div>
                        if !draft.attendees.is_empty() {
                            <div class="selected-count">{ draft.selected_count_label() }</div>
                        }
                    </div>

                    <div class="form-actions">
                        <button type="button" class="button-secondary" onclick={on_close} disabled={busy}>
                            { "Avbryt" }
                        </button>
                        <button type="submit" class="button-primary" disabled={busy}>
                            { if busy { "Lagrer..." } else { "Lagre hendelse" } }
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
