use chrono::{Datelike, NaiveDate};
use shared::calendar::{count_events, format_long, GridCell};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CalendarDateCellProps {
    pub cell: GridCell,
    /// One dot per attending family member.
    pub member_colors: Vec<String>,
    pub on_click: Callback<NaiveDate>,
}

#[function_component(CalendarDateCell)]
pub fn calendar_date_cell(props: &CalendarDateCellProps) -> Html {
    let hovered = use_state(|| false);
    let cell = &props.cell;
    let event_count = cell.events.len();

    let onclick = {
        let on_click = props.on_click.clone();
        let date = cell.date;
        Callback::from(move |_| on_click.emit(date))
    };
    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_| hovered.set(false))
    };

    let title = if event_count > 0 {
        format!("{} - {}", format_long(cell.date), count_events(event_count))
    } else {
        format_long(cell.date)
    };

    html! {
        <div
            class={classes!(
                "calendar-date",
                (!cell.in_current_month).then_some("other-month"),
                cell.is_today.then_some("today"),
                (event_count > 0).then_some("has-events"),
            )}
            {onclick}
            {onmouseenter}
            {onmouseleave}
            {title}
        >
            <span class="date-number">{ cell.date.day().to_string() }</span>
            if event_count > 0 {
                <div class="event-dots-container">
                    { for props.member_colors.iter().enumerate().map(|(i, color)| html! {
                        <div
                            key={i}
                            class="event-dot"
                            style={format!("background-color: {}", color)}
                        />
                    }) }
                </div>
            }
            if *hovered && event_count > 0 {
                <div class="event-count-overlay">{ event_count.to_string() }</div>
            }
        </div>
    }
}
