use chrono::NaiveDate;
use shared::calendar::{member_colors_for_date, MonthView, WEEKDAY_HEADERS};
use shared::family::FamilyMember;
use yew::prelude::*;

use crate::components::calendar_date_cell::CalendarDateCell;
use crate::components::calendar_navigation::CalendarNavigation;

#[derive(Properties, PartialEq)]
pub struct CalendarGridProps {
    pub month: MonthView,
    pub members: Vec<FamilyMember>,
    pub on_previous_month: Callback<()>,
    pub on_today: Callback<()>,
    pub on_next_month: Callback<()>,
    pub on_date_click: Callback<NaiveDate>,
}

#[function_component(CalendarGrid)]
pub fn calendar_grid(props: &CalendarGridProps) -> Html {
    let month = &props.month;

    html! {
        <div class="calendar-card">
            <CalendarNavigation
                title={month.title()}
                on_previous_month={props.on_previous_month.clone()}
                on_today={props.on_today.clone()}
                on_next_month={props.on_next_month.clone()}
            />
            <div class="calendar-header-row">
                { for WEEKDAY_HEADERS.iter().map(|day| html! {
                    <div key={*day} class="calendar-day-header">{ *day }</div>
                }) }
            </div>
            <div class="calendar-dates">
                { for month.cells.iter().map(|cell| {
                    let colors = member_colors_for_date(&cell.events, cell.date, &props.members);
                    html! {
                        <CalendarDateCell
                            key={cell.date.to_string()}
                            cell={cell.clone()}
                            member_colors={colors}
                            on_click={props.on_date_click.clone()}
                        />
                    }
                }) }
            </div>
        </div>
    }
}
