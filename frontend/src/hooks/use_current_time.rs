use std::rc::Rc;

use chrono::{Local, NaiveDateTime};
use gloo::timers::callback::{Interval, Timeout};
use shared::clock::{millis_until_midnight, Clock, TICK_INTERVAL_MS};
use yew::prelude::*;

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

#[derive(PartialEq)]
struct CurrentTime {
    clock: Clock,
}

impl Reducible for CurrentTime {
    type Action = NaiveDateTime;

    fn reduce(self: Rc<Self>, now: NaiveDateTime) -> Rc<Self> {
        let mut clock = self.clock;
        clock.advance(now);
        Rc::new(Self { clock })
    }
}

/// Local "now", refreshed every minute and right after midnight.
#[hook]
pub fn use_current_time() -> Clock {
    let state = use_reducer(|| CurrentTime {
        clock: Clock::new(local_now()),
    });

    {
        let dispatcher = state.dispatcher();
        use_effect_with((), move |_| {
            let interval = Interval::new(TICK_INTERVAL_MS, move || dispatcher.dispatch(local_now()));
            move || drop(interval)
        });
    }

    // Re-armed every time the day flips.
    {
        let dispatcher = state.dispatcher();
        let today = state.clock.today();
        use_effect_with(today, move |_| {
            let delay = millis_until_midnight(local_now());
            let timeout = Timeout::new(delay, move || dispatcher.dispatch(local_now()));
            move || drop(timeout)
        });
    }

    state.clock
}
