pub mod use_current_time;
pub mod use_latest_request;
