use anyhow::{bail, Context};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use reqwest::{Client, Response};
use shared::api::{ErrorResponse, EventInput, EventQuery, ListEventsResponse, ListUsersResponse};
use shared::attendees::render_attendees;
use shared::calendar::format_short;
use shared::family::default_family_members;
use shared::models::{Attendee, EventType};
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "calendar-cli")]
#[command(about = "CLI for the family calendar backend API")]
struct Cli {
    /// Backend server URL to connect to.
    #[arg(
        short,
        long,
        default_value = "http://localhost:8080",
        env = "CALENDAR_API_URL"
    )]
    base_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List, create and delete calendar events
    Events {
        #[command(subcommand)]
        action: EventAction,
    },
    /// Manage account holders
    Users {
        #[command(subcommand)]
        action: UserAction,
    },
}

#[derive(Subcommand)]
enum EventAction {
    /// List events, ordered by date and time
    List {
        /// First day to include (YYYY-MM-DD)
        #[arg(long)]
        from: Option<NaiveDate>,

        /// Last day to include (YYYY-MM-DD)
        #[arg(long)]
        to: Option<NaiveDate>,

        /// Only events of this type (family, work, school, appointment, sports, annet)
        #[arg(short = 't', long = "type", value_name = "TYPE")]
        event_type: Option<EventType>,

        #[arg(short, long, default_value_t = 1)]
        page: u32,

        #[arg(short, long, default_value_t = 10)]
        limit: u32,
    },

    /// Create a new event
    Create {
        title: String,

        /// Day of the event (YYYY-MM-DD)
        #[arg(short, long)]
        date: NaiveDate,

        /// Start time (HH:MM)
        #[arg(long)]
        time: String,

        #[arg(short = 't', long = "type", value_name = "TYPE", default_value = "family")]
        event_type: EventType,

        /// Attending family member id; repeat for several
        #[arg(short, long = "attendee", value_name = "MEMBER")]
        attendees: Vec<String>,

        #[arg(long)]
        location: Option<String>,
    },

    /// Delete an event by id
    Delete { id: Uuid },
}

#[derive(Subcommand)]
enum UserAction {
    /// List all users
    List,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let client = Client::new();

    match cli.command {
        Commands::Events { action } => handle_events(&client, &cli.base_url, action).await?,
        Commands::Users { action } => handle_users(&client, &cli.base_url, action).await?,
    }

    Ok(())
}

/// Turn a non-2xx response into an error carrying the server's message.
async fn check(response: Response) -> anyhow::Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    match response.json::<ErrorResponse>().await {
        Ok(ErrorResponse {
            error,
            details: Some(details),
        }) => bail!("{}: {} ({})", status, error, details),
        Ok(ErrorResponse { error, .. }) => bail!("{}: {}", status, error),
        Err(_) => bail!("{}", status),
    }
}

async fn handle_events(
    client: &Client,
    base_url: &str,
    action: EventAction,
) -> anyhow::Result<()> {
    let url = format!("{}/api/events", base_url);
    let members = default_family_members();

    match action {
        EventAction::List {
            from,
            to,
            event_type,
            page,
            limit,
        } => {
            let query = EventQuery {
                page: Some(page),
                limit: Some(limit),
                event_type,
                from,
                to,
            };
            let response = client
                .get(format!("{}?{}", url, query.to_query_string()))
                .send()
                .await
                .context("Failed to reach the calendar server")?;
            let list: ListEventsResponse = check(response).await?.json().await?;

            if list.events.is_empty() {
                println!("No events found.");
            }
            for event in &list.events {
                println!(
                    "[{}] {} {} {} ({})",
                    &event.id.to_string()[..8],
                    format_short(event.date),
                    event.time,
                    event.title,
                    event.event_type.label()
                );
                if !event.attendees.is_empty() {
                    println!("    {}", render_attendees(&members, &event.attendees));
                }
            }
            let p = list.pagination;
            println!("Page {}/{} ({} events)", p.page, p.total_pages, p.total_docs);
        }
        EventAction::Create {
            title,
            date,
            time,
            event_type,
            attendees,
            location,
        } => {
            let input = EventInput {
                title,
                date,
                time,
                event_type,
                attendees: attendees.into_iter().map(Attendee::new).collect(),
                description: None,
                location,
                reminder: false,
            };
            let response = client.post(&url).json(&input).send().await?;
            let event: shared::models::Event = check(response).await?.json().await?;
            println!(
                "Created event: [{}] {} {}",
                &event.id.to_string()[..8],
                format_short(event.date),
                event.title
            );
        }
        EventAction::Delete { id } => {
            let response = client.delete(format!("{}/{}", url, id)).send().await?;
            check(response).await?;
            println!("Deleted event {}", id);
        }
    }

    Ok(())
}

async fn handle_users(client: &Client, base_url: &str, action: UserAction) -> anyhow::Result<()> {
    let url = format!("{}/api/users", base_url);

    match action {
        UserAction::List => {
            let response = client.get(&url).send().await?;
            let list: ListUsersResponse = check(response).await?.json().await?;
            if list.users.is_empty() {
                println!("No users found.");
            }
            for user in list.users {
                println!("[{}] {} <{}>", &user.id.to_string()[..8], user.name, user.email);
            }
        }
    }

    Ok(())
}
