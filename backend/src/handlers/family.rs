use axum::Json;
use shared::family::{default_family_members, FamilyMember};

/// The default roster; attendee names on events must be one of these ids.
pub async fn list_family_members() -> Json<Vec<FamilyMember>> {
    Json(default_family_members())
}
