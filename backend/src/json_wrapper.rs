//! Typed JSON stored in TEXT columns.

use diesel::deserialize::{FromSql, FromSqlRow};
use diesel::expression::AsExpression;
use diesel::pg::{Pg, PgValue};
use diesel::serialize::{IsNull, Output, ToSql};
use diesel::sql_types::Text;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use std::ops::Deref;

/// Serializes `T` to a JSON string on write and parses it back on read.
///
/// The events table keeps its attendee list this way:
///
/// ```ignore
/// pub struct EventRow {
///     pub attendees: JsonWrapper<Vec<Attendee>>,
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, AsExpression, FromSqlRow)]
#[serde(transparent)]
#[diesel(sql_type = Text)]
pub struct JsonWrapper<T>(pub T);

impl<T> JsonWrapper<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for JsonWrapper<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> From<T> for JsonWrapper<T> {
    fn from(value: T) -> Self {
        JsonWrapper(value)
    }
}

impl<T> FromSql<Text, Pg> for JsonWrapper<T>
where
    T: DeserializeOwned,
{
    fn from_sql(bytes: PgValue<'_>) -> diesel::deserialize::Result<Self> {
        let s = <String as FromSql<Text, Pg>>::from_sql(bytes)?;
        let value: T = serde_json::from_str(&s)
            .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;
        Ok(JsonWrapper(value))
    }
}

impl<T> ToSql<Text, Pg> for JsonWrapper<T>
where
    T: Serialize + fmt::Debug,
{
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> diesel::serialize::Result {
        let s = serde_json::to_string(&self.0)?;
        out.write_all(s.as_bytes())?;
        Ok(IsNull::No)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::Attendee;

    #[test]
    fn test_attendees_serialize_as_plain_array() {
        let wrapped = JsonWrapper::from(vec![Attendee::new("lars"), Attendee::new("noomi")]);
        let json = serde_json::to_string(&wrapped).unwrap();
        assert_eq!(json, r#"[{"name":"lars"},{"name":"noomi"}]"#);

        let parsed: JsonWrapper<Vec<Attendee>> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed.into_inner()[1].name, "noomi");
    }
}
