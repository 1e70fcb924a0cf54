use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "location_role", rename_all = "lowercase")]
pub enum LocationRole {
    Client,
    Merchant,
    Delivery,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MarkerStyle {
    pub color: &'static str,
    pub glyph: &'static str,
}

impl LocationRole {
    pub const fn marker(self) -> MarkerStyle {
        match self {
            LocationRole::Client => MarkerStyle {
                color: "#2563eb",
                glyph: "person",
            },
            LocationRole::Merchant => MarkerStyle {
                color: "#16a34a",
                glyph: "store",
            },
            LocationRole::Delivery => MarkerStyle {
                color: "#ea580c",
                glyph: "truck",
            },
        }
    }
}

// DB model

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Location {
    pub id: i32,
    pub user_id: i32,
    pub role: LocationRole,
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub description: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Request types

#[derive(Debug, Deserialize)]
pub struct CreateLocationRequest {
    /// Defaults to the caller's own role when omitted.
    pub role: Option<LocationRole>,
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub description: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Deserialize)]
pub struct UpdateLocationRequest {
    pub role: Option<LocationRole>,
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LocationFilter {
    pub role: Option<LocationRole>,
}

#[derive(Debug, Serialize)]
pub struct LocationResponse {
    #[serde(flatten)]
    pub location: Location,
    pub marker: MarkerStyle,
}

impl From<Location> for LocationResponse {
    fn from(location: Location) -> Self {
        let marker = location.role.marker();
        Self { location, marker }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_styles_follow_role() {
        assert_eq!(LocationRole::Client.marker().glyph, "person");
        assert_eq!(LocationRole::Merchant.marker().glyph, "store");
        assert_eq!(LocationRole::Delivery.marker().glyph, "truck");

        let colors = [
            LocationRole::Client.marker().color,
            LocationRole::Merchant.marker().color,
            LocationRole::Delivery.marker().color,
        ];
        assert_eq!(colors.len(), 3);
        assert!(colors.windows(2).all(|w| w[0] != w[1]));
    }

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&LocationRole::Delivery).unwrap(), "\"delivery\"");

        let role: LocationRole = serde_json::from_str("\"merchant\"").unwrap();
        assert_eq!(role, LocationRole::Merchant);
    }

    #[test]
    fn response_flattens_row_and_adds_marker() {
        let location = Location {
            id: 7,
            user_id: 3,
            role: LocationRole::Client,
            name: "Jean".to_string(),
            address: None,
            phone: Some("+228 90 00 00 00".to_string()),
            description: None,
            latitude: 9.55,
            longitude: 1.19,
            is_active: true,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        };

        let value = serde_json::to_value(LocationResponse::from(location)).unwrap();
        assert_eq!(value["name"], "Jean");
        assert_eq!(value["latitude"], 9.55);
        assert_eq!(value["marker"]["color"], "#2563eb");
        assert_eq!(value["marker"]["glyph"], "person");
    }
}
