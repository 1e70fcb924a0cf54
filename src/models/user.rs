use serde::{Deserialize, Serialize};

use crate::models::LocationRole;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Client,
    Merchant,
    Delivery,
    Admin,
}

impl UserRole {
    /// Admins moderate the map but do not appear on it themselves.
    pub fn location_role(self) -> Option<LocationRole> {
        match self {
            UserRole::Client => Some(LocationRole::Client),
            UserRole::Merchant => Some(LocationRole::Merchant),
            UserRole::Delivery => Some(LocationRole::Delivery),
            UserRole::Admin => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admins_have_no_map_role() {
        assert_eq!(UserRole::Client.location_role(), Some(LocationRole::Client));
        assert_eq!(UserRole::Merchant.location_role(), Some(LocationRole::Merchant));
        assert_eq!(UserRole::Delivery.location_role(), Some(LocationRole::Delivery));
        assert_eq!(UserRole::Admin.location_role(), None);
    }
}
