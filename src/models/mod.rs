use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sale channel of a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Sale,
    Rent,
    Project,
}

impl FromStr for PropertyType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sale" => Ok(Self::Sale),
            "rent" => Ok(Self::Rent),
            "project" => Ok(Self::Project),
            other => Err(anyhow::anyhow!("unknown property type: {other}")),
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Sale => "sale",
            Self::Rent => "rent",
            Self::Project => "project",
        })
    }
}

/// Category of the underlying real estate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyCategory {
    Apartment,
    Villa,
    Office,
    Land,
}

impl FromStr for PropertyCategory {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "apartment" => Ok(Self::Apartment),
            "villa" => Ok(Self::Villa),
            "office" => Ok(Self::Office),
            "land" => Ok(Self::Land),
            other => Err(anyhow::anyhow!("unknown property category: {other}")),
        }
    }
}

impl fmt::Display for PropertyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Apartment => "apartment",
            Self::Villa => "villa",
            Self::Office => "office",
            Self::Land => "land",
        })
    }
}

fn default_active() -> bool {
    true
}

/// Core property listing model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Property {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: PropertyType,
    pub category: PropertyCategory,
    pub price: u64,
    pub location: String,
    pub city: String,
    /// Absent for land and most offices
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bathrooms: Option<u32>,
    /// Square meters
    pub area: u32,
    pub images: Vec<String>,
    pub features: Vec<String>,
    pub phone: String,
    #[serde(default)]
    pub featured: bool,
    /// Inactive listings are hidden from public views but kept in the admin list
    #[serde(default = "default_active")]
    pub active: bool,
}

/// Visitor comment on a property detail page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub author: String,
    pub content: String,
    /// Star rating, 1..=5 when given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    pub created_at: DateTime<Utc>,
    pub likes: u32,
}

/// Pipeline status of a customer lead
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerStatus {
    Active,
    Potential,
    Closed,
}

/// Customer record managed from the admin panel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub interested_in: Vec<PropertyCategory>,
    /// Free-text budget range, e.g. "1.500.000 - 2.500.000"
    pub budget: String,
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub status: CustomerStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_type_round_trips_through_str() {
        for s in ["sale", "rent", "project"] {
            let t: PropertyType = s.parse().unwrap();
            assert_eq!(t.to_string(), s);
        }
        assert!("lease".parse::<PropertyType>().is_err());
    }

    #[test]
    fn property_deserializes_with_defaults() {
        let json = r#"{
            "id": "x1",
            "title": "Test",
            "description": "desc",
            "type": "sale",
            "category": "land",
            "price": 100000,
            "location": "Merkez",
            "city": "Çorum",
            "area": 500,
            "images": [],
            "features": [],
            "phone": "+90 532 000 0000"
        }"#;
        let p: Property = serde_json::from_str(json).unwrap();
        assert_eq!(p.kind, PropertyType::Sale);
        assert!(p.active, "active defaults to true");
        assert!(!p.featured, "featured defaults to false");
        assert!(p.bedrooms.is_none());
    }
}
