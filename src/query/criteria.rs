use crate::models::{PropertyCategory, PropertyType};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Result ordering for a listing query
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    /// Catalog insertion order, no reordering
    #[default]
    #[serde(rename = "newest")]
    Newest,
    #[serde(rename = "price-asc")]
    PriceAsc,
    #[serde(rename = "price-desc")]
    PriceDesc,
    #[serde(rename = "area-desc")]
    AreaDesc,
}

impl FromStr for SortOrder {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "newest" => Ok(Self::Newest),
            "price-asc" => Ok(Self::PriceAsc),
            "price-desc" => Ok(Self::PriceDesc),
            "area-desc" => Ok(Self::AreaDesc),
            other => Err(anyhow::anyhow!("unknown sort order: {other}")),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Newest => "newest",
            Self::PriceAsc => "price-asc",
            Self::PriceDesc => "price-desc",
            Self::AreaDesc => "area-desc",
        })
    }
}

/// Constraints for one listing query. Every field is optional; the default
/// value matches everything in catalog order.
///
/// Criteria are already parsed and typed. Raw user input (query strings,
/// form fields) goes through [`CriteriaForm::parse`] first, so the engine
/// never sees malformed values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Criteria {
    pub kind: Option<PropertyType>,
    pub category: Option<PropertyCategory>,
    /// Matched against title, description, location and city
    pub search: Option<String>,
    pub city: Option<String>,
    /// Matched against the location field
    pub district: Option<String>,
    pub min_area: Option<u32>,
    pub max_area: Option<u32>,
    pub min_bathrooms: Option<u32>,
    pub max_bathrooms: Option<u32>,
    pub min_price: Option<u64>,
    pub max_price: Option<u64>,
    pub sort: SortOrder,
}

impl Criteria {
    pub fn with_kind(mut self, kind: PropertyType) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn with_category(mut self, category: PropertyCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search = Some(text.into());
        self
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn with_district(mut self, district: impl Into<String>) -> Self {
        self.district = Some(district.into());
        self
    }

    pub fn with_area(mut self, min: Option<u32>, max: Option<u32>) -> Self {
        self.min_area = min;
        self.max_area = max;
        self
    }

    pub fn with_bathrooms(mut self, min: Option<u32>, max: Option<u32>) -> Self {
        self.min_bathrooms = min;
        self.max_bathrooms = max;
        self
    }

    pub fn with_price(mut self, min: Option<u64>, max: Option<u64>) -> Self {
        self.min_price = min;
        self.max_price = max;
        self
    }

    pub fn sorted_by(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }
}

/// Raw filter input as a UI form delivers it: everything is a string and
/// an empty string means "no constraint".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CriteriaForm {
    #[serde(default, rename = "type")]
    pub kind: String,
    /// "all" from the category select is treated the same as empty
    #[serde(default)]
    pub category: String,
    #[serde(default, rename = "q")]
    pub search: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub district: String,
    #[serde(default)]
    pub min_area: String,
    #[serde(default)]
    pub max_area: String,
    #[serde(default)]
    pub min_bathrooms: String,
    #[serde(default)]
    pub max_bathrooms: String,
    #[serde(default)]
    pub min_price: String,
    #[serde(default)]
    pub max_price: String,
    #[serde(default)]
    pub sort: String,
}

impl CriteriaForm {
    /// Parse the raw form into typed criteria.
    ///
    /// This is the single place where invalid input is normalized: a bound
    /// that does not parse as a number and an unrecognized type, category
    /// or sort value all degrade to "no constraint". The engine downstream
    /// is total and never has to reject anything.
    pub fn parse(&self) -> Criteria {
        Criteria {
            kind: parse_enum("type", &self.kind),
            category: match self.category.as_str() {
                "" | "all" => None,
                other => parse_enum("category", other),
            },
            search: non_empty(&self.search),
            city: non_empty(&self.city),
            district: non_empty(&self.district),
            min_area: parse_bound("min_area", &self.min_area),
            max_area: parse_bound("max_area", &self.max_area),
            min_bathrooms: parse_bound("min_bathrooms", &self.min_bathrooms),
            max_bathrooms: parse_bound("max_bathrooms", &self.max_bathrooms),
            min_price: parse_bound("min_price", &self.min_price),
            max_price: parse_bound("max_price", &self.max_price),
            sort: if self.sort.is_empty() {
                SortOrder::Newest
            } else {
                self.sort.parse().unwrap_or_else(|_| {
                    debug!("Ignoring unknown sort order {:?}", self.sort);
                    SortOrder::Newest
                })
            },
        }
    }
}

fn non_empty(s: &str) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn parse_bound<T: FromStr>(field: &str, raw: &str) -> Option<T> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse() {
        Ok(v) => Some(v),
        Err(_) => {
            debug!("Ignoring unparsable {field} bound {trimmed:?}");
            None
        }
    }
}

fn parse_enum<T: FromStr>(field: &str, raw: &str) -> Option<T> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse() {
        Ok(v) => Some(v),
        Err(_) => {
            debug!("Ignoring unknown {field} value {trimmed:?}");
            None
        }
    }
}
