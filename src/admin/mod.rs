use crate::catalog::Catalog;
use crate::models::{Customer, CustomerStatus, Property, PropertyCategory, PropertyType};
use anyhow::{bail, Result};
use chrono::Utc;
use serde::Serialize;
use tracing::info;

const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";
const OFFICE_PHONE: &str = "+90 532 123 4567";

/// Draft for a new listing as the admin form collects it. Numeric fields
/// arrive as strings and are validated in [`AdminSession::add_listing`].
#[derive(Debug, Clone, Default)]
pub struct NewListing {
    pub title: String,
    pub description: String,
    pub kind: Option<PropertyType>,
    pub category: Option<PropertyCategory>,
    pub price: String,
    pub area: String,
    pub bedrooms: String,
    pub bathrooms: String,
    pub city: String,
    pub location: String,
    pub image: String,
    pub featured: bool,
}

/// Aggregates shown on the admin dashboard
#[derive(Debug, Clone, Serialize)]
pub struct DashboardStats {
    pub total_listings: usize,
    pub active_listings: usize,
    pub featured_listings: usize,
    /// Sum of all listing prices
    pub portfolio_value: u64,
    pub sale_count: usize,
    pub rent_count: usize,
    pub project_count: usize,
    /// Ids of the three most recently added listings
    pub recent_ids: Vec<String>,
}

/// Admin working state for one session.
///
/// Holds an owned copy of the catalog plus the customer book; edits apply
/// to this copy only and never reach the shared read-only catalog the
/// public query engine serves from.
#[derive(Debug, Clone)]
pub struct AdminSession {
    listings: Vec<Property>,
    customers: Vec<Customer>,
    next_listing_id: u64,
    next_customer_id: u64,
}

impl AdminSession {
    /// Start a session from a catalog snapshot
    pub fn new(catalog: &Catalog) -> Self {
        let listings: Vec<Property> = catalog.iter().cloned().collect();
        let next_listing_id = next_id(listings.iter().map(|p| p.id.as_str()));
        Self {
            listings,
            customers: Vec::new(),
            next_listing_id,
            next_customer_id: 1,
        }
    }

    /// Full working list, inactive listings included
    pub fn listings(&self) -> &[Property] {
        &self.listings
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// Validate the draft and append it to the working list
    pub fn add_listing(&mut self, draft: NewListing) -> Result<&Property> {
        let title = draft.title.trim();
        if title.is_empty() {
            bail!("listing title must not be empty");
        }
        let Some(kind) = draft.kind else {
            bail!("listing type must be selected");
        };
        let Some(category) = draft.category else {
            bail!("listing category must be selected");
        };
        let price: u64 = draft
            .price
            .trim()
            .parse()
            .map_err(|_| anyhow::anyhow!("price {:?} is not a valid number", draft.price))?;
        let area: u32 = draft
            .area
            .trim()
            .parse()
            .map_err(|_| anyhow::anyhow!("area {:?} is not a valid number", draft.area))?;

        let bedrooms = parse_optional(&draft.bedrooms)?;
        let bathrooms = parse_optional(&draft.bathrooms)?;

        let id = self.next_listing_id.to_string();
        self.next_listing_id += 1;

        let images = if draft.image.trim().is_empty() {
            vec![PLACEHOLDER_IMAGE.to_string()]
        } else {
            vec![draft.image.trim().to_string()]
        };

        let property = Property {
            id,
            title: title.to_string(),
            description: draft.description.trim().to_string(),
            kind,
            category,
            price,
            location: draft.location.trim().to_string(),
            city: draft.city.trim().to_string(),
            bedrooms,
            bathrooms,
            area,
            images,
            features: Vec::new(),
            phone: OFFICE_PHONE.to_string(),
            featured: draft.featured,
            active: true,
        };

        info!("Added listing {} ({})", property.id, property.title);
        self.listings.push(property);
        Ok(self.listings.last().expect("just pushed"))
    }

    /// Remove a listing from the working list; false when the id is unknown
    pub fn remove_listing(&mut self, id: &str) -> bool {
        let before = self.listings.len();
        self.listings.retain(|p| p.id != id);
        let removed = self.listings.len() < before;
        if removed {
            info!("Removed listing {id}");
        }
        removed
    }

    /// Flip a listing between publicly visible and hidden.
    /// Returns the new state, or None when the id is unknown.
    pub fn toggle_active(&mut self, id: &str) -> Option<bool> {
        let listing = self.listings.iter_mut().find(|p| p.id == id)?;
        listing.active = !listing.active;
        info!("Listing {id} is now {}", if listing.active { "active" } else { "hidden" });
        Some(listing.active)
    }

    /// Flip the promotional flag. Returns the new state, or None when the
    /// id is unknown.
    pub fn toggle_featured(&mut self, id: &str) -> Option<bool> {
        let listing = self.listings.iter_mut().find(|p| p.id == id)?;
        listing.featured = !listing.featured;
        Some(listing.featured)
    }

    pub fn add_customer(
        &mut self,
        name: &str,
        email: &str,
        phone: &str,
        city: &str,
        interested_in: Vec<PropertyCategory>,
        budget: &str,
        notes: &str,
    ) -> Result<&Customer> {
        let name = name.trim();
        if name.is_empty() {
            bail!("customer name must not be empty");
        }

        let id = self.next_customer_id.to_string();
        self.next_customer_id += 1;

        let customer = Customer {
            id,
            name: name.to_string(),
            email: email.trim().to_string(),
            phone: phone.trim().to_string(),
            city: city.trim().to_string(),
            interested_in,
            budget: budget.trim().to_string(),
            notes: notes.trim().to_string(),
            created_at: Utc::now(),
            status: CustomerStatus::Potential,
        };

        info!("Added customer {} ({})", customer.id, customer.name);
        self.customers.push(customer);
        Ok(self.customers.last().expect("just pushed"))
    }

    pub fn remove_customer(&mut self, id: &str) -> bool {
        let before = self.customers.len();
        self.customers.retain(|c| c.id != id);
        self.customers.len() < before
    }

    pub fn set_customer_status(&mut self, id: &str, status: CustomerStatus) -> bool {
        match self.customers.iter_mut().find(|c| c.id == id) {
            Some(customer) => {
                customer.status = status;
                true
            }
            None => false,
        }
    }

    /// Dashboard aggregates over the current working list
    pub fn stats(&self) -> DashboardStats {
        DashboardStats {
            total_listings: self.listings.len(),
            active_listings: self.listings.iter().filter(|p| p.active).count(),
            featured_listings: self.listings.iter().filter(|p| p.featured).count(),
            portfolio_value: self.listings.iter().map(|p| p.price).sum(),
            sale_count: count_kind(&self.listings, PropertyType::Sale),
            rent_count: count_kind(&self.listings, PropertyType::Rent),
            project_count: count_kind(&self.listings, PropertyType::Project),
            recent_ids: self
                .listings
                .iter()
                .rev()
                .take(3)
                .map(|p| p.id.clone())
                .collect(),
        }
    }
}

fn count_kind(listings: &[Property], kind: PropertyType) -> usize {
    listings.iter().filter(|p| p.kind == kind).count()
}

fn parse_optional(raw: &str) -> Result<Option<u32>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse()
        .map(Some)
        .map_err(|_| anyhow::anyhow!("{trimmed:?} is not a valid count"))
}

/// Next numeric id after the highest one in use. Non-numeric ids are
/// skipped rather than rejected; imported catalogs may use arbitrary keys.
fn next_id<'a>(ids: impl Iterator<Item = &'a str>) -> u64 {
    ids.filter_map(|id| id.parse::<u64>().ok())
        .max()
        .map_or(1, |max| max + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn draft() -> NewListing {
        NewListing {
            title: "Test Dairesi".to_string(),
            description: "Deneme ilanı".to_string(),
            kind: Some(PropertyType::Sale),
            category: Some(PropertyCategory::Apartment),
            price: "950000".to_string(),
            area: "110".to_string(),
            bedrooms: "2".to_string(),
            bathrooms: "1".to_string(),
            city: "Çorum".to_string(),
            location: "Merkez".to_string(),
            image: String::new(),
            featured: false,
        }
    }

    #[test]
    fn session_edits_do_not_touch_source_catalog() {
        let catalog = Catalog::seed();
        let mut session = AdminSession::new(&catalog);
        assert!(session.remove_listing("1"));
        session.toggle_active("2");

        assert_eq!(session.listings().len(), 7);
        assert_eq!(catalog.len(), 8);
        assert!(catalog.get("1").is_some());
        assert!(catalog.get("2").unwrap().active);
    }

    #[test]
    fn add_listing_assigns_next_id_and_placeholder_image() {
        let catalog = Catalog::seed();
        let mut session = AdminSession::new(&catalog);
        let added = session.add_listing(draft()).unwrap();
        assert_eq!(added.id, "9");
        assert_eq!(added.images, vec![PLACEHOLDER_IMAGE.to_string()]);
        assert!(added.active);
    }

    #[test]
    fn add_listing_rejects_bad_drafts() {
        let catalog = Catalog::seed();
        let mut session = AdminSession::new(&catalog);

        let mut no_title = draft();
        no_title.title = "  ".to_string();
        assert!(session.add_listing(no_title).is_err());

        let mut bad_price = draft();
        bad_price.price = "çok pahalı".to_string();
        assert!(session.add_listing(bad_price).is_err());

        let mut no_kind = draft();
        no_kind.kind = None;
        assert!(session.add_listing(no_kind).is_err());

        assert_eq!(session.listings().len(), 8);
    }

    #[test]
    fn empty_optional_counts_stay_absent() {
        let catalog = Catalog::seed();
        let mut session = AdminSession::new(&catalog);
        let mut land = draft();
        land.category = Some(PropertyCategory::Land);
        land.bedrooms = String::new();
        land.bathrooms = String::new();
        let added = session.add_listing(land).unwrap();
        assert!(added.bedrooms.is_none());
        assert!(added.bathrooms.is_none());
    }

    #[test]
    fn toggle_active_flips_and_reports_state() {
        let catalog = Catalog::seed();
        let mut session = AdminSession::new(&catalog);
        assert_eq!(session.toggle_active("4"), Some(false));
        assert_eq!(session.toggle_active("4"), Some(true));
        assert_eq!(session.toggle_active("99"), None);
    }

    #[test]
    fn customer_lifecycle() {
        let catalog = Catalog::seed();
        let mut session = AdminSession::new(&catalog);
        let id = session
            .add_customer(
                "Ahmet Yılmaz",
                "ahmet@email.com",
                "+90 532 123 4567",
                "İstanbul",
                vec![PropertyCategory::Apartment, PropertyCategory::Villa],
                "1.500.000 - 2.500.000",
                "3+1 daire arıyor",
            )
            .unwrap()
            .id
            .clone();

        assert_eq!(session.customers()[0].status, CustomerStatus::Potential);
        assert!(session.set_customer_status(&id, CustomerStatus::Active));
        assert_eq!(session.customers()[0].status, CustomerStatus::Active);
        assert!(session.remove_customer(&id));
        assert!(!session.remove_customer(&id));
    }

    #[test]
    fn stats_reflect_working_copy() {
        let catalog = Catalog::seed();
        let mut session = AdminSession::new(&catalog);
        let baseline = session.stats();
        assert_eq!(baseline.total_listings, 8);
        assert_eq!(baseline.sale_count, 3);
        assert_eq!(baseline.rent_count, 3);
        assert_eq!(baseline.project_count, 2);
        assert_eq!(baseline.featured_listings, 3);
        assert_eq!(baseline.recent_ids, vec!["8", "7", "6"]);

        session.toggle_active("1");
        session.add_listing(draft()).unwrap();
        let updated = session.stats();
        assert_eq!(updated.total_listings, 9);
        assert_eq!(updated.active_listings, 8);
        assert_eq!(
            updated.portfolio_value,
            baseline.portfolio_value + 950_000
        );
        assert_eq!(updated.recent_ids, vec!["9", "8", "7"]);
    }
}
