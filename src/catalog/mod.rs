mod seed;
pub mod source;

pub use source::{CatalogSource, JsonFileSource, SeedSource};

use crate::models::{Property, PropertyType};

/// Ordered, read-only collection of property listings.
///
/// Insertion order is meaningful: it is what the "newest" sort of the
/// query engine reflects. The public query path never mutates a catalog;
/// admin-side edits go through an [`crate::admin::AdminSession`] working
/// copy instead.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    properties: Vec<Property>,
}

impl Catalog {
    pub fn new(properties: Vec<Property>) -> Self {
        Self { properties }
    }

    /// The canonical seed listings the site ships with
    pub fn seed() -> Self {
        Self::new(seed::seed_properties())
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Property> {
        self.properties.iter()
    }

    pub fn as_slice(&self) -> &[Property] {
        &self.properties
    }

    /// Lookup by id. A miss is a normal outcome, not an error.
    pub fn get(&self, id: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.id == id)
    }

    /// Listings of the given type, or the whole catalog when no type is given
    pub fn of_type(&self, kind: Option<PropertyType>) -> Vec<&Property> {
        match kind {
            Some(kind) => self.properties.iter().filter(|p| p.kind == kind).collect(),
            None => self.properties.iter().collect(),
        }
    }

    /// Listings flagged for promotional display
    pub fn featured(&self) -> Vec<&Property> {
        self.properties.iter().filter(|p| p.featured).collect()
    }

    /// Publicly visible listings; inactive ones are admin-only
    pub fn active(&self) -> Vec<&Property> {
        self.properties.iter().filter(|p| p.active).collect()
    }

    pub fn into_properties(self) -> Vec<Property> {
        self.properties
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PropertyType;

    #[test]
    fn seed_has_eight_listings_in_id_order() {
        let catalog = Catalog::seed();
        assert_eq!(catalog.len(), 8);
        let ids: Vec<&str> = catalog.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5", "6", "7", "8"]);
    }

    #[test]
    fn get_finds_existing_and_misses_unknown() {
        let catalog = Catalog::seed();
        assert_eq!(catalog.get("5").map(|p| p.price), Some(1_800_000));
        assert!(catalog.get("99").is_none());
    }

    #[test]
    fn of_type_without_type_is_identity() {
        let catalog = Catalog::seed();
        assert_eq!(catalog.of_type(None).len(), catalog.len());
    }

    #[test]
    fn of_type_rent_matches_seed_fixture() {
        let catalog = Catalog::seed();
        let rents = catalog.of_type(Some(PropertyType::Rent));
        let ids: Vec<&str> = rents.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["2", "4", "7"]);
    }

    #[test]
    fn featured_subset_comes_from_flag() {
        let catalog = Catalog::seed();
        let featured = catalog.featured();
        assert!(!featured.is_empty());
        assert!(featured.iter().all(|p| p.featured));
        assert!(featured.len() < catalog.len());
    }

    #[test]
    fn active_hides_nothing_in_seed_data() {
        let catalog = Catalog::seed();
        assert_eq!(catalog.active().len(), catalog.len());
    }
}
