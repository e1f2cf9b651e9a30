use crate::models::Property;
use crate::query::criteria::{Criteria, SortOrder};

/// Run a listing query over the catalog.
///
/// Pure function: the catalog is only read, the result is a fresh vector of
/// references into it. Filters are applied in a fixed order (type, category,
/// search text, city, district, area, bathrooms, price) and combine with
/// logical AND; the final step sorts per [`SortOrder`]. With default
/// criteria the whole catalog comes back in its original order.
///
/// The engine is total: it never fails, the worst case is an empty result.
pub fn query<'a>(catalog: &'a [Property], criteria: &Criteria) -> Vec<&'a Property> {
    let mut results: Vec<&Property> = catalog.iter().collect();

    if let Some(kind) = criteria.kind {
        results.retain(|p| p.kind == kind);
    }

    if let Some(category) = criteria.category {
        results.retain(|p| p.category == category);
    }

    if let Some(text) = &criteria.search {
        let needle = text.to_lowercase();
        results.retain(|p| {
            contains_fold(&p.title, &needle)
                || contains_fold(&p.description, &needle)
                || contains_fold(&p.location, &needle)
                || contains_fold(&p.city, &needle)
        });
    }

    if let Some(city) = &criteria.city {
        let needle = city.to_lowercase();
        results.retain(|p| contains_fold(&p.city, &needle));
    }

    if let Some(district) = &criteria.district {
        let needle = district.to_lowercase();
        results.retain(|p| contains_fold(&p.location, &needle));
    }

    if let Some(min) = criteria.min_area {
        results.retain(|p| p.area >= min);
    }
    if let Some(max) = criteria.max_area {
        results.retain(|p| p.area <= max);
    }

    // A listing without a bathroom count never satisfies a bathroom bound
    if let Some(min) = criteria.min_bathrooms {
        results.retain(|p| p.bathrooms.is_some_and(|b| b >= min));
    }
    if let Some(max) = criteria.max_bathrooms {
        results.retain(|p| p.bathrooms.is_some_and(|b| b <= max));
    }

    if let Some(min) = criteria.min_price {
        results.retain(|p| p.price >= min);
    }
    if let Some(max) = criteria.max_price {
        results.retain(|p| p.price <= max);
    }

    // Vec::sort_by is stable, so equal keys keep their catalog order
    match criteria.sort {
        SortOrder::Newest => {}
        SortOrder::PriceAsc => results.sort_by(|a, b| a.price.cmp(&b.price)),
        SortOrder::PriceDesc => results.sort_by(|a, b| b.price.cmp(&a.price)),
        SortOrder::AreaDesc => results.sort_by(|a, b| b.area.cmp(&a.area)),
    }

    results
}

/// Case-insensitive substring test; the needle is pre-lowercased once by
/// the caller so filtering a large catalog folds each haystack only.
fn contains_fold(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}
