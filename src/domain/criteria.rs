use crate::domain::listing::{Listing, Location, PropertyType};
use url::form_urlencoded;

/// Upper bound of the price slider on the search page.
pub const LISTING_PRICE_CAP: i64 = 6_000_000;

/// Amenity checkboxes offered by the advanced-filter dialog. Listings carry
/// no amenity data, so a selection only shows up as an active-filter chip
/// and is cleared along with everything else.
pub const LISTING_AMENITIES: [&str; 6] =
    ["Parking", "Gym", "Pool", "Concierge", "Pet Friendly", "Balcony"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Newest,
    PriceHigh,
    PriceLow,
    Size,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Newest,
        SortKey::PriceHigh,
        SortKey::PriceLow,
        SortKey::Size,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::PriceHigh => "price-high",
            SortKey::PriceLow => "price-low",
            SortKey::Size => "size",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Newest => "Newest First",
            SortKey::PriceHigh => "Price: High to Low",
            SortKey::PriceLow => "Price: Low to High",
            SortKey::Size => "Size: Largest First",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == s)
    }
}

/// The user's current search, filter and sort selections for the listing
/// page. Parsed fresh from the query string on every request; `None` means
/// "no filter" rather than a wildcard sentinel value.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingCriteria {
    pub search: String,
    pub property_type: Option<PropertyType>,
    pub location: Option<Location>,
    pub price_min: i64,
    pub price_max: i64,
    pub min_beds: Option<u32>,
    pub min_baths: Option<u32>,
    pub amenities: Vec<String>,
    pub sort: SortKey,
}

impl Default for ListingCriteria {
    fn default() -> Self {
        ListingCriteria {
            search: String::new(),
            property_type: None,
            location: None,
            price_min: 0,
            price_max: LISTING_PRICE_CAP,
            min_beds: None,
            min_baths: None,
            amenities: Vec::new(),
            sort: SortKey::default(),
        }
    }
}

impl ListingCriteria {
    /// Builds criteria from decoded query pairs. Unknown keys and
    /// unparseable values fall back to the defaults.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        let mut criteria = ListingCriteria::default();
        for (key, value) in pairs {
            match key.as_str() {
                "search" => criteria.search = value.trim().to_string(),
                "type" => criteria.property_type = PropertyType::from_slug(value),
                "location" => criteria.location = Location::from_slug(value),
                "price_min" => {
                    if let Ok(n) = value.parse::<i64>() {
                        criteria.price_min = n.clamp(0, LISTING_PRICE_CAP);
                    }
                }
                "price_max" => {
                    if let Ok(n) = value.parse::<i64>() {
                        criteria.price_max = n.clamp(0, LISTING_PRICE_CAP);
                    }
                }
                "beds" => criteria.min_beds = value.parse().ok(),
                "baths" => criteria.min_baths = value.parse().ok(),
                "amenity" => {
                    let known = LISTING_AMENITIES.iter().find(|a| **a == value.as_str());
                    if let Some(a) = known {
                        criteria.amenities.push(a.to_string());
                    }
                }
                "sort" => criteria.sort = SortKey::parse(value).unwrap_or_default(),
                _ => {}
            }
        }
        criteria
    }

    /// Whether a single listing satisfies every active predicate. Amenity
    /// selections are deliberately not part of the match.
    pub fn matches(&self, listing: &Listing) -> bool {
        let term = self.search.to_lowercase();
        let matches_search = term.is_empty()
            || listing.name.to_lowercase().contains(&term)
            || listing.location.label().to_lowercase().contains(&term)
            || listing.property_type.label().to_lowercase().contains(&term);

        let matches_type = self
            .property_type
            .map_or(true, |t| listing.property_type == t);
        let matches_location = self.location.map_or(true, |l| listing.location == l);
        let matches_price = listing.price >= self.price_min && listing.price <= self.price_max;
        let matches_beds = self.min_beds.map_or(true, |n| listing.beds >= n);
        let matches_baths = self.min_baths.map_or(true, |n| listing.baths >= n);

        matches_search
            && matches_type
            && matches_location
            && matches_price
            && matches_beds
            && matches_baths
    }

    /// True when any field differs from its default, i.e. when the
    /// active-filter chip row should be shown.
    pub fn has_active_filters(&self) -> bool {
        !self.search.is_empty()
            || self.property_type.is_some()
            || self.location.is_some()
            || self.price_min > 0
            || self.price_max < LISTING_PRICE_CAP
            || self.min_beds.is_some()
            || self.min_baths.is_some()
            || !self.amenities.is_empty()
    }

    /// Serializes the non-default fields back into a query string, so
    /// chip-removal links and the sort select can rebuild the page URL.
    pub fn query_string(&self) -> String {
        let mut ser = form_urlencoded::Serializer::new(String::new());
        if !self.search.is_empty() {
            ser.append_pair("search", &self.search);
        }
        if let Some(t) = self.property_type {
            ser.append_pair("type", t.slug());
        }
        if let Some(l) = self.location {
            ser.append_pair("location", l.slug());
        }
        if self.price_min > 0 {
            ser.append_pair("price_min", &self.price_min.to_string());
        }
        if self.price_max < LISTING_PRICE_CAP {
            ser.append_pair("price_max", &self.price_max.to_string());
        }
        if let Some(n) = self.min_beds {
            ser.append_pair("beds", &n.to_string());
        }
        if let Some(n) = self.min_baths {
            ser.append_pair("baths", &n.to_string());
        }
        for amenity in &self.amenities {
            ser.append_pair("amenity", amenity);
        }
        if self.sort != SortKey::default() {
            ser.append_pair("sort", self.sort.as_str());
        }
        ser.finish()
    }
}

/// The listing pipeline: filter the full seed set down to the matching
/// subset, then order it by the chosen sort key. The input slice is never
/// mutated; every call returns a fresh derived sequence. `sort_by` is
/// stable, so tied listings keep their seed order.
pub fn filter_listings<'a>(listings: &'a [Listing], criteria: &ListingCriteria) -> Vec<&'a Listing> {
    let mut filtered: Vec<&Listing> = listings.iter().filter(|l| criteria.matches(l)).collect();

    match criteria.sort {
        SortKey::Newest => filtered.sort_by(|a, b| b.year_built.cmp(&a.year_built)),
        SortKey::PriceHigh => filtered.sort_by(|a, b| b.price.cmp(&a.price)),
        SortKey::PriceLow => filtered.sort_by(|a, b| a.price.cmp(&b.price)),
        SortKey::Size => filtered.sort_by(|a, b| b.sqft.cmp(&a.sqft)),
    }

    filtered
}
