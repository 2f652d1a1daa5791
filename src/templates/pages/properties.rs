use crate::domain::criteria::{ListingCriteria, SortKey, LISTING_AMENITIES, LISTING_PRICE_CAP};
use crate::domain::listing::{format_price, Listing, Location, PropertyType};
use crate::templates::{components::listing_card, site_layout};
use maud::{html, Markup};

pub fn properties_page(
    criteria: &ListingCriteria,
    results: &[&Listing],
    total: usize,
) -> Markup {
    site_layout(
        "Premium Properties",
        html! {
            section class="page-header" {
                h1 { "Premium Properties" }
                p { "Discover our curated collection of luxury properties in prime locations" }
            }

            section class="filters card" {
                (filter_form(criteria))
                @if criteria.has_active_filters() {
                    (active_filter_chips(criteria))
                }
            }

            section class="results" {
                div class="results-head" {
                    p class="muted" {
                        "Showing " (results.len()) " of " (total) " properties"
                    }
                }

                @if results.is_empty() {
                    div class="empty-state" {
                        h3 { "No properties found" }
                        p class="muted" { "Try adjusting your search criteria or filters" }
                        a class="button outline" href="/properties" { "Clear All Filters" }
                    }
                } @else {
                    div class="listing-grid" {
                        @for listing in results {
                            (listing_card(listing))
                        }
                    }
                }
            }
        },
    )
}

fn filter_form(criteria: &ListingCriteria) -> Markup {
    html! {
        form method="get" action="/properties" {
            div class="form-row" {
                input
                    type="search"
                    name="search"
                    placeholder="Search properties..."
                    value=(criteria.search);

                select name="type" {
                    option value="" selected[criteria.property_type.is_none()] { "All Types" }
                    @for t in PropertyType::ALL {
                        option value=(t.slug()) selected[criteria.property_type == Some(t)] {
                            (t.label())
                        }
                    }
                }

                select name="location" {
                    option value="" selected[criteria.location.is_none()] { "All Locations" }
                    @for l in Location::ALL {
                        option value=(l.slug()) selected[criteria.location == Some(l)] {
                            (l.label())
                        }
                    }
                }

                select name="sort" {
                    @for key in SortKey::ALL {
                        option value=(key.as_str()) selected[criteria.sort == key] {
                            (key.label())
                        }
                    }
                }
            }

            details class="advanced-filters" open[advanced_in_use(criteria)] {
                summary { "More Filters" }

                div class="form-row" {
                    label { "Min Price"
                        input type="number" name="price_min" min="0" max=(LISTING_PRICE_CAP)
                            step="50000" value=(criteria.price_min);
                    }
                    label { "Max Price"
                        input type="number" name="price_max" min="0" max=(LISTING_PRICE_CAP)
                            step="50000" value=(criteria.price_max);
                    }
                    label { "Minimum Bedrooms"
                        select name="beds" {
                            option value="" selected[criteria.min_beds.is_none()] { "Any" }
                            @for n in 1..=5u32 {
                                option value=(n) selected[criteria.min_beds == Some(n)] {
                                    (n) "+"
                                }
                            }
                        }
                    }
                    label { "Minimum Bathrooms"
                        select name="baths" {
                            option value="" selected[criteria.min_baths.is_none()] { "Any" }
                            @for n in 1..=4u32 {
                                option value=(n) selected[criteria.min_baths == Some(n)] {
                                    (n) "+"
                                }
                            }
                        }
                    }
                }

                fieldset class="amenities" {
                    legend { "Amenities" }
                    @for amenity in LISTING_AMENITIES {
                        label class="checkbox" {
                            input
                                type="checkbox"
                                name="amenity"
                                value=(amenity)
                                checked[criteria.amenities.iter().any(|a| a == amenity)];
                            (amenity)
                        }
                    }
                }
            }

            button type="submit" class="button" { "Apply Filters" }
        }
    }
}

fn advanced_in_use(criteria: &ListingCriteria) -> bool {
    criteria.price_min > 0
        || criteria.price_max < LISTING_PRICE_CAP
        || criteria.min_beds.is_some()
        || criteria.min_baths.is_some()
        || !criteria.amenities.is_empty()
}

/// One removable chip per active filter, each linking back to the page
/// with that filter reset.
fn active_filter_chips(criteria: &ListingCriteria) -> Markup {
    html! {
        div class="active-filters" {
            span class="muted" { "Active filters:" }

            @if !criteria.search.is_empty() {
                @let without = ListingCriteria { search: String::new(), ..criteria.clone() };
                (chip(format!("Search: {}", criteria.search), &without))
            }
            @if let Some(t) = criteria.property_type {
                @let without = ListingCriteria { property_type: None, ..criteria.clone() };
                (chip(format!("Type: {}", t.label()), &without))
            }
            @if let Some(l) = criteria.location {
                @let without = ListingCriteria { location: None, ..criteria.clone() };
                (chip(format!("Location: {}", l.label()), &without))
            }
            @if criteria.price_min > 0 || criteria.price_max < LISTING_PRICE_CAP {
                @let without = ListingCriteria {
                    price_min: 0,
                    price_max: LISTING_PRICE_CAP,
                    ..criteria.clone()
                };
                (chip(
                    format!(
                        "Price: {} - {}",
                        format_price(criteria.price_min),
                        format_price(criteria.price_max)
                    ),
                    &without,
                ))
            }
            @for amenity in &criteria.amenities {
                @let without = ListingCriteria {
                    amenities: criteria
                        .amenities
                        .iter()
                        .filter(|a| *a != amenity)
                        .cloned()
                        .collect(),
                    ..criteria.clone()
                };
                (chip(amenity.clone(), &without))
            }

            a class="chip clear-all" href="/properties" { "Clear All" }
        }
    }
}

fn chip(label: String, remaining: &ListingCriteria) -> Markup {
    html! {
        a class="chip" href=(page_url(remaining)) { (label) " ✕" }
    }
}

fn page_url(criteria: &ListingCriteria) -> String {
    let qs = criteria.query_string();
    if qs.is_empty() {
        "/properties".to_string()
    } else {
        format!("/properties?{qs}")
    }
}
