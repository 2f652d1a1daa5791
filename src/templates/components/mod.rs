use crate::domain::listing::{format_price, Listing};
use maud::{html, Markup};

pub mod forms;

pub use forms::{inquiry_form, tour_form};

pub fn status_badge(label: &str) -> Markup {
    html! {
        span class="badge" { (label) }
    }
}

/// Card used in both the home-page featured grid and the search results.
pub fn listing_card(listing: &Listing) -> Markup {
    html! {
        article class="listing-card" {
            a href={ "/properties/" (listing.id) } {
                div class="card-media" {
                    img src=(listing.image) alt=(listing.name);
                    (status_badge(listing.status.label()))
                    p class="card-price" { (format_price(listing.price)) }
                }
                div class="card-body" {
                    h3 { (listing.name) }
                    p class="card-location" { (listing.location.label()) }
                    ul class="card-stats" {
                        li { (listing.beds) " bd" }
                        li { (listing.baths) " ba" }
                        li { (listing.sqft) " sq ft" }
                    }
                    div class="card-foot" {
                        span class="card-type" { (listing.property_type.label()) }
                        span class="button small" { "View Details" }
                    }
                }
            }
        }
    }
}
