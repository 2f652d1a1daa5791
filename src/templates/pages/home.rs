// templates/pages/home.rs

use crate::domain::listing::Listing;
use crate::templates::{components::listing_card, site_layout};
use maud::{html, Markup};

pub fn home_page(listings: &[Listing]) -> Markup {
    site_layout(
        "Home",
        html! {
            section class="hero" {
                h1 { "Find Your Dream Property" }
                p {
                    "Discover our curated collection of luxury properties in prime "
                    "locations, or step inside with the interactive 3D building viewer."
                }
                div class="hero-actions" {
                    a class="button" href="/properties" { "Browse Properties" }
                    a class="button outline" href="/3d-viewer" { "Open 3D Viewer" }
                }
            }

            section class="stats" {
                ul {
                    li { strong { (listings.len()) } " Premium Properties" }
                    li { strong { "6" } " Prime Districts" }
                    li { strong { "24/7" } " Agent Support" }
                }
            }

            section class="featured" {
                h2 { "Featured Properties" }
                div class="listing-grid" {
                    @for listing in listings.iter().take(3) {
                        (listing_card(listing))
                    }
                }
                p class="centered" {
                    a href="/properties" { "View all properties" }
                }
            }
        },
    )
}
