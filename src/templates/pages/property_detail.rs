use crate::domain::listing::{format_price, Listing, ListingDetail};
use crate::templates::{
    components::{inquiry_form, status_badge, tour_form},
    site_layout,
};
use maud::{html, Markup};

/// Detail page for one listing. The extended record (address, gallery,
/// agent and so on) exists only for some listings; the rest render from
/// the base catalog fields alone.
pub fn property_detail_page(listing: &Listing, detail: Option<&ListingDetail>) -> Markup {
    site_layout(
        listing.name,
        html! {
            section class="detail-header" {
                p { a href="/properties" { "← Back to properties" } }
                div class="detail-title" {
                    h1 { (listing.name) }
                    (status_badge(listing.status.label()))
                }
                p class="muted" {
                    (listing.location.label())
                    @if let Some(d) = detail {
                        " · " (d.full_address)
                    }
                }
                p class="detail-price" { (format_price(listing.price)) }
            }

            section class="detail-stats card" {
                ul {
                    li { strong { (listing.beds) } " Bedrooms" }
                    li { strong { (listing.baths) } " Bathrooms" }
                    li { strong { (listing.sqft) } " sq ft" }
                    li { strong { (listing.parking) } " Parking" }
                    li { "Built " strong { (listing.year_built) } }
                    li { (listing.property_type.label()) }
                }
            }

            @if let Some(d) = detail {
                section class="detail-gallery" {
                    @for image in d.images {
                        img src=(image) alt=(listing.name);
                    }
                }

                section class="detail-description card" {
                    h2 { "About this property" }
                    p { (d.description) }
                    p { a href=(d.virtual_tour) { "Take the virtual tour" } }
                }

                div class="detail-columns" {
                    section class="card" {
                        h2 { "Features" }
                        ul {
                            @for feature in d.features {
                                li { (feature) }
                            }
                        }
                    }
                    section class="card" {
                        h2 { "Building Amenities" }
                        ul {
                            @for amenity in d.amenities {
                                li { (amenity) }
                            }
                        }
                    }
                }

                section class="agent card" {
                    h2 { "Listing Agent" }
                    p { strong { (d.agent.name) } }
                    p {
                        a href={ "tel:" (d.agent.phone) } { (d.agent.phone) }
                        " · "
                        a href={ "mailto:" (d.agent.email) } { (d.agent.email) }
                    }
                }
            } @else {
                section class="detail-media" {
                    img src=(listing.image) alt=(listing.name);
                }
            }

            div class="detail-columns" {
                (inquiry_form(Some(listing.name)))
                (tour_form(Some(listing.name)))
            }
        },
    )
}
