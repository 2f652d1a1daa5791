//! Immutable seed data behind every page. There is no persistence layer;
//! the catalog is the whole dataset, and views only ever borrow from it.

mod listings;
mod sections;

use crate::domain::listing::{Listing, ListingDetail};
use crate::domain::section::Section;

pub fn listings() -> &'static [Listing] {
    &listings::LISTINGS
}

pub fn listing(id: u32) -> Option<&'static Listing> {
    listings::LISTINGS.iter().find(|l| l.id == id)
}

pub fn listing_detail(id: u32) -> Option<&'static ListingDetail> {
    listings::LISTING_DETAILS.iter().find(|d| d.listing_id == id)
}

pub fn sections() -> &'static [Section] {
    &sections::SECTIONS
}
