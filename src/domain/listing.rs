use serde::Serialize;

/// Closed set of property types offered in the catalog. The UI renders
/// these through `label`; query strings use `slug`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyType {
    LuxuryApartment,
    Penthouse,
    Villa,
    Loft,
    HighRise,
    Waterfront,
}

impl PropertyType {
    pub const ALL: [PropertyType; 6] = [
        PropertyType::LuxuryApartment,
        PropertyType::Penthouse,
        PropertyType::Villa,
        PropertyType::Loft,
        PropertyType::HighRise,
        PropertyType::Waterfront,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PropertyType::LuxuryApartment => "Luxury Apartment",
            PropertyType::Penthouse => "Penthouse",
            PropertyType::Villa => "Villa",
            PropertyType::Loft => "Loft",
            PropertyType::HighRise => "High-rise",
            PropertyType::Waterfront => "Waterfront",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            PropertyType::LuxuryApartment => "luxury-apartment",
            PropertyType::Penthouse => "penthouse",
            PropertyType::Villa => "villa",
            PropertyType::Loft => "loft",
            PropertyType::HighRise => "high-rise",
            PropertyType::Waterfront => "waterfront",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.slug() == slug)
    }
}

/// The six districts the brokerage operates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    DowntownDistrict,
    UptownPlaza,
    GardenDistrict,
    ArtsQuarter,
    FinancialDistrict,
    Waterfront,
}

impl Location {
    pub const ALL: [Location; 6] = [
        Location::DowntownDistrict,
        Location::UptownPlaza,
        Location::GardenDistrict,
        Location::ArtsQuarter,
        Location::FinancialDistrict,
        Location::Waterfront,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Location::DowntownDistrict => "Downtown District",
            Location::UptownPlaza => "Uptown Plaza",
            Location::GardenDistrict => "Garden District",
            Location::ArtsQuarter => "Arts Quarter",
            Location::FinancialDistrict => "Financial District",
            Location::Waterfront => "Waterfront",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Location::DowntownDistrict => "downtown-district",
            Location::UptownPlaza => "uptown-plaza",
            Location::GardenDistrict => "garden-district",
            Location::ArtsQuarter => "arts-quarter",
            Location::FinancialDistrict => "financial-district",
            Location::Waterfront => "waterfront",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.slug() == slug)
    }
}

/// Marketing badge shown on a listing card. Display only; there is no
/// lifecycle or transition logic behind these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingStatus {
    Featured,
    New,
    Premium,
    Available,
    Exclusive,
    Luxury,
}

impl ListingStatus {
    pub fn label(self) -> &'static str {
        match self {
            ListingStatus::Featured => "Featured",
            ListingStatus::New => "New",
            ListingStatus::Premium => "Premium",
            ListingStatus::Available => "Available",
            ListingStatus::Exclusive => "Exclusive",
            ListingStatus::Luxury => "Luxury",
        }
    }
}

/// A sellable property record shown in the catalog pages. Seed data only;
/// never mutated, only borrowed into view-derived lists.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub id: u32,
    pub name: &'static str,
    pub location: Location,
    pub price: i64,
    pub beds: u32,
    pub baths: u32,
    pub sqft: u32,
    pub year_built: i32,
    pub parking: u32,
    pub status: ListingStatus,
    pub property_type: PropertyType,
    pub image: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Agent {
    pub name: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
}

/// Extended record backing the property detail page. Only some listings
/// carry one; the detail page falls back to the base `Listing` fields
/// for the rest.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingDetail {
    pub listing_id: u32,
    pub full_address: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub amenities: &'static [&'static str],
    pub images: &'static [&'static str],
    pub virtual_tour: &'static str,
    pub agent: Agent,
}

/// Formats a dollar amount with thousands separators, e.g. `$2,850,000`.
pub fn format_price(price: i64) -> String {
    let digits = price.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if price < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}
