use crate::domain::listing::Agent;
use serde::Serialize;

/// Occupancy state of a building section. Drives the legend/badge color
/// in the viewer; there is no transition logic behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionStatus {
    Available,
    Rented,
    Pending,
}

impl SectionStatus {
    pub const ALL: [SectionStatus; 3] = [
        SectionStatus::Available,
        SectionStatus::Rented,
        SectionStatus::Pending,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SectionStatus::Available => "Available",
            SectionStatus::Rented => "Rented",
            SectionStatus::Pending => "Pending",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            SectionStatus::Available => "available",
            SectionStatus::Rented => "rented",
            SectionStatus::Pending => "pending",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.slug() == slug)
    }

    /// Legend swatch color in the viewer overlay.
    pub fn legend_color(self) -> &'static str {
        match self {
            SectionStatus::Available => "#22c55e",
            SectionStatus::Rented => "#ef4444",
            SectionStatus::Pending => "#eab308",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnitType {
    Studio,
    OneBedroom,
    TwoBedroom,
    Penthouse,
}

impl UnitType {
    pub const ALL: [UnitType; 4] = [
        UnitType::Studio,
        UnitType::OneBedroom,
        UnitType::TwoBedroom,
        UnitType::Penthouse,
    ];

    pub fn label(self) -> &'static str {
        match self {
            UnitType::Studio => "Studio Apartments",
            UnitType::OneBedroom => "1 Bedroom Apartments",
            UnitType::TwoBedroom => "2 Bedroom Apartments",
            UnitType::Penthouse => "Penthouse Apartments",
        }
    }

    pub fn short_label(self) -> &'static str {
        match self {
            UnitType::Studio => "Studio",
            UnitType::OneBedroom => "1 Bedroom",
            UnitType::TwoBedroom => "2 Bedroom",
            UnitType::Penthouse => "Penthouse",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            UnitType::Studio => "studio",
            UnitType::OneBedroom => "one-bedroom",
            UnitType::TwoBedroom => "two-bedroom",
            UnitType::Penthouse => "penthouse",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.slug() == slug)
    }
}

/// A named sub-volume of the building model covering a group of apartment
/// units. Position and extent are in scene units, centered on the building
/// origin. Seed data only; never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub id: u32,
    pub wing: &'static str,
    pub unit: &'static str,
    pub status: SectionStatus,
    pub unit_type: UnitType,
    /// Monthly rent in dollars.
    pub price: i64,
    pub size_m2: u32,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub position: [f32; 3],
    pub extent: [f32; 3],
    pub outline_color: &'static str,
    pub image: &'static str,
    pub description: &'static str,
    pub amenities: &'static [&'static str],
    pub available_units: u32,
    pub agent: Agent,
}
