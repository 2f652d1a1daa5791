use crate::domain::listing::{
    Agent, Listing, ListingDetail, ListingStatus, Location, PropertyType,
};

pub(super) static LISTINGS: [Listing; 6] = [
    Listing {
        id: 1,
        name: "GAWDA",
        location: Location::DowntownDistrict,
        price: 2_850_000,
        beds: 3,
        baths: 2,
        sqft: 2_400,
        year_built: 2023,
        parking: 2,
        status: ListingStatus::Featured,
        property_type: PropertyType::LuxuryApartment,
        image: "/static/images/modern-luxury-apartment-interior.png",
    },
    Listing {
        id: 2,
        name: "SERENITY HEIGHTS",
        location: Location::UptownPlaza,
        price: 1_950_000,
        beds: 2,
        baths: 2,
        sqft: 1_800,
        year_built: 2024,
        parking: 1,
        status: ListingStatus::New,
        property_type: PropertyType::Penthouse,
        image: "/static/images/modern-kitchen-marble-countertops.png",
    },
    Listing {
        id: 3,
        name: "VISTA GARDENS",
        location: Location::GardenDistrict,
        price: 3_200_000,
        beds: 4,
        baths: 3,
        sqft: 3_200,
        year_built: 2022,
        parking: 3,
        status: ListingStatus::Premium,
        property_type: PropertyType::Villa,
        image: "/static/images/spacious-living-room.png",
    },
    Listing {
        id: 4,
        name: "URBAN LOFT",
        location: Location::ArtsQuarter,
        price: 1_450_000,
        beds: 2,
        baths: 1,
        sqft: 1_400,
        year_built: 2021,
        parking: 1,
        status: ListingStatus::Available,
        property_type: PropertyType::Loft,
        image: "/static/images/luxury-master-bedroom.png",
    },
    Listing {
        id: 5,
        name: "SKYLINE TOWER",
        location: Location::FinancialDistrict,
        price: 4_100_000,
        beds: 3,
        baths: 3,
        sqft: 2_800,
        year_built: 2023,
        parking: 2,
        status: ListingStatus::Exclusive,
        property_type: PropertyType::HighRise,
        image: "/static/images/modern-luxury-apartment-interior.png",
    },
    Listing {
        id: 6,
        name: "COASTAL RETREAT",
        location: Location::Waterfront,
        price: 5_500_000,
        beds: 5,
        baths: 4,
        sqft: 4_200,
        year_built: 2024,
        parking: 4,
        status: ListingStatus::Luxury,
        property_type: PropertyType::Waterfront,
        image: "/static/images/spacious-living-room.png",
    },
];

pub(super) static LISTING_DETAILS: [ListingDetail; 1] = [ListingDetail {
    listing_id: 1,
    full_address: "123 Premium Avenue, Downtown District, City 12345",
    description: "Experience unparalleled luxury in this stunning modern apartment \
        featuring floor-to-ceiling windows, premium finishes, and breathtaking city \
        views. This meticulously designed space offers the perfect blend of \
        contemporary elegance and functional living.",
    features: &[
        "Floor-to-ceiling windows",
        "Premium hardwood floors",
        "Gourmet kitchen with marble countertops",
        "Master suite with walk-in closet",
        "Private balcony with city views",
        "In-unit laundry",
        "Smart home technology",
        "Concierge service",
    ],
    amenities: &[
        "24/7 Security",
        "Fitness Center",
        "Rooftop Pool",
        "Business Center",
        "Valet Parking",
        "Pet Spa",
        "Wine Storage",
        "Guest Suites",
    ],
    images: &[
        "/static/images/modern-luxury-apartment-interior.png",
        "/static/images/modern-kitchen-marble-countertops.png",
        "/static/images/spacious-living-room.png",
        "/static/images/luxury-master-bedroom.png",
    ],
    virtual_tour: "https://example.com/virtual-tour",
    agent: Agent {
        name: "Sarah Johnson",
        phone: "+1 (555) 123-4567",
        email: "sarah@flatshow.com",
    },
}];
