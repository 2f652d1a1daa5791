use crate::domain::listing::Agent;
use crate::domain::section::{Section, SectionStatus, UnitType};

pub(super) static SECTIONS: [Section; 4] = [
    Section {
        id: 1,
        wing: "North Wing",
        unit: "Section A",
        status: SectionStatus::Available,
        unit_type: UnitType::TwoBedroom,
        price: 2_800,
        size_m2: 75,
        bedrooms: 2,
        bathrooms: 2,
        position: [-3.0, 1.0, 2.0],
        extent: [4.0, 5.0, 3.0],
        outline_color: "#3b82f6",
        image: "/static/images/modern-luxury-apartment-interior.png",
        description: "Modern apartments in the north wing with excellent natural light \
            and city views.",
        amenities: &[
            "Air Conditioning",
            "Hardwood Floors",
            "In-unit Laundry",
            "Balcony",
            "City Views",
        ],
        available_units: 3,
        agent: Agent {
            name: "Sarah Johnson",
            phone: "+1 (555) 123-4567",
            email: "sarah@flatshow.com",
        },
    },
    Section {
        id: 2,
        wing: "South Wing",
        unit: "Section B",
        status: SectionStatus::Available,
        unit_type: UnitType::OneBedroom,
        price: 2_200,
        size_m2: 60,
        bedrooms: 1,
        bathrooms: 1,
        position: [3.0, 1.0, 2.0],
        extent: [4.0, 5.0, 3.0],
        outline_color: "#8b5cf6",
        image: "/static/images/luxury-master-bedroom.png",
        description: "Cozy one-bedroom apartments in the south wing with updated kitchens.",
        amenities: &[
            "Air Conditioning",
            "Hardwood Floors",
            "In-unit Laundry",
            "Updated Kitchen",
        ],
        available_units: 2,
        agent: Agent {
            name: "Michael Chen",
            phone: "+1 (555) 234-5678",
            email: "michael@flatshow.com",
        },
    },
    Section {
        id: 3,
        wing: "East Wing",
        unit: "Section C",
        status: SectionStatus::Rented,
        unit_type: UnitType::Studio,
        price: 1_800,
        size_m2: 45,
        bedrooms: 0,
        bathrooms: 1,
        position: [-3.0, 1.0, -2.0],
        extent: [4.0, 5.0, 3.0],
        outline_color: "#10b981",
        image: "/static/images/spacious-living-room.png",
        description: "Efficient studio apartments in the east wing with high ceilings.",
        amenities: &["Air Conditioning", "Hardwood Floors", "High Ceilings"],
        available_units: 0,
        agent: Agent {
            name: "Emily Rodriguez",
            phone: "+1 (555) 345-6789",
            email: "emily@flatshow.com",
        },
    },
    Section {
        id: 4,
        wing: "West Wing",
        unit: "Section D",
        status: SectionStatus::Pending,
        unit_type: UnitType::Penthouse,
        price: 4_200,
        size_m2: 110,
        bedrooms: 3,
        bathrooms: 2,
        position: [3.0, 1.0, -2.0],
        extent: [4.0, 5.0, 3.0],
        outline_color: "#f59e0b",
        image: "/static/images/modern-kitchen-marble-countertops.png",
        description: "Luxury penthouse apartments in the west wing with panoramic views.",
        amenities: &["Private Terrace", "Premium Appliances", "Panoramic Views"],
        available_units: 1,
        agent: Agent {
            name: "David Kim",
            phone: "+1 (555) 456-7890",
            email: "david@flatshow.com",
        },
    },
];
