//! Static catalog content
//!
//! Tour packages and testimonials shown on the marketing pages, there is no storage behind them

use serde::Serialize;

/// A tour package
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    pub id: u32,
    pub name: &'static str,
    pub image: &'static str,
    pub location: &'static str,
    pub duration: &'static str,
    pub group_size: &'static str,

    /// Price per person, in whole dollars
    pub price: u32,

    /// Discount percentage
    pub discount: u8,

    pub start_date: &'static str,
    pub featured: bool,
    pub description: &'static str,
    pub activities: &'static [&'static str],
    pub rating: f64,
}

/// What a traveler said about a trip
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: u32,
    pub name: &'static str,
    pub location: &'static str,
    pub image: &'static str,
    pub rating: u8,
    pub testimonial: &'static str,
    pub trip: &'static str,
}

pub static PACKAGES: &[Package] = &[
    Package {
        id: 1,
        name: "Bali Adventure: Island Hopping",
        image: "https://images.pexels.com/photos/3225531/pexels-photo-3225531.jpeg",
        location: "Bali, Indonesia",
        duration: "7 Days",
        group_size: "10 People",
        price: 1299,
        discount: 15,
        start_date: "2025-05-15",
        featured: true,
        description: "Experience the best of Bali with this 7-day island hopping adventure, \
            including temples, beaches, and local culture.",
        activities: &["Beach", "Culture", "Adventure"],
        rating: 4.8,
    },
    Package {
        id: 2,
        name: "Greek Islands Discovery",
        image: "https://images.pexels.com/photos/1430677/pexels-photo-1430677.jpeg",
        location: "Santorini & Mykonos, Greece",
        duration: "10 Days",
        group_size: "12 People",
        price: 2199,
        discount: 0,
        start_date: "2025-06-10",
        featured: true,
        description: "Explore the stunning Greek islands with this 10-day tour, including \
            Santorini's sunset views and Mykonos' vibrant nightlife.",
        activities: &["Beach", "Culture", "Romantic"],
        rating: 4.9,
    },
    Package {
        id: 3,
        name: "Japan Heritage Tour",
        image: "https://images.pexels.com/photos/5340085/pexels-photo-5340085.jpeg",
        location: "Tokyo, Kyoto & Osaka, Japan",
        duration: "12 Days",
        group_size: "14 People",
        price: 2799,
        discount: 10,
        start_date: "2025-04-01",
        featured: true,
        description: "Immerse yourself in Japanese culture with this 12-day tour, visiting \
            ancient temples, modern cities, and serene gardens.",
        activities: &["Culture", "History", "Food"],
        rating: 4.7,
    },
    Package {
        id: 4,
        name: "Machu Picchu & Sacred Valley",
        image: "https://images.pexels.com/photos/2356045/pexels-photo-2356045.jpeg",
        location: "Cusco & Machu Picchu, Peru",
        duration: "8 Days",
        group_size: "8 People",
        price: 1799,
        discount: 0,
        start_date: "2025-07-20",
        featured: false,
        description: "Hike the Inca Trail and discover the mysteries of Machu Picchu and the \
            Sacred Valley on this 8-day adventure.",
        activities: &["Hiking", "History", "Adventure"],
        rating: 4.9,
    },
    Package {
        id: 5,
        name: "African Safari: Wildlife Discovery",
        image: "https://images.pexels.com/photos/33045/lion-wild-africa-african.jpg",
        location: "Kenya & Tanzania",
        duration: "10 Days",
        group_size: "6 People",
        price: 3299,
        discount: 5,
        start_date: "2025-09-05",
        featured: false,
        description: "Witness the Big Five and the Great Migration on this 10-day safari \
            adventure through Kenya and Tanzania.",
        activities: &["Wildlife", "Nature", "Photography"],
        rating: 4.8,
    },
    Package {
        id: 6,
        name: "Northern Lights Expedition",
        image: "https://images.pexels.com/photos/1693095/pexels-photo-1693095.jpeg",
        location: "Iceland",
        duration: "6 Days",
        group_size: "12 People",
        price: 2499,
        discount: 0,
        start_date: "2025-01-15",
        featured: false,
        description: "Chase the Northern Lights, explore ice caves, and relax in geothermal hot \
            springs on this 6-day Icelandic adventure.",
        activities: &["Nature", "Photography", "Adventure"],
        rating: 4.7,
    },
];

pub static TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        id: 1,
        name: "Sarah Johnson",
        location: "New York, USA",
        image: "https://images.pexels.com/photos/774909/pexels-photo-774909.jpeg",
        rating: 5,
        testimonial: "Our Bali trip was absolutely incredible! The itinerary was perfect with a \
            great balance of adventure and relaxation.",
        trip: "Bali Adventure",
    },
    Testimonial {
        id: 2,
        name: "Michael Chen",
        location: "Toronto, Canada",
        image: "https://images.pexels.com/photos/614810/pexels-photo-614810.jpeg",
        rating: 5,
        testimonial: "The Greek Islands tour exceeded all my expectations. Every detail was well \
            planned, from the accommodations to the local experiences.",
        trip: "Greek Islands Discovery",
    },
    Testimonial {
        id: 3,
        name: "Emma Rodriguez",
        location: "Melbourne, Australia",
        image: "https://images.pexels.com/photos/733872/pexels-photo-733872.jpeg",
        rating: 4,
        testimonial: "Japan was a dream come true! The cultural immersion was incredible, and \
            our guide's insights made each site visit meaningful.",
        trip: "Japan Heritage Tour",
    },
];

/// Find a package by its ID
pub fn find_package(id: u32) -> Option<&'static Package> {
    PACKAGES.iter().find(|package| package.id == id)
}

/// Packages highlighted on the home page
pub fn featured_packages() -> impl Iterator<Item = &'static Package> {
    PACKAGES.iter().filter(|package| package.featured)
}
