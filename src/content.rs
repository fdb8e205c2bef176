//! Static copy and imagery for the pages.

#[derive(Clone, Debug, PartialEq)]
pub struct Slide {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub image: &'static str,
    pub cta_label: &'static str,
    pub cta_href: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CarouselItem {
    pub title: &'static str,
    pub caption: &'static str,
    pub image: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Product {
    pub name: &'static str,
    pub category: &'static str,
    pub image: &'static str,
    pub overlay_text: Option<&'static str>,
}

pub const HERO_SLIDES: &[Slide] = &[
    Slide {
        title: "Light that shapes architecture",
        subtitle: "Architectural luminaires designed and built in Europe.",
        image: "/assets/hero/architecture.jpg",
        cta_label: "Explore products",
        cta_href: "#products",
    },
    Slide {
        title: "Outdoor lighting for every season",
        subtitle: "Weatherproof fittings for facades, gardens and streets.",
        image: "/assets/hero/outdoor.jpg",
        cta_label: "See projects",
        cta_href: "#projects",
    },
    Slide {
        title: "Efficient by design",
        subtitle: "Low-energy LED systems with long service lives.",
        image: "/assets/hero/efficiency.jpg",
        cta_label: "Our approach",
        cta_href: "#sustainability",
    },
];

pub const CATEGORIES: &[CarouselItem] = &[
    CarouselItem { title: "Ceiling", caption: "Recessed and surface mounted", image: "/assets/categories/ceiling.jpg" },
    CarouselItem { title: "Wall", caption: "Sconces and wall washers", image: "/assets/categories/wall.jpg" },
    CarouselItem { title: "Pendant", caption: "Suspended statement pieces", image: "/assets/categories/pendant.jpg" },
    CarouselItem { title: "Track", caption: "Flexible accent lighting", image: "/assets/categories/track.jpg" },
    CarouselItem { title: "Outdoor", caption: "Bollards, spots and floods", image: "/assets/categories/outdoor.jpg" },
];

pub const TYPES: &[CarouselItem] = &[
    CarouselItem { title: "Downlights", caption: "Glare-free general lighting", image: "/assets/types/downlight.jpg" },
    CarouselItem { title: "Linear", caption: "Continuous lines of light", image: "/assets/types/linear.jpg" },
    CarouselItem { title: "Spotlights", caption: "Precise accents", image: "/assets/types/spot.jpg" },
    CarouselItem { title: "Floodlights", caption: "Wide-area illumination", image: "/assets/types/flood.jpg" },
];

pub const PROJECTS: &[CarouselItem] = &[
    CarouselItem { title: "Harbour Museum", caption: "Facade and gallery lighting", image: "/assets/projects/museum.jpg" },
    CarouselItem { title: "Riverside Offices", caption: "Workplace lighting retrofit", image: "/assets/projects/offices.jpg" },
    CarouselItem { title: "Old Town Square", caption: "Public realm and landmarks", image: "/assets/projects/square.jpg" },
    CarouselItem { title: "Alpine Hotel", caption: "Hospitality and spa", image: "/assets/projects/hotel.jpg" },
];

pub const PRODUCTS: &[Product] = &[
    Product { name: "Orbit 120", category: "Pendant", image: "/assets/products/orbit.jpg", overlay_text: Some("View details") },
    Product { name: "Linea Pro", category: "Linear", image: "/assets/products/linea.jpg", overlay_text: Some("View details") },
    Product { name: "Nova Spot", category: "Track", image: "/assets/products/nova.jpg", overlay_text: Some("View details") },
    Product { name: "Terra Bollard", category: "Outdoor", image: "/assets/products/terra.jpg", overlay_text: None },
];
