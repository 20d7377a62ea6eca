//! Frontend type definitions.
//!
//! Static page content lives here as plain structs so components stay
//! declarative and the stat/counter wiring can parse targets from the same
//! source the markup renders.

/// One entry in a stat band ("500+", "98%", "5K+").
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatSpec {
    pub label: &'static str,
    /// Authored display text; also the counter animation target.
    pub value: &'static str,
}

/// A product card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProductSpec {
    pub title: &'static str,
    pub description: &'static str,
    pub price: &'static str,
    pub image: &'static str,
}

/// A testimonial card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TestimonialSpec {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

pub const HERO_STATS: &[StatSpec] = &[
    StatSpec {
        label: "Happy Customers",
        value: "500+",
    },
    StatSpec {
        label: "Satisfaction Rate",
        value: "98%",
    },
    StatSpec {
        label: "Deliveries Made",
        value: "5K+",
    },
];

pub const PRODUCTS: &[ProductSpec] = &[
    ProductSpec {
        title: "Garden Starter Kit",
        description: "Everything you need to start an organic garden at home.",
        price: "$49",
        image: "/images/products/starter-kit.jpg",
    },
    ProductSpec {
        title: "Herb Collection",
        description: "Twelve culinary herbs, grown without pesticides.",
        price: "$29",
        image: "/images/products/herbs.jpg",
    },
    ProductSpec {
        title: "Compost Bundle",
        description: "Rich, living compost from our own green waste cycle.",
        price: "$19",
        image: "/images/products/compost.jpg",
    },
];

pub const TESTIMONIALS: &[TestimonialSpec] = &[
    TestimonialSpec {
        quote: "The starter kit turned our balcony into a real garden. \
                Support answered every beginner question we had.",
        author: "Maya R.",
        role: "Home gardener",
    },
    TestimonialSpec {
        quote: "We stock Verdant herbs in our kitchen because the quality is \
                simply consistent, week after week.",
        author: "Daniel K.",
        role: "Restaurant owner",
    },
    TestimonialSpec {
        quote: "Delivery is always on time and the packaging is completely \
                compostable. That matters to us.",
        author: "Sofia L.",
        role: "Community garden lead",
    },
];
