// Static copy rendered into the page shell's dynamic tracks.

pub const NAV_LINKS: &[&str] = &["Home", "Our Story", "Collections", "Reviews"];

pub const HERO_FEATURES: &[&str] = &["Vegan", "Cruelty-Free", "Dermatologist Tested"];

pub const BRANDS: &[&str] = &[
    "VOGUE",
    "ELLE",
    "Cosmopolitan",
    "Marie Claire",
    "Glamour",
    "Harper's BAZAAR",
    "Allure",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Review {
    pub text: &'static str,
    pub name: &'static str,
    pub location: &'static str,
    pub image: &'static str,
}

pub const REVIEWS: &[Review] = &[
    Review {
        text: "I've finally found a brand that understands my skin! The lip tint is literally perfect for college.",
        name: "Priya K.",
        location: "New Delhi",
        image: "https://images.unsplash.com/photo-1534528741775-53994a69daeb?q=80&w=1964&auto=format&fit=crop",
    },
    Review {
        text: "Beautyhub is an obsession. The packaging is so aesthetic I keep it on my desk.",
        name: "Sarah M.",
        location: "Mumbai",
        image: "https://images.unsplash.com/photo-1531746020798-e6953c6e8e04?q=80&w=1964&auto=format&fit=crop",
    },
    Review {
        text: "Fast delivery and the products smell amazing. It feels premium but accessible.",
        name: "Ananya S.",
        location: "Bangalore",
        image: "https://images.unsplash.com/photo-1517841905240-472988babdf9?q=80&w=1887&auto=format&fit=crop",
    },
    Review {
        text: "The serum changed my texture in a week. Glow game is strong!",
        name: "Riya P.",
        location: "Pune",
        image: "https://images.unsplash.com/photo-1524504388940-b1c1722653e1?q=80&w=1887&auto=format&fit=crop",
    },
    Review {
        text: "I love the sustainability focus. Finally a brand that cares.",
        name: "Meera J.",
        location: "Jaipur",
        image: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?q=80&w=1887&auto=format&fit=crop",
    },
    Review {
        text: "Best highlighter hands down. It looks so natural in sunlight.",
        name: "Kavya L.",
        location: "Chennai",
        image: "https://images.unsplash.com/photo-1529626455594-4ff0802cfb7e?q=80&w=1887&auto=format&fit=crop",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Collection {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub delay_ms: u32,
}

pub const COLLECTIONS: &[Collection] = &[
    Collection {
        title: "Glow Makeup",
        description: "Lightweight tints & glossy finishes for that golden hour look.",
        image: "https://images.unsplash.com/photo-1512496015851-a90fb38ba796?q=80&w=1035&auto=format&fit=crop",
        delay_ms: 0,
    },
    Collection {
        title: "Clean Skincare",
        description: "Hydration powered by superfoods to keep you dewy all day.",
        image: "https://images.unsplash.com/photo-1629198688000-71f23e745b6e?q=80&w=1780&auto=format&fit=crop",
        delay_ms: 150,
    },
    Collection {
        title: "Self-Care Tools",
        description: "Jade rollers and silk essentials for your Sunday reset rituals.",
        image: "https://images.unsplash.com/photo-1600880292089-90a7e086ee0c?q=80&w=1887&auto=format&fit=crop",
        delay_ms: 300,
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const STORY_STATS: &[Stat] = &[
    Stat {
        value: "100%",
        label: "Vegan",
    },
    Stat {
        value: "0%",
        label: "Toxins",
    },
    Stat {
        value: "24/7",
        label: "Glow",
    },
];

// Marquee repetition
pub const BRAND_COPIES: usize = 3;
pub const REVIEW_COPIES: usize = 2;
pub const REVIEW_STARS: usize = 5;
