//! Static copy for the landing page.
//!
//! Choreography presets consume this to decide how many elements each
//! section mounts; hosts consume it to render the actual text.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogoBadge {
    pub id: &'static str,
    pub name: &'static str,
}

/// Client logos shown in the hero marquee. The host renders this
/// sequence three times back to back so the loop has no visible seam.
pub const LOGOS: [LogoBadge; 7] = [
    LogoBadge {
        id: "01",
        name: "Boulderfield",
    },
    LogoBadge {
        id: "02",
        name: "Northglen",
    },
    LogoBadge {
        id: "03",
        name: "Exalt Advisors",
    },
    LogoBadge {
        id: "04",
        name: "Heritage Point",
    },
    LogoBadge {
        id: "05",
        name: "Camden Park",
    },
    LogoBadge {
        id: "06",
        name: "Shorely Clean",
    },
    LogoBadge {
        id: "07",
        name: "June Road",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureCard {
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURE_CARDS: [FeatureCard; 3] = [
    FeatureCard {
        title: "Scrapes for local leads",
        description: "Finds every business in your service area and builds a clean prospect list overnight.",
    },
    FeatureCard {
        title: "Best practice emails",
        description: "Writes outreach that lands in the inbox, tuned to what actually gets replies.",
    },
    FeatureCard {
        title: "Automated outreach",
        description: "Runs the follow-up cadence for you and hands over the conversation when a lead bites.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "Our pipeline doubled in the first quarter without hiring anyone.",
        author: "Sarah Johnson",
        role: "Marketing Director, TechCorp",
    },
    Testimonial {
        quote: "The outreach reads like we wrote it ourselves, just faster.",
        author: "Michael Chen",
        role: "Content Manager, StartupX",
    },
    Testimonial {
        quote: "We stopped paying an agency and kept the results.",
        author: "Priya Patel",
        role: "CEO, Digital Solutions",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlogPost {
    pub title: &'static str,
    pub date: &'static str,
}

pub const BLOG_POSTS: [BlogPost; 3] = [
    BlogPost {
        title: "7 Automated Lead Generation Tools for Local Service Companies",
        date: "2025-05-12",
    },
    BlogPost {
        title: "How to Generate Leads from Google Maps: A Step-by-Step Guide",
        date: "2025-06-03",
    },
    BlogPost {
        title: "Cold Email vs. Traditional Marketing: Which Works Better in 2025?",
        date: "2025-07-18",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingTier {
    pub name: &'static str,
    pub monthly_price_usd: u32,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub featured: bool,
    pub cta: &'static str,
}

pub const PRICING_TIERS: [PricingTier; 2] = [
    PricingTier {
        name: "Month-by-Month",
        monthly_price_usd: 99,
        description: "Flexible pricing with no long-term commitment",
        features: &[
            "Up to 3 simultaneous campaigns",
            "Scrape any type of local business",
            "Fully managed email deliverability",
            "CRM and automated marketing",
            "24/7 priority support",
            "Weekly performance reports",
        ],
        featured: true,
        cta: "Start Free Trial",
    },
    PricingTier {
        name: "Annual Savings",
        monthly_price_usd: 79,
        description: "Save 20% with annual billing",
        features: &[
            "Up to 5 simultaneous campaigns",
            "All features from the monthly plan",
            "Priority feature requests",
            "Dedicated account manager",
            "Advanced analytics dashboard",
            "Quarterly strategy sessions",
        ],
        featured: false,
        cta: "Choose Annual",
    },
];
