//! Site routes and catalogue data.

use lunette_core::Error;

/// The closed set of pages. Unknown paths are rejected at parse time and
/// navigation to them is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SiteRoute {
    Home,
    Collection,
    About,
    Contact,
}

impl SiteRoute {
    pub fn path(self) -> &'static str {
        match self {
            SiteRoute::Home => "/",
            SiteRoute::Collection => "/collection",
            SiteRoute::About => "/about",
            SiteRoute::Contact => "/contact",
        }
    }

}

impl std::str::FromStr for SiteRoute {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "/" => Ok(SiteRoute::Home),
            "/collection" => Ok(SiteRoute::Collection),
            "/about" => Ok(SiteRoute::About),
            "/contact" => Ok(SiteRoute::Contact),
            other => Err(Error::UnknownRoute { path: other.to_string() }),
        }
    }
}

impl std::fmt::Display for SiteRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

/// A customer voice shown in the home-page carousel.
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub quote: &'static str,
    pub rating: u8,
}

pub const TESTIMONIALS: [Testimonial; 4] = [
    Testimonial {
        name: "Sarah Chen",
        role: "Fashion Designer",
        quote: "The perfect blend of style and function. These frames have \
                become my signature look, and the quality is exceptional.",
        rating: 5,
    },
    Testimonial {
        name: "Michael Rodriguez",
        role: "Architect",
        quote: "As someone who values precision, Idée Opticals exceeded my \
                expectations. Comfortable and stunning at the same time.",
        rating: 5,
    },
    Testimonial {
        name: "Emma Thompson",
        role: "Photographer",
        quote: "I've tried many brands, but nothing compares to the \
                craftsmanship here. The attention to detail is remarkable.",
        rating: 5,
    },
    Testimonial {
        name: "David Kim",
        role: "Entrepreneur",
        quote: "Professional service, premium quality, timeless design. An \
                investment in both style and vision.",
        rating: 5,
    },
];

/// A feature card in the home page's "Why Choose Us" section.
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub blurb: &'static str,
}

pub const FEATURES: [Feature; 6] = [
    Feature {
        icon: "✨",
        title: "Premium Quality",
        blurb: "The finest materials and precision engineering, built to last.",
    },
    Feature {
        icon: "🎨",
        title: "Design Excellence",
        blurb: "Fashion-forward lines balanced with classic restraint.",
    },
    Feature {
        icon: "👓",
        title: "Expert Fitting",
        blurb: "Fitted by professional opticians for comfort and correct vision.",
    },
    Feature {
        icon: "🛡",
        title: "Lifetime Warranty",
        blurb: "Hinges and frames serviced for as long as you own them.",
    },
    Feature {
        icon: "🌍",
        title: "Sustainable",
        blurb: "Eco-friendly materials and ethical manufacturing.",
    },
    Feature {
        icon: "💎",
        title: "Luxury Experience",
        blurb: "Premium service from consultation to delivery.",
    },
];

/// One entry in the frames catalogue.
pub struct FrameDesign {
    pub name: &'static str,
    pub price_usd: u16,
    pub tag: &'static str,
    pub blurb: &'static str,
}

pub const FRAME_DESIGNS: [FrameDesign; 6] = [
    FrameDesign {
        name: "Meridian",
        price_usd: 289,
        tag: "Classic",
        blurb: "Hand-polished acetate with a low-profile keyhole bridge.",
    },
    FrameDesign {
        name: "Atlas",
        price_usd: 319,
        tag: "Bold",
        blurb: "Wide square rims in matte charcoal, built for presence.",
    },
    FrameDesign {
        name: "Solstice",
        price_usd: 275,
        tag: "Round",
        blurb: "Featherweight titanium circles with adjustable pads.",
    },
    FrameDesign {
        name: "Ligne",
        price_usd: 342,
        tag: "Minimal",
        blurb: "A single drawn wire of brushed steel, almost invisible.",
    },
    FrameDesign {
        name: "Cascade",
        price_usd: 298,
        tag: "Cat-eye",
        blurb: "Upswept amber acetate with gold-pin hinges.",
    },
    FrameDesign {
        name: "Voile",
        price_usd: 265,
        tag: "Rimless",
        blurb: "Lens-mounted temples and nothing else in the way.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_route_round_trips_through_its_path() {
        for route in [
            SiteRoute::Home,
            SiteRoute::Collection,
            SiteRoute::About,
            SiteRoute::Contact,
        ] {
            assert_eq!(route.path().parse::<SiteRoute>().unwrap(), route);
        }
    }

    #[test]
    fn unknown_paths_are_rejected() {
        let err = "/careers".parse::<SiteRoute>().unwrap_err();
        assert!(err.to_string().contains("/careers"));
    }
}
