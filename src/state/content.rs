/// Static site content for the kiosk
///
/// Everything on the page except the carousel index is read-only copy,
/// defined once here as literal arrays and rendered straight into widgets.
/// None of these entities carries runtime state.

/// Brand name shown in the navigation bar and footer.
pub const BRAND: &str = "RC Fitness";

/// Hero badge line.
pub const HERO_BADGE: &str = "RC Fitness 1st";

/// Hero headline, split so the second line can take the accent color.
pub const HERO_HEADLINE: (&str, &str) = ("Unleash Your", "Inner Beast");

/// Hero paragraph.
pub const HERO_COPY: &str = "Push beyond your limits with cutting-edge equipment, \
expert guidance, and a community that never settles for less.";

/// Footer contact block.
pub const ADDRESS_PANDU: &str =
    "Opp. Railway Co-op Store, Kamakhya Colony, Bara Bazar, Pandu, Guwahati, Assam 781012";
pub const ADDRESS_MALIGAON: &str =
    "Opp. Railway higher secondary school, Maligaon Gate No. 1, Guwahati, Assam 781011";
pub const PHONE: &str = "+91 7002434440";

/// A single entry in the virtual tour gallery.
/// Defined once at startup; never mutated, created, or destroyed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TourImage {
    /// Locator of the photo asset, relative to the working directory.
    pub source: &'static str,
    /// Display string for the photo, used for the caption.
    pub label: &'static str,
}

/// A "why choose us" card.
#[derive(Debug, Clone, Copy)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// An equipment zone card with its item list.
#[derive(Debug, Clone, Copy)]
pub struct EquipmentZone {
    pub name: &'static str,
    pub items: &'static [&'static str],
}

/// A membership plan card. `popular` promotes the card visually.
#[derive(Debug, Clone, Copy)]
pub struct MembershipPlan {
    pub name: &'static str,
    pub price: &'static str,
    pub period: &'static str,
    pub features: &'static [&'static str],
    pub popular: bool,
}

/// A member review card.
#[derive(Debug, Clone, Copy)]
pub struct Review {
    pub name: &'static str,
    /// Star count, 1 to 5.
    pub rating: u8,
    pub comment: &'static str,
}

/// One entry of the hero stats row.
#[derive(Debug, Clone, Copy)]
pub struct HeroStat {
    pub value: &'static str,
    pub caption: &'static str,
}

/// The virtual tour gallery, in display order.
pub fn tour_gallery() -> Vec<TourImage> {
    vec![
        TourImage { source: "assets/tour/rcfit1.jpg", label: "RC Fit 1" },
        TourImage { source: "assets/tour/rcfit2.jpg", label: "RC Fit 2" },
        TourImage { source: "assets/tour/rcfit3.jpg", label: "RC Fit 3" },
        TourImage { source: "assets/tour/rcfit4.jpg", label: "RC Fit 4" },
        TourImage { source: "assets/tour/rcfit5.jpg", label: "RC Fit 5" },
        TourImage { source: "assets/tour/rcfit6.jpg", label: "RC Fit 6" },
        TourImage { source: "assets/tour/rcfit7.jpg", label: "RC Fit 7" },
        TourImage { source: "assets/tour/rcfit8.jpg", label: "RC Fit 8" },
    ]
}

/// Hero stats row.
pub fn hero_stats() -> Vec<HeroStat> {
    vec![
        HeroStat { value: "500+", caption: "Active Members" },
        HeroStat { value: "2", caption: "Branches" },
        HeroStat { value: "15+", caption: "Expert Trainers" },
    ]
}

/// "Why choose us" cards.
pub fn features() -> Vec<Feature> {
    vec![
        Feature {
            icon: "🏋",
            title: "State-of-the-Art Equipment",
            description: "Latest fitness technology and premium equipment for optimal results",
        },
        Feature {
            icon: "👥",
            title: "Expert Trainers",
            description: "Certified professionals to guide your fitness journey",
        },
        Feature {
            icon: "🕑",
            title: "2 Branches",
            description: "Now open at 2 convenient locations for you.",
        },
        Feature {
            icon: "🏅",
            title: "Group Classes",
            description: "Dynamic group sessions for motivation and community",
        },
    ]
}

/// Equipment zone cards.
pub fn equipment_zones() -> Vec<EquipmentZone> {
    vec![
        EquipmentZone {
            name: "Cardio Zone",
            items: &["Treadmills", "Ellipticals", "Rowing Machines", "Spin Bikes"],
        },
        EquipmentZone {
            name: "Strength Training",
            items: &["Free Weights", "Cable Machines", "Smith Machine", "Power Racks"],
        },
        EquipmentZone {
            name: "Functional Training",
            items: &["TRX Systems", "Battle Ropes", "Kettlebells", "Medicine Balls"],
        },
        EquipmentZone {
            name: "Recovery Zone",
            items: &["Massage Chairs", "Stretching Area", "Foam Rollers", "Sauna"],
        },
    ]
}

/// Membership plan cards.
pub fn membership_plans() -> Vec<MembershipPlan> {
    vec![
        MembershipPlan {
            name: "Gym",
            price: "₹1000",
            period: "/month",
            features: &["Gym Access", "Locker Room", "Basic Equipment", "Mobile App"],
            popular: false,
        },
        MembershipPlan {
            name: "Gym + Cardio",
            price: "₹1500",
            period: "/month",
            features: &[
                "Everything in Basic",
                "Group Classes",
                "Personal Training Session",
                "Nutrition Consultation",
                "Guest Passes",
            ],
            popular: true,
        },
        MembershipPlan {
            name: "Personal Trainer",
            price: "₹2500",
            period: "/month",
            features: &[
                "Everything in Premium",
                "Unlimited Personal Training",
                "Meal Planning",
                "Recovery Services",
                "VIP Lounge Access",
            ],
            popular: false,
        },
    ]
}

/// Member review cards.
pub fn reviews() -> Vec<Review> {
    vec![
        Review {
            name: "Sarah Johnson",
            rating: 5,
            comment: "Amazing facility with top-notch equipment. The trainers are \
incredibly knowledgeable and supportive!",
        },
        Review {
            name: "Mike Chen",
            rating: 5,
            comment: "Best gym I've ever been to. Clean, modern, and the 24/7 access \
is perfect for my schedule.",
        },
        Review {
            name: "Emily Davis",
            rating: 5,
            comment: "The group classes are fantastic! Great community and excellent \
results in just 3 months.",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tour_gallery_shape() {
        let gallery = tour_gallery();
        assert_eq!(gallery.len(), 8);
        for image in &gallery {
            assert!(image.source.ends_with(".jpg"));
            assert!(!image.label.is_empty());
        }
    }

    #[test]
    fn test_gallery_sources_are_unique() {
        let gallery = tour_gallery();
        for (i, a) in gallery.iter().enumerate() {
            for b in gallery.iter().skip(i + 1) {
                assert_ne!(a.source, b.source);
            }
        }
    }

    #[test]
    fn test_exactly_one_popular_plan() {
        let popular = membership_plans().iter().filter(|p| p.popular).count();
        assert_eq!(popular, 1);
    }

    #[test]
    fn test_review_ratings_in_range() {
        for review in reviews() {
            assert!((1..=5).contains(&review.rating));
            assert!(!review.comment.is_empty());
        }
    }

    #[test]
    fn test_card_sections_are_populated() {
        assert_eq!(features().len(), 4);
        assert_eq!(equipment_zones().len(), 4);
        assert_eq!(hero_stats().len(), 3);
        for zone in equipment_zones() {
            assert_eq!(zone.items.len(), 4);
        }
    }
}
