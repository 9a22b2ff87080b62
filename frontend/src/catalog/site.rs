// Copy blocks shown on the informational pages. (title, description) pairs
// unless noted otherwise.

/// (value, label)
pub static HOME_STATS: [(&str, &str); 4] = [
    ("60+", "Years Experience"),
    ("50K+", "Students Trained"),
    ("99%", "Pass Rate"),
    ("79+", "Training Photos"),
];

pub static HOME_FEATURES: [(&str, &str, &str); 3] = [
    ("award-icon", "Since 1965", "Nearly 60 years of excellence in driver education"),
    ("users-icon", "Expert Instructors", "Professionally trained, patient, and experienced trainers"),
    ("car-icon", "Modern Fleet", "Wide range of latest cars and truck simulators"),
];

/// (year, title, description)
pub static MILESTONES: [(&str, &str, &str); 5] = [
    ("1965", "Foundation", "Master Motor Training College was established in Lucknow"),
    ("1980", "Expansion", "Added truck and heavy vehicle training programs"),
    ("2000", "Modernization", "Introduced first driving simulators in the region"),
    ("2010", "Digital Era", "Online booking and digital learning resources added"),
    ("2024", "Present Day", "Over 50,000 students trained with 99% pass rate"),
];

pub static VALUES: [(&str, &str, &str); 4] = [
    ("shield-icon", "Safety First", "Every aspect of our training prioritizes road safety and responsible driving habits."),
    ("users-icon", "Individual Attention", "Small batch sizes ensure personalized guidance for every student."),
    ("award-icon", "Excellence", "Nearly 60 years of maintaining the highest standards in driver education."),
    ("car-icon", "Modern Fleet", "Well-maintained latest vehicles for comfortable and safe learning experience."),
];

pub static AMENITIES: [&str; 8] = [
    "Online Classes Available",
    "Modern Simulators",
    "Gender-Neutral Toilets",
    "LGBTQ+ Friendly",
    "Air-Conditioned Training Vehicles",
    "Flexible Timings",
    "License Assistance",
    "Free Pickup & Drop",
];

/// (value, label)
pub static INSTRUCTOR_ACHIEVEMENTS: [(&str, &str); 4] = [
    ("50K+", "Students Trained"),
    ("99%", "Pass Rate"),
    ("4.8", "Average Rating"),
    ("60", "Years Combined Experience"),
];

pub static INSTRUCTOR_QUALITIES: [(&str, &str); 4] = [
    ("Certified", "All instructors hold professional driving instructor certifications"),
    ("Patient", "Known for their calm and encouraging teaching approach"),
    ("Experienced", "Combined experience of over 60 years in driver education"),
    ("Dedicated", "Committed to every student's success and safety"),
];

pub struct ReviewStats {
    pub total_reviews: &'static str,
    pub average_rating: &'static str,
    pub five_star_percentage: &'static str,
}

pub static REVIEW_STATS: ReviewStats = ReviewStats {
    total_reviews: "1,200+",
    average_rating: "4.8",
    five_star_percentage: "92%",
};

pub static SIMULATOR_BENEFITS: [(&str, &str, &str); 4] = [
    ("shield-icon", "Risk-Free Learning", "Practice complex scenarios without any danger to yourself or others."),
    ("zap-icon", "Accelerated Progress", "Learn faster by repeating scenarios until you master them."),
    ("monitor-icon", "Real-World Scenarios", "Experience traffic, weather, and emergency situations virtually."),
    ("clock-icon", "Flexible Practice", "Practice any time without scheduling concerns or vehicle availability."),
];

pub static SIMULATOR_SCENARIOS: [&str; 10] = [
    "City traffic navigation",
    "Highway merging and lane changes",
    "Roundabout handling",
    "Parking (parallel, reverse, angle)",
    "Night driving conditions",
    "Rainy weather driving",
    "Foggy conditions",
    "Emergency braking",
    "Pedestrian crossing scenarios",
    "School zone awareness",
];

pub static SIMULATOR_PACKAGE: [&str; 4] = [
    "Virtual traffic scenarios",
    "Weather condition practice",
    "Emergency situation training",
    "Personalized feedback",
];

pub struct Stage {
    pub step: u8,
    pub title: &'static str,
    pub duration: &'static str,
    pub description: &'static str,
}

pub static ON_ROAD_STAGES: [Stage; 6] = [
    Stage { step: 1, title: "Vehicle Familiarization", duration: "Day 1-3", description: "Learn all controls, dashboard instruments, and basic vehicle operation in a stationary environment." },
    Stage { step: 2, title: "Empty Ground Practice", duration: "Day 4-7", description: "Practice steering, acceleration, braking, and basic maneuvers on our training ground." },
    Stage { step: 3, title: "Quiet Roads", duration: "Day 8-10", description: "Progress to quiet residential streets with minimal traffic to build confidence." },
    Stage { step: 4, title: "City Traffic", duration: "Day 11-16", description: "Navigate Lucknow city traffic including intersections, roundabouts, and lane changes." },
    Stage { step: 5, title: "Highway Driving", duration: "Day 17-19", description: "Learn highway entry/exit, overtaking, and maintaining high-speed control." },
    Stage { step: 6, title: "Test Preparation", duration: "Day 20-21", description: "Final practice, mock tests, and RTO license test preparation." },
];

pub static ON_ROAD_FEATURES: [(&str, &str, &str); 4] = [
    ("car-icon", "Well-Maintained Vehicles", "Latest model cars with dual controls for safety during training."),
    ("shield-icon", "Safety First", "Instructor can intervene at any moment with dual brake and steering controls."),
    ("users-icon", "Personal Attention", "One-on-one training sessions for focused learning experience."),
    ("award-icon", "Certified Training", "Government-approved training recognized by RTO for license tests."),
];

pub static ON_ROAD_PACKAGE: [&str; 4] = [
    "One-on-one training",
    "All traffic rules",
    "Parking & reversing",
    "License assistance",
];

/// (quote, name, caption)
pub static ON_ROAD_QUOTES: [(&str, &str, &str); 2] = [
    (
        "The patient instructors made me confident on the road. I was nervous at first, but the step-by-step approach helped me overcome my fears.",
        "Nishith Rawat",
        "Car Training Graduate",
    ),
    (
        "Well-maintained vehicles and systematic training. The instructors know exactly how to handle nervous learners like me.",
        "Rahul Verma",
        "Completed 21-Day Course",
    ),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Busyness {
    Calm,
    Moderate,
    Busy,
}

impl Busyness {
    /// Classify a bar height given in percent of the busiest hour.
    pub fn from_percent(percent: u32) -> Self {
        if percent > 60 {
            Busyness::Busy
        } else if percent > 40 {
            Busyness::Moderate
        } else {
            Busyness::Calm
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Busyness::Calm => "Usually calm",
            Busyness::Moderate => "Moderate",
            Busyness::Busy => "Usually busy",
        }
    }
}

/// (hour label, visitor level in percent)
pub static POPULAR_TIMES: [(&str, u32); 6] = [
    ("8 AM", 40),
    ("10 AM", 65),
    ("12 PM", 30),
    ("2 PM", 55),
    ("4 PM", 80),
    ("6 PM", 70),
];

/// Hour with the lowest visitor level.
pub fn quietest_hour() -> Option<&'static str> {
    POPULAR_TIMES
        .iter()
        .min_by_key(|(_, level)| *level)
        .map(|(hour, _)| *hour)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn busyness_thresholds() {
        assert_eq!(Busyness::from_percent(30), Busyness::Calm);
        assert_eq!(Busyness::from_percent(40), Busyness::Calm);
        assert_eq!(Busyness::from_percent(55), Busyness::Moderate);
        assert_eq!(Busyness::from_percent(60), Busyness::Moderate);
        assert_eq!(Busyness::from_percent(65), Busyness::Busy);
        assert_eq!(Busyness::from_percent(80).label(), "Usually busy");
    }

    #[test]
    fn noon_is_quietest() {
        assert_eq!(quietest_hour(), Some("12 PM"));
    }

    #[test]
    fn stages_are_numbered_in_order() {
        for (i, stage) in ON_ROAD_STAGES.iter().enumerate() {
            assert_eq!(stage.step as usize, i + 1);
        }
    }
}
