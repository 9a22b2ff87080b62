#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CourseIcon {
    Car,
    Truck,
    Monitor,
    Users,
}

impl CourseIcon {
    pub fn class(self) -> &'static str {
        match self {
            CourseIcon::Car => "car-icon",
            CourseIcon::Truck => "truck-icon",
            CourseIcon::Monitor => "monitor-icon",
            CourseIcon::Users => "users-icon",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Course {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub price: &'static str,
    pub original_price: Option<&'static str>,
    pub duration: &'static str,
    pub image: &'static str,
    pub icon: CourseIcon,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub curriculum: &'static [&'static str],
}

pub static COURSES: [Course; 5] = [
    Course {
        id: "car-basic",
        title: "Basic Car Training",
        subtitle: "Complete Beginner Course",
        price: "₹4,000",
        original_price: None,
        duration: "21 Days",
        image: "on-road-training.jpg",
        icon: CourseIcon::Car,
        description: "Comprehensive car driving course designed for complete beginners. Learn from controls to confident road driving.",
        features: &[
            "One-on-one training sessions",
            "Simulator practice before road",
            "All traffic rules and signs",
            "Parking and reversing skills",
            "License test preparation",
            "Flexible timing options",
        ],
        curriculum: &[
            "Day 1-3: Introduction to vehicle controls and dashboard",
            "Day 4-7: Simulator training - basic maneuvers",
            "Day 8-10: Empty ground practice - steering and brakes",
            "Day 11-14: City traffic introduction",
            "Day 15-18: Highway driving basics",
            "Day 19-21: Test preparation and license assistance",
        ],
    },
    Course {
        id: "truck",
        title: "Truck Driving Course",
        subtitle: "Heavy Vehicle Training",
        price: "₹4,000",
        original_price: None,
        duration: "30 Days",
        image: "truck-training.jpg",
        icon: CourseIcon::Truck,
        description: "Professional heavy vehicle training for commercial driving license. Overcome your fears and become a confident truck driver.",
        features: &[
            "Heavy vehicle controls mastery",
            "Safety protocols training",
            "Highway and long-route driving",
            "Night driving practice",
            "Commercial license assistance",
            "Job placement support",
        ],
        curriculum: &[
            "Week 1: Truck basics, controls, and safety checks",
            "Week 2: Simulator training and empty ground practice",
            "Week 3: City and highway driving",
            "Week 4: Night driving, parking, and test preparation",
        ],
    },
    Course {
        id: "simulator",
        title: "Simulator Training",
        subtitle: "Risk-Free Practice",
        price: "₹2,000",
        original_price: None,
        duration: "7 Days",
        image: "simulator-training.jpg",
        icon: CourseIcon::Monitor,
        description: "Advanced simulator training to practice complex scenarios without any risk. Perfect for beginners and nervous learners.",
        features: &[
            "Virtual traffic scenarios",
            "Weather condition practice",
            "Emergency situation training",
            "Night driving simulation",
            "Mistake analysis and feedback",
            "Build confidence safely",
        ],
        curriculum: &[
            "Day 1-2: Basic controls and city driving scenarios",
            "Day 3-4: Complex traffic and intersection handling",
            "Day 5-6: Adverse conditions and emergency responses",
            "Day 7: Assessment and personalized feedback",
        ],
    },
    Course {
        id: "advanced",
        title: "Advanced Driving",
        subtitle: "For Licensed Drivers",
        price: "₹3,000",
        original_price: None,
        duration: "14 Days",
        image: "on-road-training.jpg",
        icon: CourseIcon::Car,
        description: "Polish your driving skills and learn advanced techniques. Perfect for those wanting to become expert drivers.",
        features: &[
            "Defensive driving techniques",
            "Highway high-speed handling",
            "Difficult terrain navigation",
            "Night driving mastery",
            "Fuel-efficient driving",
            "Emergency maneuvers",
        ],
        curriculum: &[
            "Day 1-4: Defensive driving and anticipation",
            "Day 5-8: Highway and difficult conditions",
            "Day 9-12: Advanced parking and maneuvering",
            "Day 13-14: Final assessment and certification",
        ],
    },
    Course {
        id: "combo",
        title: "Complete Package",
        subtitle: "Best Value",
        price: "₹8,000",
        original_price: Some("₹10,000"),
        duration: "45 Days",
        image: "simulator-training.jpg",
        icon: CourseIcon::Users,
        description: "The ultimate driving package combining car training, simulator practice, and advanced skills. Save ₹2,000!",
        features: &[
            "Everything in Basic Car Training",
            "Full Simulator Training included",
            "Advanced driving techniques",
            "Priority scheduling",
            "Free refresher sessions",
            "Lifetime license support",
        ],
        curriculum: &[
            "Week 1-3: Complete Basic Car Training",
            "Week 4: Full Simulator Training",
            "Week 5-6: Advanced Driving Techniques",
            "Week 7: Final assessment and certification",
        ],
    },
];

/// Choices in the contact form's "Course Interest" select: (value, label).
pub static COURSE_OPTIONS: [(&str, &str); 5] = [
    ("Basic Car Training", "Basic Car Training (₹4,000)"),
    ("Truck Training", "Truck Training (₹4,000)"),
    ("Simulator Training", "Simulator Training (₹2,000)"),
    ("Advanced Driving", "Advanced Driving (₹3,000)"),
    ("Complete Package", "Complete Package (₹8,000)"),
];

/// Short course cards on the home page.
pub struct CourseTeaser {
    pub title: &'static str,
    pub price: &'static str,
    pub duration: &'static str,
    pub image: &'static str,
    pub features: &'static [&'static str],
}

pub static HOME_COURSES: [CourseTeaser; 3] = [
    CourseTeaser {
        title: "Car Training",
        price: "₹4,000",
        duration: "21 Days",
        image: "on-road-training.jpg",
        features: &["Basic controls", "Simulator practice", "Road training", "License assistance"],
    },
    CourseTeaser {
        title: "Truck Training",
        price: "₹4,000",
        duration: "30 Days",
        image: "truck-training.jpg",
        features: &["Heavy vehicle basics", "Safety protocols", "Highway driving", "Commercial license"],
    },
    CourseTeaser {
        title: "Simulator Training",
        price: "₹2,000",
        duration: "7 Days",
        image: "simulator-training.jpg",
        features: &["Virtual practice", "Risk-free learning", "Night driving simulation", "Traffic scenarios"],
    },
];

pub fn find(id: &str) -> Option<&'static Course> {
    COURSES.iter().find(|c| c.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::disclosure::Disclosure;

    #[test]
    fn course_ids_are_unique() {
        for (i, a) in COURSES.iter().enumerate() {
            for b in COURSES.iter().skip(i + 1) {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn truck_then_simulator_leaves_simulator_open() {
        let mut open: Disclosure<&str> = Disclosure::new();
        open.toggle(find("truck").map(|c| c.id).unwrap());
        open.toggle(find("simulator").map(|c| c.id).unwrap());
        let expanded: Vec<&str> = COURSES.iter().map(|c| c.id).filter(|id| open.is_expanded(id)).collect();
        assert_eq!(expanded, vec!["simulator"]);
    }

    #[test]
    fn only_the_package_is_discounted() {
        let discounted: Vec<&str> = COURSES
            .iter()
            .filter(|c| c.original_price.is_some())
            .map(|c| c.id)
            .collect();
        assert_eq!(discounted, vec!["combo"]);
    }

    #[test]
    fn unknown_course_is_none() {
        assert!(find("motorbike").is_none());
    }
}
