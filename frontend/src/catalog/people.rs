pub struct Instructor {
    pub name: &'static str,
    pub role: &'static str,
    pub experience: &'static str,
    pub specialization: &'static str,
    pub image: &'static str,
    pub rating: f32,
    pub reviews: u32,
    pub bio: &'static str,
}

pub static INSTRUCTORS: [Instructor; 3] = [
    Instructor {
        name: "Surjit Singh",
        role: "Senior Instructor",
        experience: "25+ Years",
        specialization: "Car & Highway Driving",
        image: "instructor-1.jpg",
        rating: 4.9,
        reviews: 450,
        bio: "Highly experienced in simulator and on-road training. Known for his patience and detailed explanations. Has trained over 5,000 successful drivers.",
    },
    Instructor {
        name: "Sujeet Singh",
        role: "Lead Instructor",
        experience: "18+ Years",
        specialization: "Truck & Heavy Vehicles",
        image: "instructor-2.jpg",
        rating: 4.8,
        reviews: 380,
        bio: "Expert in heavy vehicle training with a focus on safety protocols. Specializes in helping nervous learners overcome their fears.",
    },
    Instructor {
        name: "Suraj Kumar",
        role: "Simulator Expert",
        experience: "10+ Years",
        specialization: "Simulator Training",
        image: "instructor-3.jpg",
        rating: 4.9,
        reviews: 290,
        bio: "Technology-savvy instructor specializing in simulator training. Helps students build confidence in a safe virtual environment.",
    },
];

pub struct Review {
    pub name: &'static str,
    pub date: &'static str,
    pub rating: u8,
    pub text: &'static str,
    pub owner_response: Option<&'static str>,
}

impl Review {
    /// Avatar letter shown in place of a photo.
    pub fn initial(&self) -> String {
        self.name.chars().next().map(String::from).unwrap_or_default()
    }
}

pub const MAX_STARS: u8 = 5;

pub static REVIEWS: [Review; 8] = [
    Review {
        name: "Prabhat Chandra Agarwal",
        date: "2 months ago",
        rating: 5,
        text: "Highly appreciated for professionalism. The instructors are patient and knowledgeable. Master Motor Training College is undoubtedly the best driving school in Lucknow. I learned so much in just 21 days.",
        owner_response: Some("Thank you so much for your kind words, Prabhat! We are glad to have helped you on your driving journey. Safe driving!"),
    },
    Review {
        name: "Nishith Rawat",
        date: "1 month ago",
        rating: 5,
        text: "Patient instructors made me confident. I was extremely nervous when I started, as I had never sat behind the wheel before. But the step-by-step training and constant encouragement helped me overcome my fears. The simulator training was incredibly helpful.",
        owner_response: None,
    },
    Review {
        name: "Rahul Verma",
        date: "3 weeks ago",
        rating: 5,
        text: "Well-maintained vehicles and excellent training methodology. The dual-control cars gave me peace of mind knowing the instructor could take over if needed. Highly recommend for anyone learning to drive in Lucknow.",
        owner_response: None,
    },
    Review {
        name: "Priya Singh",
        date: "1 month ago",
        rating: 5,
        text: "As a woman, I was initially hesitant about learning to drive. But the instructors here are very professional and respectful. They made me feel comfortable and confident. Now I drive to work every day!",
        owner_response: Some("We are so proud of your achievement, Priya! It was our pleasure to teach you. Keep driving safely!"),
    },
    Review {
        name: "Amit Kumar",
        date: "2 weeks ago",
        rating: 4,
        text: "Good driving school with experienced instructors. The only reason for 4 stars is the waiting time for booking slots during peak hours. Otherwise, training quality is excellent.",
        owner_response: None,
    },
    Review {
        name: "Sunita Devi",
        date: "3 months ago",
        rating: 5,
        text: "I took the truck driving course here. Being my first time handling such a heavy vehicle, I was scared. But Sujeet Sir was incredibly patient and helped me overcome my fears. Got my commercial license on the first attempt!",
        owner_response: None,
    },
    Review {
        name: "Ravi Prakash",
        date: "1 month ago",
        rating: 5,
        text: "The simulator training is a game-changer! It helped me understand how to react in various scenarios without any risk. Highly recommend starting with the simulator before road training.",
        owner_response: None,
    },
    Review {
        name: "Neha Agarwal",
        date: "2 months ago",
        rating: 5,
        text: "Excellent experience! The staff is friendly, the vehicles are well-maintained, and the training is comprehensive. I passed my driving test on the first attempt. Thank you, Master Motor!",
        owner_response: Some("Congratulations on passing your test, Neha! We are happy to have been part of your learning journey."),
    },
];

/// Shorter quotes for the home page carousel.
pub static HOME_TESTIMONIALS: [(&str, u8, &str); 3] = [
    ("Prabhat Chandra Agarwal", 5, "Highly appreciated for professionalism. The instructors are patient and knowledgeable. Best driving school in Lucknow!"),
    ("Nishith Rawat", 5, "Patient instructors made me confident. The simulator training was incredibly helpful before going on the road."),
    ("Rahul Verma", 5, "Well-maintained vehicles and excellent training methodology. Highly recommend for anyone learning to drive."),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratings_are_in_star_range() {
        assert!(REVIEWS.iter().all(|r| (1..=MAX_STARS).contains(&r.rating)));
        assert!(HOME_TESTIMONIALS.iter().all(|(_, stars, _)| *stars <= MAX_STARS));
    }

    #[test]
    fn initial_is_first_letter() {
        assert_eq!(REVIEWS[0].initial(), "P");
        assert_eq!(REVIEWS[4].initial(), "A");
    }
}
