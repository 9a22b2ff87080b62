use crate::filter::{CatalogItem, Category};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FaqCategory {
    All,
    General,
    Courses,
    Training,
    Payment,
    Miscellaneous,
}

impl Category for FaqCategory {
    const ALL: &'static [Self] = &[
        FaqCategory::All,
        FaqCategory::General,
        FaqCategory::Courses,
        FaqCategory::Training,
        FaqCategory::Payment,
        FaqCategory::Miscellaneous,
    ];

    fn label(self) -> &'static str {
        match self {
            FaqCategory::All => "All",
            FaqCategory::General => "General",
            FaqCategory::Courses => "Courses",
            FaqCategory::Training => "Training",
            FaqCategory::Payment => "Payment",
            FaqCategory::Miscellaneous => "Miscellaneous",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Faq {
    pub category: FaqCategory,
    pub question: &'static str,
    pub answer: &'static str,
}

impl CatalogItem for Faq {
    type Category = FaqCategory;

    fn has_category(&self, category: FaqCategory) -> bool {
        self.category == category
    }

    fn searchable_text(&self) -> String {
        format!("{}\n{}", self.question, self.answer)
    }
}

pub static FAQS: [Faq; 12] = [
    Faq {
        category: FaqCategory::General,
        question: "How long is the driving course?",
        answer: "Our basic car training course is 21 days. Truck training takes 30 days, and simulator-only training is 7 days. We also offer customized durations based on individual learning pace.",
    },
    Faq {
        category: FaqCategory::General,
        question: "Do you offer online classes?",
        answer: "Yes, we offer online theoretical classes covering traffic rules, road signs, and driving theory. However, practical training must be done in person at our training center.",
    },
    Faq {
        category: FaqCategory::General,
        question: "What is the minimum age to learn driving?",
        answer: "For car driving, the minimum age is 18 years. For two-wheelers without gear, it is 16 years. You will need valid age proof and a learner's license.",
    },
    Faq {
        category: FaqCategory::Courses,
        question: "What courses do you offer?",
        answer: "We offer Basic Car Training (₹4,000), Truck Training (₹4,000), Simulator Training (₹2,000), Advanced Driving (₹3,000), and a Complete Package (₹8,000) that includes everything.",
    },
    Faq {
        category: FaqCategory::Courses,
        question: "Can I choose my training timings?",
        answer: "Yes, we offer flexible timing options. You can choose morning (8 AM - 12 PM), afternoon (12 PM - 4 PM), or evening (4 PM - 7 PM) slots based on availability.",
    },
    Faq {
        category: FaqCategory::Courses,
        question: "Do you help with getting a driving license?",
        answer: "Absolutely! We provide complete assistance with the RTO license process, including application, documentation, and test preparation. Our students have a 99% pass rate.",
    },
    Faq {
        category: FaqCategory::Training,
        question: "What is simulator training?",
        answer: "Simulator training uses advanced driving simulators that recreate real-world driving scenarios. It helps you practice complex situations like night driving, rain, and emergencies without any risk.",
    },
    Faq {
        category: FaqCategory::Training,
        question: "What type of vehicles do you use for training?",
        answer: "We use the latest model cars with dual controls (brake and steering). For truck training, we have commercial vehicles. All vehicles are well-maintained and regularly serviced.",
    },
    Faq {
        category: FaqCategory::Training,
        question: "How many students per instructor?",
        answer: "We provide one-on-one training for all practical sessions. Each student gets individual attention from their assigned instructor throughout the course.",
    },
    Faq {
        category: FaqCategory::Payment,
        question: "What payment methods do you accept?",
        answer: "We accept cash, UPI, bank transfer, and all major cards. You can also pay in installments for courses above ₹4,000.",
    },
    Faq {
        category: FaqCategory::Payment,
        question: "Is there any refund policy?",
        answer: "Yes, we offer a full refund if you cancel within 48 hours of enrollment. After that, a pro-rata refund is provided based on classes attended.",
    },
    Faq {
        category: FaqCategory::Miscellaneous,
        question: "Do you provide pickup and drop service?",
        answer: "Yes, we provide free pickup and drop service within Lucknow city limits for students enrolled in courses of 21 days or more.",
    },
];

pub struct BlogPost {
    pub title: &'static str,
    pub excerpt: &'static str,
    pub date: &'static str,
}

pub static BLOG_POSTS: [BlogPost; 3] = [
    BlogPost {
        title: "Tips for Safe Driving in Lucknow Traffic",
        excerpt: "Navigating Lucknow's busy streets can be challenging. Here are our expert tips for staying safe and confident.",
        date: "January 15, 2024",
    },
    BlogPost {
        title: "Understanding Traffic Signs: A Complete Guide",
        excerpt: "From regulatory signs to warning signs, learn everything you need to know about Indian traffic signs.",
        date: "January 10, 2024",
    },
    BlogPost {
        title: "Benefits of Simulator Training Before Road Practice",
        excerpt: "Why starting with simulator training can make you a better and more confident driver.",
        date: "January 5, 2024",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{visible_items, FilterState};

    #[test]
    fn twelve_questions_over_five_categories() {
        assert_eq!(FAQS.len(), 12);
        let used: Vec<FaqCategory> = FaqCategory::ALL
            .iter()
            .copied()
            .filter(|c| !c.is_all() && FAQS.iter().any(|f| f.category == *c))
            .collect();
        assert_eq!(used.len(), 5);
    }

    #[test]
    fn payment_tab_then_refund_search() {
        let mut state: FilterState<FaqCategory> = FilterState::default();
        state.select_category(FaqCategory::Payment, &FAQS);
        let payment = visible_items(&FAQS, &state);
        assert_eq!(payment.len(), 2);
        assert!(payment.iter().all(|(_, f)| f.category == FaqCategory::Payment));

        state.set_search_query("refund", &FAQS);
        let refund = visible_items(&FAQS, &state);
        assert_eq!(refund.len(), 1);
        assert_eq!(refund[0].1.question, "Is there any refund policy?");
        assert!(refund[0].1.answer.to_lowercase().contains("refund"));
    }

    #[test]
    fn search_reaches_answer_text() {
        let mut state: FilterState<FaqCategory> = FilterState::default();
        state.set_search_query("LUCKNOW", &FAQS);
        let hits = visible_items(&FAQS, &state);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].0, 11);
    }

    #[test]
    fn unmatched_search_is_empty() {
        let mut state: FilterState<FaqCategory> = FilterState::default();
        state.set_search_query("helicopter", &FAQS);
        assert!(visible_items(&FAQS, &state).is_empty());
    }

    #[test]
    fn open_answer_closes_when_its_tab_is_left() {
        let mut state: FilterState<FaqCategory> = FilterState::default();
        state.toggle_item(10);
        state.select_category(FaqCategory::General, &FAQS);
        assert!(!state.is_expanded(10));
        assert_eq!(state.expanded.expanded(), None);
    }
}
