use yew::prelude::*;

use crate::catalog::people::{Review, REVIEWS};
use crate::catalog::site::REVIEW_STATS;
use crate::components::layout::Layout;
use crate::components::reveal::{stagger, Reveal};
use crate::components::section_heading::SectionHeading;
use crate::config;
use crate::pages::home::stars;

fn review_card(review: &Review) -> Html {
    html! {
        <div class="card review-card">
            <div class="review-header">
                <span class="avatar">{review.initial()}</span>
                <div>
                    <strong>{review.name}</strong>
                    <span class="review-date">{review.date}</span>
                </div>
            </div>
            { stars(review.rating) }
            <p class="review-text">{review.text}</p>
            {
                if let Some(response) = review.owner_response {
                    html! {
                        <div class="owner-response">
                            <span class="owner-label">{"Response from the owner"}</span>
                            <p>{response}</p>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    html! {
        <Layout>
            <div class="testimonials-page">
                <section class="page-hero">
                    <div class="hero-content">
                        <span class="hero-badge">{"Student Reviews"}</span>
                        <h1>{"Testimonials"}</h1>
                        <p>{"Hear from the students who learned to drive with us."}</p>
                    </div>
                </section>

                <section class="stats-band">
                    <div class="stats-grid">
                        <div class="stat">
                            <div class="stat-value">{REVIEW_STATS.average_rating}</div>
                            <div class="stat-label">{"Average Rating"}</div>
                        </div>
                        <div class="stat">
                            <div class="stat-value">{REVIEW_STATS.total_reviews}</div>
                            <div class="stat-label">{"Total Reviews"}</div>
                        </div>
                        <div class="stat">
                            <div class="stat-value">{REVIEW_STATS.five_star_percentage}</div>
                            <div class="stat-label">{"5-Star Reviews"}</div>
                        </div>
                    </div>
                </section>

                <section class="reviews-section">
                    <SectionHeading
                        title="What Our Students Say"
                        subtitle="Reviews from Google and our graduates"
                    />
                    <div class="review-grid">
                        { for REVIEWS.iter().enumerate().map(|(i, review)| html! {
                            <Reveal key={review.name} delay_ms={stagger(i, 100)}>
                                { review_card(review) }
                            </Reveal>
                        }) }
                    </div>
                </section>

                <section class="cta-band">
                    <Reveal>
                        <h2 class="heading-section">{"Trained With Us?"}</h2>
                        <p>{"We would love to hear about your experience."}</p>
                        <a href={config::MAP_PLACE_URL} target="_blank" rel="noopener noreferrer" class="cta-light">
                            <i class="star-icon"></i>
                            {"Write a Review on Google"}
                        </a>
                    </Reveal>
                </section>
            </div>
        </Layout>
    }
}
