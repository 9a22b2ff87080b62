use yew::prelude::*;

use crate::catalog::people::INSTRUCTORS;
use crate::catalog::site::{INSTRUCTOR_ACHIEVEMENTS, INSTRUCTOR_QUALITIES};
use crate::components::layout::Layout;
use crate::components::reveal::{stagger, Direction, Reveal};
use crate::components::section_heading::SectionHeading;
use crate::config;
use crate::links;

#[function_component(Instructors)]
pub fn instructors() -> Html {
    html! {
        <Layout>
            <div class="instructors-page">
                <section class="page-hero">
                    <div class="hero-content">
                        <span class="hero-badge">{"Expert Team"}</span>
                        <h1>{"Our Instructors"}</h1>
                        <p>{"Patient, certified and experienced trainers who have guided thousands of students to their licenses."}</p>
                    </div>
                </section>

                <section class="stats-band">
                    <div class="stats-grid">
                        { for INSTRUCTOR_ACHIEVEMENTS.iter().enumerate().map(|(i, (value, label))| html! {
                            <Reveal key={*label} delay_ms={stagger(i, 100)}>
                                <div class="stat">
                                    <div class="stat-value">{*value}</div>
                                    <div class="stat-label">{*label}</div>
                                </div>
                            </Reveal>
                        }) }
                    </div>
                </section>

                <section class="team-section">
                    <SectionHeading
                        title="Meet the Team"
                        subtitle="Book a session directly with the instructor of your choice"
                    />
                    <div class="team-grid">
                        { for INSTRUCTORS.iter().enumerate().map(|(i, instructor)| html! {
                            <Reveal key={instructor.name} delay_ms={stagger(i, 150)} direction={Direction::Scale}>
                                <div class="card instructor-card">
                                    <div class="instructor-photo">
                                        <img src={config::asset(instructor.image)} alt={instructor.name} />
                                        <span class="experience-badge">{instructor.experience}</span>
                                    </div>
                                    <div class="instructor-body">
                                        <h3>{instructor.name}</h3>
                                        <p class="role">{instructor.role}</p>
                                        <p class="specialization"><i class="award-icon"></i>{instructor.specialization}</p>
                                        <div class="rating">
                                            <i class="star-icon filled"></i>
                                            <strong>{format!("{:.1}", instructor.rating)}</strong>
                                            <span>{format!("({} reviews)", instructor.reviews)}</span>
                                        </div>
                                        <p class="bio">{instructor.bio}</p>
                                        <a
                                            href={links::book_session_link(instructor.name)}
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="cta-primary"
                                        >
                                            <i class="message-icon"></i>
                                            {"Book a Session"}
                                        </a>
                                    </div>
                                </div>
                            </Reveal>
                        }) }
                    </div>
                </section>

                <section class="qualities-section">
                    <SectionHeading
                        title="What Sets Them Apart"
                        subtitle="Qualities every Master Motor instructor shares"
                    />
                    <div class="values-grid">
                        { for INSTRUCTOR_QUALITIES.iter().enumerate().map(|(i, (title, description))| html! {
                            <Reveal key={*title} delay_ms={stagger(i, 100)}>
                                <div class="card value-card">
                                    <h3>{*title}</h3>
                                    <p>{*description}</p>
                                </div>
                            </Reveal>
                        }) }
                    </div>
                </section>
            </div>
        </Layout>
    }
}
