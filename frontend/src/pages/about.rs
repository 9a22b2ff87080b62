use yew::prelude::*;
use yew_router::prelude::*;

use crate::catalog::site::{AMENITIES, MILESTONES, VALUES};
use crate::components::layout::Layout;
use crate::components::reveal::{stagger, Direction, Reveal};
use crate::components::section_heading::SectionHeading;
use crate::config;
use crate::links;
use crate::Route;

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <Layout>
            <div class="about-page">
                <section class="page-hero">
                    <div class="hero-content">
                        <span class="hero-badge">{format!("Since {}", config::ESTABLISHED)}</span>
                        <h1>{"About Master Motor"}</h1>
                        <p>{"Lucknow's oldest and most trusted motor driving school, shaping confident drivers for nearly six decades."}</p>
                    </div>
                </section>

                <section class="legacy-section">
                    <Reveal direction={Direction::Left}>
                        <span class="eyebrow">{"Our Legacy"}</span>
                        <h2 class="heading-section">{"A Tradition of Excellence Since 1965"}</h2>
                        <p>{"Master Motor Training College was founded with a simple mission: to create safe, confident, and responsible drivers. What started as a small driving school in Husainganj has grown into Lucknow's most trusted name in driver education."}</p>
                        <p>{"Over the decades, we have continuously evolved our training methods, incorporating modern simulators and well-maintained vehicles while keeping our core values of patience, individual attention, and excellence intact."}</p>
                        <p>{"Today, we are proud to have trained over 50,000 drivers who navigate the roads of Lucknow and beyond with skill and confidence."}</p>
                    </Reveal>
                    <Reveal direction={Direction::Right} class="legacy-images">
                        <img src={config::asset("simulator-training.jpg")} alt="Simulator Training" />
                        <img src={config::asset("on-road-training.jpg")} alt="On-Road Training" />
                    </Reveal>
                </section>

                <section class="values-section">
                    <SectionHeading
                        title="Our Core Values"
                        subtitle="The principles that guide everything we do"
                    />
                    <div class="values-grid">
                        { for VALUES.iter().enumerate().map(|(i, (icon, title, description))| html! {
                            <Reveal key={*title} delay_ms={stagger(i, 100)}>
                                <div class="card value-card">
                                    <span class="feature-icon"><i class={*icon}></i></span>
                                    <h3>{*title}</h3>
                                    <p>{*description}</p>
                                </div>
                            </Reveal>
                        }) }
                    </div>
                </section>

                <section class="timeline-section dark">
                    <SectionHeading
                        title="Our Journey"
                        subtitle="Milestones that shaped our legacy"
                        light={true}
                    />
                    <div class="timeline">
                        { for MILESTONES.iter().enumerate().map(|(i, (year, title, description))| {
                            let direction = if i % 2 == 0 { Direction::Left } else { Direction::Right };
                            html! {
                                <Reveal key={*year} delay_ms={stagger(i, 100)} {direction}>
                                    <div class={classes!("milestone", (i % 2 == 1).then(|| "flipped"))}>
                                        <span class="milestone-year">{*year}</span>
                                        <div class="milestone-body">
                                            <h3>{*title}</h3>
                                            <p>{*description}</p>
                                        </div>
                                    </div>
                                </Reveal>
                            }
                        }) }
                    </div>
                </section>

                <section class="amenities-section">
                    <SectionHeading
                        title="Facilities & Amenities"
                        subtitle="Everything you need for a comfortable learning experience"
                    />
                    <div class="amenities-grid">
                        { for AMENITIES.iter().enumerate().map(|(i, amenity)| html! {
                            <Reveal key={*amenity} delay_ms={stagger(i, 50)} direction={Direction::Scale}>
                                <div class="amenity">
                                    <i class="check-circle-icon"></i>
                                    <span>{*amenity}</span>
                                </div>
                            </Reveal>
                        }) }
                    </div>
                </section>

                <section class="cta-band">
                    <Reveal>
                        <h2 class="heading-section">{"Become Part of Our Legacy"}</h2>
                        <p>{"Join the thousands of drivers who started their journey with Master Motor."}</p>
                        <div class="button-row">
                            <a href={links::whatsapp_link("I want to enroll in driving course")} target="_blank" rel="noopener noreferrer" class="cta-light">
                                <i class="message-icon"></i>
                                {"Enroll Now"}
                            </a>
                            <Link<Route> to={Route::Instructors} classes="cta-outline light">
                                {"Meet Our Instructors"}
                            </Link<Route>>
                        </div>
                    </Reveal>
                </section>
            </div>
        </Layout>
    }
}
