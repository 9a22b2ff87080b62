use yew::prelude::*;
use yew_router::prelude::*;

use crate::catalog::courses::HOME_COURSES;
use crate::catalog::people::{HOME_TESTIMONIALS, MAX_STARS};
use crate::catalog::site::{HOME_FEATURES, HOME_STATS};
use crate::components::layout::Layout;
use crate::components::reveal::{stagger, Direction, Reveal};
use crate::components::section_heading::SectionHeading;
use crate::config;
use crate::links;
use crate::Route;

pub fn stars(count: u8) -> Html {
    html! {
        <div class="stars">
            { for (0..MAX_STARS).map(|i| html! {
                <i class={classes!("star-icon", (i < count).then(|| "filled"))}></i>
            }) }
        </div>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <Layout>
            <div class="home-page">
                <section class="home-hero">
                    <img class="hero-image" src={config::asset("hero-driving.jpg")} alt="Master Motor Training College - Driving Excellence" />
                    <div class="hero-overlay"></div>
                    <div class="hero-content">
                        <Reveal direction={Direction::Left}>
                            <span class="hero-badge">{format!("Est. {} - Lucknow's Finest", config::ESTABLISHED)}</span>
                        </Reveal>
                        <Reveal delay_ms={100}>
                            <h1>{"Master Motor"}<br /><span class="accent">{"Training College"}</span></h1>
                        </Reveal>
                        <Reveal delay_ms={200}>
                            <p class="hero-subtitle">
                                {"Customized Car and Truck Training with Simulator Practice. Building confident drivers for nearly 60 years."}
                            </p>
                        </Reveal>
                        <Reveal delay_ms={300} class="hero-actions">
                            <a href={links::whatsapp_link(links::GENERAL_INQUIRY)} target="_blank" rel="noopener noreferrer" class="cta-accent">
                                <i class="message-icon"></i>
                                {"Send Inquiry to WhatsApp"}
                            </a>
                            <a href={links::tel_link()} class="cta-outline">
                                <i class="phone-icon"></i>
                                {"Call Now"}
                            </a>
                        </Reveal>
                        <Reveal delay_ms={400} class="hero-quick-info">
                            <span><i class="clock-icon"></i>{"Open until 7 PM"}</span>
                            <span><i class="map-pin-icon"></i>{"Husainganj, Lucknow"}</span>
                        </Reveal>
                    </div>
                    <div class="scroll-indicator"><span></span></div>
                </section>

                <section class="stats-band">
                    <div class="stats-grid">
                        { for HOME_STATS.iter().enumerate().map(|(i, (value, label))| html! {
                            <Reveal key={*label} delay_ms={stagger(i, 100)}>
                                <div class="stat">
                                    <div class="stat-value">{*value}</div>
                                    <div class="stat-label">{*label}</div>
                                </div>
                            </Reveal>
                        }) }
                    </div>
                </section>

                <section class="features-section">
                    <SectionHeading
                        title="Why Choose Master Motor?"
                        subtitle="Lucknow's oldest and most trusted driving school with a legacy of excellence"
                    />
                    <div class="features-grid">
                        { for HOME_FEATURES.iter().enumerate().map(|(i, (icon, title, description))| html! {
                            <Reveal key={*title} delay_ms={stagger(i, 100)}>
                                <div class="card feature-card">
                                    <span class="feature-icon"><i class={*icon}></i></span>
                                    <h3>{*title}</h3>
                                    <p>{*description}</p>
                                </div>
                            </Reveal>
                        }) }
                    </div>
                </section>

                <section class="home-courses">
                    <SectionHeading
                        title="Our Training Programs"
                        subtitle="Comprehensive courses designed for every skill level"
                    />
                    <div class="course-grid">
                        { for HOME_COURSES.iter().enumerate().map(|(i, course)| html! {
                            <Reveal key={course.title} delay_ms={stagger(i, 100)} direction={Direction::Scale}>
                                <div class="card course-teaser">
                                    <div class="teaser-image">
                                        <img src={config::asset(course.image)} alt={course.title} />
                                        <span class="teaser-price">{course.price}</span>
                                    </div>
                                    <div class="teaser-body">
                                        <h3>{course.title}</h3>
                                        <div class="course-duration"><i class="clock-icon"></i>{course.duration}</div>
                                        <ul class="check-list">
                                            { for course.features.iter().map(|f| html! {
                                                <li><i class="check-icon"></i>{*f}</li>
                                            }) }
                                        </ul>
                                        <Link<Route> to={Route::Courses} classes="cta-primary">
                                            {"Learn More"}
                                            <i class="arrow-right-icon"></i>
                                        </Link<Route>>
                                    </div>
                                </div>
                            </Reveal>
                        }) }
                    </div>
                    <div class="center">
                        <Link<Route> to={Route::Courses} classes="cta-outline">
                            {"View All Courses"}
                            <i class="chevron-right-icon"></i>
                        </Link<Route>>
                    </div>
                </section>

                <section class="home-about">
                    <Reveal direction={Direction::Left}>
                        <img src={config::asset("simulator-training.jpg")} alt="Simulator Training at Master Motor" />
                    </Reveal>
                    <Reveal direction={Direction::Right}>
                        <span class="eyebrow">{"About Our School"}</span>
                        <h2 class="heading-section">{"The Oldest & Best Motor Driving School in Lucknow"}</h2>
                        <p>{"Established in 1965, Master Motor Training College has been the cornerstone of driver education in Lucknow. We provide individual attention, use the best equipment and vehicles, and ensure every student gains not just a license, but lifelong safe driving skills."}</p>
                        <p>{"Our modern simulators allow students to practice in a safe environment before taking to the roads. With well-maintained vehicles and experienced instructors, we've trained over 50,000 confident drivers."}</p>
                        <div class="button-row">
                            <Link<Route> to={Route::About} classes="cta-primary">{"Learn More About Us"}</Link<Route>>
                            <Link<Route> to={Route::Gallery} classes="cta-outline">{"View Gallery"}</Link<Route>>
                        </div>
                    </Reveal>
                </section>

                <section class="home-testimonials dark">
                    <SectionHeading
                        title="What Our Students Say"
                        subtitle="Real experiences from our graduates"
                        light={true}
                    />
                    <div class="testimonial-grid">
                        { for HOME_TESTIMONIALS.iter().enumerate().map(|(i, (name, rating, text))| html! {
                            <Reveal key={*name} delay_ms={stagger(i, 100)}>
                                <div class="testimonial-card">
                                    { stars(*rating) }
                                    <p class="quote">{format!("\"{}\"", text)}</p>
                                    <div class="author">
                                        <span class="avatar">{name.chars().next().unwrap_or(' ')}</span>
                                        <span>{*name}</span>
                                    </div>
                                </div>
                            </Reveal>
                        }) }
                    </div>
                    <div class="center">
                        <Link<Route> to={Route::Testimonials} classes="cta-outline light">
                            {"Read All Reviews"}
                            <i class="chevron-right-icon"></i>
                        </Link<Route>>
                    </div>
                </section>

                <section class="home-map">
                    <SectionHeading
                        title="Visit Our Training Center"
                        subtitle="Conveniently located at Husainganj, Lucknow"
                    />
                    <div class="map-grid">
                        <Reveal direction={Direction::Left} class="map-frame">
                            <iframe
                                src={config::MAP_EMBED_URL}
                                width="100%"
                                height="100%"
                                style="border: 0;"
                                allowfullscreen=true
                                loading="lazy"
                                referrerpolicy="no-referrer-when-downgrade"
                                title="Master Motor Training College Location"
                            />
                        </Reveal>
                        <Reveal direction={Direction::Right}>
                            <div class="card contact-card">
                                <div class="contact-row"><i class="map-pin-icon"></i><p>{config::ADDRESS}</p></div>
                                <div class="contact-row"><i class="phone-icon"></i><a href={links::tel_link()}>{config::PHONE_DISPLAY}</a></div>
                                <div class="contact-row"><i class="clock-icon"></i><p>{config::HOURS_WEEKDAYS}<br />{config::HOURS_SUNDAY}</p></div>
                                <div class="button-row">
                                    <a href={links::whatsapp_link(links::GENERAL_INQUIRY)} target="_blank" rel="noopener noreferrer" class="cta-accent">
                                        {"Book a Session"}
                                    </a>
                                    <a href={config::MAP_PLACE_URL} target="_blank" rel="noopener noreferrer" class="cta-outline">
                                        {"Get Directions"}
                                    </a>
                                </div>
                            </div>
                        </Reveal>
                    </div>
                </section>

                <section class="cta-band">
                    <Reveal>
                        <h2 class="heading-section">{"Ready to Start Your Journey?"}</h2>
                        <p>{"Join thousands of confident drivers trained at Master Motor Training College. Your license to freedom starts here."}</p>
                        <div class="button-row">
                            <a href={links::whatsapp_link("I want to enroll in driving course")} target="_blank" rel="noopener noreferrer" class="cta-light">
                                <i class="message-icon"></i>
                                {"Enroll Now via WhatsApp"}
                            </a>
                            <a href={links::tel_link()} class="cta-outline light">
                                <i class="phone-icon"></i>
                                {format!("Call {}", config::PHONE_DISPLAY)}
                            </a>
                        </div>
                    </Reveal>
                </section>
            </div>
        </Layout>
    }
}
