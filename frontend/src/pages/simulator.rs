use yew::prelude::*;
use yew_router::prelude::*;

use crate::catalog::courses;
use crate::catalog::site::{SIMULATOR_BENEFITS, SIMULATOR_PACKAGE, SIMULATOR_SCENARIOS};
use crate::components::layout::Layout;
use crate::components::reveal::{stagger, Direction, Reveal};
use crate::components::section_heading::SectionHeading;
use crate::config;
use crate::links;
use crate::Route;

#[function_component(Simulator)]
pub fn simulator() -> Html {
    let course_title = courses::find("simulator").map(|c| c.title).unwrap_or("Simulator Training");

    html! {
        <Layout>
            <div class="simulator-page">
                <section class="page-hero with-image">
                    <img class="hero-image" src={config::asset("simulator-training.jpg")} alt="Driving simulator" />
                    <div class="hero-overlay"></div>
                    <div class="hero-content">
                        <span class="hero-badge">{"Modern Technology"}</span>
                        <h1>{"Simulator Training"}</h1>
                        <p>{"Build skills and confidence in a safe, controlled virtual environment before you ever touch a real road."}</p>
                        <a href={links::enroll_link(course_title)} target="_blank" rel="noopener noreferrer" class="cta-accent">
                            <i class="message-icon"></i>
                            {"Book Simulator Session"}
                        </a>
                    </div>
                </section>

                <section class="benefits-section">
                    <SectionHeading
                        title="Why Simulator Training?"
                        subtitle="The smartest way to start your driving journey"
                    />
                    <div class="features-grid">
                        { for SIMULATOR_BENEFITS.iter().enumerate().map(|(i, (icon, title, description))| html! {
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

                <section class="scenarios-section">
                    <Reveal direction={Direction::Left}>
                        <span class="eyebrow">{"Training Scenarios"}</span>
                        <h2 class="heading-section">{"Practice Every Situation"}</h2>
                        <p>{"Our simulators recreate the conditions you will face on Indian roads, so nothing on your test day comes as a surprise."}</p>
                        <ul class="scenario-list">
                            { for SIMULATOR_SCENARIOS.iter().map(|scenario| html! {
                                <li key={*scenario}><i class="check-icon"></i>{*scenario}</li>
                            }) }
                        </ul>
                    </Reveal>
                    <Reveal direction={Direction::Right}>
                        <div class="card package-card">
                            <h3>{"Simulator Package"}</h3>
                            <div class="package-price">
                                <span class="price">{"₹2,000"}</span>
                                <span class="per">{"/ 7 Days"}</span>
                            </div>
                            <ul class="check-list">
                                { for SIMULATOR_PACKAGE.iter().map(|item| html! {
                                    <li><i class="check-icon"></i>{*item}</li>
                                }) }
                            </ul>
                            <a href={links::enroll_link(course_title)} target="_blank" rel="noopener noreferrer" class="cta-primary">
                                {"Enroll via WhatsApp"}
                            </a>
                        </div>
                    </Reveal>
                </section>

                <section class="cta-band">
                    <Reveal>
                        <h2 class="heading-section">{"Ready for the Real Road?"}</h2>
                        <p>{"Pair simulator practice with on-road sessions for the complete experience."}</p>
                        <div class="button-row">
                            <Link<Route> to={Route::OnRoad} classes="cta-light">{"Explore On-Road Training"}</Link<Route>>
                            <Link<Route> to={Route::Courses} classes="cta-outline light">{"View All Courses"}</Link<Route>>
                        </div>
                    </Reveal>
                </section>
            </div>
        </Layout>
    }
}
