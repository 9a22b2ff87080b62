use yew::prelude::*;

use crate::catalog::site::{ON_ROAD_FEATURES, ON_ROAD_PACKAGE, ON_ROAD_QUOTES, ON_ROAD_STAGES};
use crate::components::layout::Layout;
use crate::components::reveal::{stagger, Direction, Reveal};
use crate::components::section_heading::SectionHeading;
use crate::config;
use crate::links;

#[function_component(OnRoad)]
pub fn on_road() -> Html {
    html! {
        <Layout>
            <div class="on-road-page">
                <section class="page-hero with-image">
                    <img class="hero-image" src={config::asset("on-road-training.jpg")} alt="On-road driving lesson" />
                    <div class="hero-overlay"></div>
                    <div class="hero-content">
                        <span class="hero-badge">{"Real-World Experience"}</span>
                        <h1>{"On-Road Training"}</h1>
                        <p>{"Step-by-step training on real Lucknow roads with a certified instructor beside you the whole way."}</p>
                        <a href={links::enroll_link("On-Road Training")} target="_blank" rel="noopener noreferrer" class="cta-accent">
                            <i class="message-icon"></i>
                            {"Start Training"}
                        </a>
                    </div>
                </section>

                <section class="stages-section">
                    <SectionHeading
                        title="Your 21-Day Journey"
                        subtitle="A structured path from first lesson to license test"
                    />
                    <div class="stages">
                        { for ON_ROAD_STAGES.iter().enumerate().map(|(i, stage)| html! {
                            <Reveal key={stage.step} delay_ms={stagger(i, 100)} direction={Direction::Left}>
                                <div class="stage">
                                    <span class="step-number">{stage.step}</span>
                                    <div class="stage-body">
                                        <div class="stage-header">
                                            <h3>{stage.title}</h3>
                                            <span class="stage-duration">{stage.duration}</span>
                                        </div>
                                        <p>{stage.description}</p>
                                    </div>
                                </div>
                            </Reveal>
                        }) }
                    </div>
                </section>

                <section class="features-section dark">
                    <SectionHeading
                        title="Training Features"
                        subtitle="What makes our on-road program different"
                        light={true}
                    />
                    <div class="features-grid">
                        { for ON_ROAD_FEATURES.iter().enumerate().map(|(i, (icon, title, description))| html! {
                            <Reveal key={*title} delay_ms={stagger(i, 100)}>
                                <div class="feature-card">
                                    <span class="feature-icon"><i class={*icon}></i></span>
                                    <h3>{*title}</h3>
                                    <p>{*description}</p>
                                </div>
                            </Reveal>
                        }) }
                    </div>
                </section>

                <section class="package-section">
                    <Reveal direction={Direction::Left}>
                        <div class="quotes">
                            { for ON_ROAD_QUOTES.iter().map(|(quote, name, caption)| html! {
                                <blockquote key={*name} class="card">
                                    <p>{format!("\"{}\"", quote)}</p>
                                    <footer>
                                        <strong>{*name}</strong>
                                        <span>{*caption}</span>
                                    </footer>
                                </blockquote>
                            }) }
                        </div>
                    </Reveal>
                    <Reveal direction={Direction::Right}>
                        <div class="card package-card">
                            <h3>{"On-Road Package"}</h3>
                            <div class="package-price">
                                <span class="price">{"₹4,000"}</span>
                                <span class="per">{"/ 21 Days"}</span>
                            </div>
                            <ul class="check-list">
                                { for ON_ROAD_PACKAGE.iter().map(|item| html! {
                                    <li><i class="check-icon"></i>{*item}</li>
                                }) }
                            </ul>
                            <div class="button-row">
                                <a href={links::enroll_link("On-Road Training")} target="_blank" rel="noopener noreferrer" class="cta-primary">
                                    {"Enroll via WhatsApp"}
                                </a>
                                <a href={links::tel_link()} class="cta-outline">
                                    <i class="phone-icon"></i>
                                    {"Call Us"}
                                </a>
                            </div>
                        </div>
                    </Reveal>
                </section>
            </div>
        </Layout>
    }
}
