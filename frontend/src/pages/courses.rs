use yew::prelude::*;
use yew_router::prelude::*;
use web_sys::MouseEvent;

use crate::catalog::courses::{Course, COURSES};
use crate::components::layout::Layout;
use crate::components::reveal::{stagger, Direction, Reveal};
use crate::components::section_heading::SectionHeading;
use crate::config;
use crate::disclosure::Disclosure;
use crate::links;
use crate::Route;

#[derive(Properties, PartialEq)]
struct CourseCardProps {
    course: Course,
    is_open: bool,
    on_toggle: Callback<&'static str>,
}

#[function_component(CourseCard)]
fn course_card(props: &CourseCardProps) -> Html {
    let course = &props.course;
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        let id = course.id;
        Callback::from(move |_: MouseEvent| on_toggle.emit(id))
    };

    html! {
        <div class={classes!("card", "course-card", props.is_open.then(|| "open"))}>
            <div class="course-header" onclick={toggle}>
                <div class="course-thumb">
                    <img src={config::asset(course.image)} alt={course.title} />
                    <span class="course-icon"><i class={course.icon.class()}></i></span>
                </div>
                <div class="course-summary">
                    <div class="course-titles">
                        {
                            if course.original_price.is_some() {
                                html! { <span class="course-badge">{"Save ₹2,000"}</span> }
                            } else {
                                html! {}
                            }
                        }
                        <h3>{course.title}</h3>
                        <p class="course-subtitle">{course.subtitle}</p>
                        <p class="course-description">{course.description}</p>
                    </div>
                    <div class="course-meta">
                        <div class="course-price">
                            <span class="price">{course.price}</span>
                            {
                                if let Some(original) = course.original_price {
                                    html! { <span class="original-price">{original}</span> }
                                } else {
                                    html! {}
                                }
                            }
                        </div>
                        <div class="course-duration"><i class="clock-icon"></i>{course.duration}</div>
                        <span class="toggle-icon"><i class="chevron-down-icon"></i></span>
                    </div>
                </div>
            </div>
            {
                if props.is_open {
                    html! {
                        <div class="course-details">
                            <div class="course-columns">
                                <div>
                                    <h4>{"What's Included"}</h4>
                                    <ul class="check-list">
                                        { for course.features.iter().map(|feature| html! {
                                            <li><i class="check-icon"></i>{*feature}</li>
                                        }) }
                                    </ul>
                                </div>
                                <div>
                                    <h4>{"Course Curriculum"}</h4>
                                    <ul class="curriculum-list">
                                        { for course.curriculum.iter().enumerate().map(|(i, item)| html! {
                                            <li><span class="step-number">{i + 1}</span>{*item}</li>
                                        }) }
                                    </ul>
                                </div>
                            </div>
                            <div class="course-actions">
                                <a href={links::enroll_link(course.title)} target="_blank" rel="noopener noreferrer" class="cta-accent">
                                    <i class="message-icon"></i>
                                    {"Enroll Now"}
                                </a>
                                <a href={links::tel_link()} class="cta-outline">
                                    <i class="phone-icon"></i>
                                    {"Call for Details"}
                                </a>
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[function_component(Courses)]
pub fn courses() -> Html {
    let expanded = use_state(Disclosure::<&'static str>::new);

    let on_toggle = {
        let expanded = expanded.clone();
        Callback::from(move |id: &'static str| {
            let mut next = (*expanded).clone();
            next.toggle(id);
            log::debug!("course toggled: {}, now open: {:?}", id, next.expanded());
            expanded.set(next);
        })
    };

    html! {
        <Layout>
            <div class="courses-page">
                <section class="page-hero">
                    <div class="hero-content">
                        <span class="hero-badge">{"Training Programs"}</span>
                        <h1>{"Our Courses"}</h1>
                        <p>{"Comprehensive driving courses customized to your needs. From complete beginners to advanced drivers."}</p>
                    </div>
                </section>

                <section class="courses-section">
                    <SectionHeading
                        title="Choose Your Program"
                        subtitle="Flexible pricing with total options ranging from ₹2,000 to ₹8,000"
                    />
                    <div class="course-list">
                        { for COURSES.iter().enumerate().map(|(i, course)| html! {
                            <Reveal key={course.id} delay_ms={stagger(i, 100)}>
                                <CourseCard
                                    course={course.clone()}
                                    is_open={expanded.is_expanded(&course.id)}
                                    on_toggle={on_toggle.clone()}
                                />
                            </Reveal>
                        }) }
                    </div>
                </section>

                <section class="specialized-section">
                    <SectionHeading
                        title="Specialized Training"
                        subtitle="Explore our focused training programs"
                    />
                    <div class="specialized-grid">
                        <Reveal direction={Direction::Left}>
                            <Link<Route> to={Route::Simulator} classes="card specialized-card">
                                <img src={config::asset("simulator-training.jpg")} alt="Simulator Training" />
                                <div class="specialized-body">
                                    <h3>{"Simulator Training"}</h3>
                                    <p>{"Practice in a safe virtual environment before hitting the road."}</p>
                                    <span class="read-more">{"Learn More"}<i class="chevron-right-icon"></i></span>
                                </div>
                            </Link<Route>>
                        </Reveal>
                        <Reveal direction={Direction::Right}>
                            <Link<Route> to={Route::OnRoad} classes="card specialized-card">
                                <img src={config::asset("on-road-training.jpg")} alt="On-Road Training" />
                                <div class="specialized-body">
                                    <h3>{"On-Road Training"}</h3>
                                    <p>{"Real-world driving experience with expert instructors by your side."}</p>
                                    <span class="read-more">{"Learn More"}<i class="chevron-right-icon"></i></span>
                                </div>
                            </Link<Route>>
                        </Reveal>
                    </div>
                </section>
            </div>
        </Layout>
    }
}
