use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod disclosure;
mod filter;
mod links;
mod catalog {
    pub mod courses;
    pub mod faq;
    pub mod gallery;
    pub mod people;
    pub mod site;
}
mod components {
    pub mod layout;
    pub mod popular_times;
    pub mod reveal;
    pub mod section_heading;
    pub mod theme;
}
mod pages {
    pub mod about;
    pub mod contact;
    pub mod courses;
    pub mod faq;
    pub mod gallery;
    pub mod home;
    pub mod instructors;
    pub mod not_found;
    pub mod on_road;
    pub mod simulator;
    pub mod testimonials;
}

use pages::{
    about::About,
    contact::Contact,
    courses::Courses,
    faq::FaqPage,
    gallery::Gallery,
    home::Home,
    instructors::Instructors,
    not_found::NotFound,
    on_road::OnRoad,
    simulator::Simulator,
    testimonials::Testimonials,
};

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/courses")]
    Courses,
    #[at("/simulator")]
    Simulator,
    #[at("/on-road")]
    OnRoad,
    #[at("/instructors")]
    Instructors,
    #[at("/gallery")]
    Gallery,
    #[at("/testimonials")]
    Testimonials,
    #[at("/contact")]
    Contact,
    #[at("/faq")]
    Faq,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        },
        Route::Courses => {
            info!("Rendering Courses page");
            html! { <Courses /> }
        },
        Route::Simulator => {
            info!("Rendering Simulator page");
            html! { <Simulator /> }
        },
        Route::OnRoad => {
            info!("Rendering On-Road page");
            html! { <OnRoad /> }
        },
        Route::Instructors => {
            info!("Rendering Instructors page");
            html! { <Instructors /> }
        },
        Route::Gallery => {
            info!("Rendering Gallery page");
            html! { <Gallery /> }
        },
        Route::Testimonials => {
            info!("Rendering Testimonials page");
            html! { <Testimonials /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        },
        Route::Faq => {
            info!("Rendering FAQ page");
            html! { <FaqPage /> }
        },
        Route::NotFound => {
            log::warn!("No route matched, rendering 404 page");
            html! { <NotFound /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting {}", config::BUSINESS_NAME);
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::layout::NAV_ITEMS;

    #[test]
    fn every_page_has_its_own_path() {
        let routes = [
            Route::About,
            Route::Courses,
            Route::Simulator,
            Route::OnRoad,
            Route::Instructors,
            Route::Gallery,
            Route::Testimonials,
            Route::Contact,
            Route::Faq,
        ];
        for route in routes.iter() {
            assert_eq!(Route::recognize(&route.to_path()).as_ref(), Some(route));
        }
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(Route::OnRoad.to_path(), "/on-road");
    }

    #[test]
    fn unknown_paths_fall_back_to_not_found() {
        assert_eq!(Route::recognize("/pricing"), Some(Route::NotFound));
        assert_eq!(Route::recognize("/courses/truck/extra"), Some(Route::NotFound));
    }

    #[test]
    fn navigation_never_points_at_the_404_page() {
        for item in NAV_ITEMS.iter() {
            assert_ne!(item.route, Route::NotFound);
            assert!(item.submenu.iter().all(|(_, to)| *to != Route::NotFound));
        }
    }
}
