use chrono::Datelike;
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{MouseEvent, Node};

use crate::components::theme::Theme;
use crate::config;
use crate::disclosure::Disclosure;
use crate::links;
use crate::Route;

/// Header turns solid once the page is scrolled past this many pixels.
const SCROLLED_THRESHOLD: f64 = 20.0;

pub struct NavItem {
    pub name: &'static str,
    pub route: Route,
    pub submenu: &'static [(&'static str, Route)],
}

pub static NAV_ITEMS: [NavItem; 8] = [
    NavItem { name: "Home", route: Route::Home, submenu: &[] },
    NavItem { name: "About", route: Route::About, submenu: &[] },
    NavItem {
        name: "Training",
        route: Route::Courses,
        submenu: &[
            ("All Courses", Route::Courses),
            ("Simulator Training", Route::Simulator),
            ("On-Road Training", Route::OnRoad),
        ],
    },
    NavItem { name: "Instructors", route: Route::Instructors, submenu: &[] },
    NavItem { name: "Gallery", route: Route::Gallery, submenu: &[] },
    NavItem { name: "Testimonials", route: Route::Testimonials, submenu: &[] },
    NavItem { name: "Contact", route: Route::Contact, submenu: &[] },
    NavItem { name: "FAQ", route: Route::Faq, submenu: &[] },
];

pub static FOOTER_QUICK_LINKS: [(&str, Route); 6] = [
    ("Home", Route::Home),
    ("About Us", Route::About),
    ("Courses", Route::Courses),
    ("Gallery", Route::Gallery),
    ("Testimonials", Route::Testimonials),
    ("Contact", Route::Contact),
];

pub static FOOTER_COURSE_LINKS: [(&str, Route); 5] = [
    ("Car Training", Route::Courses),
    ("Truck Training", Route::Courses),
    ("Simulator Training", Route::Simulator),
    ("On-Road Training", Route::OnRoad),
    ("Advanced Driving", Route::Courses),
];

#[function_component(Header)]
pub fn header() -> Html {
    let route = use_route::<Route>();
    let (_, scroll_y) = use_window_scroll();
    let mobile_open = use_state(|| false);
    let submenu = use_state(Disclosure::<&'static str>::new);

    // Navigating closes both menus.
    {
        let mobile_open = mobile_open.clone();
        let submenu = submenu.clone();
        use_effect_with_deps(
            move |_| {
                mobile_open.set(false);
                let mut next = (*submenu).clone();
                next.close();
                submenu.set(next);
                || ()
            },
            route.clone(),
        );
    }

    let toggle_mobile = {
        let mobile_open = mobile_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            mobile_open.set(!*mobile_open);
        })
    };

    let desktop_items = NAV_ITEMS.iter().map(|item| {
        let is_active = route.as_ref() == Some(&item.route);
        let has_submenu = !item.submenu.is_empty();
        let on_enter = {
            let submenu = submenu.clone();
            let name = item.name;
            Callback::from(move |_: MouseEvent| {
                if has_submenu {
                    let mut next = (*submenu).clone();
                    next.open(name);
                    submenu.set(next);
                }
            })
        };
        let on_focus = {
            let submenu = submenu.clone();
            let name = item.name;
            Callback::from(move |_: FocusEvent| {
                if has_submenu {
                    let mut next = (*submenu).clone();
                    next.open(name);
                    submenu.set(next);
                }
            })
        };
        let on_leave = {
            let submenu = submenu.clone();
            let name = item.name;
            Callback::from(move |_: MouseEvent| {
                let mut next = (*submenu).clone();
                next.collapse(&name);
                submenu.set(next);
            })
        };
        let on_blur = {
            let submenu = submenu.clone();
            let name = item.name;
            Callback::from(move |e: FocusEvent| {
                // Tabbing between the item's own links keeps the submenu open.
                let focus_stays_inside = match (e.current_target(), e.related_target()) {
                    (Some(item), Some(next)) => item
                        .dyn_ref::<Node>()
                        .map(|item| item.contains(next.dyn_ref::<Node>()))
                        .unwrap_or(false),
                    _ => false,
                };
                if !focus_stays_inside {
                    let mut next = (*submenu).clone();
                    next.collapse(&name);
                    submenu.set(next);
                }
            })
        };
        html! {
            <div class="nav-item" key={item.name}
                onmouseenter={on_enter}
                onmouseleave={on_leave}
                onfocusin={on_focus}
                onfocusout={on_blur}
            >
                <Link<Route> to={item.route.clone()} classes={classes!("nav-link", is_active.then(|| "active"))}>
                    {item.name}
                    { if has_submenu { html! { <i class="chevron-down-icon"></i> } } else { html! {} } }
                </Link<Route>>
                {
                    if has_submenu && submenu.is_expanded(&item.name) {
                        html! {
                            <div class="nav-submenu">
                                { for item.submenu.iter().map(|(name, to)| html! {
                                    <Link<Route> to={to.clone()} classes="nav-submenu-link">{*name}</Link<Route>>
                                }) }
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        }
    });

    let mobile_items = NAV_ITEMS.iter().map(|item| {
        let is_active = route.as_ref() == Some(&item.route);
        html! {
            <div class="mobile-nav-item" key={item.name}>
                <Link<Route> to={item.route.clone()} classes={classes!("mobile-nav-link", is_active.then(|| "active"))}>
                    {item.name}
                </Link<Route>>
                {
                    if item.submenu.is_empty() {
                        html! {}
                    } else {
                        html! {
                            <div class="mobile-submenu">
                                { for item.submenu.iter().map(|(name, to)| html! {
                                    <Link<Route> to={to.clone()} classes="mobile-submenu-link">{*name}</Link<Route>>
                                }) }
                            </div>
                        }
                    }
                }
            </div>
        }
    });

    html! {
        <header class={classes!("site-header", (scroll_y > SCROLLED_THRESHOLD).then(|| "scrolled"))}>
            <div class="header-content">
                <Link<Route> to={Route::Home} classes="brand">
                    <span class="brand-mark">{"M"}</span>
                    <span class="brand-text">
                        <span class="brand-name">{"MASTER MOTOR"}</span>
                        <span class="brand-tagline">{"Training College"}</span>
                    </span>
                </Link<Route>>

                <nav class="desktop-nav">
                    { for desktop_items }
                </nav>

                <div class="header-cta">
                    <a href={links::tel_link()} class="header-call" aria-label="Call us">
                        <i class="phone-icon"></i>
                    </a>
                    <a href={links::whatsapp_link(links::GENERAL_INQUIRY)} target="_blank" rel="noopener noreferrer" class="header-whatsapp">
                        <i class="message-icon"></i>
                        {"WhatsApp"}
                    </a>
                </div>

                <button class="burger-menu" onclick={toggle_mobile} aria-label="Toggle menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
            {
                if *mobile_open {
                    html! {
                        <div class="mobile-menu">
                            { for mobile_items }
                            <a href={links::tel_link()} class="mobile-call">{"Call "}{config::PHONE_DISPLAY}</a>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </header>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let current_year = chrono::Local::now().year();
    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div class="footer-brand">
                    <Link<Route> to={Route::Home} classes="brand">
                        <span class="brand-mark">{"M"}</span>
                        <span class="brand-text">
                            <span class="brand-name">{"MASTER MOTOR"}</span>
                            <span class="brand-tagline">{"Training College"}</span>
                        </span>
                    </Link<Route>>
                    <p>{format!("Lucknow's oldest and most trusted driving school, shaping confident drivers since {}.", config::ESTABLISHED)}</p>
                    <div class="footer-social">
                        <a href={config::FACEBOOK_URL} target="_blank" rel="noopener noreferrer" aria-label="Facebook">
                            <i class="facebook-icon"></i>
                        </a>
                    </div>
                </div>

                <div>
                    <h4>{"QUICK LINKS"}</h4>
                    <ul>
                        { for FOOTER_QUICK_LINKS.iter().map(|(name, to)| html! {
                            <li><Link<Route> to={to.clone()} classes="footer-link">{*name}</Link<Route>></li>
                        }) }
                    </ul>
                </div>

                <div>
                    <h4>{"OUR COURSES"}</h4>
                    <ul>
                        { for FOOTER_COURSE_LINKS.iter().map(|(name, to)| html! {
                            <li><Link<Route> to={to.clone()} classes="footer-link">{*name}</Link<Route>></li>
                        }) }
                    </ul>
                </div>

                <div>
                    <h4>{"CONTACT US"}</h4>
                    <ul class="footer-contact">
                        <li><i class="map-pin-icon"></i><span>{config::ADDRESS}</span></li>
                        <li><a href={links::tel_link()}><i class="phone-icon"></i>{config::PHONE_DISPLAY}</a></li>
                        <li><a href={links::mailto_link()}><i class="mail-icon"></i>{config::EMAIL}</a></li>
                        <li>
                            <i class="clock-icon"></i>
                            <span>{config::HOURS_WEEKDAYS}<br />{config::HOURS_SUNDAY}</span>
                        </li>
                    </ul>
                </div>
            </div>

            <div class="footer-bottom">
                <p>{format!("© {} {}. All Rights Reserved. Est. {}", current_year, config::BUSINESS_NAME, config::ESTABLISHED)}</p>
                <div class="footer-bottom-links">
                    <Link<Route> to={Route::Faq} classes="footer-link">{"FAQ"}</Link<Route>>
                    <span class="divider">{"|"}</span>
                    <Link<Route> to={Route::Contact} classes="footer-link">{"Privacy Policy"}</Link<Route>>
                </div>
            </div>

            <a
                href={links::whatsapp_link(links::GENERAL_INQUIRY)}
                target="_blank"
                rel="noopener noreferrer"
                class="floating-whatsapp"
                aria-label="Chat on WhatsApp"
            >
                <i class="message-icon"></i>
            </a>
        </footer>
    }
}

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let route = use_route::<Route>();

    // Scroll to top whenever the page changes
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        route,
    );

    html! {
        <div class="site">
            <Theme />
            <Header />
            <main class="site-main">
                { for props.children.iter() }
            </main>
            <Footer />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_training_has_a_submenu() {
        let with_submenu: Vec<&str> = NAV_ITEMS
            .iter()
            .filter(|item| !item.submenu.is_empty())
            .map(|item| item.name)
            .collect();
        assert_eq!(with_submenu, vec!["Training"]);
    }

    #[test]
    fn hovering_second_menu_closes_first() {
        let mut open: Disclosure<&str> = Disclosure::new();
        open.open(NAV_ITEMS[2].name);
        open.open(NAV_ITEMS[0].name);
        assert!(!open.is_expanded(&"Training"));
        open.close();
        assert_eq!(open.expanded(), None);
    }

    #[test]
    fn leaving_one_item_keeps_a_newer_submenu_open() {
        let mut open: Disclosure<&str> = Disclosure::new();
        open.open(NAV_ITEMS[2].name);
        // Blur of a neighbour arriving after Training took focus.
        open.collapse(&NAV_ITEMS[1].name);
        assert!(open.is_expanded(&"Training"));
        // Focus leaves Training for the next top-level link.
        open.collapse(&NAV_ITEMS[2].name);
        assert_eq!(open.expanded(), None);
    }

    #[test]
    fn nav_names_are_unique() {
        for (i, a) in NAV_ITEMS.iter().enumerate() {
            for b in NAV_ITEMS.iter().skip(i + 1) {
                assert_ne!(a.name, b.name);
            }
        }
    }
}
