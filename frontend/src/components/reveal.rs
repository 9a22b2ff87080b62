use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Up,
    Left,
    Right,
    Scale,
}

impl Direction {
    pub fn class(self) -> &'static str {
        match self {
            Direction::Up => "reveal-up",
            Direction::Left => "reveal-left",
            Direction::Right => "reveal-right",
            Direction::Scale => "reveal-scale",
        }
    }
}

/// Stagger used by grids: each card waits `step_ms` longer than the previous.
pub fn stagger(index: usize, step_ms: u32) -> u32 {
    (index as u32).saturating_mul(step_ms)
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub direction: Direction,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

fn in_viewport(el: &Element) -> bool {
    if let Some(window) = web_sys::window() {
        if let Ok(height) = window.inner_height() {
            if let Some(height) = height.as_f64() {
                return el.get_bounding_client_rect().top() < height * 0.9;
            }
        }
    }
    true
}

/// Only elements not yet revealed need to follow the scroll position.
fn watches_scroll(seen: bool) -> bool {
    !seen
}

/// Fades its children in once they scroll into view, after `delay_ms`.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let seen = use_state_eq(|| false);
    let visible = use_state_eq(|| false);

    {
        let node = node.clone();
        let seen_handle = seen.clone();
        use_effect_with_deps(
            move |already_seen| {
                let mut attached = None;
                if watches_scroll(*already_seen) {
                    let check = move || {
                        if let Some(el) = node.cast::<Element>() {
                            if in_viewport(&el) {
                                seen_handle.set(true);
                            }
                        }
                    };
                    check();
                    let listener = Closure::<dyn Fn()>::new(check);
                    if let Some(window) = web_sys::window() {
                        if window
                            .add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref())
                            .is_err()
                        {
                            log::warn!("reveal: could not attach scroll listener");
                        }
                        attached = Some((window, listener));
                    }
                }
                // Runs when `seen` flips, so the listener is gone once revealed.
                move || {
                    if let Some((window, listener)) = attached {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            listener.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            *seen,
        );
    }

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |(seen, delay)| {
                let timeout = if *seen {
                    Some(Timeout::new(*delay, move || visible.set(true)))
                } else {
                    None
                };
                move || drop(timeout)
            },
            (*seen, props.delay_ms),
        );
    }

    html! {
        <div
            ref={node}
            class={classes!(
                "reveal",
                props.direction.class(),
                (*visible).then(|| "visible"),
                props.class.clone()
            )}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_listener_only_until_revealed() {
        assert!(watches_scroll(false));
        assert!(!watches_scroll(true));
    }

    #[test]
    fn stagger_grows_linearly() {
        assert_eq!(stagger(0, 100), 0);
        assert_eq!(stagger(3, 50), 150);
        assert_eq!(stagger(usize::MAX, 100), u32::MAX);
    }

    #[test]
    fn every_direction_has_its_own_class() {
        let classes = [Direction::Up, Direction::Left, Direction::Right, Direction::Scale].map(Direction::class);
        for (i, a) in classes.iter().enumerate() {
            for b in classes.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
