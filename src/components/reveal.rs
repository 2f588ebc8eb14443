//! Scroll-triggered reveal. Wrapped content starts translated down and
//! transparent, and fades in the first time it intersects the viewport. The
//! transition is one-way: scrolling back out never hides it again.

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// Matches the original animation trigger: 10% visibility, with the bottom
/// edge pulled up 50px so elements reveal slightly before fully on screen.
const THRESHOLD: f64 = 0.1;
const ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Latches on the first intersection and never reverts.
fn should_reveal(already_revealed: bool, intersecting: bool) -> bool {
    already_revealed || intersecting
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let revealed = use_state(|| false);
    let node = use_node_ref();

    {
        let revealed = revealed.clone();
        let node = node.clone();
        use_effect_with_deps(
            move |_| {
                let mut observing: Option<(
                    IntersectionObserver,
                    Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
                )> = None;

                if let Some(element) = node.cast::<Element>() {
                    let mut latched = false;
                    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
                        move |entries: js_sys::Array, observer: IntersectionObserver| {
                            for entry in entries.iter() {
                                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>()
                                else {
                                    continue;
                                };
                                latched = should_reveal(latched, entry.is_intersecting());
                                if latched {
                                    revealed.set(true);
                                    observer.unobserve(&entry.target());
                                }
                            }
                        },
                    );
                    let options = IntersectionObserverInit::new();
                    options.set_threshold(&JsValue::from(THRESHOLD));
                    options.set_root_margin(ROOT_MARGIN);
                    match IntersectionObserver::new_with_options(
                        callback.as_ref().unchecked_ref(),
                        &options,
                    ) {
                        Ok(observer) => {
                            observer.observe(&element);
                            observing = Some((observer, callback));
                        }
                        Err(e) => log::warn!("IntersectionObserver unavailable: {:?}", e),
                    }
                }

                move || {
                    if let Some((observer, _callback)) = observing {
                        observer.disconnect();
                    }
                }
            },
            (),
        );
    }

    let style = if *revealed {
        "opacity: 1; transform: translateY(0); transition: opacity 0.6s ease, transform 0.6s ease;"
    } else {
        "opacity: 0; transform: translateY(20px); transition: opacity 0.6s ease, transform 0.6s ease;"
    };

    html! {
        <div ref={node} class={props.class.clone()} style={style}>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::should_reveal;

    #[test]
    fn reveal_is_one_way() {
        assert!(!should_reveal(false, false));
        assert!(should_reveal(false, true));
        // Once revealed, leaving the viewport does not hide it again.
        assert!(should_reveal(true, false));
        assert!(should_reveal(true, true));
    }
}
