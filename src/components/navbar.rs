//! Fixed site header: brand, section links with smooth scrolling, the mobile
//! burger menu, and the scroll-dependent shadow.

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_router::components::Link;

use crate::utils::scroll;
use crate::Route;

/// The shadow steps up once the page has scrolled past this offset.
const ELEVATION_OFFSET_PX: f64 = 100.0;

fn header_elevated(scroll_y: f64) -> bool {
    scroll_y > ELEVATION_OFFSET_PX
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let menu_open = use_state(|| false);
    let elevated = use_state_eq(|| false);

    // Shadow follows the scroll position.
    {
        let elevated = elevated.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let elevated = elevated.clone();
                        move || {
                            if let Some(win) = web_sys::window() {
                                if let Ok(scroll_y) = win.scroll_y() {
                                    elevated.set(header_elevated(scroll_y));
                                }
                            }
                        }
                    });
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        callback.as_ref().unchecked_ref(),
                    );
                    // Initial call
                    if let Ok(scroll_y) = window.scroll_y() {
                        elevated.set(header_elevated(scroll_y));
                    }
                    Box::new(move || {
                        if let Some(win) = web_sys::window() {
                            let _ = win.remove_event_listener_with_callback(
                                "scroll",
                                callback.as_ref().unchecked_ref(),
                            );
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                move || {
                    destructor();
                }
            },
            (),
        );
    }

    // Opening the menu locks body scrolling; closing it restores it.
    {
        use_effect_with_deps(
            move |open: &bool| {
                if let Some(body) = web_sys::window()
                    .and_then(|w| w.document())
                    .and_then(|d| d.body())
                {
                    let overflow = if *open { "hidden" } else { "" };
                    let _ = body.style().set_property("overflow", overflow);
                }
                || ()
            },
            *menu_open,
        );
    }

    // While open, a click anywhere outside the menu or the toggle closes it.
    {
        let menu_open = menu_open.clone();
        let open = *menu_open;
        use_effect_with_deps(
            move |open: &bool| {
                let mut listener: Option<Closure<dyn Fn(web_sys::MouseEvent)>> = None;
                if *open {
                    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                        let callback = Closure::<dyn Fn(web_sys::MouseEvent)>::new({
                            let menu_open = menu_open.clone();
                            let document = document.clone();
                            move |event: web_sys::MouseEvent| {
                                let target = event
                                    .target()
                                    .and_then(|t| t.dyn_into::<web_sys::Node>().ok());
                                let inside = target.map_or(false, |node| {
                                    ["main-nav", "mobile-menu-toggle"].iter().any(|id| {
                                        document
                                            .get_element_by_id(id)
                                            .map_or(false, |el| el.contains(Some(&node)))
                                    })
                                });
                                if !inside {
                                    menu_open.set(false);
                                }
                            }
                        });
                        if document
                            .add_event_listener_with_callback(
                                "click",
                                callback.as_ref().unchecked_ref(),
                            )
                            .is_ok()
                        {
                            listener = Some(callback);
                        }
                    }
                }
                move || {
                    if let Some(callback) = listener {
                        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                            let _ = document.remove_event_listener_with_callback(
                                "click",
                                callback.as_ref().unchecked_ref(),
                            );
                        }
                    }
                }
            },
            open,
        );
    }

    let on_toggle = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            menu_open.set(!*menu_open);
        })
    };

    // Section links close the menu and scroll smoothly past the header.
    let nav_link = {
        let menu_open = menu_open.clone();
        move |section: &'static str| {
            let menu_open = menu_open.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                menu_open.set(false);
                scroll::scroll_to_section(section);
            })
        }
    };

    html! {
        <header id="site-header" class={classes!("header", elevated.then_some("elevated"))}>
            <style>
            {r#".header {
                position: fixed;
                top: 0;
                left: 0;
                right: 0;
                z-index: 100;
                background: #fff;
                box-shadow: 0 2px 10px rgba(27, 54, 93, 0.1);
                transition: box-shadow 0.3s ease;
            }
            .header.elevated {
                box-shadow: 0 4px 20px rgba(27, 54, 93, 0.15);
            }
            .header-inner {
                max-width: 1100px;
                margin: 0 auto;
                padding: 1rem 2rem;
                display: flex;
                align-items: center;
                justify-content: space-between;
            }
            .brand {
                font-size: 1.3rem;
                font-weight: bold;
                text-decoration: none;
                letter-spacing: 0.02em;
            }
            .nav-menu {
                display: flex;
                gap: 2rem;
            }
            .nav-menu a {
                text-decoration: none;
                font-size: 1rem;
                transition: color 0.3s ease;
            }
            .nav-menu a:hover {
                color: #8a6d2f;
            }
            .menu-toggle {
                display: none;
                flex-direction: column;
                gap: 5px;
                background: none;
                border: none;
                cursor: pointer;
                padding: 0.4rem;
            }
            .menu-toggle span {
                width: 24px;
                height: 2px;
                background: #1B365D;
                transition: transform 0.3s ease, opacity 0.3s ease;
            }
            .menu-toggle.active span:nth-child(1) {
                transform: translateY(7px) rotate(45deg);
            }
            .menu-toggle.active span:nth-child(2) {
                opacity: 0;
            }
            .menu-toggle.active span:nth-child(3) {
                transform: translateY(-7px) rotate(-45deg);
            }
            @media (max-width: 768px) {
                .menu-toggle {
                    display: flex;
                }
                .nav-menu {
                    position: fixed;
                    top: 64px;
                    left: 0;
                    right: 0;
                    flex-direction: column;
                    gap: 0;
                    background: #fff;
                    box-shadow: 0 8px 16px rgba(27, 54, 93, 0.15);
                    max-height: 0;
                    overflow: hidden;
                    transition: max-height 0.3s ease;
                }
                .nav-menu.open {
                    max-height: 100vh;
                }
                .nav-menu a {
                    padding: 1rem 2rem;
                    border-top: 1px solid #eef1f6;
                }
            }"#}
            </style>
            <div class="header-inner">
                <Link<Route> to={Route::Home} classes="brand">
                    {"Harrison & Associates"}
                </Link<Route>>
                <nav id="main-nav" class={classes!("nav-menu", menu_open.then_some("open"))}>
                    <a href="#practice-areas" onclick={nav_link("practice-areas")}>{"Practice Areas"}</a>
                    <a href="#why-us" onclick={nav_link("why-us")}>{"Why Us"}</a>
                    <a href="#awards" onclick={nav_link("awards")}>{"Recognition"}</a>
                    <a href="#history" onclick={nav_link("history")}>{"Our History"}</a>
                    <a href="#contact" onclick={nav_link("contact")}>{"Contact"}</a>
                </nav>
                <button
                    id="mobile-menu-toggle"
                    class={classes!("menu-toggle", menu_open.then_some("active"))}
                    aria-label="Toggle navigation"
                    onclick={on_toggle}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shadow_steps_up_past_the_threshold() {
        assert!(!header_elevated(0.0));
        assert!(!header_elevated(100.0));
        assert!(header_elevated(100.5));
        assert!(header_elevated(2_000.0));
    }
}
