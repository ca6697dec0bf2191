use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, MouseEvent, Node};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::utils::scroll::{scroll_to_section, scroll_y, SectionId};
use crate::Route;

const SCROLLED_PAST_PX: f64 = 50.0;
const SCROLL_AFTER_ROUTE_MS: u32 = 100;

#[function_component(Header)]
pub fn header() -> Html {
    let is_menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);
    let overlay_ref = use_node_ref();
    let navigator = use_navigator();
    let route = use_route::<Route>();

    // Solid background once the page has moved
    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = window() {
                    let callback = Closure::<dyn Fn()>::new(move || {
                        is_scrolled.set(scroll_y() > SCROLLED_PAST_PX);
                    });
                    if let Err(e) = window
                        .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                    {
                        log::error!("Failed to listen for scroll: {:?}", e);
                    }
                    Box::new(move || {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        );
                    })
                } else {
                    Box::new(|| ())
                };
                move || destructor()
            },
            (),
        );
    }

    // Close the overlay on clicks outside it
    {
        let is_menu_open = is_menu_open.clone();
        let overlay_ref = overlay_ref.clone();
        let open = *is_menu_open;
        use_effect_with_deps(
            move |open| {
                let document = window().and_then(|w| w.document());
                let destructor: Box<dyn FnOnce()> = match (document, *open) {
                    (Some(document), true) => {
                        let callback = Closure::<dyn Fn(MouseEvent)>::new(move |event: MouseEvent| {
                            let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
                            if let Some(overlay) = overlay_ref.cast::<Node>() {
                                if !overlay.contains(target.as_ref()) {
                                    is_menu_open.set(false);
                                }
                            }
                        });
                        let _ = document.add_event_listener_with_callback(
                            "mousedown",
                            callback.as_ref().unchecked_ref(),
                        );
                        Box::new(move || {
                            let _ = document.remove_event_listener_with_callback(
                                "mousedown",
                                callback.as_ref().unchecked_ref(),
                            );
                        })
                    }
                    _ => Box::new(|| ()),
                };
                move || destructor()
            },
            open,
        );
    }

    // No page scrolling behind the open menu
    use_effect_with_deps(
        move |open| {
            if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
                let overflow = if *open { "hidden" } else { "auto" };
                let _ = body.style().set_property("overflow", overflow);
            }
            || ()
        },
        *is_menu_open,
    );

    let on_section = {
        let is_menu_open = is_menu_open.clone();
        let navigator = navigator.clone();
        let on_home = route == Some(Route::Home);
        Callback::from(move |section: SectionId| {
            is_menu_open.set(false);
            if on_home {
                scroll_to_section(section);
                return;
            }
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Home);
            }
            Timeout::new(SCROLL_AFTER_ROUTE_MS, move || scroll_to_section(section)).forget();
        })
    };

    let to_payment = {
        let is_menu_open = is_menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            is_menu_open.set(false);
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Payment);
            }
        })
    };

    let toggle_menu = {
        let is_menu_open = is_menu_open.clone();
        Callback::from(move |_: MouseEvent| is_menu_open.set(!*is_menu_open))
    };
    let close_menu = {
        let is_menu_open = is_menu_open.clone();
        Callback::from(move |_: MouseEvent| is_menu_open.set(false))
    };

    let nav_buttons = |class: &'static str| {
        SectionId::ALL
            .iter()
            .map(|section| {
                let section = *section;
                let on_section = on_section.clone();
                html! {
                    <button
                        key={section.anchor()}
                        class={class}
                        onclick={Callback::from(move |_: MouseEvent| on_section.emit(section))}
                    >
                        {section.nav_label()}
                    </button>
                }
            })
            .collect::<Html>()
    };

    let header_class = if *is_scrolled {
        "site-header scrolled"
    } else {
        "site-header"
    };

    html! {
        <header class={header_class}>
            <div class="header-inner">
                <div class="brand">
                    <img src="/assets/info_logo.png" alt="Infosoft Logo" class="brand-logo" />
                    <span class="brand-name">{config::COMPANY_NAME}</span>
                </div>
                <nav class="desktop-nav">
                    {nav_buttons("nav-link")}
                    <button class="cta-pill" onclick={to_payment.clone()}>{"Get Started"}</button>
                </nav>
                <button class="menu-toggle" onclick={toggle_menu}>
                    <i class={if *is_menu_open { "fas fa-xmark" } else { "fas fa-bars" }}></i>
                </button>
            </div>
            if *is_menu_open {
                <div ref={overlay_ref} class="mobile-overlay">
                    <button class="overlay-close" onclick={close_menu}>
                        <i class="fas fa-xmark"></i>
                    </button>
                    <img src="/assets/info_logo.png" alt="Infosoft Logo" class="overlay-logo" />
                    <span class="overlay-name">{config::COMPANY_NAME}</span>
                    <nav class="mobile-nav">
                        {nav_buttons("mobile-nav-link")}
                        <button class="overlay-cta" onclick={to_payment}>{"Pay as You Go"}</button>
                    </nav>
                </div>
            }
        </header>
    }
}
