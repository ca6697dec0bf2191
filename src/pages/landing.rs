use web_sys::window;
use yew::prelude::*;

use super::about::About;
use super::footer::Footer;
use super::hero::Hero;
use super::services::Services;
use crate::contact::section::Contact;

#[function_component(Landing)]
pub fn landing() -> Html {
    // Start at the hero when arriving from another view
    use_effect_with_deps(
        move |_| {
            if let Some(window) = window() {
                if window.location().hash().map(|h| h.is_empty()).unwrap_or(true) {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
            }
            || ()
        },
        (),
    );

    html! {
        <>
            <Hero />
            <About />
            <Services />
            <Contact />
            <Footer />
        </>
    }
}
