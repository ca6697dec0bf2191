use yew::prelude::*;

use crate::config;
use crate::utils::scroll::{scroll_to_section, SectionId};

const FLOATING_ICONS: [(&str, &str); 4] = [
    ("fas fa-cloud", "float-icon top-left float-slow"),
    ("fas fa-microchip", "float-icon top-right float-medium"),
    ("fas fa-shield-halved", "float-icon bottom-left float-medium"),
    ("fas fa-database", "float-icon bottom-right float-slow"),
];

#[function_component(Hero)]
pub fn hero() -> Html {
    let start_journey = Callback::from(|_: MouseEvent| scroll_to_section(SectionId::Contact));

    html! {
        <section id={SectionId::Home.anchor()} class="hero">
            <div class="hero-blob hero-blob-left"></div>
            <div class="hero-blob hero-blob-right"></div>
            {
                FLOATING_ICONS.iter().map(|(icon, style)| html! {
                    <div key={*icon} class={*style}><i class={*icon}></i></div>
                }).collect::<Html>()
            }
            <div class="hero-content fade-up">
                <h1 class="hero-title">
                    {"Empowering Businesses with"}
                    <span class="hero-title-accent">{"Tailored Technology Solutions"}</span>
                </h1>
                <p class="hero-subtitle">
                    {format!(
                        "At {}, we empower businesses with cutting-edge technology, from cloud computing and custom software to robust data management and 24/7 IT support. Let us help you innovate, grow, and operate efficiently through tailored, expert solutions.",
                        config::COMPANY_NAME
                    )}
                </p>
                <div class="hero-cta-group">
                    <button class="hero-cta" onclick={start_journey}>{"Start Your Journey"}</button>
                    <button class="hero-story">
                        <span class="hero-story-icon"><i class="fas fa-play"></i></span>
                        {"Watch Our Story"}
                    </button>
                </div>
            </div>
            <div class="hero-wave">
                <svg viewBox="0 0 1200 80" preserveAspectRatio="none" xmlns="http://www.w3.org/2000/svg">
                    <path d="M1200 0L0 0 892.25 80 1200 0z" fill="#f9fafb" />
                </svg>
            </div>
        </section>
    }
}
