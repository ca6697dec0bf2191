use yew::prelude::*;

use crate::config;
use crate::utils::scroll::SectionId;
use crate::visibility::use_scroll_animation;

const STATS: [(&str, &str, &str); 4] = [
    ("fas fa-users", "500+", "Happy Clients"),
    ("fas fa-award", "50+", "Awards Won"),
    ("fas fa-arrow-trend-up", "99%", "Success Rate"),
    ("fas fa-bullseye", "10+", "Years Experience"),
];

#[function_component(About)]
pub fn about() -> Html {
    let (node, is_visible) = use_scroll_animation(0.2);
    let animate = |class: &str| is_visible.then(|| class.to_string());

    html! {
        <section id={SectionId::About.anchor()} class="about">
            <div class="about-grid">
                <div ref={node} class={classes!("about-copy", animate("slide-in-left"))}>
                    <div class="section-badge badge-blue">
                        <i class="fas fa-bullseye"></i>
                        {format!("About {}", config::COMPANY_NAME)}
                    </div>
                    <h2 class="section-title">
                        {"Empowering Your Business with"}
                        <span class="accent-blue">{" Technology That Delivers"}</span>
                    </h2>
                    <p class="section-lead">
                        {format!(
                            "{} is committed to driving digital transformation by offering scalable, secure, and smart technology solutions. From cloud to data management and IT support, we help businesses unlock growth, efficiency, and innovation.",
                            config::COMPANY_NAME
                        )}
                    </p>
                    <div class="about-cards">
                        <div class="about-card">
                            <h3>{"Our Mission"}</h3>
                            <p>{"To enable innovation through tailored technology that simplifies operations and drives results."}</p>
                        </div>
                        <div class="about-card">
                            <h3>{"Our Vision"}</h3>
                            <p>{"To be a trusted partner for organizations navigating the evolving digital landscape."}</p>
                        </div>
                    </div>
                </div>
                <div class={classes!("about-stats", animate("slide-in-right"))}>
                    {
                        STATS.iter().enumerate().map(|(index, (icon, value, label))| html! {
                            <div
                                key={*label}
                                class={classes!("stat-card", animate(&format!("slide-up stagger-{}", index + 1)))}
                            >
                                <div class="stat-icon"><i class={*icon}></i></div>
                                <div class="stat-value">{*value}</div>
                                <div class="stat-label">{*label}</div>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}
