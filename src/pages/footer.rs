use chrono::{Datelike, Utc};
use yew::prelude::*;

use crate::config;
use crate::utils::scroll::SectionId;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Utc::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-inner">
                <h2 class="footer-brand">{config::LEGAL_NAME}</h2>
                <ul class="footer-links">
                    {
                        SectionId::ALL.iter().map(|section| html! {
                            <li key={section.anchor()}>
                                <a href={format!("#{}", section.anchor())}>{section.nav_label()}</a>
                            </li>
                        }).collect::<Html>()
                    }
                    <li><a href="/payment">{"Get Started"}</a></li>
                </ul>
            </div>
            <div class="footer-copyright">
                {format!("© {} {}. All rights reserved.", year, config::LEGAL_NAME)}
            </div>
        </footer>
    }
}
