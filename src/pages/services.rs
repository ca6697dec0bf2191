use yew::prelude::*;

use crate::payment::catalog::Category;
use crate::utils::scroll::SectionId;
use crate::visibility::use_scroll_animation;

fn icon_for(category: Category) -> &'static str {
    match category {
        Category::CloudComputing => "fas fa-cloud",
        Category::DataManagement => "fas fa-database",
        Category::ItSupport => "fas fa-headset",
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    let (node, is_visible) = use_scroll_animation(0.15);

    html! {
        <section id={SectionId::Services.anchor()} class="services">
            <div
                ref={node}
                class={classes!("section-header", is_visible.then_some("fade-in"))}
            >
                <div class="section-badge badge-emerald">
                    <i class="fas fa-arrow-trend-up"></i>
                    {"Our Services"}
                </div>
                <h2 class="section-title">
                    {"Expert IT Services for"}
                    <span class="accent-emerald">{" Business Growth"}</span>
                </h2>
                <p class="section-lead">
                    {"From cloud solutions to data management and ongoing IT support, we provide tailored services that drive innovation and efficiency."}
                </p>
            </div>
            <div class="services-grid">
                {
                    Category::ALL.iter().enumerate().map(|(index, category)| {
                        let animation = is_visible.then(|| format!("slide-up stagger-{}", index + 1));
                        html! {
                            <div key={category.label()} class={classes!("service-card", animation)}>
                                <div class="service-icon"><i class={icon_for(*category)}></i></div>
                                <h3>{category.headline()}</h3>
                                <p>{category.description()}</p>
                                <ul class="service-features">
                                    {
                                        category.services().iter().map(|service| html! {
                                            <li key={service.label()}>{service.label()}</li>
                                        }).collect::<Html>()
                                    }
                                </ul>
                            </div>
                        }
                    }).collect::<Html>()
                }
            </div>
        </section>
    }
}
