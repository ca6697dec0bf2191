use chrono::Utc;
use wasm_bindgen_futures::spawn_local;
use web_sys::{window, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::form::{service_options, ContactField, ContactForm};
use crate::config;
use crate::utils::emailjs;
use crate::utils::scroll::SectionId;
use crate::visibility::use_scroll_animation;

const CONTACT_INFO: [(&str, &str, &str, &str); 4] = [
    ("fas fa-envelope", "Email Us", config::CONTACT_EMAIL, "We typically respond within 1 business day."),
    ("fas fa-phone", "Call Us", "+61411851765", "Available Mon–Fri, 9AM to 6PM AEST"),
    ("fas fa-location-dot", "Visit Us", "Melbourne VIC, Australia", "Let's meet over coffee or Zoom."),
    ("fas fa-certificate", "ABN", "92 683 984 975", config::LEGAL_NAME),
];

fn notify(message: &str) {
    if let Some(window) = window() {
        let _ = window.alert_with_message(message);
    }
}

#[derive(Properties, PartialEq)]
struct SendDialogProps {
    on_email: Callback<MouseEvent>,
    on_whatsapp: Callback<MouseEvent>,
    on_close: Callback<MouseEvent>,
    sending: bool,
}

#[function_component(SendDialog)]
fn send_dialog(props: &SendDialogProps) -> Html {
    html! {
        <div class="dialog-backdrop">
            <div class="dialog">
                <button class="dialog-close" onclick={props.on_close.clone()}>
                    <i class="fas fa-xmark"></i>
                </button>
                <h3>{"How would you like to reach us?"}</h3>
                <div class="dialog-actions">
                    <button class="dialog-email" disabled={props.sending} onclick={props.on_email.clone()}>
                        <i class="fas fa-envelope"></i>
                        {if props.sending { "Sending..." } else { "Email" }}
                    </button>
                    <button class="dialog-whatsapp" onclick={props.on_whatsapp.clone()}>
                        <i class="fab fa-whatsapp"></i>
                        {"WhatsApp"}
                    </button>
                </div>
            </div>
        </div>
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let (node, is_visible) = use_scroll_animation(0.2);
    let form = use_state(ContactForm::default);
    let is_dialog_open = use_state(|| false);
    let sending = use_state(|| false);

    let on_text = |field: ContactField| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(form.with(field, input.value()));
        })
    };

    let on_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            form.set(form.with(ContactField::Message, area.value()));
        })
    };

    let on_service = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            form.set(form.with(ContactField::Service, select.value()));
        })
    };

    let on_submit = {
        let is_dialog_open = is_dialog_open.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            is_dialog_open.set(true);
        })
    };

    let on_email = {
        let form = form.clone();
        let is_dialog_open = is_dialog_open.clone();
        let sending = sending.clone();
        Callback::from(move |_: MouseEvent| {
            let params = form.template_params(Utc::now());
            let is_dialog_open = is_dialog_open.clone();
            let sending = sending.clone();
            sending.set(true);
            spawn_local(async move {
                match emailjs::send(&params).await {
                    Ok(()) => {
                        notify("Email sent!");
                        is_dialog_open.set(false);
                    }
                    Err(e) => {
                        log::error!("Contact email failed: {}", e);
                        notify("Email sending failed.");
                    }
                }
                sending.set(false);
            });
        })
    };

    let on_whatsapp = {
        let form = form.clone();
        let is_dialog_open = is_dialog_open.clone();
        Callback::from(move |_: MouseEvent| {
            let url = form.whatsapp_url();
            if let Some(window) = window() {
                if let Err(e) = window.open_with_url_and_target(&url, "_blank") {
                    log::error!("Failed to open WhatsApp: {:?}", e);
                }
            }
            is_dialog_open.set(false);
        })
    };

    let on_close = {
        let is_dialog_open = is_dialog_open.clone();
        Callback::from(move |_: MouseEvent| is_dialog_open.set(false))
    };

    html! {
        <section id={SectionId::Contact.anchor()} class="contact">
            <div ref={node} class={classes!("section-header", is_visible.then_some("fade-in"))}>
                <div class="section-badge badge-dark">
                    <i class="fas fa-comment"></i>
                    {"Get in Touch"}
                </div>
                <h2 class="section-title">
                    {"Contact "}
                    <span class="accent-blue">{config::COMPANY_NAME}</span>
                </h2>
                <p class="section-lead">
                    {"Reach out to discuss how we can help your business thrive with tailored technology solutions."}
                </p>
            </div>

            <div class="contact-grid">
                <div class={classes!(is_visible.then_some("slide-in-left"))}>
                    <form class="contact-form" onsubmit={on_submit}>
                        <div class="contact-row">
                            <input
                                type="text"
                                name="name"
                                required=true
                                value={form.name.clone()}
                                oninput={on_text(ContactField::Name)}
                                placeholder="Full Name *"
                            />
                            <input
                                type="email"
                                name="email"
                                required=true
                                value={form.email.clone()}
                                oninput={on_text(ContactField::Email)}
                                placeholder="Email Address *"
                            />
                        </div>
                        <input
                            type="text"
                            name="company"
                            value={form.company.clone()}
                            oninput={on_text(ContactField::Company)}
                            placeholder="Company Name"
                        />
                        <select name="service" required=true onchange={on_service}>
                            <option value="" disabled=true hidden=true selected={form.service.is_empty()}>
                                {"Select Service Type"}
                            </option>
                            {
                                service_options().into_iter().map(|option| html! {
                                    <option key={option} value={option} selected={form.service == option}>
                                        {option}
                                    </option>
                                }).collect::<Html>()
                            }
                        </select>
                        <textarea
                            name="message"
                            required=true
                            rows="6"
                            value={form.message.clone()}
                            oninput={on_message}
                            placeholder="Tell us about your project, goals, and timeline..."
                        />
                        <button type="submit" class="contact-submit">
                            <i class="fas fa-paper-plane"></i>
                            {"Send Message"}
                        </button>
                    </form>
                </div>

                <div class={classes!("contact-info", is_visible.then_some("slide-in-right"))}>
                    {
                        CONTACT_INFO.iter().map(|(icon, title, info, sub_info)| html! {
                            <div key={*title} class="contact-card">
                                <div class="contact-card-icon"><i class={*icon}></i></div>
                                <div>
                                    <h3>{*title}</h3>
                                    <p class="contact-card-info">{*info}</p>
                                    <p class="contact-card-sub">{*sub_info}</p>
                                </div>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </div>

            if *is_dialog_open {
                <SendDialog {on_email} {on_whatsapp} {on_close} sending={*sending} />
            }
        </section>
    }
}
