use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{window, HtmlInputElement, HtmlSelectElement, KeyboardEvent};
use yew::prelude::*;
use yew_router::prelude::*;

use super::catalog::{Category, Service};
use super::checkout::{format_amount, pay_button_label, simulate_payment, CheckoutPhase};
use super::selection::{FieldUpdate, FormField, PricingStrategy, Selection};
use crate::config;

const CARD_FIELDS: [(FormField, &str); 3] = [
    (FormField::Email, "email"),
    (FormField::CardholderName, "text"),
    (FormField::CardNumber, "text"),
];

#[function_component(PaymentGateway)]
pub fn payment_gateway() -> Html {
    let strategy = *use_state(config::get_pricing_strategy);
    let selection = use_state(Selection::default);
    let phase = use_state(|| CheckoutPhase::Editing);
    let navigator = use_navigator();

    let close = {
        let navigator = navigator.clone();
        Callback::from(move |_: ()| match &navigator {
            Some(navigator) => navigator.back(),
            None => {
                if let Some(history) = window().and_then(|w| w.history().ok()) {
                    let _ = history.back();
                }
            }
        })
    };

    // Escape leaves the payment view
    {
        let close = close.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = window() {
                    let callback = Closure::<dyn Fn(KeyboardEvent)>::new(move |e: KeyboardEvent| {
                        if e.key() == "Escape" {
                            close.emit(());
                        }
                    });
                    let _ = window
                        .add_event_listener_with_callback("keydown", callback.as_ref().unchecked_ref());
                    Box::new(move || {
                        let _ = window.remove_event_listener_with_callback(
                            "keydown",
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

    let update = {
        let selection = selection.clone();
        Callback::from(move |update: FieldUpdate| {
            selection.set(selection.apply(strategy, update));
        })
    };

    let on_category = {
        let update = update.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            update.emit(FieldUpdate::SetCategory(Category::from_label(&select.value())));
        })
    };

    let on_service = {
        let update = update.clone();
        let category = selection.category;
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let service = category.and_then(|c| Service::from_label(c, &select.value()));
            update.emit(FieldUpdate::SetService(service));
        })
    };

    let on_amount = {
        let update = update.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            update.emit(FieldUpdate::SetAmount(input.value()));
        })
    };

    let text_input = |field: FormField, kind: &'static str, class: &'static str| {
        let update = update.clone();
        let oninput = Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            update.emit(FieldUpdate::SetField(field, input.value()));
        });
        html! {
            <input
                type={kind}
                class={class}
                placeholder={field.placeholder()}
                value={selection.field(field).to_string()}
                {oninput}
                required=true
            />
        }
    };

    let on_pay = {
        let phase = phase.clone();
        let amount = selection.amount;
        Callback::from(move |_: MouseEvent| {
            if phase.is_processing() {
                return;
            }
            phase.set(CheckoutPhase::Processing);
            let phase = phase.clone();
            spawn_local(async move {
                phase.set(simulate_payment(amount).await);
            });
        })
    };

    let on_reset = {
        let phase = phase.clone();
        let selection = selection.clone();
        Callback::from(move |_: MouseEvent| {
            selection.set(Selection::default());
            phase.set(CheckoutPhase::Editing);
        })
    };

    let on_close_click = close.reform(|_: MouseEvent| ());

    if let CheckoutPhase::Succeeded { amount } = &*phase {
        return html! {
            <div class="payment-backdrop">
                <div class="payment-card payment-success">
                    <button class="payment-close" onclick={on_close_click}>
                        <i class="fas fa-xmark"></i>
                    </button>
                    <div class="success-icon"><i class="fas fa-circle-check"></i></div>
                    <h2>{"Payment Successful!"}</h2>
                    <p>{format!("Your payment of ${} was processed successfully.", format_amount(*amount))}</p>
                    <button class="payment-reset" onclick={on_reset}>{"Make Another Payment"}</button>
                </div>
            </div>
        };
    }

    let category = selection.category;
    let amount_field = match (strategy, selection.service) {
        (_, None) => html! {},
        (PricingStrategy::UserEntered, Some(_)) => html! {
            <input
                type="number"
                min="0"
                step="0.01"
                name="amount"
                class="payment-input"
                placeholder="Enter invoice amount (AUD)"
                value={if selection.amount > 0.0 { selection.amount.to_string() } else { String::new() }}
                oninput={on_amount}
                required=true
            />
        },
        (PricingStrategy::PriceTable, Some(service)) => html! {
            <div class="payment-price">
                <span>{service.label()}</span>
                <strong>{format!("A${}", format_amount(selection.amount))}</strong>
            </div>
        },
    };

    html! {
        <div class="payment-backdrop">
            <div class="payment-card">
                <button class="payment-close" onclick={on_close_click}>
                    <i class="fas fa-xmark"></i>
                </button>

                <div class="payment-heading">
                    <div class="payment-heading-icon"><i class="fas fa-credit-card"></i></div>
                    <h2>{"Secure Payment"}</h2>
                    <p>{"Complete your payment securely"}</p>
                </div>

                <div class="payment-fields">
                    <label>{"Service Category"}</label>
                    <select name="serviceCategory" class="payment-input" onchange={on_category} required=true>
                        <option value="" selected={category.is_none()}>{"Select a service category"}</option>
                        {
                            Category::ALL.iter().map(|c| html! {
                                <option key={c.label()} value={c.label()} selected={category == Some(*c)}>
                                    {c.label()}
                                </option>
                            }).collect::<Html>()
                        }
                    </select>

                    if let Some(active) = category {
                        <label>{"Specific Service"}</label>
                        <select name="selectedService" class="payment-input" onchange={on_service} required=true>
                            <option value="" selected={selection.service.is_none()}>{"Select a service"}</option>
                            {
                                active.services().iter().map(|s| html! {
                                    <option key={s.label()} value={s.label()} selected={selection.service == Some(*s)}>
                                        {s.label()}
                                    </option>
                                }).collect::<Html>()
                            }
                        </select>
                    }

                    {amount_field}

                    {
                        CARD_FIELDS.iter().map(|(field, kind)| {
                            text_input(*field, *kind, "payment-input")
                        }).collect::<Html>()
                    }
                    <div class="payment-row">
                        {text_input(FormField::ExpiryDate, "text", "payment-input half")}
                        {text_input(FormField::Cvv, "text", "payment-input half")}
                    </div>

                    <h3>{"Billing Address"}</h3>
                    {
                        strategy.billing_fields().iter().map(|field| {
                            text_input(*field, "text", "payment-input")
                        }).collect::<Html>()
                    }
                    <input
                        type="text"
                        class="payment-input locked"
                        value={selection.billing.country.clone()}
                        disabled=true
                    />

                    <div class="payment-notice">
                        <i class="fas fa-lock"></i>
                        <span>
                            <strong>{"Secure Payment:"}</strong>
                            {" Your payment information is encrypted and secure. We use industry-standard SSL encryption to protect your data."}
                        </span>
                    </div>

                    <button
                        class={classes!("payment-submit", phase.is_processing().then_some("busy"))}
                        onclick={on_pay}
                        disabled={phase.is_processing() || !selection.can_submit()}
                    >
                        {pay_button_label(&phase, selection.amount)}
                    </button>
                </div>
            </div>
        </div>
    }
}
