use gloo_timers::future::TimeoutFuture;

/// How long the simulated gateway "processes" a payment.
pub const SIMULATED_PROCESSING_MS: u32 = 2_000;

#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutPhase {
    Editing,
    Processing,
    Succeeded { amount: f64 },
}

impl CheckoutPhase {
    pub fn is_processing(&self) -> bool {
        matches!(self, CheckoutPhase::Processing)
    }
}

/// Stand-in for a gateway call. There is no failure path.
pub async fn simulate_payment(amount: f64) -> CheckoutPhase {
    log::info!("Simulating payment of A${}", format_amount(amount));
    TimeoutFuture::new(SIMULATED_PROCESSING_MS).await;
    CheckoutPhase::Succeeded { amount }
}

/// Amount with thousands separators and at most two decimals, trailing zeros
/// dropped: `2999.0` → `2,999`, `150.5` → `150.5`.
pub fn format_amount(amount: f64) -> String {
    let amount = if amount.is_finite() { amount.max(0.0) } else { 0.0 };
    let cents = (amount * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match fraction {
        0 => grouped,
        f if f % 10 == 0 => format!("{}.{}", grouped, f / 10),
        f => format!("{}.{:02}", grouped, f),
    }
}

/// Label of the pay button. Shows the plain amount, without grouping.
pub fn pay_button_label(phase: &CheckoutPhase, amount: f64) -> String {
    if phase.is_processing() {
        "Processing...".to_string()
    } else {
        let amount = if amount.is_finite() { amount.max(0.0) } else { 0.0 };
        format!("Pay A${}", amount)
    }
}
