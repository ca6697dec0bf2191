use yew::prelude::*;
use yew_router::prelude::*;

pub mod config;
pub mod contact;
pub mod pages;
pub mod payment;
pub mod utils;
pub mod visibility;

use pages::header::Header;
use pages::landing::Landing;
use payment::gateway::PaymentGateway;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/payment")]
    Payment,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Landing /> },
        Route::Payment => html! { <PaymentGateway /> },
        Route::NotFound => html! {
            <section class="not-found">
                <h1>{"Page not found"}</h1>
                <Link<Route> to={Route::Home} classes="forward-link">{"Back to home"}</Link<Route>>
            </section>
        },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <div class="min-h-screen">
                <Header />
                <main class="pt-16">
                    <Switch<Route> render={switch} />
                </main>
            </div>
        </BrowserRouter>
    }
}
