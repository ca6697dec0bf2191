use infosoft_site::App;

fn main() {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    log::info!("Starting {}", infosoft_site::config::COMPANY_NAME);
    yew::Renderer::<App>::new().render();
}
