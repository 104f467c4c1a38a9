mod api;
mod app;
mod auth_guard;
mod components;
mod pages;
mod routes;
mod user_session;

use app::App;

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
