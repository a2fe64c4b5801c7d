mod animate;
mod controller;
mod geometry;
mod landing;
mod math;
mod render;
mod view;

use dioxus::prelude::*;
use landing::Landing;
use view::Visualizer;

#[derive(Routable, Clone, PartialEq)]
enum Route {
    #[route("/")]
    Landing {},
    #[route("/visualizer")]
    Visualizer {},
}

#[allow(non_snake_case)]
fn App() -> Element {
    rsx! {
        div {
            id: "main",
            Router::<Route> {}
        }
    }
}

fn main() {
    console_error_panic_hook::set_once();
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}
