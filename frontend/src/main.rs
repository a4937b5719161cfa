use crate::app::App;

mod api;
mod app;
mod components;
mod error;
mod helpers;

fn main() {
    yew::Renderer::<App>::new().render();
}
