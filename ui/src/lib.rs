use leptos::prelude::*;

mod api;
mod clipboard;
mod components;
mod types;

use components::contact_form::ContactForm;

#[component]
pub fn App() -> impl IntoView {
    view! { <ContactForm /> }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(App);
}
