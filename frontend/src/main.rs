//! Entry point for the standalone WASM application

use docdash_upload::App;
use leptos::*;

pub fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("📄 DocDash - mounting standalone upload form");

    mount_to_body(|| view! { <App/> })
}
