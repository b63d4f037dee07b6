//! WebAssembly entry point for the consulting site.
//!
//! The server renders the initial HTML; this crate hydrates it in the
//! browser so the navigation toggle and other interactions come alive.
#![recursion_limit = "256"]

#[wasm_bindgen::prelude::wasm_bindgen]
/// Hydrates the server-rendered page.
///
/// Sets up console logging and the panic hook first so hydration issues are
/// visible in the browser console, then mounts `app::component` over the
/// existing DOM.
pub fn hydrate() {
    use app::component;
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    leptos::mount::hydrate_body(component);
}

#[cfg(test)]
mod tests {
    #[test]
    /// Logger setup must tolerate an already-installed logger; only a panic
    /// here would be a failure.
    fn test_console_log_initialization() {
        let _ = console_log::init_with_level(log::Level::Debug);
    }
}
