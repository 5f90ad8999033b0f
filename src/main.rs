//! CSR entry point: logging, configuration check, mount.

fn main() {
    #[cfg(feature = "csr")]
    {
        use blogs::app::App;
        use blogs::config::Config;
        use leptos::prelude::*;

        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        // A missing URL or key must abort startup, not produce requests
        // against an undefined host.
        let config = match Config::from_env() {
            Ok(config) => config,
            Err(err) => {
                log::error!("startup aborted: {err}");
                panic!("{err}");
            }
        };

        leptos::mount::mount_to_body(move || view! { <App config=config/> });
    }
}
