use leptos::prelude::*;
use mediasi_frontend::App;
use mediasi_frontend::config::AppConfig;
use mediasi_frontend::telemetry;
use mediasi_frontend::web::BrowserStorage;

// Use lol_alloc as the global allocator for smaller WASM size
#[cfg(target_arch = "wasm32")]
use lol_alloc::{AssumeSingleThreaded, FreeListAllocator};

#[cfg(target_arch = "wasm32")]
#[global_allocator]
static ALLOCATOR: AssumeSingleThreaded<FreeListAllocator> =
    unsafe { AssumeSingleThreaded::new(FreeListAllocator::new()) };

pub fn main() {
    console_error_panic_hook::set_once();

    let (config, issue) = AppConfig::load(&BrowserStorage);
    telemetry::init(config.level().unwrap_or(tracing::Level::INFO));
    if let Some(e) = issue {
        tracing::warn!(error = %e, "config override ignored");
    }

    mount_to_body(move || view! { <App config=config.clone() /> });
}
