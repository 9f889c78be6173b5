mod app;
mod date_of_birth;
mod range_selection;
mod single_selection;
mod thai_locale;

use tessera_ui::Renderer;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[cfg(target_os = "android")]
use tessera_ui::winit::platform::android::activity::AndroidApp;

#[cfg(target_os = "android")]
#[unsafe(no_mangle)]
fn android_main(android_app: AndroidApp) {
    init_tracing_android();
    Renderer::run(
        app::root,
        |app| {
            tessera_ui_basic_components::pipelines::register_pipelines(app);
        },
        android_app.clone(),
    )
    .unwrap_or_else(|err| error!("App failed to run: {err}"));
}

#[allow(dead_code)]
#[cfg(target_os = "android")]
fn main() {}

#[cfg(not(target_os = "android"))]
pub fn desktop_main() -> anyhow::Result<()> {
    use tessera_ui::renderer::TesseraConfig;

    init_tracing_desktop();
    Renderer::run_with_config(
        app::root,
        |app| {
            tessera_ui_basic_components::pipelines::register_pipelines(app);
        },
        TesseraConfig {
            window_title: "Buddhist Era Calendar".to_string(),
            sample_count: 1,
        },
    )
    .unwrap_or_else(|err| error!("App failed to run: {err}"));
    Ok(())
}

#[cfg(target_os = "android")]
fn init_tracing_android() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_max_level(tracing::Level::INFO)
        .without_time()
        .init();
}

#[cfg(not(target_os = "android"))]
fn init_tracing_desktop() {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| {
            EnvFilter::try_new("off,tessera_ui=info,tessera_buddhist_calendar=info,example=info")
        })
        .unwrap();
    tracing_subscriber::fmt()
        .pretty()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .init();
}
