use anyhow::Result;
use gpui::*;
use mockboard::app::MockupApp;
use mockboard::constants::{HEADER_HEIGHT, PANEL_WIDTH};
use mockboard::settings::Settings;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("mockboard=info"));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let settings = Settings::load();
    let (width, height) = settings.canvas_size();
    let window_size = size(
        px(width as f32 + PANEL_WIDTH),
        px(height as f32 + HEADER_HEIGHT),
    );

    Application::new().run(move |cx: &mut App| {
        gpui_component::init(cx);

        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(Bounds::centered(None, window_size, cx))),
            titlebar: Some(TitlebarOptions {
                title: Some("Mockboard".into()),
                ..Default::default()
            }),
            ..Default::default()
        };

        if let Err(e) = cx.open_window(options, |window, cx| {
            cx.new(|cx| MockupApp::new(settings, window, cx))
        }) {
            tracing::error!("Failed to open window: {:?}", e);
            cx.quit();
        }
        cx.activate(true);
    });
    Ok(())
}
