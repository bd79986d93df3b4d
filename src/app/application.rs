//! Application - App Initialization and Window Management

use gpui::{
    App, AppContext, Application, Bounds, SharedString, TitlebarOptions, WindowBounds,
    WindowOptions, actions, px,
};

use crate::app::gallery::Gallery;
use crate::assets::Assets;
use crate::constants::{GALLERY_WINDOW_HEIGHT, GALLERY_WINDOW_WIDTH};
use crate::theme::Theme;

actions!(vivid_ui, [Quit]);

/// Run the gallery application
pub fn run_app() {
    Application::new().with_assets(Assets).run(|cx: &mut App| {
        gpui_component::init(cx);
        crate::init_with_theme(Theme::load_or_default(), cx);

        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());

        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        let bounds = Bounds::centered(
            None,
            gpui::size(px(GALLERY_WINDOW_WIDTH), px(GALLERY_WINDOW_HEIGHT)),
            cx,
        );
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from("Vivid UI Gallery")),
                appears_transparent: false,
                traffic_light_position: None,
            }),
            ..Default::default()
        };

        if let Err(err) = cx.open_window(window_options, |window, cx| {
            cx.new(|cx| Gallery::new(window, cx))
        }) {
            tracing::error!("Failed to open gallery window: {err}");
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}
