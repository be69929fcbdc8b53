// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the grid, the
//! presentation overlay and the image source.
//!
//! The `App` struct owns the viewport watcher, the current screen and the
//! image source, and translates messages into state changes and follow-up
//! tasks (image list fetch, image downloads). Policy decisions such as the
//! initial window size and stale-result handling stay close to the update
//! loop so they are easy to audit.

mod message;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::{GalleryScreen, Screen};

use crate::application::gallery::ViewportWatcher;
use crate::application::port::ImageSource;
use crate::config::{
    self, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH,
};
use crate::domain::gallery::IMAGE_COUNT;
use crate::i18n::fluent::I18n;
use crate::infrastructure::HttpImageSource;
use crate::ui::theming::ThemeMode;
use fluent_bundle::FluentValue;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    viewport: ViewportWatcher,
    /// Resolved once at startup; `theme()` runs every frame.
    theme: Theme,
    /// Source of the image list and image bytes. `None` if the HTTP client
    /// could not be built.
    source: Option<Arc<dyn ImageSource>>,
    /// Incremented for every fetch; results tagged with an older value are
    /// dropped.
    generation: u64,
    /// i18n key of a warning raised while loading the configuration.
    config_warning: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("viewport", &self.viewport)
            .field("generation", &self.generation)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an Fn boot closure; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            screen: Screen::Loading,
            viewport: ViewportWatcher::new(DEFAULT_WINDOW_WIDTH),
            theme: Theme::Dark,
            source: None,
            generation: 0,
            config_warning: None,
        }
    }
}

impl App {
    /// Initializes application state and kicks off the image list fetch.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (mut config, config_warning) = config::load();
        if let Some(endpoint) = flags.endpoint {
            config.source.endpoint = endpoint;
        }

        let source = match HttpImageSource::new(
            config.source.endpoint.clone(),
            config.source.timeout(),
            &config.source.user_agent,
        ) {
            Ok(source) => Some(Arc::new(source) as Arc<dyn ImageSource>),
            Err(err) => {
                log::error!("cannot build HTTP client: {err}");
                None
            }
        };

        let mut app = App {
            i18n: I18n::new(flags.lang, &config),
            source,
            config_warning,
            ..Self::default()
        }
        .with_theme_mode(config.general.theme_mode);

        let task = app.start_fetch();
        (app, task)
    }

    /// Builds an app around an already constructed image source.
    #[must_use]
    pub fn with_source(source: Arc<dyn ImageSource>) -> (Self, Task<Message>) {
        let mut app = App {
            source: Some(source),
            ..Self::default()
        };
        let task = app.start_fetch();
        (app, task)
    }

    fn with_theme_mode(mut self, mode: ThemeMode) -> Self {
        self.theme = mode.resolve();
        self
    }

    #[must_use]
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    #[must_use]
    pub fn viewport(&self) -> &ViewportWatcher {
        &self.viewport
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");

        let open_index = self
            .screen
            .gallery()
            .and_then(|gallery| gallery.presentation.state().open_index());
        match open_index {
            Some(index) => {
                let position = self.i18n.tr_with_args(
                    "presentation-position",
                    &[
                        ("current", FluentValue::from(index.value() + 1)),
                        ("total", FluentValue::from(IMAGE_COUNT)),
                    ],
                );
                format!("{position} - {app_name}")
            }
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            screen: &mut self.screen,
            viewport: &mut self.viewport,
            generation: &mut self.generation,
            source: self.source.as_ref(),
        }
    }

    fn start_fetch(&mut self) -> Task<Message> {
        update::start_fetch(&mut self.update_context())
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = self.update_context();

        match message {
            Message::CellPressed(index) => update::handle_cell_pressed(&mut ctx, index),
            Message::ClosePressed => update::handle_close(&mut ctx),
            Message::PreviousPressed => update::handle_previous(&mut ctx),
            Message::NextPressed => update::handle_next(&mut ctx),
            Message::RetryPressed => update::handle_retry(&mut ctx),
            Message::WindowResized(size) => update::handle_window_resized(&mut ctx, size),
            Message::ImageListLoaded { generation, result } => {
                update::handle_image_list_loaded(&mut ctx, generation, result)
            }
            Message::ImageLoaded {
                generation,
                index,
                result,
            } => update::handle_image_loaded(&mut ctx, generation, index, result),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: &self.screen,
            warning: self.config_warning.as_deref(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::SourceError;
    use crate::domain::error::GalleryError;
    use crate::domain::gallery::{ImageIndex, ImageSet, SizeClass};
    use crate::ui::gallery_grid::Thumbnail;
    use futures_util::future::BoxFuture;
    use futures_util::FutureExt;
    use iced::Size;

    const URLS: [&str; 8] = ["u0", "u1", "u2", "u3", "u4", "u5", "u6", "u7"];

    struct StaticSource;

    impl ImageSource for StaticSource {
        fn fetch(&self) -> BoxFuture<'static, Result<ImageSet, SourceError>> {
            async { ImageSet::from_urls(URLS).map_err(SourceError::from) }.boxed()
        }

        fn fetch_image(&self, url: &str) -> BoxFuture<'static, Result<Vec<u8>, SourceError>> {
            let bytes = url.as_bytes().to_vec();
            async move { Ok(bytes) }.boxed()
        }
    }

    fn images() -> ImageSet {
        ImageSet::from_urls(URLS).expect("eight urls")
    }

    fn app() -> App {
        let (app, _task) = App::with_source(Arc::new(StaticSource));
        app
    }

    fn loaded_app(width: f32) -> App {
        let mut app = app();
        let _ = app.update(Message::WindowResized(Size::new(width, 600.0)));
        let generation = app.generation;
        let _ = app.update(Message::ImageListLoaded {
            generation,
            result: Ok(images()),
        });
        app
    }

    fn gallery(app: &App) -> &GalleryScreen {
        app.screen().gallery().expect("gallery screen")
    }

    #[test]
    fn starts_loading_with_first_generation() {
        let app = app();
        assert!(matches!(app.screen(), Screen::Loading));
        assert_eq!(app.generation, 1);
    }

    #[test]
    fn grid_is_not_wired_before_the_list_arrives() {
        let mut app = app();
        let _ = app.update(Message::CellPressed(ImageIndex::FIRST));
        let _ = app.update(Message::NextPressed);
        assert!(matches!(app.screen(), Screen::Loading));
    }

    #[test]
    fn end_to_end_medium_grid_and_presentation() {
        let mut app = loaded_app(700.0);
        let layout = &gallery(&app).layout;
        assert_eq!(layout.size_class(), SizeClass::Medium);
        assert_eq!((layout.rows(), layout.columns()), (4, 2));

        let fifth = ImageIndex::new(5).expect("index");
        let _ = app.update(Message::CellPressed(fifth));
        let presentation = &gallery(&app).presentation;
        assert!(presentation.is_open());
        assert_eq!(presentation.current_url(), Some("u5"));

        let _ = app.update(Message::NextPressed);
        assert_eq!(gallery(&app).presentation.current_url(), Some("u6"));

        let _ = app.update(Message::ClosePressed);
        let state = gallery(&app).presentation.state();
        assert!(!state.is_open);
        assert_eq!(state.current_index.value(), 6);

        let _ = app.update(Message::CellPressed(ImageIndex::FIRST));
        assert_eq!(gallery(&app).presentation.current_url(), Some("u0"));
    }

    #[test]
    fn previous_wraps_from_first_to_last() {
        let mut app = loaded_app(1024.0);
        let _ = app.update(Message::CellPressed(ImageIndex::FIRST));
        let _ = app.update(Message::PreviousPressed);
        assert_eq!(gallery(&app).presentation.current_url(), Some("u7"));
    }

    #[test]
    fn resize_across_breakpoint_relays_out_grid() {
        let mut app = loaded_app(1024.0);
        assert_eq!(gallery(&app).layout.size_class(), SizeClass::Large);

        let _ = app.update(Message::WindowResized(Size::new(500.0, 600.0)));
        let layout = &gallery(&app).layout;
        assert_eq!(layout.size_class(), SizeClass::Small);
        assert_eq!((layout.rows(), layout.columns()), (8, 1));
    }

    #[test]
    fn resize_keeps_presentation_open() {
        let mut app = loaded_app(1024.0);
        let third = ImageIndex::new(3).expect("index");
        let _ = app.update(Message::CellPressed(third));
        let _ = app.update(Message::WindowResized(Size::new(650.0, 600.0)));

        let gallery = gallery(&app);
        assert_eq!(gallery.layout.size_class(), SizeClass::Medium);
        assert_eq!(gallery.presentation.current_url(), Some("u3"));
    }

    #[test]
    fn stale_image_list_is_ignored() {
        let mut app = app();
        let _ = app.update(Message::RetryPressed);
        assert_eq!(app.generation, 2);

        let _ = app.update(Message::ImageListLoaded {
            generation: 1,
            result: Ok(images()),
        });
        assert!(matches!(app.screen(), Screen::Loading));
    }

    #[test]
    fn wrong_length_payload_shows_error_and_retry_reloads() {
        let mut app = app();
        let generation = app.generation;
        let _ = app.update(Message::ImageListLoaded {
            generation,
            result: Err(SourceError::Contract(GalleryError::WrongImageCount {
                expected: 8,
                actual: 3,
            })),
        });
        assert!(matches!(
            app.screen(),
            Screen::Failed(SourceError::Contract(_))
        ));

        let _ = app.update(Message::RetryPressed);
        assert!(matches!(app.screen(), Screen::Loading));
        assert_eq!(app.generation, generation + 1);
    }

    #[test]
    fn image_bytes_fill_thumbnails_and_failures_leave_placeholders() {
        let mut app = loaded_app(1024.0);
        let generation = app.generation;
        let second = ImageIndex::new(1).expect("index");

        let _ = app.update(Message::ImageLoaded {
            generation,
            index: ImageIndex::FIRST,
            result: Ok(vec![1, 2, 3]),
        });
        let _ = app.update(Message::ImageLoaded {
            generation,
            index: second,
            result: Err(SourceError::Status(404)),
        });

        let gallery = gallery(&app);
        assert!(gallery.thumbnail(ImageIndex::FIRST).handle().is_some());
        assert!(matches!(gallery.thumbnail(second), Thumbnail::Unavailable));
        assert!(matches!(gallery.thumbnail(ImageIndex::LAST), Thumbnail::Loading));
    }

    #[test]
    fn stale_image_bytes_are_ignored() {
        let mut app = loaded_app(1024.0);
        let stale = app.generation - 1;
        let _ = app.update(Message::ImageLoaded {
            generation: stale,
            index: ImageIndex::FIRST,
            result: Ok(vec![1]),
        });
        assert!(matches!(
            gallery(&app).thumbnail(ImageIndex::FIRST),
            Thumbnail::Loading
        ));
    }

    #[test]
    fn title_shows_position_while_presenting() {
        let mut app = loaded_app(1024.0);
        assert_eq!(app.title(), app.i18n.tr("window-title"));

        let _ = app.update(Message::CellPressed(ImageIndex::new(2).expect("index")));
        assert!(app.title().starts_with("3 / 8"));
    }

    #[test]
    fn theme_is_fixed_at_startup_and_survives_updates() {
        let mut app = app().with_theme_mode(ThemeMode::Light);
        assert!(matches!(app.theme(), Theme::Light));

        let _ = app.update(Message::WindowResized(Size::new(500.0, 600.0)));
        let _ = app.update(Message::RetryPressed);
        assert!(matches!(app.theme(), Theme::Light));
        assert!(matches!(app.with_theme_mode(ThemeMode::Dark).theme(), Theme::Dark));
    }

    #[test]
    fn missing_source_fails_fetch() {
        let mut app = App::default();
        let _ = app.start_fetch();
        assert!(matches!(app.screen(), Screen::Failed(SourceError::Network(_))));
    }
}
