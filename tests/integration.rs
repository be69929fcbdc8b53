// SPDX-License-Identifier: MPL-2.0
use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use iced_gallery::application::gallery::{Display, GridRenderer, PresentationController, ViewportWatcher};
use iced_gallery::application::port::{ImageSource, SourceError};
use iced_gallery::config::{self, Config};
use iced_gallery::domain::error::GalleryError;
use iced_gallery::domain::gallery::{ImageIndex, ImageSet, SizeClass};
use iced_gallery::i18n::fluent::I18n;
use iced_gallery::infrastructure::parse_image_list;
use std::cell::RefCell;
use std::rc::Rc;
use tempfile::tempdir;

const PAYLOAD: &str = r#"["a.jpg","b.jpg","c.jpg","d.jpg","e.jpg","f.jpg","g.jpg","h.jpg"]"#;

/// Serves a fixed JSON body, the way the HTTP adapter would after a GET.
struct PayloadSource(&'static str);

impl ImageSource for PayloadSource {
    fn fetch(&self) -> BoxFuture<'static, Result<ImageSet, SourceError>> {
        let body = self.0;
        async move { parse_image_list(body.as_bytes()) }.boxed()
    }

    fn fetch_image(&self, _url: &str) -> BoxFuture<'static, Result<Vec<u8>, SourceError>> {
        async { Err(SourceError::Status(404)) }.boxed()
    }
}

#[tokio::test]
async fn test_fetched_list_drives_grid_and_presentation() {
    let images = PayloadSource(PAYLOAD).fetch().await.expect("eight urls");

    let classes = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&classes);
    let mut watcher = ViewportWatcher::new(700.0);
    watcher.subscribe(move |class| sink.borrow_mut().push(class));

    let layout = GridRenderer::render_set(&images, watcher.size_class());
    assert_eq!(layout.id(), "imagesGrid");
    assert_eq!((layout.rows(), layout.columns()), (4, 2));
    // Row-major binding: third row, second column shows the sixth image.
    assert_eq!(layout.row(2)[1].url, "f.jpg");

    let mut presentation = PresentationController::new(images);
    let shown = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&shown);
    presentation.on_display(move |display| sink.borrow_mut().push(display.clone()));

    let clicked = layout.row(2)[1].index;
    presentation.open_index(clicked);
    presentation.next();
    presentation.close();

    assert_eq!(
        *shown.borrow(),
        vec![
            Display::Show {
                index: ImageIndex::new(5).unwrap(),
                url: "f.jpg".to_string()
            },
            Display::Show {
                index: ImageIndex::new(6).unwrap(),
                url: "g.jpg".to_string()
            },
            Display::Hide,
        ]
    );
    assert_eq!(presentation.current_index().value(), 6);

    assert_eq!(watcher.resize(900.0), Some(SizeClass::Large));
    let relaid = GridRenderer::render_set(presentation.images(), SizeClass::Large);
    assert_eq!((relaid.rows(), relaid.columns()), (2, 4));
    assert_eq!(*classes.borrow(), vec![SizeClass::Medium, SizeClass::Large]);
}

#[tokio::test]
async fn test_short_payload_is_rejected_without_a_grid() {
    let err = PayloadSource(r#"["a.jpg","b.jpg","c.jpg"]"#)
        .fetch()
        .await
        .unwrap_err();
    assert_eq!(
        err,
        SourceError::Contract(GalleryError::WrongImageCount {
            expected: 8,
            actual: 3
        })
    );
}

#[test]
fn test_resize_sequence_notifies_twice() {
    let count = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&count);
    let mut watcher = ViewportWatcher::new(500.0);
    watcher.subscribe(move |_| *sink.borrow_mut() += 1);
    *count.borrow_mut() = 0;

    for width in [500.0, 550.0, 700.0, 750.0, 900.0] {
        watcher.resize(width);
    }
    assert_eq!(*count.borrow(), 2);
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    let mut initial_config = Config::default();
    initial_config.general.language = Some("en-US".to_string());
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("gallery-retry"), "Retry");

    let mut french_config = Config::default();
    french_config.general.language = Some("fr".to_string());
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_cli_lang_overrides_config() {
    let mut config = Config::default();
    config.general.language = Some("fr".to_string());
    let i18n = I18n::new(Some("en-US".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}
