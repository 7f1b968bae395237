use std::io::Cursor;
use std::path::{Path, PathBuf};

use base64::Engine as _;
use slide_frame::Error;
use slide_frame::config::Configuration;
use slide_frame::controller::Slideshow;
use slide_frame::gallery::Gallery;

// 1x1 RGBA PNG; dimensions are read from the header only.
const PNG_1X1: &str =
    "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mP8z8BQDwAEhQGAhKmMIQAAAABJRU5ErkJggg==";

fn write_png(dir: &Path, name: &str) -> PathBuf {
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(PNG_1X1)
        .unwrap();
    let path = dir.join(name);
    std::fs::write(&path, bytes).unwrap();
    path
}

#[test]
fn gallery_verifies_real_images() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_png(dir.path(), "a.png");
    let b = write_png(dir.path(), "b.png");

    let gallery = Gallery::from_items(vec![
        slide_frame::gallery::GalleryItem {
            image: a,
            caption: "A".to_string(),
        },
        slide_frame::gallery::GalleryItem {
            image: b,
            caption: "B".to_string(),
        },
    ])
    .unwrap();

    gallery.verify().unwrap();
}

#[test]
fn gallery_verify_rejects_garbage_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.png");
    std::fs::write(&path, b"not an image at all").unwrap();

    let gallery = Gallery::from_items(vec![slide_frame::gallery::GalleryItem {
        image: path.clone(),
        caption: "Broken".to_string(),
    }])
    .unwrap();

    match gallery.verify() {
        Err(Error::BadImage { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected BadImage, got {other:?}"),
    }
}

#[test]
fn full_session_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut yaml = String::from("title: Delicious Food\ngallery:\n");
    for (name, caption) in [
        ("pancakes.png", "Blueberry pancakes"),
        ("pizza.png", "Margherita pizza"),
        ("ramen.png", "Tonkotsu ramen"),
    ] {
        let path = write_png(dir.path(), name);
        yaml.push_str(&format!(
            "  - image: \"{}\"\n    caption: \"{}\"\n",
            path.display(),
            caption
        ));
    }
    let config_path = dir.path().join("config.yaml");
    std::fs::write(&config_path, yaml).unwrap();

    let cfg = Configuration::from_yaml_file(&config_path)
        .unwrap()
        .validated()
        .unwrap();
    let gallery = Gallery::from_config(&cfg).unwrap();
    gallery.verify().unwrap();

    let mut show = Slideshow::new(gallery);
    let script = "back\ngo 2\ngo 9\nquit\n";
    let mut out = Vec::new();
    slide_frame::viewer::run(Cursor::new(script), &mut out, &mut show, &cfg.title).unwrap();

    // back wrapped to the last image, then jumped to 2; 9 was rejected.
    assert_eq!(show.current_index(), 1);
    assert_eq!(show.validation_error(), Some("Invalid number"));

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Delicious Food"));
    assert!(text.contains("[3/3] Tonkotsu ramen"));
    assert!(text.contains("[2/3] Margherita pizza"));
    assert!(text.contains("Invalid number"));
}
