//! End-to-end tests: render pages and read the written PNGs back.

use std::fs;
use std::path::PathBuf;

use image::ColorType;
use pretty_assertions::assert_eq;
use tempfile::tempdir;

use flamegen::pages::hero;
use flamegen::{generate, generate_all, Page, Progress};
use flamegen::{Colour, FontResolver};

/// Resolver that never finds a font, so layouts are host-independent.
fn builtin_fonts() -> FontResolver {
    FontResolver::with_candidates(vec![PathBuf::from("/nonexistent/flamegen-test.ttf")])
}

fn is_hot(c: Colour) -> bool {
    c.g > 180
}

#[test]
fn test_icon_is_opaque_1024() {
    let dir = tempdir().unwrap();
    let path = generate(Page::Icon, dir.path(), &builtin_fonts()).unwrap();

    assert_eq!(path, dir.path().join("icon.png"));
    let img = image::open(&path).unwrap();
    assert_eq!(img.color(), ColorType::Rgb8);
    assert_eq!((img.width(), img.height()), (1024, 1024));
}

#[test]
fn test_generate_all_writes_every_page() {
    let dir = tempdir().unwrap();
    let mut events = Vec::new();
    let paths = generate_all(dir.path(), &builtin_fonts(), |event| {
        events.push(match event {
            Progress::Started(page) => format!("start {}", page.file_name()),
            Progress::Written(page, path) => {
                assert_eq!(path, dir.path().join(page.file_name()));
                format!("wrote {}", page.file_name())
            }
        })
    })
    .unwrap();

    // Every page reports before and after, in generation order
    let expected: Vec<String> = Page::ALL
        .iter()
        .flat_map(|p| [format!("start {}", p.file_name()), format!("wrote {}", p.file_name())])
        .collect();
    assert_eq!(events, expected);

    let names: Vec<_> = paths
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["icon.png", "splash.png", "preview.png", "hero.png", "og.png"]);

    for page in Page::ALL {
        let img = image::open(dir.path().join(page.file_name())).unwrap();
        assert_eq!(img.color(), ColorType::Rgb8);
        assert_eq!((img.width(), img.height()), page.size());
    }
}

#[test]
fn test_hero_has_five_flame_clusters() {
    let canvas = Page::Hero.render(&builtin_fonts());
    assert_eq!((canvas.width(), canvas.height()), (1200, 630));

    for (x, scale) in hero::FLAMES {
        let y = (hero::FLAME_BASE_Y - 20.0 * scale) as u32;
        let core = canvas.get(x as u32, y).unwrap();
        assert!(is_hot(core), "no flame core at x={} ({:?})", x, core);
    }

    for gap in [250, 454, 746, 950] {
        let between = canvas.get(gap, 570).unwrap();
        assert!(!is_hot(between), "unexpected flame at x={} ({:?})", gap, between);
    }
}

#[test]
fn test_hero_background_is_gradient() {
    let canvas = Page::Hero.render(&builtin_fonts());
    // Top-left corner sits outside every glow and ember
    assert_eq!(canvas.get(0, 0), Some(Colour::rgb(10, 10, 15)));
}

#[test]
fn test_rerun_is_byte_identical() {
    let first = tempdir().unwrap();
    let second = tempdir().unwrap();
    let fonts = builtin_fonts();

    for page in [Page::Splash, Page::Hero, Page::Og] {
        let a = generate(page, first.path(), &fonts).unwrap();
        let b = generate(page, second.path(), &fonts).unwrap();
        assert!(fs::read(&a).unwrap() == fs::read(&b).unwrap(), "{} differs", page);
    }
}

#[test]
fn test_generate_overwrites_existing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(Page::Splash.file_name());
    fs::write(&path, b"stale").unwrap();

    generate(Page::Splash, dir.path(), &builtin_fonts()).unwrap();

    let img = image::open(&path).unwrap();
    assert_eq!((img.width(), img.height()), (200, 200));
}

#[test]
fn test_missing_output_dir_is_an_error() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("does-not-exist");
    assert!(generate(Page::Splash, &missing, &builtin_fonts()).is_err());
}
