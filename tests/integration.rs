// SPDX-License-Identifier: MPL-2.0
use crier::config::{self, Config};
use crier::model::{dummy, ImageHolder};
use crier::ui::hashtag::{self, Segment};
use crier::ui::image_grid::{self, GridLayout};
use crier::ui::image_viewer;
use crier::ui::notifications::{Manager, Notification, Severity};
use crier::ui::theming::ThemeMode;
use iced::{Color, Point};
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn hashtag_parsing_round_trips_arbitrary_content() {
    let inputs = [
        "Chasing light across the fjords. #aurora #norway #slowtravel",
        "no tags at all",
        "#leading tag",
        "trailing #tag",
        "##double",
        "lonely # hash",
        "#a#b#c",
        "",
        "unicode #café works #日本語 too",
    ];

    for input in inputs {
        let segments = hashtag::parse(input);
        let rebuilt: String = segments.iter().map(Segment::written).collect();
        assert_eq!(rebuilt, input, "round trip failed for {:?}", input);
    }
}

#[test]
fn hashtag_segments_classify_tags_and_plain_text() {
    let segments = hashtag::parse("Sunset run #nofilter done");
    assert_eq!(
        segments,
        vec![
            Segment::Plain("Sunset run ".to_string()),
            Segment::Tag("nofilter".to_string()),
            Segment::Plain(" done".to_string()),
        ]
    );
}

#[test]
fn bare_hash_stays_plain_text() {
    let segments = hashtag::parse("what # is this");
    assert!(segments.iter().all(|s| matches!(s, Segment::Plain(_))));
}

#[test]
fn grid_layout_covers_every_image_count() {
    assert_eq!(GridLayout::select(0), None);
    assert_eq!(GridLayout::select(1), Some(GridLayout::One));
    assert_eq!(GridLayout::select(2), Some(GridLayout::Two));
    assert_eq!(GridLayout::select(3), Some(GridLayout::Three));
    assert_eq!(GridLayout::select(4), Some(GridLayout::Four));
    assert_eq!(GridLayout::select(5), Some(GridLayout::Paged));
    assert_eq!(GridLayout::select(6), Some(GridLayout::Paged));
    assert_eq!(GridLayout::select(60), Some(GridLayout::Paged));
}

#[test]
fn carousel_page_never_exceeds_image_count() {
    assert_eq!(image_grid::clamp_page(0, 6), 0);
    assert_eq!(image_grid::clamp_page(5, 6), 5);
    assert_eq!(image_grid::clamp_page(99, 6), 5);
    assert_eq!(image_grid::clamp_page(3, 0), 0);
}

#[test]
fn dummy_feed_exercises_every_grid_layout() {
    let mut layouts: Vec<Option<GridLayout>> = dummy::feed()
        .iter()
        .map(|post| GridLayout::select(post.images.len()))
        .collect();
    layouts.sort_by_key(|l| l.map(|l| l as usize));
    layouts.dedup();

    for expected in [
        None,
        Some(GridLayout::One),
        Some(GridLayout::Two),
        Some(GridLayout::Three),
        Some(GridLayout::Four),
        Some(GridLayout::Paged),
    ] {
        assert!(layouts.contains(&expected), "missing {:?}", expected);
    }
}

fn sample_image() -> ImageHolder {
    ImageHolder {
        url: "https://example.com/pic.jpg".to_string(),
        width: 1200,
        height: 800,
        color_average: Color::from_rgb(0.3, 0.4, 0.5),
    }
}

fn drag(state: &mut image_viewer::State, distance: f32, height: f32) {
    state.update(image_viewer::Message::CursorMoved(Point::new(0.0, 10.0)), height);
    state.update(image_viewer::Message::Pressed, height);
    state.update(
        image_viewer::Message::CursorMoved(Point::new(0.0, 10.0 + distance)),
        height,
    );
}

#[test]
fn viewer_scrim_fades_with_drag_distance() {
    let height = 1000.0;
    let mut state = image_viewer::State::open(sample_image());

    assert_eq!(state.background_opacity(height), 1.0);

    drag(&mut state, 500.0, height);
    assert!((state.background_opacity(height) - 0.5).abs() < 1e-5);

    drag(&mut state, 2000.0, height);
    assert_eq!(state.background_opacity(height), 0.0);
}

#[test]
fn viewer_dismisses_only_past_quarter_height() {
    let height = 1000.0;

    let mut state = image_viewer::State::open(sample_image());
    drag(&mut state, 249.0, height);
    assert_eq!(
        state.update(image_viewer::Message::Released, height),
        image_viewer::Event::None
    );
    assert_eq!(state.offset(), 0.0);

    let mut state = image_viewer::State::open(sample_image());
    drag(&mut state, -251.0, height);
    assert_eq!(
        state.update(image_viewer::Message::Released, height),
        image_viewer::Event::Dismissed
    );
}

#[test]
fn theme_preference_round_trips_through_config_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let config = Config {
        theme: Some(ThemeMode::Dark),
    };
    config::save_to_path(&config, &path).expect("Failed to write config");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    assert_eq!(loaded.theme, Some(ThemeMode::Dark));

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn theme_flag_values_parse() {
    assert_eq!("light".parse::<ThemeMode>(), Ok(ThemeMode::Light));
    assert_eq!("dark".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
    assert_eq!("system".parse::<ThemeMode>(), Ok(ThemeMode::System));
    assert!("solarized".parse::<ThemeMode>().is_err());
}

#[test]
fn toast_lifecycle_caps_visible_and_expires_timed_ones() {
    let mut manager = Manager::new();

    manager.push(Notification::error("sticky"));
    // Instant expiry stands in for the 3s info timeout
    manager.push(Notification::info("fading").auto_dismiss(Duration::ZERO));
    manager.push(Notification::info("also fading").auto_dismiss(Duration::ZERO));
    manager.push(Notification::info("queued"));
    assert_eq!(manager.visible().count(), 3);

    manager.tick();

    let remaining: Vec<&str> = manager.visible().map(Notification::message).collect();
    assert!(remaining.contains(&"sticky"));
    assert!(remaining.contains(&"queued"));
    assert!(!remaining.contains(&"fading"));
    assert!(manager.visible().any(|n| n.severity() == Severity::Error));
}
