// File: crates/pulse-core/tests/bar_layout.rs
// Purpose: Bar geometry: full-scale maximum, clamped widths, guides, all-zero and empty series.

use pulse_core::bar::{self, bar_width, BarOptions};
use pulse_core::{BarPoint, Color, EmptyReason, Layout, Theme};

fn quarters() -> Vec<BarPoint> {
    vec![
        BarPoint::new("Q1", 580_000.0),
        BarPoint::new("Q2", 650_000.0),
        BarPoint::new("Q3", 720_000.0),
        BarPoint::new("Q4", 790_000.0),
    ]
}

#[test]
fn largest_quarter_is_full_scale() {
    let geom = bar::layout(&quarters(), &BarOptions::default()).ready().expect("non-empty");
    assert_eq!(geom.max_value, 790_000.0);
    assert_eq!(geom.full_scale_height(), 260.0);

    let q4 = &geom.bars[3];
    assert_eq!(q4.label, "Q4");
    assert!((q4.rect.height() - geom.full_scale_height()).abs() < 1e-9);
    assert!((q4.rect.top - 20.0).abs() < 1e-9);

    let q1 = &geom.bars[0];
    assert!((q1.rect.height() - 580_000.0 / 790_000.0 * 260.0).abs() < 1e-9);
    // Every bar sits on the same baseline.
    for b in &geom.bars {
        assert!((b.rect.bottom - 280.0).abs() < 1e-9);
    }
}

#[test]
fn bar_positions_follow_width_and_gap() {
    let geom = bar::layout(&quarters(), &BarOptions::default()).ready().expect("non-empty");
    assert_eq!(geom.bar_width, 75.0);
    assert_eq!(geom.width, 4.0 * 95.0);
    let xs: Vec<f64> = geom.bars.iter().map(|b| b.rect.left).collect();
    assert_eq!(xs, vec![10.0, 105.0, 200.0, 295.0]);
    assert_eq!(geom.bars[0].value_label, "580,000");
    assert_eq!(geom.bars[0].label_at.y, 295.0);
}

#[test]
fn width_is_clamped() {
    assert_eq!(bar_width(1), 80.0);
    assert_eq!(bar_width(5), 60.0);
    assert_eq!(bar_width(20), 40.0);
}

#[test]
fn heights_stay_inside_viewport() {
    let series: [&[f64]; 3] = [&[1.0, 2.0], &[5.0, 0.0, 5.0, 3.0], &[0.001, 1e9, 42.0]];
    for values in series {
        let points: Vec<BarPoint> = values.iter().enumerate().map(|(i, &v)| BarPoint::new(format!("p{i}"), v)).collect();
        for height in [120.0, 300.0, 480.0] {
            let opts = BarOptions { height, ..BarOptions::default() };
            let geom = bar::layout(&points, &opts).ready().expect("non-empty");
            for b in &geom.bars {
                assert!(b.rect.height() >= 0.0);
                assert!(b.rect.height() <= height);
                assert!(b.rect.top >= 0.0 && b.rect.bottom <= height);
            }
        }
    }
}

#[test]
fn guides_label_rounded_fractions_of_max() {
    let geom = bar::layout(&quarters(), &BarOptions::default()).ready().expect("non-empty");
    let labels: Vec<&str> = geom.guides.iter().map(|g| g.label.as_str()).collect();
    assert_eq!(labels, vec!["197,500", "395,000", "592,500", "790,000"]);
    let ys: Vec<f64> = geom.guides.iter().map(|g| g.y).collect();
    assert_eq!(ys, vec![225.0, 150.0, 75.0, 0.0]);
}

#[test]
fn all_zero_series_draws_flat_bars() {
    let points = vec![BarPoint::new("a", 0.0), BarPoint::new("b", 0.0)];
    let geom = bar::layout(&points, &BarOptions::default()).ready().expect("non-empty");
    assert!(geom.bars.iter().all(|b| b.rect.height() == 0.0));
    assert!(geom.guides.iter().all(|g| g.label == "0"));
    assert!(geom.to_scene(&Theme::light()).is_finite());
}

#[test]
fn negative_values_are_drawn_as_zero() {
    let points = vec![BarPoint::new("up", 10.0), BarPoint::new("down", -4.0)];
    let geom = bar::layout(&points, &BarOptions::default()).ready().expect("non-empty");
    assert_eq!(geom.bars[1].value, 0.0);
    assert_eq!(geom.bars[1].rect.height(), 0.0);
}

#[test]
fn point_color_overrides_chart_color() {
    let red = Color::rgb(0xef, 0x44, 0x44);
    let points = vec![BarPoint::new("a", 1.0), BarPoint::new("b", 2.0).with_color(red)];
    let opts = BarOptions::default();
    let geom = bar::layout(&points, &opts).ready().expect("non-empty");
    assert_eq!(geom.bars[0].color, opts.color);
    assert_eq!(geom.bars[1].color, red);
}

#[test]
fn empty_series_is_placeholder() {
    let layout = bar::layout(&[], &BarOptions::default());
    assert_eq!(layout, Layout::Empty(EmptyReason::NoData));

    let scene = bar::render(&[], &BarOptions::default(), &Theme::light());
    assert!(scene.placeholder);
    assert!(scene.texts().contains(&"No data available"));
}
