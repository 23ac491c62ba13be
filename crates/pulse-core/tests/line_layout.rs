// File: crates/pulse-core/tests/line_layout.rs
// Purpose: Line geometry: interpolation, ordering, flat and single-point series, thinning.

use pulse_core::line::{self, LineOptions};
use pulse_core::scene::PathCmd;
use pulse_core::{EmptyReason, Layout, LinePoint, Theme};

fn revenue() -> Vec<LinePoint> {
    vec![
        LinePoint::new("Jan", 95_000.0),
        LinePoint::new("Feb", 102_000.0),
        LinePoint::new("Mar", 98_000.0),
        LinePoint::new("Apr", 115_000.0),
        LinePoint::new("May", 124_563.0),
    ]
}

#[test]
fn points_are_spread_across_the_plot() {
    let geom = line::layout(&revenue(), &LineOptions::default()).ready().expect("non-empty");
    let xs: Vec<f64> = geom.points.iter().map(|p| p.at.x).collect();
    assert_eq!(xs, vec![40.0, 170.0, 300.0, 430.0, 560.0]);
    // Minimum on the bottom edge of the plot, maximum on the top edge.
    assert!((geom.points[0].at.y - 260.0).abs() < 1e-9);
    assert!((geom.points[4].at.y - 40.0).abs() < 1e-9);
}

#[test]
fn screen_height_follows_value_order() {
    let geom = line::layout(&revenue(), &LineOptions::default()).ready().expect("non-empty");
    for pair in geom.points.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        if b.value >= a.value {
            assert!(b.at.y <= a.at.y, "{} should be drawn at or above {}", b.label, a.label);
        } else {
            assert!(b.at.y > a.at.y, "{} should be drawn below {}", b.label, a.label);
        }
    }
    // Mar dips below Feb.
    assert!(geom.points[2].at.y > geom.points[1].at.y);
}

#[test]
fn y_stays_inside_viewport() {
    let series: [&[f64]; 3] = [&[1.0, 2.0], &[0.0, 1e6, 3.0, 3.0], &[7.0, 7.0, 7.0]];
    for values in series {
        let points: Vec<LinePoint> = values.iter().enumerate().map(|(i, &v)| LinePoint::new(format!("p{i}"), v)).collect();
        for height in [100.0, 300.0] {
            let opts = LineOptions { height, ..LineOptions::default() };
            let geom = line::layout(&points, &opts).ready().expect("non-empty");
            for p in &geom.points {
                assert!(p.at.y >= 0.0 && p.at.y <= height, "y {} outside 0..={height}", p.at.y);
            }
        }
    }
}

#[test]
fn line_and_area_paths() {
    let geom = line::layout(&revenue(), &LineOptions::default()).ready().expect("non-empty");
    let line = geom.line.as_ref().expect("polyline");
    assert_eq!(line.cmds.len(), 5);
    assert!(matches!(line.cmds[0], PathCmd::MoveTo(_)));
    assert!(line.cmds[1..].iter().all(|c| matches!(c, PathCmd::LineTo(_))));

    let area = geom.area.as_ref().expect("area");
    assert_eq!(area.cmds.len(), 8);
    assert_eq!(&area.cmds[..5], &line.cmds[..]);
    assert_eq!(area.cmds[7], PathCmd::Close);
    let base: Vec<_> = area.points().skip(5).collect();
    assert_eq!((base[0].x, base[0].y), (560.0, 260.0));
    assert_eq!((base[1].x, base[1].y), (40.0, 260.0));
}

#[test]
fn guides_interpolate_the_range() {
    let points = vec![LinePoint::new("a", 100.0), LinePoint::new("b", 500.0)];
    let geom = line::layout(&points, &LineOptions::default()).ready().expect("non-empty");
    let labels: Vec<&str> = geom.guides.iter().map(|g| g.label.as_str()).collect();
    assert_eq!(labels, vec!["200", "300", "400", "500"]);
    let ys: Vec<f64> = geom.guides.iter().map(|g| g.y).collect();
    assert_eq!(ys, vec![205.0, 150.0, 95.0, 40.0]);
    assert!(geom.guides.iter().all(|g| g.x1 == 40.0 && g.x2 == 560.0));
}

#[test]
fn flat_series_sits_on_the_baseline() {
    let points = vec![LinePoint::new("a", 5.0), LinePoint::new("b", 5.0), LinePoint::new("c", 5.0)];
    let geom = line::layout(&points, &LineOptions::default()).ready().expect("non-empty");
    assert!(geom.points.iter().all(|p| p.at.y == 260.0));
    assert!(geom.guides.iter().all(|g| g.label == "5"));
    assert!(geom.to_scene(&Theme::light()).is_finite());
}

#[test]
fn single_point_is_a_lone_marker() {
    let points = vec![LinePoint::new("Only", 42.0)];
    let geom = line::layout(&points, &LineOptions::default()).ready().expect("non-empty");
    assert!(geom.line.is_none());
    assert!(geom.area.is_none());
    assert_eq!(geom.points.len(), 1);
    assert_eq!((geom.points[0].at.x, geom.points[0].at.y), (300.0, 150.0));

    let scene = geom.to_scene(&Theme::light());
    assert!(scene.is_finite());
    let mut paths = 0;
    scene.walk(|n| if let pulse_core::Node::Path { .. } = n { paths += 1; });
    assert_eq!(paths, 0);
}

#[test]
fn hover_label_sits_above_marker() {
    let geom = line::layout(&revenue(), &LineOptions::default()).ready().expect("non-empty");
    let p = &geom.points[4];
    assert_eq!(p.value_label, "124,563");
    assert_eq!((p.tooltip.left, p.tooltip.top), (p.at.x - 25.0, p.at.y - 35.0));
    assert_eq!((p.tooltip.width(), p.tooltip.height()), (50.0, 20.0));
    assert_eq!(p.tooltip_text_at.y, p.at.y - 22.0);
}

#[test]
fn long_series_is_thinned() {
    let points: Vec<LinePoint> = (0..500).map(|i| LinePoint::new(format!("t{i}"), (i as f64 * 0.1).sin() + 1.0)).collect();
    let opts = LineOptions { max_points: Some(50), ..LineOptions::default() };
    let geom = line::layout(&points, &opts).ready().expect("non-empty");
    assert_eq!(geom.points.len(), 50);
    assert_eq!(geom.points[0].label, "t0");
    assert_eq!(geom.points[49].label, "t499");
    assert_eq!(geom.points[0].at.x, 40.0);
    assert!((geom.points[49].at.x - 560.0).abs() < 1e-9);
}

#[test]
fn empty_series_is_placeholder() {
    assert_eq!(line::layout(&[], &LineOptions::default()), Layout::Empty(EmptyReason::NoData));
    let scene = line::render(&[], &LineOptions::default(), &Theme::dark());
    assert!(scene.placeholder);
    assert!(scene.texts().contains(&"📈"));
}
