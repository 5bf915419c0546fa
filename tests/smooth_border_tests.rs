//! End-to-end behaviour of the border geometry: arrange, paint, and SVG output.

use glam::{DVec2, dvec2};
use kurbo::Shape;
use smooth_border::render::geometry::control_offset;
use smooth_border::{
    Canvas, ClosedPath, Color, CornerRadii, DrawList, RadiusMode, Rect, SmoothBorder, Smoothing,
    Thickness, background_path, border_path, generate, geometry, render_svg, resolve,
};

const EPSILON: f64 = 1e-9;

fn smoothing(v: f64) -> Smoothing {
    Smoothing::try_new(v).unwrap()
}

fn approx(a: DVec2, b: DVec2) -> bool {
    (a - b).abs().max_element() < EPSILON
}

/// Every point of `pts` has a match in `pts` after applying `f`.
fn closed_under(pts: &[DVec2], f: impl Fn(DVec2) -> DVec2) -> bool {
    pts.iter().all(|&p| pts.iter().any(|&q| approx(f(p), q)))
}

fn assert_closed(path: &ClosedPath) {
    let segs: Vec<_> = path.segments().collect();
    assert_eq!(segs.len(), 8);
    assert_eq!(segs.last().unwrap().end_point(), path.start());
    for pair in segs.windows(2) {
        assert_eq!(pair[0].end_point(), pair[1].start_point());
    }
}

// =============================================================================
// Worked examples
// =============================================================================

#[test]
fn uniform_two_pixel_border_on_square() {
    let thickness = Thickness::uniform(2.0);
    let radii = CornerRadii::uniform(10.0);

    let outer = resolve(radii, thickness, RadiusMode::Outer);
    assert!(outer.to_array().iter().all(|&v| v == 11.0));
    let inner = resolve(radii, thickness, RadiusMode::Inner);
    assert!(inner.to_array().iter().all(|&v| v == 9.0));

    let rect = Rect::from_size(100.0, 100.0);
    assert_eq!(rect.deflate(thickness), Rect::new(2.0, 2.0, 96.0, 96.0));

    let (border, background) = geometry(rect, radii, thickness, Smoothing::NONE);
    let border = border.expect("border path");
    let background = background.expect("background path");

    for (path, lo, hi) in [(&border, 0.0, 100.0), (&background, 2.0, 98.0)] {
        assert_closed(path);
        let a = path.anchors();
        // Main diagonal and anti-diagonal reflections of the square.
        assert!(closed_under(a, |p| dvec2(p.y, p.x)));
        assert!(closed_under(a, |p| dvec2(lo + hi - p.y, lo + hi - p.x)));
    }
}

#[test]
fn asymmetric_thickness_only_grows_stroked_sides() {
    let thickness = Thickness::new(0.0, 0.0, 4.0, 4.0);
    let radii = resolve(CornerRadii::uniform(10.0), thickness, RadiusMode::Outer);
    insta::assert_debug_snapshot!(radii, @r"
    DirectionalRadii {
        top_left: CornerExtent {
            x: 10.0,
            y: 10.0,
        },
        top_right: CornerExtent {
            x: 12.0,
            y: 10.0,
        },
        bottom_right: CornerExtent {
            x: 12.0,
            y: 12.0,
        },
        bottom_left: CornerExtent {
            x: 10.0,
            y: 12.0,
        },
    }
    ");
}

// =============================================================================
// Radius properties
// =============================================================================

#[test]
fn zero_radius_corner_stays_square_for_any_thickness() {
    let radii = CornerRadii::new(0.0, 8.0, 8.0, 8.0);
    for t in [0.0, 1.0, 3.5, 40.0] {
        let r = resolve(radii, Thickness::new(t, t * 2.0, t, t), RadiusMode::Outer);
        assert_eq!(r.top_left.x, 0.0);
        assert_eq!(r.top_left.y, 0.0);
    }
}

#[test]
fn inner_radius_reaches_zero_and_stays_there() {
    let radii = CornerRadii::uniform(5.0);
    let values: Vec<f64> = (0..=30)
        .map(|i| resolve(radii, Thickness::uniform(i as f64 * 0.5), RadiusMode::Inner).top_left.y)
        .collect();
    assert!(values.windows(2).all(|w| w[1] <= w[0]));
    assert_eq!(values[20], 0.0); // thickness 10, half-thickness == radius
    assert!(values.iter().all(|&v| v >= 0.0));
}

// =============================================================================
// Path properties
// =============================================================================

#[test]
fn paths_close_for_assorted_rectangles() {
    let cases = [
        (Rect::new(0.0, 0.0, 300.0, 20.0), 6.0, 0.4),
        (Rect::new(-50.0, 12.5, 7.0, 7.0), 2.0, 1.0),
        (Rect::new(3.0, 3.0, 1.0, 500.0), 100.0, 0.1),
    ];
    for (rect, r, s) in cases {
        let (border, background) =
            geometry(rect, CornerRadii::uniform(r), Thickness::uniform(0.5), smoothing(s));
        for path in [border, background].into_iter().flatten() {
            assert_closed(&path);
            assert!(path.anchors().iter().chain(path.controls()).all(|p| p.is_finite()));
        }
    }
}

#[test]
fn oversized_radii_meet_once_per_edge_and_stay_in_bounds() {
    let side = 24.0;
    let rect = Rect::from_size(side, side);
    for s in [1.0, 0.75, 0.5] {
        let (border, _) = geometry(rect, CornerRadii::uniform(side), Thickness::ZERO, smoothing(s));
        let path = border.unwrap();
        let a = path.anchors();
        for edge in 0..4 {
            assert!(approx(a[2 * edge], a[2 * edge + 1]), "edge {edge} did not collapse at s={s}");
        }
        assert!(approx(a[0], dvec2(side / 2.0, 0.0)));

        for p in a.iter().chain(path.controls()) {
            assert!(rect.contains_point(*p, EPSILON), "{p} outside at s={s}");
        }
        let bbox = path.to_bez_path().bounding_box();
        assert!(bbox.x0 >= -EPSILON && bbox.y0 >= -EPSILON);
        assert!(bbox.x1 <= side + EPSILON && bbox.y1 <= side + EPSILON);
    }
}

#[test]
fn degenerate_sizes_have_no_path() {
    let border = SmoothBorder::new()
        .corner_radius(CornerRadii::uniform(4.0))
        .border_thickness(Thickness::uniform(1.0));
    for (w, h) in [(0.0, 50.0), (50.0, 0.0), (0.0, 0.0)] {
        let arranged = border.arrange(w, h);
        assert!(arranged.border_path.is_none(), "{w}x{h}");
        assert!(arranged.background_path.is_none(), "{w}x{h}");
    }
}

#[test]
fn negative_and_nan_rects_have_no_path() {
    let radii = CornerRadii::uniform(4.0);
    let rects = [
        Rect::new(0.0, 0.0, -5.0, 10.0),
        Rect::new(0.0, 0.0, 10.0, -1.0),
        Rect::new(0.0, 0.0, f64::NAN, 10.0),
        Rect::new(0.0, 0.0, 10.0, f64::NAN),
    ];
    for rect in rects {
        for thickness in [Thickness::ZERO, Thickness::uniform(1.0)] {
            let (border, background) = geometry(rect, radii, thickness, Smoothing::NONE);
            assert!(border.is_none(), "{rect:?}");
            assert!(background.is_none(), "{rect:?}");
            assert!(border_path(rect, radii, thickness, Smoothing::NONE).is_none());
            assert!(background_path(rect, radii, thickness, Smoothing::NONE).is_none());
        }
    }
}

#[test]
fn generate_on_degenerate_rect_does_not_panic() {
    let radii = resolve(CornerRadii::uniform(2.0), Thickness::ZERO, RadiusMode::Outer);
    for rect in [Rect::new(4.0, 4.0, -5.0, 10.0), Rect::new(4.0, 4.0, f64::NAN, f64::NAN)] {
        let path = generate(rect, &radii, Smoothing::NONE);
        assert!(path.anchors().iter().chain(path.controls()).all(|p| p.is_finite()));
    }
}

#[test]
fn border_and_background_presence_is_independent() {
    let border = SmoothBorder::new().border_thickness(Thickness::new(3.0, 0.0, 3.0, 0.0));
    let arranged = border.arrange(6.0, 40.0);
    assert!(arranged.border_path.is_some());
    assert!(arranged.background_path.is_none());
}

#[test]
fn smoothing_toward_one_shrinks_control_offset() {
    let mut last = f64::INFINITY;
    for i in 1..=10 {
        let bc = control_offset(12.0, smoothing(i as f64 / 10.0));
        assert!(bc < last);
        last = bc;
    }
    assert_eq!(last, 0.0);
}

#[test]
fn background_is_smaller_than_border() {
    let (border, background) = geometry(
        Rect::from_size(120.0, 80.0),
        CornerRadii::uniform(16.0),
        Thickness::uniform(4.0),
        smoothing(0.6),
    );
    let outer = border.unwrap().to_bez_path().area().abs();
    let inner = background.unwrap().to_bez_path().area().abs();
    assert!(inner < outer);
    assert!(inner > 0.0);
}

// =============================================================================
// Paint
// =============================================================================

#[test]
fn paint_fills_border_then_background() {
    let border = SmoothBorder::new()
        .corner_radius(CornerRadii::uniform(6.0))
        .border_thickness(Thickness::uniform(2.0))
        .border_color(Color::Rgb(255, 0, 0))
        .background_color(Color::Rgb(0, 0, 255));
    let arranged = border.arrange(50.0, 30.0);

    let mut list = DrawList::new();
    arranged.paint(&border, &mut list);

    assert_eq!(list.len(), 2);
    assert_eq!(list.commands[0].color, Color::Rgb(255, 0, 0));
    assert_eq!(Some(list.commands[0].path), arranged.border_path);
    assert_eq!(list.commands[1].color, Color::Rgb(0, 0, 255));
    assert_eq!(Some(list.commands[1].path), arranged.background_path);
}

#[test]
fn paint_skips_missing_color_or_path() {
    let no_background = SmoothBorder::new()
        .border_thickness(Thickness::uniform(1.0))
        .border_color(Color::Named("black".into()));
    let mut list = DrawList::new();
    no_background.arrange(10.0, 10.0).paint(&no_background, &mut list);
    assert_eq!(list.len(), 1);

    // Border eats the whole box: background path is absent even with a color.
    let swallowed = no_background
        .clone()
        .border_thickness(Thickness::uniform(5.0))
        .background_color(Color::Named("white".into()));
    let mut list = DrawList::new();
    swallowed.arrange(10.0, 10.0).paint(&swallowed, &mut list);
    assert_eq!(list.len(), 1);
    assert_eq!(list.commands[0].color, Color::Named("black".into()));
}

#[test]
fn custom_canvas_receives_fills() {
    struct Counter(usize);
    impl Canvas for Counter {
        fn fill_path(&mut self, _path: &ClosedPath, _color: &Color) {
            self.0 += 1;
        }
    }

    let border = SmoothBorder::new().background_color(Color::Named("gray".into()));
    let mut counter = Counter(0);
    border.arrange(20.0, 20.0).paint(&border, &mut counter);
    assert_eq!(counter.0, 1);
}

// =============================================================================
// SVG
// =============================================================================

#[test]
fn svg_for_square_corners() {
    let border = SmoothBorder::new()
        .border_thickness(Thickness::uniform(2.0))
        .try_border_color("black")
        .unwrap()
        .try_background_color("white")
        .unwrap();
    let svg = render_svg(&border, 10.0, 6.0);
    insta::assert_snapshot!(svg.trim_end(), @r#"
    <svg xmlns="http://www.w3.org/2000/svg" width="10" height="6" viewBox="0 0 10 6">
    <path d="M0,0 L10,0 C10,0 10,0 10,0 L10,6 C10,6 10,6 10,6 L0,6 C0,6 0,6 0,6 L0,0 C0,0 0,0 0,0 Z" fill="black"/>
    <path d="M2,2 L8,2 C8,2 8,2 8,2 L8,4 C8,4 8,4 8,4 L2,4 C2,4 2,4 2,4 L2,2 C2,2 2,2 2,2 Z" fill="white"/>
    </svg>
    "#);
}

#[test]
fn svg_path_data_has_one_move_four_curves_and_close() {
    let (border, _) = geometry(
        Rect::from_size(64.0, 64.0),
        CornerRadii::uniform(12.0),
        Thickness::ZERO,
        smoothing(0.6),
    );
    let d = border.unwrap().to_svg_path();
    assert!(d.starts_with('M'));
    assert!(d.ends_with('Z'));
    assert_eq!(d.matches('C').count(), 4);
    assert_eq!(d.matches('L').count(), 4);
}
