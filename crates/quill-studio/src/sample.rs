use quill_engine::coords::Vec2;
use quill_engine::paint::Color;
use quill_engine::path::{BezierPath, PathStyle};

/// Size of the box the handwriting was drawn in (+Y down).
pub const VIEW_BOX: Vec2 = Vec2::new(1032.0, 322.0);

fn p(x: f32, y: f32) -> Vec2 {
    Vec2::new(x, y)
}

pub fn hello_style() -> PathStyle {
    PathStyle::with_colors(
        120.0,
        &[
            Color::from_rgba8(21, 123, 147, 255),
            Color::from_rgba8(253, 211, 93, 255),
            Color::from_rgba8(244, 83, 67, 255),
            Color::from_rgba8(149, 117, 179, 255),
            Color::from_rgba8(108, 153, 223, 255),
            Color::from_rgba8(127, 182, 221, 255),
        ],
    )
}

/// First letters of a handwritten "hello".
pub fn hello_path() -> BezierPath {
    let mut path = BezierPath::new();

    path.move_to(p(1.0, 303.38));
    path.curve_to(p(28.31, 287.4), p(88.3, 249.9), p(109.8, 227.73));

    path.move_to(p(146.8, 183.76));
    path.curve_to(p(164.86, 164.55), p(202.46, 117.58), p(210.23, 48.3));
    path.curve_to(p(216.39, -6.67), p(160.85, -16.06), p(142.83, 32.47));
    path.curve_to(p(128.3, 71.61), p(121.25, 194.9), p(112.88, 253.68));

    path.move_to(p(99.23, 319.65));
    path.curve_to(p(104.37, 285.49), p(118.61, 216.74), p(142.39, 188.59));
    path.curve_to(p(168.53, 157.66), p(219.46, 150.09), p(225.64, 201.35));
    path.curve_to(p(230.05, 237.85), p(205.38, 292.38), p(229.61, 310.85));
    path.curve_to(p(253.83, 329.32), p(314.62, 313.49), p(340.17, 296.34));

    path.curve_to(p(369.24, 280.83), p(404.09, 254.76), p(415.49, 214.74));
    path.normalize_last_connection();
    path.curve_to(p(430.19, 163.12), p(373.15, 140.67), p(340.17, 178.48));
    path.normalize_last_connection();
    path.curve_to(p(315.06, 207.26), p(310.21, 267.15), p(345.45, 293.74));

    path.curve_to(p(359.55, 316.13), p(438.66, 343.57), p(508.43, 270.39));
    path.normalize_last_connection();

    path.curve_to(p(540.44, 232.43), p(582.87, 175.14), p(596.96, 124.82));
    path.curve_to(p(614.58, 61.94), p(618.11, 17.52), p(594.32, 6.08));
    path.normalize_last_connection();
    path.curve_to(p(567.89, -6.62), p(535.3, 28.71), p(520.76, 101.27));
    path.curve_to(p(510.52, 152.39), p(508.43, 179.36), p(508.43, 218.06));

    path.curve_to(p(507.69, 252.36), p(517.24, 319.56), p(573.62, 320.97));
    path.curve_to(p(639.25, 322.61), p(685.35, 261.6), p(705.76, 231.25));
    path.normalize_last_connection();

    path
}

/// Small closed loop, used as a second independent path.
pub fn loop_path(center: Vec2, r: f32) -> BezierPath {
    // Control distance for a quarter circle.
    let k = 0.5523 * r;
    let (cx, cy) = (center.x, center.y);

    let mut path = BezierPath::new();
    path.move_to(p(cx + r, cy));
    path.curve_to(p(cx + r, cy + k), p(cx + k, cy + r), p(cx, cy + r));
    path.curve_to(p(cx - k, cy + r), p(cx - r, cy + k), p(cx - r, cy));
    path.curve_to(p(cx - r, cy - k), p(cx - k, cy - r), p(cx, cy - r));
    path.curve_to(p(cx + k, cy - r), p(cx + r, cy - k), p(cx + r, cy));
    path
}
