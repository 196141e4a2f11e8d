mod sample;

use std::time::Duration;

use anyhow::Context;
use quill_engine::anim::{RevealClock, Weighting};
use quill_engine::coords::{Vec2, ViewTransform, Viewport};
use quill_engine::logging::{LoggingConfig, init_logging};
use quill_engine::paint::Color;
use quill_engine::path::{PathStyle, retain_drawable};
use quill_engine::render::{FrameCache, FrameInput, PipelineConfig, build_frames};

/// Simulated display refresh.
const FRAME_DT: Duration = Duration::from_micros(16_667);

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let viewport = Viewport::new(1280.0, 720.0);
    let transform = ViewTransform::fit(sample::VIEW_BOX, viewport, 1.0);
    let config = PipelineConfig {
        weighting: Weighting::ArcLength { samples: 32 },
        ..PipelineConfig::default()
    };

    let segments = retain_drawable(sample::hello_path().segments());
    let style = sample::hello_style();
    log::info!("hello path: {} segments, line width {}", segments.len(), style.line_width);

    // ── animated reveal of one path ──────────────────────────────────────
    let mut cache = FrameCache::new(config);
    let mut clock = RevealClock::new(Duration::from_secs(3));
    loop {
        let tick = clock.tick(FRAME_DT);
        let input = FrameInput::new(&segments, &style, tick.filled_percent).with_transform(transform);
        let frame = cache
            .update(&input)
            .with_context(|| format!("building frame {}", tick.frame_index))?;

        if tick.frame_index % 30 == 0 || tick.finished {
            let drawn: u32 = (0..frame.beziers().len()).map(|i| frame.vertex_count(i)).sum();
            let caps = frame.circles().iter().filter(|c| !c.is_suppressed()).count();
            log::info!(
                "frame {:>3}: filled {:>5.1}%, {} vertices, {}/{} caps, {} bytes",
                tick.frame_index,
                tick.filled_percent * 100.0,
                drawn,
                caps,
                frame.circles().len(),
                frame.globals_bytes().len()
                    + frame.bezier_bytes().len()
                    + frame.gradient_bytes().len()
                    + frame.circle_bytes().len()
            );
        }
        if tick.finished {
            break;
        }
    }
    log::info!("reveal done after {} builds", cache.build_count());

    // ── several independent paths at once ─────────────────────────────────
    let loops: Vec<_> = (0..4)
        .map(|i| sample::loop_path(Vec2::new(150.0 + 240.0 * i as f32, 160.0), 80.0).into_segments())
        .collect();
    let loop_style = PathStyle::with_colors(24.0, &[Color::white(), Color::from_rgba8(244, 83, 67, 255)]);
    let inputs: Vec<FrameInput<'_>> = loops
        .iter()
        .enumerate()
        .map(|(i, segs)| {
            FrameInput::new(segs, &loop_style, (i + 1) as f32 / 4.0).with_transform(transform)
        })
        .collect();

    let frames = build_frames(&inputs, &config).context("building loop frames")?;
    for (i, frame) in frames.iter().enumerate() {
        log::info!(
            "loop {i}: filled {:.2}, {} curves, {} caps",
            frame.globals().filled_percent,
            frame.beziers().len(),
            frame.circles().len()
        );
    }

    Ok(())
}
