//! First-person ray-cast viewer.
//!
//! Controls  ↑/W = forward ↓/S = back ←/A →/D = turn Esc = quit
//!
//! ```bash
//! cargo run --release -- --map maps/room.txt --stride 2
//! ```

use anyhow::Context;
use clap::Parser;
use log::{LevelFilter, info};
use minifb::{Key, Window, WindowOptions};
use simplelog::TermLogger;
use std::{
    fs,
    path::PathBuf,
    time::{Duration, Instant},
};

use gridcaster::{
    config::RenderConfig,
    engine::RayCaster,
    renderer::{RendererExt, Software, draw_overhead},
    sim::{InputCmd, SIM_FPS, TicRunner},
    world::{Camera, TileMap},
};

/// CLI options handled via `clap` derive.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Opts {
    /// Text map to load (built-in demo level when omitted)
    #[arg(long, value_name = "FILE")]
    map: Option<PathBuf>,

    /// Window width in pixels (even)
    #[arg(long, default_value_t = 640)]
    width: usize,

    /// Window height in pixels
    #[arg(long, default_value_t = 400)]
    height: usize,

    /// Screen columns covered by each ray
    #[arg(long, default_value_t = 5)]
    stride: usize,

    /// Overhead map cell size in pixels, 0 hides it
    #[arg(long, default_value_t = 5)]
    minimap: usize,

    /// Initial facing in angle units (0 = east)
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    facing: i32,

    /// off, error, warn, info, debug, trace
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::parse();

    let level: LevelFilter = opts
        .log_level
        .parse()
        .map_err(|e| anyhow::anyhow!("--log-level {}: {e}", opts.log_level))?;
    TermLogger::init(
        level,
        simplelog::ConfigBuilder::default()
            .set_time_level(LevelFilter::Trace)
            .build(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    // ─────────── config & tables ────────────
    let cfg = RenderConfig {
        width: opts.width,
        height: opts.height,
        stride: opts.stride,
        minimap_scale: opts.minimap,
    };
    let caster = RayCaster::from_config(&cfg)?;
    let tables = caster.tables();
    info!(
        "{}x{} view, stride {}, {} arcs per turn",
        cfg.width,
        cfg.height,
        cfg.stride,
        tables.arcs().a360
    );

    // ─────────── map & player ────────────
    let map = match &opts.map {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading map {}", path.display()))?;
            TileMap::parse(&text).with_context(|| format!("parsing map {}", path.display()))?
        }
        None => TileMap::demo(),
    };
    let spawn = map.spawn_point()?;
    let mut camera = Camera::for_screen(spawn, tables.arcs().wrap(opts.facing), caster.screen());
    info!("player at ({:.0}, {:.0}) facing {}", spawn.x, spawn.y, camera.facing);

    // ─────────── window ────────────
    let mut renderer = Software::default();
    let mut win = Window::new("gridcaster", cfg.width, cfg.height, WindowOptions::default())?;
    win.set_target_fps(SIM_FPS as usize);

    let mut sim = TicRunner::new();
    let mut slices = Vec::with_capacity(cfg.width / cfg.stride + 1);

    // ────────────────── benchmarking state ──────────────────────────────
    let mut acc_time = Duration::ZERO; // cumulated render time
    let mut acc_frames = 0usize; // frames in the current window
    let mut last_print = Instant::now(); // when we printed last

    while win.is_open() && !win.is_key_down(Key::Escape) {
        let t0 = Instant::now(); // ┌─ frame timer start

        /* --------------- build one InputCmd per frame -------------------- */
        let mut cmd = InputCmd::default();
        if win.is_key_down(Key::Up) || win.is_key_down(Key::W) {
            cmd.forward += 1.0;
        }
        if win.is_key_down(Key::Down) || win.is_key_down(Key::S) {
            cmd.forward -= 1.0;
        }
        if win.is_key_down(Key::Left) || win.is_key_down(Key::A) {
            cmd.turn -= 1.0;
        }
        if win.is_key_down(Key::Right) || win.is_key_down(Key::D) {
            cmd.turn += 1.0;
        }

        sim.pump(&mut camera, &map, tables, cmd);

        /* draw */
        caster.render_frame(&map, &camera, &mut slices);
        let mut presented = Ok(());
        renderer.draw_frame(
            cfg.width,
            cfg.height,
            &slices,
            |r| draw_overhead(r, &map, &camera, tables, &slices, cfg.minimap_scale),
            |fb, w, h| {
                acc_time += t0.elapsed();
                acc_frames += 1;
                presented = win.update_with_buffer(fb, w, h);
            },
        );
        presented?;

        if last_print.elapsed() >= Duration::from_secs(3) {
            let avg_ms = acc_time.as_secs_f64() * 1000.0 / acc_frames.max(1) as f64;
            let fps = 1000.0 / avg_ms.max(f64::EPSILON);
            info!("avg render: {:.2} ms  ({:.1} FPS)", avg_ms, fps);
            acc_time = Duration::ZERO;
            acc_frames = 0;
            last_print = Instant::now();
        }
    }
    Ok(())
}
