//! Headless flight through the wormhole.
//!
//! Replays a scripted key/mouse sequence at a fixed frame rate and logs the
//! camera state once per simulated second. Usage:
//! `wormhole [options.toml] [frames]`.

use std::path::Path;

use web_time::Duration;
use wormhole::input::{InputEvent, MouseButton};
use wormhole::util::FrameTiming;
use wormhole::{FlightSession, Options};

/// Fixed simulated frame time.
const FRAME_MS: f32 = 1000.0 / 60.0;
const DEFAULT_FRAMES: u64 = 1200;

fn key(key: &str, pressed: bool) -> InputEvent {
    InputEvent::Key {
        key: key.to_owned(),
        pressed,
    }
}

/// Events to inject at the start of `frame`: dive toward the throat,
/// look around on the far side, then circle it.
fn scripted_events(frame: u64) -> Vec<InputEvent> {
    match frame {
        0 => vec![key("F1", true), key("KeyW", true), key("ShiftLeft", true)],
        1 => vec![key("F1", false)],
        240 => vec![
            key("KeyW", false),
            key("ShiftLeft", false),
            InputEvent::MouseButton {
                button: MouseButton::Right,
                pressed: true,
            },
        ],
        241..=420 => vec![InputEvent::MouseMotion { dx: 6.0, dy: 1.5 }],
        421 => vec![InputEvent::MouseButton {
            button: MouseButton::Right,
            pressed: false,
        }],
        600 => vec![key("F2", true)],
        601 => vec![key("F2", false)],
        _ => Vec::new(),
    }
}

fn load_options(arg: Option<&str>) -> Options {
    match arg {
        Some(path) => match Options::load(Path::new(path)) {
            Ok(options) => options,
            Err(e) => {
                log::error!("{e}");
                std::process::exit(1);
            }
        },
        None => Options::default(),
    }
}

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let args: Vec<String> = std::env::args().collect();
    let options = load_options(args.get(1).map(String::as_str));
    let frames = match args.get(2).map(|s| s.parse::<u64>()) {
        Some(Ok(n)) => n,
        Some(Err(e)) => {
            log::error!("Usage: wormhole [options.toml] [frames] ({e})");
            std::process::exit(1);
        }
        None => DEFAULT_FRAMES,
    };

    let mut session = FlightSession::new(&options);
    let mut timing = FrameTiming::new();
    let frame_time = Duration::from_secs_f32(FRAME_MS / 1000.0);

    for frame in 0..frames {
        for event in scripted_events(frame) {
            session.handle_event(&event);
        }
        let snapshot = session.step(FRAME_MS);

        if let Some(fps) = timing.record(frame_time) {
            let cam = session.camera();
            let p = cam.position();
            let d = cam.look();
            log::info!(
                "t = {:.1}s cam: ({:.3}, {:.3}, {:.3}) dir: ({:.3}, {:.3}, \
                 {:.3}) l: {:.4} r: {:.4} fps: {fps:.1}{}",
                session.frame() as f32 * FRAME_MS / 1000.0,
                p.x,
                p.y,
                p.z,
                d.x,
                d.y,
                d.z,
                snapshot.depth.l,
                snapshot.depth.r,
                if session.controller().is_orbiting() {
                    " (orbiting)"
                } else {
                    ""
                }
            );
        }
    }
}
