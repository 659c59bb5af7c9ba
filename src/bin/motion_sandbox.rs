//! Motion Sandbox - Headless Controller Run
//!
//! Run with: `cargo run --bin motion_sandbox [config.json]`
//!
//! Plays a scripted input sequence through the first-person controller over a
//! flat floor with a low step, at a 144 Hz visual frame rate against the 60 Hz
//! physics step, and logs where the body ends up.
//!
//! - `RUST_LOG=debug` shows jump and reset decisions
//! - `RUST_LOG=trace` shows every look update
//! - `--print-config` writes the default config as JSON and exits

use std::env;

use fps_motion_engine::camera::PitchCamera;
use fps_motion_engine::config::ControllerConfig;
use fps_motion_engine::input::{ActionInput, InputAction, InputProvider, KeyCode};
use fps_motion_engine::physics::{Aabb, RigidBody, SimpleRigidBody, StaticColliders};
use fps_motion_engine::player::{BodyTransform, DebugReset, FirstPersonController};
use fps_motion_engine::schedule::FixedTimestep;
use glam::{Vec2, Vec3};
use log::info;

const FRAME_DT: f32 = 1.0 / 144.0;
const RUN_SECONDS: f32 = 6.0;

/// One scripted input change, applied at the start of the given frame.
#[derive(Debug, Clone, Copy)]
enum Cue {
    Key(KeyCode, bool),
    Mouse(f32, f32),
    Stick(Vec2),
}

fn script() -> Vec<(u32, Cue)> {
    let at = |seconds: f32| (seconds / FRAME_DT) as u32;
    vec![
        (at(0.1), Cue::Key(KeyCode::W, true)),
        (at(1.0), Cue::Key(KeyCode::Space, true)),
        (at(1.1), Cue::Key(KeyCode::Space, false)),
        (at(1.5), Cue::Mouse(90.0, 0.0)),
        (at(1.6), Cue::Mouse(0.0, 25.0)),
        (at(2.5), Cue::Key(KeyCode::W, false)),
        (at(2.5), Cue::Stick(Vec2::new(-1.0, 0.5))),
        (at(3.5), Cue::Stick(Vec2::ZERO)),
        (at(3.5), Cue::Mouse(-45.0, -40.0)),
        (at(4.0), Cue::Key(KeyCode::W, true)),
        (at(5.0), Cue::Key(KeyCode::W, false)),
        (at(5.5), Cue::Key(KeyCode::R, true)),
        (at(5.6), Cue::Key(KeyCode::R, false)),
    ]
}

fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .try_init();
}

fn main() -> fps_motion_engine::Result<()> {
    init_logging();

    let arg = env::args().nth(1);
    if arg.as_deref() == Some("--print-config") {
        println!("{}", ControllerConfig::default().to_json_pretty()?);
        return Ok(());
    }

    let config = match arg {
        Some(path) => ControllerConfig::load(path)?,
        None => ControllerConfig::default(),
    };

    // Floor at 0 and a 0.3 m step ahead of the spawn point
    let world = StaticColliders::with_ground(0.0).with_box(Aabb::new(
        Vec3::new(-2.0, 0.0, 6.0),
        Vec3::new(2.0, 0.3, 9.0),
    ));

    let mut transform = BodyTransform::new(Vec3::new(0.0, 1.0, 0.0));
    let mut body = SimpleRigidBody::new();
    let mut camera = PitchCamera::new();
    let mut input = ActionInput::new();
    let mut timestep = FixedTimestep::default();
    let reset = DebugReset::capture(&transform);

    let mut controller = FirstPersonController::new(config)?;
    controller.activate(&mut input, &mut body)?;

    let cues = script();
    let frames = (RUN_SECONDS / FRAME_DT) as u32;
    let mut fixed_steps = 0u32;
    let mut jumps = 0u32;
    let mut peak_height = transform.position.y;

    for frame in 0..frames {
        for (_, cue) in cues.iter().filter(|(at, _)| *at == frame) {
            match *cue {
                Cue::Key(key, pressed) => {
                    input.handle_key(key, pressed);
                }
                Cue::Mouse(dx, dy) => input.handle_mouse_motion(dx, dy),
                Cue::Stick(value) => input.set_analog(InputAction::Move, value),
            }
        }

        for _ in 0..timestep.advance(FRAME_DT) {
            controller.fixed_update(&input, &transform, &mut body)?;
            body.step(&mut transform, timestep.step(), &world);
            fixed_steps += 1;
        }

        let report = controller.frame_update(
            FRAME_DT,
            &input,
            &mut transform,
            &mut camera,
            &mut body,
            &world,
        )?;
        if report.jumped() {
            jumps += 1;
        }
        if reset.update(&input, &mut transform, &mut body) {
            controller.reset_look(&mut camera);
        }
        input.end_frame();

        peak_height = peak_height.max(transform.position.y);
        if frame % 72 == 0 {
            info!(
                "t={:.2}s pos={:.2} vel={:.2} yaw={:.1} pitch={:.1}",
                frame as f32 * FRAME_DT,
                transform.position,
                body.linear_velocity(),
                transform.yaw_degrees(),
                camera.pitch_degrees,
            );
        }
    }

    controller.deactivate(&mut input);
    info!(
        "done: {frames} frames, {fixed_steps} physics steps, {jumps} jump(s), peak height {peak_height:.2}, input enabled={}",
        input.is_enabled()
    );
    info!(
        "final pos={:.2} eye={:.2} looking {:.2}",
        transform.position,
        camera.world_position(&transform),
        camera.world_forward(&transform),
    );
    Ok(())
}
