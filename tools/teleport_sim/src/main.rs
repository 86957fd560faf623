use anyhow::{ensure, Context, Result};
use cgmath::{vec3, Deg, Quaternion, Rotation3, Vector3};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

use engine::{Pose, Time};
use transporter::{
    ActivationEdge, Hand, SpatialNode, TeleportEffect, TeleportSystem, TrackedNode,
    TransitionPolicy,
};

mod config;

use config::SimConfig;

#[derive(Parser)]
#[command(name = "teleport_sim")]
#[command(about = "Run the teleport system headless and print one JSON line per frame")]
#[command(version)]
struct Cli {
    /// TOML file with `[teleport]` and `[scene]` tables
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured transition policy
    #[arg(short, long, value_enum)]
    policy: Option<PolicyArg>,

    /// Override the configured transition time in seconds
    #[arg(short, long)]
    duration: Option<f32>,

    /// Seconds per frame
    #[arg(long, default_value_t = 1.0 / 90.0)]
    dt: f32,

    /// Number of frames to simulate
    #[arg(short, long, default_value_t = 30)]
    frames: u32,

    /// Frames on which the activation button is pressed
    #[arg(long, value_delimiter = ',', default_value = "0")]
    press: Vec<u32>,

    /// Controller height above the floor
    #[arg(long, default_value_t = 1.5)]
    height: f32,

    /// Downward controller pitch in degrees
    #[arg(long, default_value_t = 45.0)]
    pitch: f32,

    /// Controller yaw in degrees
    #[arg(long, default_value_t = 0.0)]
    yaw: f32,
}

#[derive(Clone, Copy, ValueEnum)]
enum PolicyArg {
    Immediate,
    Blink,
    MoveLinear,
    MoveSmooth,
}

impl From<PolicyArg> for TransitionPolicy {
    fn from(policy: PolicyArg) -> Self {
        match policy {
            PolicyArg::Immediate => TransitionPolicy::Immediate,
            PolicyArg::Blink => TransitionPolicy::Blink,
            PolicyArg::MoveLinear => TransitionPolicy::MoveLinear,
            PolicyArg::MoveSmooth => TransitionPolicy::MoveSmooth,
        }
    }
}

#[derive(Serialize)]
struct FrameReport {
    frame: u32,
    time: f32,
    pressed: bool,
    position: Vector3<f32>,
    teleporting: bool,
    progress: Option<f32>,
    blink_coverage: Option<f32>,
    ray_visible: bool,
    target: Option<Vector3<f32>>,
    effects: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    engine::logging::init_logging(engine::logging::DEFAULT_LOG_ENV_VAR);

    ensure!(
        cli.dt.is_finite() && cli.dt > 0.0,
        "--dt must be a positive number of seconds, got {}",
        cli.dt
    );

    let mut config = SimConfig::load(cli.config.as_deref())?;
    if let Some(policy) = cli.policy {
        config.teleport.policy = policy.into();
    }
    if let Some(duration) = cli.duration {
        config.teleport.transition_time = duration;
    }
    info!(
        "Simulating {} frames of {:?} over {}s",
        cli.frames, config.teleport.policy, config.teleport.transition_time
    );

    let world = engine::profile!("build scene", config.scene.build());
    let mut system =
        TeleportSystem::new(config.teleport.clone()).context("Invalid teleport configuration")?;
    let mut node = TrackedNode::new(Pose::from_position(vec3(0.0, config.scene.floor_height, 0.0)));

    let rotation = Quaternion::from_angle_y(Deg(cli.yaw)) * Quaternion::from_angle_x(Deg(cli.pitch));
    let mut time = Time::default();

    for frame in 0..cli.frames {
        time = time.step(cli.dt);

        // the controller rides along with the tracking-space origin
        let hand = Hand::at(node.pose().position + vec3(0.0, cli.height, 0.0), rotation);
        let pressed = cli.press.contains(&frame);
        let edge = if pressed {
            ActivationEdge::PRESSED
        } else {
            ActivationEdge::NONE
        };

        let effects = engine::profile!(
            "teleport update",
            system.update_with_edge(&time, edge, &hand, &mut node, &world)
        );

        let report = FrameReport {
            frame,
            time: time.total.as_secs_f32(),
            pressed,
            position: node.pose().position,
            teleporting: system.is_teleporting(),
            progress: system.transitions().progress(),
            blink_coverage: system.overlay().map(|overlay| overlay.coverage),
            ray_visible: system.pointer().is_enabled(),
            target: system
                .pointer()
                .target()
                .hit
                .then(|| system.pointer().target().point),
            effects: effects
                .iter()
                .filter(|effect| **effect != TeleportEffect::NoEffect)
                .map(|effect| format!("{:?}", effect))
                .collect(),
        };
        println!("{}", serde_json::to_string(&report)?);
    }

    Ok(())
}
