//! Physics demo application
//!
//! Drops a box and a ball onto a static floor and logs the contacts as they
//! start and end. Pass a `.toml` or `.ron` path to override the default
//! physics configuration.

use rust_physics::foundation::logging;
use rust_physics::physics::Vertex;
use rust_physics::prelude::*;

const TICK: f32 = 1.0 / 60.0;
const TICKS: usize = 240;

#[derive(thiserror::Error, Debug)]
enum DemoError {
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    #[error("physics: {0}")]
    Physics(#[from] PhysicsError),
}

struct Scene {
    manager: PhysicsManager,
    floor: BodyHandle,
    crate_body: BodyHandle,
    ball: BodyHandle,
}

fn main() {
    logging::init_with_default("info");

    if let Err(e) = run() {
        log::error!("Demo failed: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), DemoError> {
    let config = match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Loading physics config from {}", path);
            PhysicsConfig::load_from_file(&path)?
        }
        None => PhysicsConfig::default(),
    };

    let mut scene = build_scene(config)?;
    let mut debug = DebugDrawSystem::new();

    for tick in 0..TICKS {
        scene.manager.step(TICK, &mut debug)?;
        debug.update(TICK);

        for pair in scene.manager.collisions_entered() {
            log::info!("tick {}: {} touched {}", tick, name(&scene, pair.first), name(&scene, pair.second));
        }
        for pair in scene.manager.collisions_exited() {
            log::info!("tick {}: {} left {}", tick, name(&scene, pair.first), name(&scene, pair.second));
        }
        for contact in scene.manager.contacts() {
            log::trace!(
                "contact depth {:.4} along ({:.2}, {:.2}, {:.2})",
                contact.data.depth,
                contact.data.normal.x,
                contact.data.normal.y,
                contact.data.normal.z
            );
        }
    }

    for (label, handle) in [("crate", scene.crate_body), ("ball", scene.ball)] {
        let body = scene.manager.body(handle)?;
        let position = body.position();
        log::info!(
            "{} rests at ({:.3}, {:.3}, {:.3}), speed {:.3}",
            label,
            position.x,
            position.y,
            position.z,
            body.velocity().norm()
        );
    }
    log::info!("{} debug shapes still queued", debug.shape_count());

    Ok(())
}

fn build_scene(config: PhysicsConfig) -> Result<Scene, DemoError> {
    let mesh = cube_mesh();
    let mut manager = PhysicsManager::new(config)?;

    let mut floor_transform = Transform::identity();
    floor_transform.set_scale(Vec3::new(10.0, 1.0, 10.0));
    let mut floor = PhysicsObject::new(floor_transform.shared(), PhysicsLayer::Static, ColliderType::Aabb, 0.0, false, true);
    floor.generate_collider(&mesh)?;
    let floor = manager.add(floor);

    let mut crate_body = PhysicsObject::new(
        Transform::from_position(Vec3::new(-1.5, 4.0, 0.0)).shared(),
        PhysicsLayer::Dynamic,
        ColliderType::Aabb,
        2.0,
        true,
        true,
    );
    crate_body.generate_collider(&mesh)?;
    let crate_body = manager.add(crate_body);

    let mut ball = PhysicsObject::new(
        Transform::from_position(Vec3::new(1.5, 6.0, 0.0)).shared(),
        PhysicsLayer::Dynamic,
        ColliderType::Sphere,
        1.0,
        true,
        true,
    );
    ball.generate_collider(&mesh)?;
    ball.set_velocity(Vec3::new(-0.5, 0.0, 0.0));
    let ball = manager.add(ball);

    log::info!("Scene ready with {} bodies", manager.len());
    Ok(Scene { manager, floor, crate_body, ball })
}

fn name(scene: &Scene, handle: BodyHandle) -> &'static str {
    if handle == scene.floor {
        "floor"
    } else if handle == scene.crate_body {
        "crate"
    } else if handle == scene.ball {
        "ball"
    } else {
        "body"
    }
}

/// Unit cube corners
fn cube_mesh() -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(8);
    for x in [-0.5, 0.5] {
        for y in [-0.5, 0.5] {
            for z in [-0.5, 0.5] {
                vertices.push(Vertex::new(Vec3::new(x, y, z)));
            }
        }
    }
    vertices
}
