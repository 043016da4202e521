//! Draws the sandbox. Never changes it.

use simulator::camera::Camera;
use simulator::physics::Policy;
use simulator::{radar, Sandbox, SimulationMode};

use euclid::default::Point2D;
use ggez::graphics::{self, Color, DrawMode, DrawParam, MeshBuilder, Rect, Text};
use ggez::nalgebra::Point2;
use ggez::{timer, Context, GameResult};

/// Everything in world space: stars, trail, planets and the ship.
pub fn world(ctx: &mut Context, sandbox: &Sandbox) -> GameResult<()> {
    let camera = sandbox.camera();
    let (scr_w, scr_h) = graphics::drawable_size(ctx);
    let mut mesh = MeshBuilder::new();

    for star in sandbox.starfield().stars() {
        let at = camera.world_to_screen(star.apparent_pos());
        if at.x >= 0.0 && at.x < scr_w as f64 && at.y >= 0.0 && at.y < scr_h as f64 {
            mesh.rectangle(
                DrawMode::fill(),
                Rect::new(at.x as f32, at.y as f32, star.size as f32, star.size as f32),
                graphics::WHITE,
            );
        }
    }

    let wrap = match sandbox.policy() {
        Policy::Orbital => None,
        Policy::Drift { bounds, .. } => Some(bounds),
    };
    for run in sandbox.trail().runs(wrap) {
        if run.len() < 2 {
            continue;
        }
        let points: Vec<Point2<f32>> = run.iter().map(|&p| to_screen(camera, p)).collect();
        mesh.line(&points, 1.0, Color::from_rgb(100, 200, 255))?;
    }

    for planet in sandbox.planets() {
        let center = to_screen(camera, planet.pos);
        let radius = ((planet.radius * camera.zoom()) as f32).floor().max(2.0);
        // The biggest glow ring is 1.75 times the planet
        let reach = radius * 1.75;
        // Only spend processing time drawing it if it's in frame.
        if center.x + reach < 0.0
            || center.x - reach > scr_w
            || center.y + reach < 0.0
            || center.y - reach > scr_h
        {
            continue;
        }
        let color = Color::from_rgb_u32(planet.color);
        mesh.circle(DrawMode::fill(), center, radius, 0.1, color);
        for ring in 1..4 {
            let glow = Color {
                a: (50 - ring * 12) as f32 / 255.0,
                ..color
            };
            mesh.circle(
                DrawMode::fill(),
                center,
                radius * (1.0 + ring as f32 * 0.25),
                0.1,
                glow,
            );
        }
    }

    let ship = sandbox.ship();
    let hull: Vec<Point2<f32>> = ship.hull().iter().map(|&p| to_screen(camera, p)).collect();
    mesh.polygon(DrawMode::fill(), &hull, Color::from_rgb(255, 220, 120))?;
    if ship.firing {
        let flame: Vec<Point2<f32>> = ship.flame().iter().map(|&p| to_screen(camera, p)).collect();
        mesh.polygon(DrawMode::fill(), &flame, Color::from_rgb(255, 120, 30))?;
    }

    let mesh = mesh.build(ctx)?;
    graphics::draw(ctx, &mesh, DrawParam::default())
}

/// The mini-map in the top right, centered on the ship.
pub fn radar(ctx: &mut Context, sandbox: &Sandbox) -> GameResult<()> {
    let (scr_w, scr_h) = graphics::drawable_size(ctx);
    let corner = radar::corner(euclid::default::Size2D::new(scr_w as f64, scr_h as f64));
    let size = radar::RADAR_SIZE as f32;
    let ship = sandbox.ship();

    let mut mesh = MeshBuilder::new();
    mesh.rectangle(
        DrawMode::fill(),
        Rect::new(0.0, 0.0, size, size),
        Color::from_rgb(10, 10, 30),
    );
    for planet in sandbox.planets() {
        if let Some(blip) = radar::blip(ship.pos, planet.pos) {
            mesh.circle(
                DrawMode::fill(),
                Point2::new(blip.x as f32, blip.y as f32),
                3.0,
                0.1,
                Color::from_rgb_u32(planet.color),
            );
        }
    }
    mesh.circle(
        DrawMode::fill(),
        Point2::new(size / 2.0, size / 2.0),
        4.0,
        0.1,
        graphics::WHITE,
    );

    let mesh = mesh.build(ctx)?;
    graphics::draw(
        ctx,
        &mesh,
        DrawParam::default().dest(Point2::new(corner.x as f32, corner.y as f32)),
    )
}

/// Text in the top left, and the key help at the bottom.
pub fn hud(ctx: &mut Context, sandbox: &Sandbox) -> GameResult<()> {
    let ship = sandbox.ship();
    let mut lines = vec![
        format!("Pos: ({:.1}, {:.1})", ship.pos.x, ship.pos.y),
        format!("Vel: {:.1} u/s", ship.speed()),
        format!("Angle: {:.1}°", ship.heading_degrees()),
        format!("Fuel: {:.1}%", ship.fuel),
        format!("Planets: {}", sandbox.planets().len()),
        format!("Zoom: {:.2}", sandbox.camera().zoom()),
        format!("FPS: {}", timer::fps(ctx) as u32),
        format!("T+ {:.1}s  [{}]", sandbox.sim_time(), sandbox.name()),
    ];
    if sandbox.mode() == SimulationMode::Paused {
        lines.push("PAUSED".to_string());
    }

    let color = Color::from_rgb(220, 220, 220);
    let mut y = 8.0;
    for line in lines {
        let text = Text::new(line);
        graphics::draw(
            ctx,
            &text,
            DrawParam::default().dest(Point2::new(8.0, y)).color(color),
        )?;
        y += 18.0;
    }

    let (_, scr_h) = graphics::drawable_size(ctx);
    let help = Text::new(
        "W/S thrust  A/D turn  Space pause  R reset  +/- zoom  \
         Click add planet  Right click remove  Tab next scenario  Esc quit",
    );
    graphics::draw(
        ctx,
        &help,
        DrawParam::default()
            .dest(Point2::new(8.0, scr_h - 24.0))
            .color(Color::from_rgb(120, 120, 140)),
    )
}

fn to_screen(camera: &Camera, world: Point2D<f64>) -> Point2<f32> {
    let p = camera.world_to_screen(world);
    Point2::new(p.x as f32, p.y as f32)
}
