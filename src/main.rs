use clap::Parser;

use crate::{
    abs::App,
    input::{Action, Command},
    render::Renderer,
    scene::{Flow, SceneState},
    timer::FrameClock,
};

mod abs;
mod config;
mod error;
mod geometry;
mod input;
mod logging;
mod render;
mod scene;
mod timer;

fn main() {
    let args = config::Args::parse();
    if let Err(e) = logging::init(args.log_level) {
        eprintln!("Failed to set up logging: {e}");
    }

    let mut app = match App::new(&args.title, args.width, args.height, args.vsync) {
        Ok(app) => app,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(-1);
        }
    };

    let renderer = match Renderer::new(&app.gl, &args.vertex_shader, &args.fragment_shader) {
        Ok(renderer) => renderer,
        Err(e) => {
            // Not entering the loop is the whole response; the exit status stays 0.
            log::error!("{e}");
            return;
        }
    };

    let (width, height) = app.window.drawable_size();
    renderer.set_viewport(width, height);
    let mut scene = SceneState::new(width, height);
    let mut clock = FrameClock::new();

    log::info!("Running at {width}x{height}");

    'running: loop {
        let events: Vec<_> = app.event_pump.poll_iter().collect();
        for event in &events {
            let action = match input::translate(event) {
                Some(Command::Apply(action)) => action,
                Some(Command::OpenMenu) => match input::show_menu(&app.window) {
                    Some(entry) => entry.action(),
                    None => continue,
                },
                None => continue,
            };
            let action = action.with_drawable_size(app.window.drawable_size());
            log::debug!("Applying {action:?}");

            if scene.apply(action) == Flow::Quit {
                break 'running;
            }
            if let Action::Resize(width, height) = action {
                renderer.set_viewport(width, height);
                log::info!("Resized to {}x{}", scene.width, scene.height);
            }
        }

        // Idle tick: every step is followed by exactly one redraw.
        scene.step(clock.tick());
        log::trace!(
            "orbit {:.3} rad, spin {:.1} deg",
            scene.orbit_angle,
            scene.spin_angle
        );

        renderer.draw(&scene);
        app.window.gl_swap_window();
    }

    log::info!("Shutting down");
}
