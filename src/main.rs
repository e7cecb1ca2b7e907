use anyhow::Result;
use clap::Parser;
use log::{error, info};
use simple_logger::SimpleLogger;
use std::{path::PathBuf, time::Instant};
use winit::{
    event::{Event, KeyEvent, WindowEvent},
    event_loop::{ControlFlow, EventLoopBuilder},
};

use gl_primer::{
    config::DemoConfig,
    demos::{self, DemoKind, FrameClock},
    input::InputState,
    render::window::DemoWindow,
};

#[derive(Parser)]
#[command(name = "gl-primer")]
#[command(about = "OpenGL ES teaching demos", long_about = None)]
struct Cli {
    /// Demo to run
    #[arg(value_enum)]
    demo: DemoKind,

    /// Config file; defaults to demos.toml in the platform config directory
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = DemoConfig::load(cli.config.as_deref())?;
    SimpleLogger::new().with_level(config.level_filter()?).init()?;
    info!("Starting {:?} demo", cli.demo);

    let event_loop = EventLoopBuilder::new().build()?;
    let mut window = DemoWindow::new(&event_loop, &config.window)?;

    let mut demo = match demos::create(cli.demo, window.context_mut(), &config) {
        Ok(demo) => demo,
        Err(e) => {
            error!("{}", e);
            return Err(e.into());
        }
    };

    let mut input = InputState::default();
    let mut clock = FrameClock::new(Instant::now());
    event_loop.set_control_flow(ControlFlow::Wait);

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => {
            let demo_input = match event {
                WindowEvent::CloseRequested => {
                    elwt.exit();
                    None
                }
                WindowEvent::Resized(size) => {
                    window.resize(size);
                    window.request_redraw();
                    None
                }
                WindowEvent::CursorMoved { position, .. } => {
                    input.handle_cursor_moved(position.x, position.y);
                    None
                }
                WindowEvent::MouseInput { state, button, .. } => {
                    input.handle_mouse_button(button, state, window.canvas_size())
                }
                WindowEvent::KeyboardInput {
                    event: KeyEvent {
                        logical_key, state, ..
                    },
                    ..
                } => input.handle_key(&logical_key, state),
                WindowEvent::RedrawRequested => {
                    let elapsed = clock.elapsed(Instant::now());
                    if demo.is_animated() {
                        demo.update(elapsed);
                    }
                    demo.draw(window.context());
                    if let Err(e) = window.swap_buffers() {
                        error!("{:#}", e);
                        elwt.exit();
                    }
                    None
                }
                _ => None,
            };

            if let Some(demo_input) = demo_input {
                if demo.handle_input(demo_input) {
                    window.request_redraw();
                }
            }
        }
        Event::Resumed => clock.reset(Instant::now()),
        Event::AboutToWait => {
            if demo.is_animated() {
                window.request_redraw();
            }
        }
        _ => (),
    })?;

    Ok(())
}
