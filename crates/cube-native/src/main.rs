use anyhow::Context;
use winit::{
    event::*,
    event_loop::EventLoop,
    keyboard::{Key, NamedKey},
    window::WindowBuilder,
};

use cube_core::SceneConfig;

mod frame;
mod helpers;
mod logging;
mod render;

use render::GpuState;

fn main() -> anyhow::Result<()> {
    logging::init_logging();

    let scene = SceneConfig::default();
    scene.validate().context("invalid scene config")?;
    log::info!(
        "[scene] box={:?} ground={:?} light_radius={} step={}deg",
        scene.box_size,
        scene.ground.0.to_array(),
        scene.orbit().radius,
        scene.orbit_step_deg
    );

    let event_loop = EventLoop::new().context("event loop")?;
    let window = WindowBuilder::new()
        .with_title("Shadowed Cube")
        .build(&event_loop)
        .context("window")?;

    let mut state = pollster::block_on(GpuState::new(&window, &scene)).context("gpu")?;

    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                event: WindowEvent::Resized(size),
                ..
            } => state.resize(size),
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => elwt.exit(),
            Event::WindowEvent {
                event:
                    WindowEvent::KeyboardInput {
                        event:
                            KeyEvent {
                                logical_key: Key::Named(NamedKey::Escape),
                                state: ElementState::Pressed,
                                ..
                            },
                        ..
                    },
                ..
            } => elwt.exit(),
            Event::AboutToWait => match state.render() {
                Ok(_) => state.window.request_redraw(),
                Err(wgpu::SurfaceError::Lost) => state.resize(state.window.inner_size()),
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("[gpu] out of memory; exiting");
                    elwt.exit()
                }
                Err(e) => log::warn!("[gpu] skipped frame: {e:?}"),
            },
            _ => {}
        })
        .context("event loop run")?;
    Ok(())
}
