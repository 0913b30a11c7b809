// File: crates/chart-viewer/src/lib.rs
// Summary: Blocking chart window: renders chart-core to RGBA and blits it via winit + softbuffer.
// Controls: drag to pan, wheel to zoom around the cursor, R/Home to reset, Esc or close to exit.

pub mod pixels;

use std::num::NonZeroU32;

use chart_core::{Chart, RenderOptions, ViewState};
use log::{debug, warn};
use thiserror::Error;
use winit::dpi::{LogicalSize, PhysicalPosition, PhysicalSize};
use winit::event::{
    ElementState, Event, KeyboardInput, MouseButton, MouseScrollDelta, VirtualKeyCode, WindowEvent,
};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::platform::run_return::EventLoopExtRunReturn;
use winit::window::WindowBuilder;

#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("no display server available")]
    NoDisplay,
    #[error("failed to create window: {0}")]
    Window(String),
    #[error("window surface error: {0}")]
    Surface(String),
    #[error("failed to render chart: {0}")]
    Render(String),
}

pub struct ViewerOptions {
    pub title: String,
    pub render: RenderOptions,
}

impl ViewerOptions {
    pub fn new(title: impl Into<String>, render: RenderOptions) -> Self {
        Self { title: title.into(), render }
    }
}

/// Best-effort check that a window can be opened at all. Winit aborts the process
/// when no display server is reachable, so callers must ask first.
///
/// Only the presence of `DISPLAY`/`WAYLAND_DISPLAY` is checked: a variable naming
/// an unreachable server still passes, and winit 0.28 then panics in `EventLoop::new`.
pub fn display_available() -> bool {
    if cfg!(any(target_os = "linux", target_os = "freebsd", target_os = "openbsd", target_os = "netbsd", target_os = "dragonfly")) {
        let set = |k: &str| std::env::var_os(k).map(|v| !v.is_empty()).unwrap_or(false);
        set("DISPLAY") || set("WAYLAND_DISPLAY")
    } else {
        true
    }
}

struct Interaction {
    home: ViewState,
    view: ViewState,
    size: PhysicalSize<u32>,
    cursor: Option<PhysicalPosition<f64>>,
    dragging: bool,
}

/// Show `chart` in a window and block until the user closes it.
pub fn present(chart: &Chart, opts: &ViewerOptions) -> Result<(), ViewerError> {
    if !display_available() {
        return Err(ViewerError::NoDisplay);
    }

    let mut event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(opts.title.as_str())
        .with_inner_size(LogicalSize::new(opts.render.width as f64, opts.render.height as f64))
        .build(&event_loop)
        .map_err(|e| ViewerError::Window(e.to_string()))?;

    // SAFETY: `window` outlives both the context and the surface; all three are
    // dropped at the end of this function after the event loop returns.
    let context = unsafe { softbuffer::Context::new(&window) }.map_err(surface_err)?;
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }.map_err(surface_err)?;

    let mut chart = chart.clone();
    let home = ViewState::of_axes(&chart);
    let mut state = Interaction { home, view: home, size: window.inner_size(), cursor: None, dragging: false };
    let mut failure: Option<ViewerError> = None;

    event_loop.run_return(|event, _, control_flow| {
        *control_flow = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => *control_flow = ControlFlow::Exit,
                WindowEvent::Resized(new_size) => {
                    state.size = new_size;
                    window.request_redraw();
                }
                WindowEvent::KeyboardInput {
                    input: KeyboardInput { state: ElementState::Pressed, virtual_keycode: Some(key), .. },
                    ..
                } => match key {
                    VirtualKeyCode::Escape | VirtualKeyCode::Q => *control_flow = ControlFlow::Exit,
                    VirtualKeyCode::R | VirtualKeyCode::Home => {
                        state.view = state.home;
                        window.request_redraw();
                    }
                    _ => {}
                },
                WindowEvent::MouseInput { state: button_state, button: MouseButton::Left, .. } => {
                    state.dragging = button_state == ElementState::Pressed;
                }
                WindowEvent::CursorMoved { position, .. } => {
                    if let (true, Some(prev)) = (state.dragging, state.cursor) {
                        let (w, h) = (state.size.width as i32, state.size.height as i32);
                        state.view.pan_by_pixels(position.x - prev.x, position.y - prev.y, w, h, &opts.render.insets);
                        window.request_redraw();
                    }
                    state.cursor = Some(position);
                }
                WindowEvent::MouseWheel { delta, .. } => {
                    let scroll = match delta {
                        MouseScrollDelta::LineDelta(_, y) => y as f64 * 0.1,
                        MouseScrollDelta::PixelDelta(p) => p.y / 240.0,
                    };
                    let (cx, cy) = state.cursor.map(|p| (p.x, p.y)).unwrap_or((
                        state.size.width as f64 * 0.5,
                        state.size.height as f64 * 0.5,
                    ));
                    let (w, h) = (state.size.width as i32, state.size.height as i32);
                    state.view.zoom_at_pixel(scroll, cx, cy, w, h, &opts.render.insets);
                    window.request_redraw();
                }
                _ => {}
            },
            Event::RedrawRequested(_) => {
                if let Err(e) = redraw(&mut surface, &mut chart, &state, &opts.render) {
                    warn!("viewer redraw failed: {e}");
                    failure = Some(e);
                    *control_flow = ControlFlow::Exit;
                }
            }
            _ => {}
        }
    });

    debug!("viewer closed");
    match failure {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

fn surface_err(e: softbuffer::SoftBufferError) -> ViewerError {
    ViewerError::Surface(e.to_string())
}

fn redraw(
    surface: &mut softbuffer::Surface,
    chart: &mut Chart,
    state: &Interaction,
    base: &RenderOptions,
) -> Result<(), ViewerError> {
    let (Some(w), Some(h)) = (NonZeroU32::new(state.size.width), NonZeroU32::new(state.size.height)) else {
        // minimised
        return Ok(());
    };
    surface.resize(w, h).map_err(surface_err)?;

    let mut opts = base.clone();
    opts.width = w.get() as i32;
    opts.height = h.get() as i32;
    state.view.apply_to_chart(chart);

    let (rgba, _, _, _) = chart.render_to_rgba8(&opts).map_err(|e| ViewerError::Render(format!("{e:#}")))?;
    let mut frame = surface.buffer_mut().map_err(surface_err)?;
    pixels::pack_rgba_into(&rgba, &mut frame);
    frame.present().map_err(surface_err)?;
    Ok(())
}
