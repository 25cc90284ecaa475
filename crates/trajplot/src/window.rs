// File: crates/trajplot/src/window.rs
// Summary: Interactive viewer: blits CPU-rendered charts into a winit window via softbuffer.
// Any key shows the next chart, Escape or closing the window quits, wheel zooms, left drag pans.

use trajplot_core::{ReportChart, Theme};

#[cfg(not(feature = "window"))]
pub fn show(_charts: Vec<ReportChart>, _theme: Theme) -> trajplot_core::Result<()> {
    Err(trajplot_core::PlotError::DisplayUnavailable)
}

#[cfg(feature = "window")]
pub fn show(charts: Vec<ReportChart>, theme: Theme) -> anyhow::Result<()> {
    use anyhow::Context;
    use std::num::NonZeroU32;
    use trajplot_core::{RenderOptions, ViewState};
    use winit::event::{ElementState, Event, KeyboardInput, MouseButton, MouseScrollDelta, VirtualKeyCode, WindowEvent};
    use winit::event_loop::{ControlFlow, EventLoop};
    use winit::window::WindowBuilder;

    if charts.is_empty() {
        log::warn!("No charts to display");
        return Ok(());
    }

    let first = &charts[0];
    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(first.chart.title.clone())
        .with_inner_size(winit::dpi::PhysicalSize::new(first.width as u32, first.height as u32))
        .build(&event_loop)
        .context("build window")?;

    let context = unsafe { softbuffer::Context::new(&window) }
        .map_err(|e| anyhow::anyhow!("softbuffer context: {e}"))?;
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }
        .map_err(|e| anyhow::anyhow!("softbuffer surface: {e}"))?;

    // State: which chart is shown and its current view
    let mut idx = 0usize;
    let mut view = ViewState::of_chart(&charts[idx].chart);
    let mut size = window.inner_size();
    let mut dragging = false;
    let mut cursor: Option<(f64, f64)> = None;
    let insets = RenderOptions::default().insets;

    log::info!("Showing {} chart(s); press any key for the next one", charts.len());

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => *control_flow = ControlFlow::Exit,
                WindowEvent::Resized(new_size) => {
                    size = new_size;
                    window.request_redraw();
                }
                WindowEvent::CursorMoved { position, .. } => {
                    if let (true, Some((px, py))) = (dragging, cursor) {
                        view.pan_by_pixels(
                            position.x - px,
                            position.y - py,
                            size.width as i32,
                            size.height as i32,
                            &insets,
                        );
                        window.request_redraw();
                    }
                    cursor = Some((position.x, position.y));
                }
                WindowEvent::MouseInput { state, button: MouseButton::Left, .. } => {
                    dragging = state == ElementState::Pressed;
                }
                WindowEvent::MouseWheel { delta, .. } => {
                    if let Some((cx, cy)) = cursor {
                        let scroll = match delta {
                            MouseScrollDelta::LineDelta(_, y) => y as f64 * 0.1,
                            MouseScrollDelta::PixelDelta(p) => p.y / 240.0,
                        };
                        view.zoom_at_pixel(scroll, cx, cy, size.width as i32, size.height as i32, &insets);
                        window.request_redraw();
                    }
                }
                WindowEvent::KeyboardInput {
                    input: KeyboardInput { state: ElementState::Pressed, virtual_keycode, .. },
                    ..
                } => {
                    if virtual_keycode == Some(VirtualKeyCode::Escape) {
                        *control_flow = ControlFlow::Exit;
                        return;
                    }
                    idx = (idx + 1) % charts.len();
                    view = ViewState::of_chart(&charts[idx].chart);
                    window.set_title(&charts[idx].chart.title);
                    window.request_redraw();
                }
                _ => {}
            },
            Event::RedrawRequested(_) => {
                let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
                    return;
                };
                if let Err(e) = surface.resize(w, h) {
                    log::error!("resize error: {e}");
                    return;
                }

                let mut chart = charts[idx].chart.clone();
                view.apply_to_chart(&mut chart);
                let opts = RenderOptions::sized(size.width as i32, size.height as i32, theme);
                let rgba = match chart.render_to_rgba8(&opts) {
                    Ok((px, _, _, _)) => px,
                    Err(e) => {
                        log::error!("render error: {e}");
                        return;
                    }
                };

                let mut frame = match surface.buffer_mut() {
                    Ok(f) => f,
                    Err(e) => {
                        log::error!("frame error: {e}");
                        return;
                    }
                };
                // softbuffer pixels are 0RGB
                for (dst, px) in frame.iter_mut().zip(rgba.chunks_exact(4)) {
                    *dst = (px[0] as u32) << 16 | (px[1] as u32) << 8 | px[2] as u32;
                }
                if let Err(e) = frame.present() {
                    log::error!("present error: {e}");
                }
            }
            _ => {}
        }
    })
}
