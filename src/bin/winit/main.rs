#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::float_cmp)]

use std::time::Instant;

use clap::Parser;
use log::{error, info};
use rusty_sketch::{
    app::{App, Flow},
    config::{Config, Size},
    event::{InputEvent, InputTranslator},
    pixmap::Pixmap,
    renderer::Renderer,
    Error, Result,
};
use wgpu::{DeviceDescriptor, Features, Limits, PowerPreference, RequestAdapterOptions};
use winit::{
    dpi::PhysicalSize,
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::{Window, WindowBuilder},
};
use winit_input_helper::WinitInputHelper;

fn main() {
    env_logger::init();
    let config = Config::parse();
    if let Err(err) = run(&config) {
        error!("{err}");
        std::process::exit(1);
    }
}

fn run(config: &Config) -> Result<()> {
    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(&config.title)
        .with_inner_size(PhysicalSize::new(
            config.window_size.width,
            config.window_size.height,
        ))
        .with_resizable(false)
        .build(&event_loop)?;
    let size = window.inner_size();
    let window_size = Size::new(size.width, size.height);

    let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
        backends: wgpu::Backends::all(),
        dx12_shader_compiler: wgpu::Dx12Compiler::default(),
    });
    let surface = unsafe { instance.create_surface(&window) }?;
    let adapter = futures::executor::block_on(instance.request_adapter(&RequestAdapterOptions {
        power_preference: PowerPreference::default(),
        compatible_surface: Some(&surface),
        force_fallback_adapter: false,
    }))
    .ok_or(Error::NoAdapter)?;
    info!("using adapter {:?}", adapter.get_info().name);

    let (device, queue) = futures::executor::block_on(adapter.request_device(
        &DeviceDescriptor {
            label: None,
            features: Features::empty(),
            limits: Limits::default(),
        },
        None,
    ))?;
    let renderer = Renderer::new(window_size, surface, device, adapter, queue)?;
    let frame = Pixmap::new(window_size.width, window_size.height, config.bg_color);
    let app = App::new(config);

    run_loop(event_loop, window, instance, renderer, app, frame)
}

fn run_loop(
    event_loop: EventLoop<()>,
    window: Window,
    instance: wgpu::Instance,
    mut renderer: Renderer,
    mut app: App,
    mut frame: Pixmap,
) -> ! {
    let mut input = WinitInputHelper::new();
    let mut translator = InputTranslator::new();
    let mut pending: Vec<InputEvent> = vec![];

    event_loop.run(move |event, _, control_flow| {
        let _ = (&instance, &window);

        if let Event::WindowEvent {
            event: ref window_event,
            ..
        } = event
        {
            if let WindowEvent::Resized(size) = window_event {
                renderer.resize_window(Size::new(size.width, size.height));
            } else if let Some(input_event) = translator.translate(window_event) {
                pending.push(input_event);
            }
        }
        if let Event::LoopDestroyed = event {
            info!("shutting down");
            return;
        }

        // True once every event queued for this iteration has been seen.
        if !input.update(&event) {
            return;
        }
        if input.quit() && !pending.contains(&InputEvent::Quit) {
            pending.push(InputEvent::Quit);
        }

        let now = Instant::now();
        if !app.is_due(now) {
            *control_flow = ControlFlow::WaitUntil(app.next_frame_at(now));
            return;
        }
        let events = std::mem::take(&mut pending);
        match step(&mut app, &mut renderer, &mut frame, &events, now) {
            Ok(Flow::Continue) => {
                *control_flow = ControlFlow::WaitUntil(app.next_frame_at(now));
            }
            Ok(Flow::Quit) => {
                info!("quit requested");
                *control_flow = ControlFlow::Exit;
            }
            Err(err) => {
                error!("{err}");
                *control_flow = ControlFlow::Exit;
            }
        }
    })
}

fn step(
    app: &mut App,
    renderer: &mut Renderer,
    frame: &mut Pixmap,
    events: &[InputEvent],
    now: Instant,
) -> Result<Flow> {
    let flow = app.run_frame(events, now, frame);
    if flow == Flow::Continue {
        renderer.present(frame)?;
    }
    Ok(flow)
}
