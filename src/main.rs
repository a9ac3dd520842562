// src/main.rs
use nannou::prelude::*;
use std::time::Instant;

use openboxfiller::{
    animation::ContinuousRedraw, config::Config, draw::BoxStyle, render::Renderer,
};

struct Model {
    // Core component:
    renderer: Renderer,

    // Rendering components:
    texture: wgpu::Texture,
    draw: nannou::Draw,
    draw_renderer: nannou::draw::Renderer,
    texture_reshaper: wgpu::TextureReshaper,

    // Frame timing
    last_update: Instant,
}

fn main() {
    env_logger::init();
    nannou::app(model).update(update).run();
}

fn model(app: &App) -> Model {
    // Load config
    let config = Config::load().expect("Failed to load config file");
    let style =
        BoxStyle::from_config(&config.style, &config.animation).expect("Invalid style config");

    // Create window
    let window_id = app
        .new_window()
        .title("openboxfiller 0.1.0")
        .size(config.window.width, config.window.height)
        .msaa_samples(1)
        .view(view)
        .mouse_pressed(mouse_pressed)
        .build()
        .unwrap();
    let window = app.window(window_id).unwrap();

    // Set up render texture
    let device = window.device();
    let draw = nannou::Draw::new();
    let texture = wgpu::TextureBuilder::new()
        .size([
            config.rendering.texture_width,
            config.rendering.texture_height,
        ])
        // Our texture will be used as the RENDER_ATTACHMENT for our `Draw` render pass.
        // It will also be SAMPLED by the `TextureReshaper`.
        .usage(wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING)
        .sample_count(config.rendering.texture_samples)
        .format(wgpu::TextureFormat::Rgba16Float)
        .build(device);

    // Set up rendering pipeline
    let draw_renderer = nannou::draw::RendererBuilder::new()
        .build_from_texture_descriptor(device, texture.descriptor());
    let sample_count = window.msaa_samples();

    // Create the texture reshaper.
    let texture_view = texture.view().build();
    let texture_sample_count = texture.sample_count();
    let texture_sample_type = texture.sample_type();
    let dst_format = Frame::TEXTURE_FORMAT;
    let texture_reshaper = wgpu::TextureReshaper::new(
        device,
        &texture_view,
        texture_sample_count,
        texture_sample_type,
        sample_count,
        dst_format,
    );

    log::info!(
        "window {}x{}, {} shapes in the chain",
        config.window.width,
        config.window.height,
        style.palette_len()
    );

    Model {
        renderer: Renderer::new(
            style,
            config.animation.frame_duration(),
            Box::new(ContinuousRedraw),
        ),
        texture,
        draw,
        draw_renderer,
        texture_reshaper,
        last_update: Instant::now(),
    }
}

fn mouse_pressed(_app: &App, model: &mut Model, _button: MouseButton) {
    model.renderer.handle_tap();
}

fn update(app: &App, model: &mut Model, _update: Update) {
    let now = Instant::now();
    let dt = (now - model.last_update).as_secs_f32();
    model.last_update = now;

    // Draw before stepping state, so the frame on screen always shows the
    // pre-step scale
    model.draw.reset();
    let [texture_w, texture_h] = model.texture.size();
    model
        .renderer
        .draw(&model.draw, texture_w as f32, texture_h as f32);
    model.renderer.step(dt);

    render_to_texture(app, model);
}

// Draw the state of Model into the given Frame
fn view(_app: &App, model: &Model, frame: Frame) {
    //resize texture to screen
    let mut encoder = frame.command_encoder();

    model
        .texture_reshaper
        .encode_render_pass(frame.texture_view(), &mut encoder);
}

fn render_to_texture(app: &App, model: &mut Model) {
    let window = app.main_window();
    let device = window.device();
    let ce_desc = wgpu::CommandEncoderDescriptor {
        label: Some("Texture renderer"),
    };
    let mut encoder = device.create_command_encoder(&ce_desc);
    let texture_view = model.texture.view().build();

    model.draw_renderer.encode_render_pass(
        device,
        &mut encoder,
        &model.draw,
        2.0,
        model.texture.size(),
        &texture_view,
        None,
    );

    window.queue().submit(Some(encoder.finish()));
    device.poll(wgpu::Maintain::Wait);
}
