use glam::Vec2;
use glow::HasContext;

use crate::{
    abs::*,
    camera::OrbitCamera,
    config::Settings,
    input::{KeyboardState, MouseState},
    render::scene::Scene,
};

mod abs;
mod camera;
mod config;
mod input;
mod render;

#[macro_export]
macro_rules! shader_program {
    ($name:ident, $gl:expr, $path_prefix:literal) => {{
        let vert = $crate::abs::Shader::new(
            &$gl,
            glow::VERTEX_SHADER,
            include_str!(concat!(
                $path_prefix,
                "/render/shaders/",
                stringify!($name),
                "/vert.glsl"
            )),
        )
        .unwrap();
        let frag = $crate::abs::Shader::new(
            &$gl,
            glow::FRAGMENT_SHADER,
            include_str!(concat!(
                $path_prefix,
                "/render/shaders/",
                stringify!($name),
                "/frag.glsl"
            )),
        )
        .unwrap();
        ShaderProgram::new(&$gl, &[&vert, &frag]).unwrap()
    }};
}

fn setup_logger() -> Result<(), fern::InitError> {
    let level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(log::LevelFilter::Info);
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%H:%M:%S"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stdout())
        .apply()?;
    Ok(())
}

fn main() {
    setup_logger().unwrap();

    let settings = Settings::load();
    let mut app = App::new(
        "Orbitscene3D",
        settings.window_width,
        settings.window_height,
        settings.fullscreen,
    )
    .unwrap();

    unsafe {
        app.gl.enable(glow::DEPTH_TEST);
        // No face culling: the cylinder has no caps and the ground plane is a
        // single quad, both are visible from either side.
    }

    let scene_shader = shader_program!(scene, app.gl, ".");
    let scene = Scene::new(&app.gl, &settings.assets_dir);
    let mut camera = OrbitCamera::new(settings.max_fly_speed);

    let mut keyboard = KeyboardState::default();
    let mut mouse = MouseState::default();

    let (mut width, mut height) = app.window.size();
    log::info!("Scene ready, window {}x{}", width, height);

    let mut last_frame_time = std::time::Instant::now();

    'running: loop {
        let now = std::time::Instant::now();
        let delta_time = now.duration_since(last_frame_time).as_secs_f32();
        last_frame_time = now;

        keyboard.begin_frame();
        mouse.begin_frame();

        for event in app.event_pump.poll_iter() {
            match event {
                sdl2::event::Event::Quit { .. } => break 'running,
                sdl2::event::Event::Window {
                    win_event: sdl2::event::WindowEvent::Resized(new_width, new_height),
                    ..
                } => {
                    width = new_width as u32;
                    height = new_height as u32;
                    unsafe {
                        app.gl.viewport(0, 0, new_width, new_height);
                    }
                }
                sdl2::event::Event::MouseMotion { xrel, yrel, .. } => {
                    mouse.delta += Vec2::new(xrel as f32, yrel as f32);
                }
                sdl2::event::Event::MouseWheel { x, y, .. } => {
                    mouse.scroll_delta += Vec2::new(x as f32, y as f32);
                }
                sdl2::event::Event::MouseButtonDown { mouse_btn, .. } => {
                    mouse.down.insert(mouse_btn);
                }
                sdl2::event::Event::MouseButtonUp { mouse_btn, .. } => {
                    mouse.down.remove(&mouse_btn);
                }
                sdl2::event::Event::KeyDown {
                    keycode: Some(keycode),
                    repeat: false,
                    ..
                } => {
                    keyboard.down.insert(keycode);
                    keyboard.pressed.insert(keycode);
                }
                sdl2::event::Event::KeyUp {
                    keycode: Some(keycode),
                    repeat: false,
                    ..
                } => {
                    keyboard.down.remove(&keycode);
                }
                _ => {}
            }
        }

        if keyboard.pressed.contains(&sdl2::keyboard::Keycode::Escape) {
            break 'running;
        }
        if keyboard.pressed.contains(&sdl2::keyboard::Keycode::P) {
            camera.toggle_projection();
            log::debug!("Projection switched to {:?}", camera.mode);
        }
        if keyboard.pressed.contains(&sdl2::keyboard::Keycode::F) {
            camera.reset();
        }
        if mouse.scroll_delta.y != 0.0 {
            camera.adjust_speed(mouse.scroll_delta.y);
            camera.zoom(mouse.scroll_delta.y);
        }

        // SDL reports y motion downward, the camera expects upward-positive.
        let drag = Vec2::new(mouse.delta.x, -mouse.delta.y) * settings.mouse_sensitivity;
        let alt_held = keyboard.down.contains(&sdl2::keyboard::Keycode::LAlt);
        if drag != Vec2::ZERO {
            if alt_held && mouse.down.contains(&sdl2::mouse::MouseButton::Left) {
                camera.orbit(drag);
            } else if alt_held && mouse.down.contains(&sdl2::mouse::MouseButton::Middle) {
                camera.pan(drag, delta_time);
            }
        }
        camera.fly(input::fly_input(&keyboard), delta_time);

        unsafe {
            app.gl.clear_color(0.05, 0.05, 0.08, 1.0);
            app.gl
                .clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
        }

        scene_shader.use_program();
        scene_shader.set_uniform("u_view", camera.view());
        scene_shader.set_uniform(
            "u_projection",
            camera.projection(width as f32 / height as f32),
        );
        scene_shader.set_uniform("u_light_pos", scene.light.position);
        scene_shader.set_uniform("u_light_color", scene.light.color);
        scene_shader.set_uniform("u_view_pos", camera.eye);
        scene_shader.set_uniform("u_texture", 0i32);
        scene.draw(&scene_shader);

        app.window.gl_swap_window();
    }
}
