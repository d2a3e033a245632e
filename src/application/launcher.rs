use std::env;
use std::process;

use crate::errors::*;
use crate::scene::{Scene, Variant};
use crate::video::FrameRenderer;
use crate::window::Window;

use super::settings::Settings;

/// Entry point of the binaries: loads settings from the json file named by the
/// first argument (if any), runs `variant`, and exits with a non-zero status if
/// anything failed.
pub fn launch(variant: Variant) {
    let _ = env_logger::try_init();

    let settings = match env::args().nth(1) {
        Some(path) => Settings::load(path),
        None => Ok(Settings::default()),
    };

    let result = settings.and_then(|settings| run(&variant.scene(), &settings));
    let code = report(&result);
    if code != 0 {
        process::exit(code);
    }
}

/// Prints the error of a finished run, if any, and returns the exit status of
/// the process.
pub fn report(result: &Result<u64>) -> i32 {
    match *result {
        Ok(_) => 0,
        Err(ref err) => {
            error!("{}", err);
            println!("{}", err);
            1
        }
    }
}

/// Opens a window and renders `scene` into it until the window is closed.
pub fn run(scene: &Scene, settings: &Settings) -> Result<u64> {
    let window = Window::new(settings.window.clone())?;
    let renderer = FrameRenderer::new(&window, settings.exit_key)?;
    execute(window, renderer, scene)
}

/// Initializes `renderer` with `scene`, and loops until `window` is asked to
/// close. The renderer is always shut down before the window is dropped.
/// Returns the number of rendered frames.
pub fn execute(mut window: Window, mut renderer: FrameRenderer, scene: &Scene) -> Result<u64> {
    let result = main_loop(&mut window, &mut renderer, scene);
    let released = renderer.shutdown();
    drop(renderer);
    drop(window);

    let frames = result?;
    released?;

    info!("Rendered {} frames of scene {}.", frames, scene.name);
    Ok(frames)
}

fn main_loop(window: &mut Window, renderer: &mut FrameRenderer, scene: &Scene) -> Result<u64> {
    let dimensions = window.dimensions();
    renderer.initialize(scene, dimensions)?;

    let mut frames = 0;
    while !window.should_close() {
        renderer.render_frame(window)?;
        frames += 1;
    }

    Ok(frames)
}
