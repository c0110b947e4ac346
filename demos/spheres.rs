use rand::Rng;
use spherast::{Rgb8, Scene, Sphere};

use glam::Vec3;

#[cfg(feature = "terminal")]
use spherast::targets::{poll_done, TerminalGuard, TerminalPresenter};

#[cfg(feature = "terminal")]
use std::{io, time::Duration};

fn main() {
    env_logger::init();
    let ppm_path = parse_cli();

    let mut scene = match Scene::new(0.0, 0.0, 600.0, 80.0, 70.0, Rgb8::new(0, 50, 180)) {
        Ok(scene) => scene,
        Err(err) => {
            eprintln!("failed to build scene: {err}");
            std::process::exit(1);
        }
    };

    let mut rng = rand::rng();
    let count = rng.random_range(3000..5000);
    for _ in 0..count {
        scene.add_sphere(Sphere::new(
            Vec3::new(
                rng.random_range(-600.0..600.0),
                rng.random_range(-400.0..400.0),
                rng.random_range(800.0..1600.0),
            ),
            8.0,
            Rgb8::new(
                rng.random_range(150..200),
                rng.random_range(150..200),
                rng.random_range(150..200),
            ),
        ));
    }

    if let Some(path) = ppm_path.as_deref() {
        save(&scene, path);
    }

    #[cfg(feature = "terminal")]
    present(&scene);

    // No display surface compiled in; fall back to the file serializer.
    #[cfg(not(feature = "terminal"))]
    if ppm_path.is_none() {
        save(&scene, "spheres.ppm");
    }
}

fn save(scene: &Scene, path: &str) {
    match spherast::io::save_ppm(path, scene.width(), scene.height(), scene.color_buffer()) {
        Ok(()) => println!("saved frame to {path}"),
        Err(err) => eprintln!("failed to save {path}: {err}"),
    }
}

#[cfg(feature = "terminal")]
fn present(scene: &Scene) {
    let _guard = match TerminalGuard::new() {
        Ok(guard) => guard,
        Err(err) => {
            eprintln!("failed to take over the terminal: {err}");
            return;
        }
    };
    let mut presenter = match TerminalPresenter::new() {
        Ok(presenter) => presenter,
        Err(err) => {
            eprintln!("failed to query terminal size: {err}");
            return;
        }
    };

    let mut out = io::stdout();
    loop {
        if presenter
            .present(&mut out, scene.color_buffer(), scene.width(), scene.height())
            .is_err()
        {
            break;
        }
        match poll_done(Duration::from_millis(16)) {
            Ok(true) | Err(_) => break,
            Ok(false) => {}
        }
    }
}

fn parse_cli() -> Option<String> {
    let args: Vec<String> = std::env::args().collect();
    let mut i = 1usize;
    let mut ppm = None;
    while i < args.len() {
        let a = args[i].as_str();
        if let Some(rest) = a.strip_prefix("--ppm=") {
            ppm = Some(rest.to_string());
        } else if a == "--ppm" && i + 1 < args.len() {
            ppm = Some(args[i + 1].clone());
            i += 1;
        }
        i += 1;
    }
    ppm
}
