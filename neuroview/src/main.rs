#[macro_use]
extern crate log;
extern crate custom_error;

pub mod geometry;
pub mod io;
pub mod materials;
pub mod objects;
pub mod render;
pub mod scene;
pub mod scenes;
pub mod ui;

use std::collections::HashMap;
use std::env;
use std::error::Error;
use std::process;

use env_logger::Env;

use neuroview_core::utils::print_intro;

use crate::io::obj::obj_file_reader::ObjFileLoader;
use crate::scenes::brain_tumor::{BrainTumorSceneProvider, BRAIN_PATH_OPTION, TUMOR_PATH_OPTION};
use crate::scenes::provider::SceneProvider;
use crate::ui::window::ViewerWindow;

const DEFAULT_LOGGING_LEVEL: &str = "info";

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_LOGGING_LEVEL)).init();
    print_intro();

    let args: Vec<String> = env::args().skip(1).collect();
    if let Err(err) = run(&args) {
        error!("{}", err);
        process::exit(1);
    }

    info!("done");
}

fn run(args: &[String]) -> Result<(), Box<dyn Error>> {
    let mut options = HashMap::new();
    if let Some(path) = args.get(0) {
        options.insert(BRAIN_PATH_OPTION.to_string(), path.clone());
    }
    if let Some(path) = args.get(1) {
        options.insert(TUMOR_PATH_OPTION.to_string(), path.clone());
    }

    let scene_provider = BrainTumorSceneProvider::new(Box::new(ObjFileLoader::new()));
    let scene = scene_provider.scene(&options)?;

    info!("starting viewer (drag to rotate, up/down arrows to slice, escape to quit)");
    let mut window = ViewerWindow::new("neuroview")?;
    window.run(&scene)?;

    Ok(())
}
