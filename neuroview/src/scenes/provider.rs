use std::collections::HashMap;

use crate::io::traits::NeuroviewIOError;
use crate::scene::scene::Scene;

pub trait SceneProvider {

    fn scene(&self, options: &HashMap<String, String>) -> Result<Scene, NeuroviewIOError>;
}
