/// Degrees of rotation per pixel of mouse drag.
const ROTATION_SENSITIVITY: f64 = 0.5;

/// Clip-plane travel per arrow-key press.
const SLICE_STEP: f64 = 0.1;

/// Input events as the viewer understands them, already decoupled from the
/// windowing backend.
#[derive(Clone, Debug)]
pub enum InteractionEvent {
    /// Window close request (or the quit key).
    Quit,
    /// Primary mouse button pressed at screen coordinates.
    MouseButtonDown { x: f64, y: f64 },
    /// Primary mouse button released.
    MouseButtonUp,
    /// Cursor moved to screen coordinates.
    MouseMove { x: f64, y: f64 },
    /// Up arrow: move the clip plane along +X.
    SliceUp,
    /// Down arrow: move the clip plane along -X.
    SliceDown,
}

/// All mutable viewer state: cumulative drag rotation, the drag anchor, and
/// the clip-plane offset. Mutated only through `handle_event`, which makes
/// the loop logic testable without a window.
pub struct ViewerState {
    rotation_x: f64,
    rotation_y: f64,
    mouse_down: bool,
    last_mouse_x: f64,
    last_mouse_y: f64,
    slice_offset: f64,
    running: bool,
}

impl ViewerState {

    pub fn new() -> Self {
        Self {
            rotation_x: 0.0,
            rotation_y: 0.0,
            mouse_down: false,
            last_mouse_x: 0.0,
            last_mouse_y: 0.0,
            slice_offset: 0.0,
            running: true,
        }
    }

    pub fn handle_event(&mut self, event: InteractionEvent) {
        match event {
            InteractionEvent::Quit => {
                self.running = false;
            },
            InteractionEvent::MouseButtonDown { x, y } => {
                self.mouse_down = true;
                self.last_mouse_x = x;
                self.last_mouse_y = y;
            },
            InteractionEvent::MouseButtonUp => {
                self.mouse_down = false;
            },
            InteractionEvent::MouseMove { x, y } => {
                if self.mouse_down {
                    let dx = x - self.last_mouse_x;
                    let dy = y - self.last_mouse_y;
                    self.rotation_x += dy * ROTATION_SENSITIVITY;
                    self.rotation_y += dx * ROTATION_SENSITIVITY;
                    self.last_mouse_x = x;
                    self.last_mouse_y = y;
                }
            },
            InteractionEvent::SliceUp => {
                self.slice_offset += SLICE_STEP;
            },
            InteractionEvent::SliceDown => {
                self.slice_offset -= SLICE_STEP;
            },
        }
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn mouse_down(&self) -> bool {
        self.mouse_down
    }

    pub fn rotation_x(&self) -> f64 {
        self.rotation_x
    }

    pub fn rotation_y(&self) -> f64 {
        self.rotation_y
    }

    pub fn slice_offset(&self) -> f64 {
        self.slice_offset
    }
}

impl Default for ViewerState {

    fn default() -> Self {
        Self::new()
    }
}
