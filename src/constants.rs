/// Names and tuning values shared by the cursor-trail front-end.
///
/// The CSS custom properties on `:root` are the configuration source; these
/// constants name them and pin the control ranges the panel exposes.
// Recognized CSS custom properties
pub const CSS_W_FRAME: &str = "--w-frame";
pub const CSS_H_FRAME: &str = "--h-frame";
pub const CSS_RADIUS: &str = "--radius";
pub const CSS_BLUR_START: &str = "--blur-start";
pub const CSS_BLUR_END: &str = "--blur-end";
pub const CSS_SCALE_END: &str = "--scale-end";
pub const CSS_IMG_COLOR: &str = "--img-color";
pub const CSS_FRAME_COLOR: &str = "--frame-color";
pub const CSS_IMG_BLEND_MODE: &str = "--img-blend-mode";
pub const CSS_FRAME_BLEND_MODE: &str = "--frame-blend-mode";

// Color entries are not read from computed style
pub const DEFAULT_IMG_COLOR: &str = "rgba(255,255,255,0.5)";
pub const DEFAULT_FRAME_COLOR: &str = "rgba(255, 255, 255, 0.3)";

// Slider ranges (min, max) in CSS pixels unless noted
pub const FRAME_SIZE_RANGE: (f64, f64) = (5.0, 200.0);
pub const RADIUS_RANGE: (f64, f64) = (0.0, 50.0);
pub const BLUR_RANGE: (f64, f64) = (0.0, 20.0);
pub const SCALE_END_RANGE: (f64, f64) = (0.0, 1.0); // unitless
pub const SCALE_END_STEP: f64 = 0.1;

// Transient trail element
pub const TRAIL_TAG: &str = "span";
pub const TRAIL_CLASS: &str = "circle";

// DOM event names
pub const EVENT_MOUSEMOVE: &str = "mousemove";
pub const EVENT_ANIMATION_END: &str = "animationend";
pub const EVENT_DOM_CONTENT_LOADED: &str = "DOMContentLoaded";

// Panel labels
pub const FOLDER_CURSOR: &str = "Cursor";
pub const FOLDER_IMAGE: &str = "Image";
pub const LINKED_PROP: &str = "linked";
