// Shared element ids, endpoints and defaults for the previewer.

// Layout
pub const STATUS_ID: &str = "status";
pub const GAME_SCREEN_ID: &str = "game-screen";
pub const PHONE_CONTAINER_ID: &str = "phone-container";

// Selection lists
pub const SPINE_FILE_SELECT_ID: &str = "spine-file-select";
pub const ANIMATION_SELECT_ID: &str = "animation-select";
pub const BG_IMAGE_SELECT_ID: &str = "bg-image-select";

// Transform fields
pub const X_POS_ID: &str = "x-pos";
pub const Y_POS_ID: &str = "y-pos";
pub const SCALE_ID: &str = "scale";
pub const ROTATION_ID: &str = "rotation";

// Action triggers
pub const LOAD_SPINE_ID: &str = "load-spine";
pub const APPLY_CHANGES_ID: &str = "apply-changes";
pub const TOGGLE_ORIENTATION_ID: &str = "toggle-orientation";

// Catalog endpoints, joined onto the configured origin
pub const SPINE_FILES_PATH: &str = "/list-spine-files";
pub const BG_IMAGES_PATH: &str = "/list-bg-images";

// Runtime dependencies, loaded in this order
pub const DEFAULT_PIXI_URL: &str = "https://cdnjs.cloudflare.com/ajax/libs/pixi.js/5.3.7/pixi.min.js";
pub const DEFAULT_SPINE_URL: &str = "https://cdn.jsdelivr.net/npm/pixi-spine@2.1.11/dist/pixi-spine.js";

// Renderer
pub const BACKGROUND_COLOR: u32 = 0x1099bb;

// Container rotation per orientation (degrees)
pub const PORTRAIT_ROTATION_DEG: f32 = 0.0;
pub const LANDSCAPE_ROTATION_DEG: f32 = -90.0;

// Placeholder entry of the background list
pub const BG_PLACEHOLDER_LABEL: &str = "select a background";

// Track index used for every animation played through the previewer
pub const ANIMATION_TRACK: u32 = 0;
