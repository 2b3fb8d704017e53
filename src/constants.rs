/// DOM hooks the page markup provides.
///
/// Every lookup is optional at runtime: a missing element disables the
/// feature that would drive it instead of failing page start-up.
// Page detection: which canvas is present decides the controller
pub const DESK_CANVAS_ID: &str = "desk-canvas";
pub const BIKE_CANVAS_ID: &str = "uv-bike-canvas";

// Desk page
pub const LOADING_INDICATOR_ID: &str = "loading-indicator";
pub const STAGE_CAPTION_ID: &str = "stage-caption";
pub const SECTION_SELECTOR: &str = ".story-section";
pub const NAV_LINK_SELECTOR: &str = ".section-nav a";
pub const HEADING_SELECTOR: &str = ".type-line";
pub const CONTACT_DROPDOWN_ID: &str = "contact-dropdown";
pub const CONTACT_TOGGLE_ID: &str = "contact-action-toggle";
pub const CONTACT_MENU_LINK_SELECTOR: &str = ".contact-action-menu a";
pub const PROJECT_CARD_SELECTOR: &str = ".project-card-clickable[data-href]";

// Bike page
pub const ROTATION_LABEL_ID: &str = "rotation-label";
pub const HOTSPOTS_LAYER_ID: &str = "hotspots-layer";
pub const FEATURE_SHEET_ID: &str = "feature-sheet";
pub const FEATURE_SHEET_CLOSE_ID: &str = "feature-sheet-close";
pub const FEATURE_SHEET_TITLE_ID: &str = "feature-sheet-title";
pub const FEATURE_SHEET_DESCRIPTION_ID: &str = "feature-sheet-description";
pub const FEATURE_SHEET_POINTS_ID: &str = "feature-sheet-points";

// State classes toggled on page elements
pub const CLASS_ACTIVE: &str = "is-active";
pub const CLASS_CARD_VISIBLE: &str = "is-card-visible";
pub const CLASS_TYPING: &str = "is-typing";
pub const CLASS_HOTSPOT: &str = "hotspot-tag";
pub const CLASS_HOTSPOT_LEFT: &str = "is-left";
pub const CLASS_OPEN: &str = "is-open";

// Loading indicator colors
pub const STATUS_OK_COLOR: &str = "#8fffd6";
pub const STATUS_ERROR_COLOR: &str = "#ffd9d9";

pub const BIKE_LOAD_FAILED_TEXT: &str = "3D model failed to load. Please verify asset path.";

// Renderer pixel ratio cap (backing store = css size * min(dpr, cap))
pub const MAX_PIXEL_RATIO: f64 = 2.0;
