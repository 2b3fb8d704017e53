pub mod bike;
pub mod cancel;
pub mod catalog;
pub mod constants;
pub mod desk;
pub mod error;
pub mod layout;
pub mod loader;
pub mod orbit;
pub mod particles;
pub mod pointer;
pub mod scheduler;
pub mod stage;
pub mod tween;
pub mod typewriter;
pub mod viewport;

pub use bike::{BikeEffect, BikeFit, BikeSession};
pub use cancel::{Generation, Ticket};
pub use desk::{DeskEffect, DeskFit, DeskSession, TextSlot};
pub use error::{ShowcaseError, ShowcaseResult};
pub use layout::{Aabb, DeskAnchors, Hotspot, HotspotDef};
pub use loader::{load_with_fallback, LoadStatus, LoadedModel, ModelSink};
pub use orbit::{circular_distance, normalize_degrees, ModuleSelector, ModuleStop};
pub use particles::{FieldBounds, FieldParams, ParticleField};
pub use pointer::PointerState;
pub use stage::{StageActivation, StageSequencer};
pub use tween::{ease_in_out_cubic, CameraPose, TweenEngine, TweenStep};
pub use typewriter::Typewriter;
pub use viewport::{Camera, Viewport};
