pub mod anim;
pub mod application;
pub mod carousel;
pub mod component;
pub mod error;
pub mod nav;
pub mod router;
pub mod scroll;
pub mod state;
pub mod task;
pub mod telemetry;

pub use error::{Error, Result};

// Re-export common types for convenience
pub use anim::{Easing, Transition};
pub use application::{AppContext, Application, Context, EventContext};
pub use carousel::Carousel;
pub use component::{Action, Component, Event};
pub use nav::ScrollOrchestrator;
pub use router::{NavTarget, Router};
pub use scroll::{depth_scale, fade_opacity, region_progress, Viewport};
pub use state::{Entity, WeakEntity};
pub use task::{TaskHandle, TaskTracker};
