pub mod navbar;
pub mod scene;
pub mod testimonials;

pub use navbar::Navbar;
pub use scene::SceneView;
pub use testimonials::TestimonialsSection;
