pub mod contact;
pub mod content;
pub mod diagnostics;
pub mod health;
pub mod seed;

pub use contact::post_contact;
pub use content::{get_gallery, get_menu, get_testimonials};
pub use diagnostics::{get_schema, test_database};
pub use health::{health_check, metrics_endpoint, read_root};
pub use seed::seed_content;
