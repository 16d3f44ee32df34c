pub mod builder;
pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod session;
pub mod view;

pub use builder::HttpRecipeApiBuilder;
pub use client::{HttpRecipeApi, RecipeApi};
pub use config::GuideConfig;
pub use controller::ViewController;
pub use error::GuideError;
pub use model::{CookOutcome, Recipe, RecipeSummary};
pub use session::Session;
pub use view::{Control, View};

