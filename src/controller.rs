use log::debug;

use crate::client::RecipeApi;
use crate::model::CookOutcome;
use crate::session::Session;
use crate::view::View;
use crate::GuideError;

pub const ENTER_RECIPE_NAME: &str = "Enter a recipe name!";
pub const SEARCH_FIRST: &str = "Please search for a recipe first!";
pub const ASK_SOMETHING: &str = "Ask something about cooking!";

/// Turns user actions into service calls and views.
///
/// The controller owns no state of its own: every handler that reads or
/// changes progress takes the `Session` explicitly.
pub struct ViewController<A> {
    api: A,
}

impl<A: RecipeApi> ViewController<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub async fn list_recipes(&self) -> Result<View, GuideError> {
        let recipes = self.api.list_recipes().await?;
        debug!("Listed {} recipes", recipes.len());
        Ok(View::RecipeList { recipes })
    }

    /// Look a recipe up by name and load it into the session.
    ///
    /// A rejected lookup leaves the session exactly as it was.
    pub async fn search_recipe(
        &self,
        session: &mut Session,
        name: &str,
    ) -> Result<View, GuideError> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(View::alert(ENTER_RECIPE_NAME));
        }

        match self.api.cook(name).await? {
            CookOutcome::Rejected(message) => {
                debug!("Recipe '{}' rejected: {}", name, message);
                Ok(View::Message { text: message })
            }
            CookOutcome::Found(recipe) => {
                let view = View::RecipeOverview {
                    name: recipe.display_name().to_string(),
                    description: recipe.description.clone(),
                    ingredients: recipe.ingredients.clone(),
                    total_steps: recipe.step_count(),
                };
                debug!(
                    "Loaded recipe '{}' with {} steps",
                    recipe.name,
                    recipe.step_count()
                );
                session.load(recipe);
                Ok(view)
            }
        }
    }

    pub fn start_cooking(&self, session: &mut Session) -> View {
        if session.current_recipe().is_none() {
            return View::alert(SEARCH_FIRST);
        }
        session.rewind();
        self.show_current_step(session)
    }

    pub fn show_current_step(&self, session: &Session) -> View {
        let Some(recipe) = session.current_recipe() else {
            return View::alert(SEARCH_FIRST);
        };

        match session.current_step() {
            Some(text) => View::Step {
                number: session.current_step_index() + 1,
                total: recipe.step_count(),
                text: text.to_string(),
            },
            None => View::Complete {
                recipe_name: recipe.display_name().to_string(),
            },
        }
    }

    pub fn next_step(&self, session: &mut Session) -> View {
        session.advance();
        debug!("Advanced to step index {}", session.current_step_index());
        self.show_current_step(session)
    }

    /// Forward a question to the assistant.
    ///
    /// A blank `recipe_context` is sent as no context at all.
    pub async fn ask_ai(
        &self,
        question: &str,
        recipe_context: Option<&str>,
    ) -> Result<View, GuideError> {
        let question = question.trim();
        if question.is_empty() {
            return Ok(View::alert(ASK_SOMETHING));
        }

        let context = recipe_context.map(str::trim).filter(|c| !c.is_empty());
        let answer = self.api.ask(question, context).await?;
        Ok(View::Answer { text: answer })
    }

    pub fn debug_info(&self) -> View {
        View::alert(format!(
            "Debug info: API running and frontend connected! (service: {})",
            self.api.service_name()
        ))
    }
}
