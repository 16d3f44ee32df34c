use crate::model::Recipe;

/// Progress through the recipe being cooked.
///
/// Lives as long as the guide does; nothing is persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    current_recipe: Option<Recipe>,
    current_step_index: usize,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_recipe(&self) -> Option<&Recipe> {
        self.current_recipe.as_ref()
    }

    pub fn current_step_index(&self) -> usize {
        self.current_step_index
    }

    /// Replace the loaded recipe and rewind to the first step.
    pub fn load(&mut self, recipe: Recipe) {
        self.current_recipe = Some(recipe);
        self.current_step_index = 0;
    }

    pub fn rewind(&mut self) {
        self.current_step_index = 0;
    }

    /// Move one step forward. Stops at `steps.len()`, which means "finished".
    pub fn advance(&mut self) {
        let total = self
            .current_recipe
            .as_ref()
            .map(Recipe::step_count)
            .unwrap_or(0);
        if self.current_step_index < total {
            self.current_step_index += 1;
        }
    }

    /// The step under the cursor, or `None` once every step is done.
    pub fn current_step(&self) -> Option<&str> {
        self.current_recipe
            .as_ref()?
            .steps
            .get(self.current_step_index)
            .map(String::as_str)
    }
}
