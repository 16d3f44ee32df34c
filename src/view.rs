//! Structured view data returned by the controller.
//!
//! Views never touch the network or the session. They are rendered either as
//! terminal text (`Display`) or as HTML fragments (`View::to_html`).

use std::fmt;

use html_escape::encode_text;

use crate::model::RecipeSummary;

/// An action the user can trigger from a view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    NextStep,
    ShowAllRecipes,
}

impl Control {
    pub fn label(&self) -> &'static str {
        match self {
            Control::NextStep => "Next Step",
            Control::ShowAllRecipes => "Show All Recipes",
        }
    }

    fn html_button(&self) -> &'static str {
        match self {
            Control::NextStep => r#"<button id="nextStepBtn" class="blue">Next Step</button>"#,
            Control::ShowAllRecipes => {
                r#"<button id="showAll" class="orange">Show All Recipes</button>"#
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    /// Every recipe the service knows about
    RecipeList { recipes: Vec<RecipeSummary> },
    /// Failure reported by the service
    Message { text: String },
    /// A freshly loaded recipe, before cooking starts
    RecipeOverview {
        name: String,
        description: String,
        ingredients: Vec<String>,
        total_steps: usize,
    },
    /// One cooking step; `number` is 1-based
    Step {
        number: usize,
        total: usize,
        text: String,
    },
    /// Every step is done
    Complete { recipe_name: String },
    /// Answer from the cooking assistant
    Answer { text: String },
    /// Blocking prompt; the requested action did not run
    Alert { text: String },
}

impl View {
    pub fn alert(text: impl Into<String>) -> Self {
        View::Alert { text: text.into() }
    }

    pub fn is_alert(&self) -> bool {
        matches!(self, View::Alert { .. })
    }

    pub fn controls(&self) -> &'static [Control] {
        match self {
            View::Step { .. } => &[Control::NextStep],
            View::Complete { .. } => &[Control::ShowAllRecipes],
            _ => &[],
        }
    }

    /// Render as an HTML fragment for the recipe display area.
    pub fn to_html(&self) -> String {
        let mut html = match self {
            View::RecipeList { recipes } => {
                let items: String = recipes
                    .iter()
                    .map(|r| {
                        format!(
                            "<li><b>{}</b>: {}</li>",
                            encode_text(r.display_name()),
                            encode_text(&r.description)
                        )
                    })
                    .collect();
                format!("<h2>Available Recipes</h2><ul>{}</ul>", items)
            }
            View::Message { text } | View::Answer { text } | View::Alert { text } => {
                format!("<p>{}</p>", encode_text(text))
            }
            View::RecipeOverview {
                name,
                description,
                ingredients,
                total_steps,
            } => {
                let summary = if description.is_empty() {
                    String::new()
                } else {
                    format!("<p>{}</p>\n", encode_text(description))
                };
                let items: String = ingredients
                    .iter()
                    .map(|i| format!("<li>{}</li>", encode_text(i)))
                    .collect();
                format!(
                    "<h2>🍲 {}</h2>\n{}<h4>Ingredients:</h4>\n<ul>{}</ul>\n\
                     <p><strong>Total steps:</strong> {}</p>\n\
                     <p>Click \"Start Cooking\" to begin your step-by-step guide!</p>",
                    encode_text(name),
                    summary,
                    items,
                    total_steps
                )
            }
            View::Step {
                number,
                total,
                text,
            } => format!(
                "<h2>Step {} of {}</h2>\n<p>{}</p>",
                number,
                total,
                encode_text(text)
            ),
            View::Complete { recipe_name } => format!(
                "<h2>🎉 Cooking Complete!</h2>\n<p>Enjoy your delicious {}!</p>",
                encode_text(recipe_name)
            ),
        };

        for control in self.controls() {
            html.push('\n');
            html.push_str(control.html_button());
        }
        html
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::RecipeList { recipes } => {
                writeln!(f, "Available Recipes")?;
                if recipes.is_empty() {
                    write!(f, "  (none)")?;
                }
                for (i, recipe) in recipes.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "  - {}: {}", recipe.display_name(), recipe.description)?;
                }
                Ok(())
            }
            View::Message { text } | View::Answer { text } => write!(f, "{}", text),
            View::Alert { text } => write!(f, "! {}", text),
            View::RecipeOverview {
                name,
                description,
                ingredients,
                total_steps,
            } => {
                writeln!(f, "🍲 {}", name)?;
                if !description.is_empty() {
                    writeln!(f, "{}", description)?;
                }
                writeln!(f, "Ingredients:")?;
                for ingredient in ingredients {
                    writeln!(f, "  - {}", ingredient)?;
                }
                writeln!(f, "Total steps: {}", total_steps)?;
                write!(
                    f,
                    "Click \"Start Cooking\" to begin your step-by-step guide!"
                )
            }
            View::Step {
                number,
                total,
                text,
            } => {
                writeln!(f, "Step {} of {}", number, total)?;
                write!(f, "{}", text)?;
                write_controls(f, self.controls())
            }
            View::Complete { recipe_name } => {
                writeln!(f, "🎉 Cooking Complete!")?;
                write!(f, "Enjoy your delicious {}!", recipe_name)?;
                write_controls(f, self.controls())
            }
        }
    }
}

fn write_controls(f: &mut fmt::Formatter<'_>, controls: &[Control]) -> fmt::Result {
    for control in controls {
        write!(f, "\n[{}]", control.label())?;
    }
    Ok(())
}
