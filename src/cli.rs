//! Command-line front end: argument definitions, dispatch and text output.

use std::fmt::Display;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::domain::ingredient::{NewIngredient, UpdateIngredient};
use crate::domain::recipe::{NewRecipe, RecipeIngredient};
use crate::domain::types::{IngredientId, RecipeId};
use crate::dto::ingredients::IngredientsPageData;
use crate::pagination::{Paginated, Paginator};
use crate::repository::{
    IngredientReader, IngredientWriter, RecipeReader, RecipeWriter, RecommendationReader,
};
use crate::services::{ServiceError, ServiceResult, ingredients, recipes, recommendations};

#[derive(Debug, Parser)]
#[command(name = "pantry-client", version, about = "Manage pantry ingredients and recipes")]
pub struct Cli {
    /// Print page data as JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Directory holding `default.yaml` and per-environment overrides.
    #[arg(long, global = true, default_value = "config")]
    pub config_dir: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Ingredients in stock.
    #[command(subcommand)]
    Ingredients(IngredientsCommand),
    /// Stored recipes.
    #[command(subcommand)]
    Recipes(RecipesCommand),
    /// Recipes suggested for the current stock.
    Recommendations {
        #[arg(long)]
        page: Option<usize>,
    },
}

#[derive(Debug, Subcommand)]
pub enum IngredientsCommand {
    List,
    Add {
        #[arg(long)]
        name: String,
        #[arg(long, allow_negative_numbers = true)]
        quantity: i64,
        #[arg(long = "measure", default_value = "unit")]
        measure_type: String,
    },
    Update {
        id: IngredientId,
        #[arg(long)]
        name: String,
        #[arg(long, allow_negative_numbers = true)]
        quantity: i64,
        #[arg(long = "measure", default_value = "unit")]
        measure_type: String,
    },
    Delete {
        id: IngredientId,
    },
}

#[derive(Debug, Subcommand)]
pub enum RecipesCommand {
    List {
        #[arg(long)]
        page: Option<usize>,
    },
    Add {
        #[arg(long)]
        name: String,
        /// Required ingredient as `name:quantity[:measure]`; repeat for more.
        #[arg(long = "ingredient", required = true)]
        ingredients: Vec<RecipeIngredient>,
    },
    Delete {
        id: RecipeId,
    },
}

/// Runs `command` against `repo` and returns what should be printed.
pub async fn execute<R>(
    repo: &R,
    command: Command,
    json: bool,
    items_per_page: usize,
) -> ServiceResult<String>
where
    R: IngredientReader
        + IngredientWriter
        + RecipeReader
        + RecipeWriter
        + RecommendationReader
        + ?Sized,
{
    match command {
        Command::Ingredients(command) => {
            let data = match command {
                IngredientsCommand::List => ingredients::load_ingredients(repo).await?,
                IngredientsCommand::Add {
                    name,
                    quantity,
                    measure_type,
                } => {
                    let new_ingredient = NewIngredient::new(name, measure_type, quantity);
                    ingredients::add_ingredient(repo, new_ingredient).await?
                }
                IngredientsCommand::Update {
                    id,
                    name,
                    quantity,
                    measure_type,
                } => {
                    let updates = UpdateIngredient::new(name, measure_type, quantity);
                    ingredients::update_ingredient(repo, id, updates).await?
                }
                IngredientsCommand::Delete { id } => {
                    ingredients::delete_ingredient(repo, id).await?
                }
            };
            output(&data, json, render_ingredients)
        }
        Command::Recipes(command) => {
            let mut pager = Paginator::new(items_per_page);
            let data = match command {
                RecipesCommand::List { page } => {
                    recipes::load_recipes(repo, &mut pager, page).await?
                }
                RecipesCommand::Add { name, ingredients } => {
                    let new_recipe = NewRecipe::new(name, ingredients);
                    recipes::create_recipe(repo, &mut pager, new_recipe).await?
                }
                RecipesCommand::Delete { id } => {
                    recipes::delete_recipe(repo, &mut pager, id).await?
                }
            };
            output(&data, json, |data| render_page("Recipes", &data.recipes))
        }
        Command::Recommendations { page } => {
            let mut pager = Paginator::new(items_per_page);
            let data = recommendations::load_recommendations(repo, &mut pager, page).await?;
            output(&data, json, |data| {
                render_page("Recommendations", &data.recommendations)
            })
        }
    }
}

fn output<D, F>(data: &D, json: bool, render: F) -> ServiceResult<String>
where
    D: Serialize,
    F: FnOnce(&D) -> String,
{
    if json {
        serde_json::to_string_pretty(data).map_err(|err| ServiceError::Output(err.to_string()))
    } else {
        Ok(render(data))
    }
}

pub fn render_ingredients(data: &IngredientsPageData) -> String {
    if data.ingredients.is_empty() {
        return "No ingredients in stock.".to_string();
    }
    let mut lines = vec!["Ingredients".to_string()];
    lines.extend(data.ingredients.iter().map(|ingredient| format!("  {ingredient}")));
    lines.join("\n")
}

/// Renders a page listing followed by its navigation footer.
pub fn render_page<T: Display>(title: &str, page: &Paginated<T>) -> String {
    let mut lines = vec![title.to_string()];
    if page.items.is_empty() {
        lines.push("  (none)".to_string());
    }
    lines.extend(page.items.iter().map(|item| format!("  {item}")));
    lines.push(render_navigation(page));
    lines.join("\n")
}

/// `Page X of Y` plus the links that are currently enabled.
pub fn render_navigation<T>(page: &Paginated<T>) -> String {
    let mut out = format!("Page {} of {}", page.page, page.total_pages.max(1));
    if page.pages.len() > 1 {
        let links: Vec<String> = page
            .pages
            .iter()
            .map(|link| match link {
                Some(number) if *number == page.page => format!("[{number}]"),
                Some(number) => number.to_string(),
                None => "...".to_string(),
            })
            .collect();
        out.push_str("  ");
        out.push_str(&links.join(" "));
    }
    if page.has_previous {
        out.push_str("  [Prev]");
    }
    if page.has_next {
        out.push_str("  [Next]");
    }
    out
}
