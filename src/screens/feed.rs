use crate::{api_helpers::list_recipes_from_api, client::ApiClient, errors::ApiError, models::Recipe};

/// The feed holds the full sorted collection plus the view filtered by the
/// active search query.
#[derive(Debug, Default)]
pub struct Feed {
    recipes: Vec<Recipe>,
    filtered: Vec<Recipe>,
    query: String,
}

impl Feed {
    pub fn new() -> Self {
        Feed::default()
    }

    /// Runs every time the screen regains focus, not just on first load, so
    /// recipes created elsewhere show up without an explicit pull-to-refresh.
    /// The active query survives the refresh.
    pub async fn refresh(&mut self, client: &ApiClient) -> Result<(), ApiError> {
        let mut recipes = list_recipes_from_api(client).await?;
        recipes.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        self.recipes = recipes;
        self.apply_filter();
        Ok(())
    }

    pub fn search(&mut self, query: &str) {
        self.query = query.to_string();
        self.apply_filter();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn visible(&self) -> &[Recipe] {
        &self.filtered
    }

    pub fn all(&self) -> &[Recipe] {
        &self.recipes
    }

    fn apply_filter(&mut self) {
        if self.query.is_empty() {
            self.filtered = self.recipes.clone();
            return;
        }
        let needle = self.query.to_lowercase();
        self.filtered = self
            .recipes
            .iter()
            .filter(|recipe| matches_query(recipe, &needle))
            .cloned()
            .collect();
    }
}

fn matches_query(recipe: &Recipe, needle: &str) -> bool {
    recipe.title.to_lowercase().contains(needle)
        || recipe
            .dietary_tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle))
}
