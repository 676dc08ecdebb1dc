use askama::Template;

use crate::api::{FormSnapshot, RecipeResponse};

pub const PAGE_TITLE: &str = "Recipe and Meal Planning";
pub const QUERY_PLACEHOLDER: &str = "What can I cook with chicken, rice, and broccoli?";

#[derive(Template)]
#[template(
    source = r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>{{ title }}</title>
    <link href="https://cdn.jsdelivr.net/npm/daisyui@4/dist/full.min.css" rel="stylesheet" type="text/css" />
    <script src="https://cdn.tailwindcss.com"></script>
  </head>
  <body>
    <div class="min-h-screen bg-base-200 p-6">
      <h1 class="text-3xl font-bold text-center mb-6">{{ title }}</h1>
      <div class="card bg-base-100 shadow-xl max-w-2xl mx-auto">
        <div class="card-body">
          <form method="post" action="/">
            <textarea name="query" class="textarea textarea-bordered w-full mb-4" placeholder="{{ placeholder }}">{{ query }}</textarea>
            {% if in_flight %}
            <button type="submit" class="btn btn-primary w-full loading" disabled>Loading...</button>
            {% else %}
            <button type="submit" class="btn btn-primary w-full">Get Recipe</button>
            {% endif %}
          </form>
        </div>
      </div>
      {% if let Some(recipe) = response %}
      <div id="result" class="card bg-base-100 shadow-xl max-w-2xl mx-auto mt-6">
        <div class="card-body">
          <h2 class="card-title text-xl font-semibold">{{ recipe.answer }}</h2>
          <p><strong>Recipe:</strong> {{ recipe.details.recipe_name }}</p>
          <p><strong>Ingredients:</strong> {{ recipe.details.ingredients_line() }}</p>
          <p><strong>Instructions:</strong> {{ recipe.details.instructions_line() }}</p>
          <p><strong>Tips:</strong> {{ recipe.details.tips_line() }}</p>
          <p><strong>Prep Time:</strong> {{ recipe.details.prep_time }}</p>
        </div>
      </div>
      {% endif %}
    </div>
  </body>
</html>"#,
    ext = "html"
)]
struct PageTemplate<'a> {
    title: &'a str,
    placeholder: &'a str,
    query: &'a str,
    in_flight: bool,
    response: Option<&'a RecipeResponse>,
}

pub fn render_page(snapshot: &FormSnapshot) -> Result<String, askama::Error> {
    PageTemplate {
        title: PAGE_TITLE,
        placeholder: QUERY_PLACEHOLDER,
        query: &snapshot.query,
        in_flight: snapshot.in_flight,
        response: snapshot.response.as_ref(),
    }
    .render()
}
