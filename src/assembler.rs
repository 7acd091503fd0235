use log::debug;

use crate::error::RecipeError;
use crate::github::{Issue, IssueComment};
use crate::ingredient::parse_ingredients;
use crate::metadata;
use crate::model::{Comment, Recipe, Tag};

/// Build the recipe for one issue.
///
/// `comments` may hold the comments of every issue; only those referencing
/// `issue.number` are attached. Fails when the metadata block cannot be parsed.
pub fn assemble_recipe(issue: &Issue, comments: &[IssueComment]) -> Result<Recipe, RecipeError> {
    let document = metadata::extract(&issue.body)?;
    let metadata = document.metadata;

    let ingredients = metadata
        .ingredients
        .as_deref()
        .map(parse_ingredients)
        .unwrap_or_default();

    let comments = comments
        .iter()
        .filter(|comment| comment.issue_number == issue.number)
        .map(|comment| Comment {
            user: comment.user.login.clone(),
            body: comment.body.clone(),
        })
        .collect::<Vec<_>>();

    debug!(
        "Assembled issue #{} with {} ingredients and {} comments",
        issue.number,
        ingredients.len(),
        comments.len()
    );

    Ok(Recipe {
        id: issue.id,
        name: issue.title.clone(),
        image: metadata.image,
        tags: issue.labels.iter().map(Tag::from).collect(),
        duration: metadata.duration,
        servings: metadata.servings.filter(|&n| n > 0).unwrap_or(1),
        ingredients,
        details_html: document.html,
        details_markdown: issue.body.clone(),
        issue_link: issue.html_url.clone(),
        comments,
    })
}
