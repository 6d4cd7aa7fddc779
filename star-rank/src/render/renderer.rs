//! Page renderer.

use super::{collect_tags, format_stars, format_updated, rank_repositories, RenderError};
use crate::repository::RepoDescriptor;
use handlebars::{handlebars_helper, Handlebars};
use serde_json::json;

/// Title shown in the page header and the browser tab.
pub const PAGE_TITLE: &str = "GitHub Star Rank";

const PAGE_TEMPLATE_NAME: &str = "index";
const PAGE_TEMPLATE: &str = include_str!("../../templates/index.html.hbs");

handlebars_helper!(thousands: |stars: u64| format_stars(stars));
handlebars_helper!(update_date: |updated_at: str| format_updated(updated_at));

/// Creates a configured Handlebars registry with custom helpers.
///
/// The registry is configured with:
/// - HTML escaping for every `{{value}}` expression
/// - Strict mode (catches missing variables)
/// - `thousands` helper for star counts
/// - `update_date` helper for update timestamps
#[must_use]
pub fn create_handlebars_registry() -> Handlebars<'static> {
    let mut hbs = Handlebars::new();

    // Repository text comes from the config file and the API
    hbs.register_escape_fn(handlebars::html_escape);

    hbs.set_strict_mode(true);

    hbs.register_helper("thousands", Box::new(thousands));
    hbs.register_helper("update_date", Box::new(update_date));

    hbs
}

/// Renderer for the ranking page.
pub struct PageRenderer {
    handlebars: Handlebars<'static>,
}

impl PageRenderer {
    /// Creates a renderer with the page template registered.
    ///
    /// # Errors
    ///
    /// Returns an error if the page template fails to compile.
    pub fn new() -> Result<Self, RenderError> {
        let mut handlebars = create_handlebars_registry();
        handlebars.register_template_string(PAGE_TEMPLATE_NAME, PAGE_TEMPLATE)?;
        Ok(Self { handlebars })
    }

    /// Renders the ranking page.
    ///
    /// # Arguments
    ///
    /// * `repos` - Repositories with fetched metadata, in config order
    /// * `generated_at` - Generation timestamp, already formatted
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render(
        &self,
        repos: &[RepoDescriptor],
        generated_at: &str,
    ) -> Result<String, RenderError> {
        let data = json!({
            "title": PAGE_TITLE,
            "total": repos.len(),
            "generated_at": generated_at,
            "tags": collect_tags(repos),
            "repositories": rank_repositories(repos),
        });

        Ok(self.handlebars.render(PAGE_TEMPLATE_NAME, &data)?)
    }
}
