//! Content model shared by recipes and blog posts
//!
//! [`ContentItem`] carries the fields common to both kinds plus a
//! kind-specific [`ContentBody`]. The ranking code only ever borrows items;
//! ownership stays with whichever store produced them.
//!
//! Text fields missing from input documents deserialize to the empty string
//! so scoring never has to special-case absent data.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The two rankable entity kinds
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Recipe,
    Blog,
}

impl ContentKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Recipe => "recipe",
            Self::Blog => "blog",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub quantity: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instruction {
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Publication state of a blog post
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlogStatus {
    Draft,
    #[default]
    Published,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlogCategory {
    CookingTips,
    FoodCulture,
    Health,
    Reviews,
    #[default]
    Other,
}

/// Vote tally; the score is always derived, never stored
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Votes {
    #[serde(default)]
    pub upvotes: u32,
    #[serde(default)]
    pub downvotes: u32,
}

impl Votes {
    #[must_use]
    pub fn score(&self) -> i64 {
        i64::from(self.upvotes) - i64::from(self.downvotes)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeBody {
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub instructions: Vec<Instruction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogBody {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub category: BlogCategory,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub status: BlogStatus,
}

/// Kind-specific part of a content item, tagged by `kind` in JSON
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContentBody {
    Recipe(RecipeBody),
    Blog(BlogBody),
}

/// A recipe or blog post as read from the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    /// Unique, stable identifier
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Author reference (user id)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default)]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub votes: Votes,
    #[serde(flatten)]
    pub body: ContentBody,
}

impl ContentItem {
    /// New recipe with no ingredients or instructions.
    pub fn recipe(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self::with_body(id, title, description, ContentBody::Recipe(RecipeBody::default()))
    }

    /// New published blog post in the `other` category.
    pub fn blog(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self::with_body(id, title, description, ContentBody::Blog(BlogBody::default()))
    }

    fn with_body(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        body: ContentBody,
    ) -> Self {
        Self {
            id: id.into(),
            slug: None,
            title: title.into(),
            description: description.into(),
            author: None,
            created_at: DateTime::<Utc>::default(),
            votes: Votes::default(),
            body,
        }
    }

    #[must_use]
    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    #[must_use]
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    #[must_use]
    pub fn with_votes(mut self, upvotes: u32, downvotes: u32) -> Self {
        self.votes = Votes { upvotes, downvotes };
        self
    }

    /// Set ingredient names (recipes only; ignored for blogs).
    #[must_use]
    pub fn with_ingredients(mut self, names: &[&str]) -> Self {
        if let ContentBody::Recipe(recipe) = &mut self.body {
            recipe.ingredients = names
                .iter()
                .map(|name| Ingredient {
                    name: (*name).to_string(),
                    quantity: String::new(),
                })
                .collect();
        }
        self
    }

    /// Set instruction steps (recipes only; ignored for blogs).
    #[must_use]
    pub fn with_instructions(mut self, steps: &[&str]) -> Self {
        if let ContentBody::Recipe(recipe) = &mut self.body {
            recipe.instructions = steps
                .iter()
                .map(|step| Instruction {
                    description: (*step).to_string(),
                })
                .collect();
        }
        self
    }

    /// Set blog text (blogs only; ignored for recipes).
    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        if let ContentBody::Blog(blog) = &mut self.body {
            blog.content = content.into();
        }
        self
    }

    #[must_use]
    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        if let ContentBody::Blog(blog) = &mut self.body {
            blog.tags = tags.iter().map(|tag| (*tag).to_string()).collect();
        }
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: BlogCategory) -> Self {
        if let ContentBody::Blog(blog) = &mut self.body {
            blog.category = category;
        }
        self
    }

    #[must_use]
    pub fn with_status(mut self, status: BlogStatus) -> Self {
        if let ContentBody::Blog(blog) = &mut self.body {
            blog.status = status;
        }
        self
    }

    #[must_use]
    pub const fn kind(&self) -> ContentKind {
        match self.body {
            ContentBody::Recipe(_) => ContentKind::Recipe,
            ContentBody::Blog(_) => ContentKind::Blog,
        }
    }

    /// Slug when present, otherwise the id.
    #[must_use]
    pub fn handle(&self) -> &str {
        self.slug.as_deref().unwrap_or(&self.id)
    }

    /// Recipes are always visible; blogs only once published.
    #[must_use]
    pub fn is_published(&self) -> bool {
        match &self.body {
            ContentBody::Recipe(_) => true,
            ContentBody::Blog(blog) => blog.status == BlogStatus::Published,
        }
    }

    #[must_use]
    pub fn ingredient_names(&self) -> Vec<&str> {
        match &self.body {
            ContentBody::Recipe(recipe) => {
                recipe.ingredients.iter().map(|i| i.name.as_str()).collect()
            }
            ContentBody::Blog(_) => Vec::new(),
        }
    }

    #[must_use]
    pub fn tags(&self) -> &[String] {
        match &self.body {
            ContentBody::Recipe(_) => &[],
            ContentBody::Blog(blog) => &blog.tags,
        }
    }

    #[must_use]
    pub const fn category(&self) -> Option<BlogCategory> {
        match &self.body {
            ContentBody::Recipe(_) => None,
            ContentBody::Blog(blog) => Some(blog.category),
        }
    }

    /// Every free-text field that plain substring search looks at.
    #[must_use]
    pub fn searchable_text(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.description.as_str()];
        match &self.body {
            ContentBody::Recipe(recipe) => {
                fields.extend(recipe.ingredients.iter().map(|i| i.name.as_str()));
                fields.extend(recipe.instructions.iter().map(|i| i.description.as_str()));
            }
            ContentBody::Blog(blog) => fields.push(blog.content.as_str()),
        }
        fields
    }
}

/// A content item annotated with its similarity to a reference item
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ScoredCandidate<'a> {
    #[serde(flatten)]
    pub item: &'a ContentItem,
    /// Aggregate similarity in `[0, 100]`
    pub similarity_score: f64,
}
