// Curated self-help reading library

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArticleCategory {
    Health,
    Academic,
    Family,
    Professional,
}

impl ArticleCategory {
    /// Display order for category listings
    pub const ALL: [ArticleCategory; 4] = [
        ArticleCategory::Health,
        ArticleCategory::Academic,
        ArticleCategory::Family,
        ArticleCategory::Professional,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ArticleCategory::Health => "Health",
            ArticleCategory::Academic => "Academic",
            ArticleCategory::Family => "Family",
            ArticleCategory::Professional => "Professional",
        }
    }
}

impl fmt::Display for ArticleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArticleCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ArticleCategory::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown article category: {s}"))
    }
}

/// Category selection for a library query; `All` matches every article
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(ArticleCategory),
}

impl CategoryFilter {
    pub fn matches(self, category: ArticleCategory) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => selected == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Article {
    pub id: u32,
    pub category: ArticleCategory,
    pub title: &'static str,
    pub description: &'static str,
    pub read_minutes: u32,
    pub rating: f32,
}

pub const ARTICLES: &[Article] = &[
    Article {
        id: 1,
        category: ArticleCategory::Family,
        title: "Take Care of Your Mind",
        description: "Essential mental health tips for families to build stronger bonds and emotional resilience",
        read_minutes: 5,
        rating: 4.8,
    },
    Article {
        id: 2,
        category: ArticleCategory::Health,
        title: "Healthy Mind, Healthy Life",
        description: "Build better mental wellness habits through daily practices and mindfulness techniques",
        read_minutes: 7,
        rating: 4.9,
    },
    Article {
        id: 3,
        category: ArticleCategory::Professional,
        title: "PATHFINDER Guide",
        description: "Professional guidance and counseling resources for workplace mental health",
        read_minutes: 10,
        rating: 4.7,
    },
    Article {
        id: 4,
        category: ArticleCategory::Academic,
        title: "Education Saves Lives",
        description: "Breaking the silence around mental health in educational settings",
        read_minutes: 6,
        rating: 4.8,
    },
    Article {
        id: 5,
        category: ArticleCategory::Health,
        title: "Mindful Meditation",
        description: "Learn meditation techniques to reduce stress and improve focus",
        read_minutes: 8,
        rating: 4.9,
    },
    Article {
        id: 6,
        category: ArticleCategory::Family,
        title: "Parenting with Empathy",
        description: "Building emotional intelligence in children through mindful parenting",
        read_minutes: 12,
        rating: 4.6,
    },
];

/// Articles in the selected category whose title or description contains
/// the query, ignoring case. A blank query matches everything.
pub fn filter_articles(filter: CategoryFilter, query: &str) -> Vec<&'static Article> {
    let query = query.trim().to_lowercase();
    ARTICLES
        .iter()
        .filter(|article| filter.matches(article.category))
        .filter(|article| {
            article.title.to_lowercase().contains(&query)
                || article.description.to_lowercase().contains(&query)
        })
        .collect()
}

/// Article count per category, led by the `All` total
pub fn category_counts() -> Vec<(&'static str, usize)> {
    let mut counts = vec![("All", ARTICLES.len())];
    counts.extend(ArticleCategory::ALL.into_iter().map(|category| {
        let count = ARTICLES
            .iter()
            .filter(|article| article.category == category)
            .count();
        (category.as_str(), count)
    }));
    counts
}
