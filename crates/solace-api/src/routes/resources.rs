use axum::{extract::Query, Json};
use serde::{Deserialize, Serialize};
use solace_engine::{
    category_counts, filter_articles, Article, CategoryFilter, CRISIS_RESOURCES, QUICK_COPING_TECHNIQUES,
};
use utoipa::{IntoParams, ToSchema};

use crate::error::{ApiError, ApiResult};

#[derive(Debug, Serialize, ToSchema)]
pub struct CrisisResourceResponse {
    pub name: String,
    pub contact: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CopingTechniqueResponse {
    pub name: String,
    pub steps: String,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LibraryQuery {
    /// `All` or one of the article categories
    #[serde(default)]
    pub category: Option<String>,
    /// Case-insensitive search over titles and descriptions
    #[serde(default)]
    pub q: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ArticleResponse {
    pub id: u32,
    pub category: String,
    pub title: String,
    pub description: String,
    /// e.g. "5 min read"
    pub duration: String,
    pub rating: f32,
}

impl From<&Article> for ArticleResponse {
    fn from(article: &Article) -> Self {
        Self {
            id: article.id,
            category: article.category.to_string(),
            title: article.title.to_string(),
            description: article.description.to_string(),
            duration: format!("{} min read", article.read_minutes),
            rating: article.rating,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LibraryResponse {
    pub articles: Vec<ArticleResponse>,
    pub total: usize,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryCountResponse {
    pub name: String,
    pub count: usize,
}

/// Crisis hotlines shown when a conversation signals acute risk
#[utoipa::path(
    get,
    path = "/resources/crisis",
    responses(
        (status = 200, description = "Crisis hotlines", body = [CrisisResourceResponse])
    ),
    tag = "resources"
)]
pub async fn crisis_resources() -> Json<Vec<CrisisResourceResponse>> {
    Json(
        CRISIS_RESOURCES
            .iter()
            .map(|resource| CrisisResourceResponse {
                name: resource.name.to_string(),
                contact: resource.contact.to_string(),
                availability: resource.availability.map(str::to_string),
            })
            .collect(),
    )
}

#[utoipa::path(
    get,
    path = "/resources/coping-techniques",
    responses(
        (status = 200, description = "Quick coping techniques", body = [CopingTechniqueResponse])
    ),
    tag = "resources"
)]
pub async fn coping_techniques() -> Json<Vec<CopingTechniqueResponse>> {
    Json(
        QUICK_COPING_TECHNIQUES
            .iter()
            .map(|technique| CopingTechniqueResponse {
                name: technique.name.to_string(),
                steps: technique.steps.to_string(),
            })
            .collect(),
    )
}

/// Self-help articles filtered by category and search text
#[utoipa::path(
    get,
    path = "/resources/library",
    params(LibraryQuery),
    responses(
        (status = 200, description = "Matching articles", body = LibraryResponse),
        (status = 400, description = "Unknown category")
    ),
    tag = "resources"
)]
pub async fn library(Query(query): Query<LibraryQuery>) -> ApiResult<Json<LibraryResponse>> {
    let filter = match query.category.as_deref() {
        Some(category) => category
            .parse::<CategoryFilter>()
            .map_err(ApiError::BadRequest)?,
        None => CategoryFilter::All,
    };

    let articles: Vec<ArticleResponse> = filter_articles(filter, query.q.as_deref().unwrap_or_default())
        .into_iter()
        .map(ArticleResponse::from)
        .collect();

    Ok(Json(LibraryResponse {
        total: articles.len(),
        articles,
    }))
}

#[utoipa::path(
    get,
    path = "/resources/library/categories",
    responses(
        (status = 200, description = "Article count per category, led by All", body = [CategoryCountResponse])
    ),
    tag = "resources"
)]
pub async fn library_categories() -> Json<Vec<CategoryCountResponse>> {
    Json(
        category_counts()
            .into_iter()
            .map(|(name, count)| CategoryCountResponse {
                name: name.to_string(),
                count,
            })
            .collect(),
    )
}
