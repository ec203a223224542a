pub mod builder;
pub mod config;
pub mod crisis;
pub mod insights;
pub mod library;
mod patterns;
pub mod random;
pub mod responder;
pub mod risk;
pub mod session;
pub mod signals;
pub mod summary;
pub mod tracker;
pub mod trend;

pub use builder::ResponderBuilder;
pub use config::ResponderConfig;
pub use crisis::{
    contains_crisis_phrase, CopingTechnique, CrisisAlert, CrisisNotifier, CrisisResource, LoggingNotifier,
    CRISIS_RESOURCES, QUICK_COPING_TECHNIQUES,
};
pub use insights::generate_insights;
pub use library::{category_counts, filter_articles, Article, ArticleCategory, CategoryFilter, ARTICLES};
pub use random::{RandomSource, SeededRandom, ThreadRandom};
pub use responder::{FallbackCategory, Reply, ReplySource, Responder};
pub use risk::classify;
pub use session::{ChatSession, TurnOutcome};
pub use signals::extract;
pub use summary::{reduce, TurnInput};
pub use tracker::{update_concerns, update_strategies};
pub use trend::estimate_trend;
