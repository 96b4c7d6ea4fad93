//! Built-in dataset and seed payload decoding.
//!
//! # Responsibility
//! - Provide the fixed six-article dataset used when no seed is supplied.
//! - Decode data-source seed payloads (JSON array of articles).
//!
//! # Invariants
//! - Decoding trusts payload shape; id uniqueness is checked by the store.

use crate::model::article::Article;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Seed decoding errors.
#[derive(Debug)]
pub enum SeedError {
    /// Payload is blank.
    Empty,
    Json(serde_json::Error),
}

impl Display for SeedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "seed payload is empty"),
            Self::Json(err) => write!(f, "invalid seed payload: {err}"),
        }
    }
}

impl Error for SeedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Empty => None,
            Self::Json(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for SeedError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Decodes a JSON array of articles in payload order.
pub fn parse_seed_json(payload: &str) -> Result<Vec<Article>, SeedError> {
    if payload.trim().is_empty() {
        return Err(SeedError::Empty);
    }
    Ok(serde_json::from_str(payload)?)
}

/// Known categories of the built-in dataset, in chooser order.
pub fn default_categories() -> Vec<String> {
    ["Технологии", "Дизайн", "Маркетинг", "Финансы", "Здоровье"]
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Built-in dataset: six articles, ids 2 and 5 bookmarked.
pub fn default_articles() -> Vec<Article> {
    vec![
        Article::new(
            1,
            "Основы веб-разработки",
            "Полное руководство по основам создания современных веб-сайтов. Изучите HTML, CSS и JavaScript.",
            "Технологии",
            "5 мин",
            "25 июля 2025",
        ),
        Article::new(
            2,
            "Дизайн пользовательского интерфейса",
            "Принципы создания интуитивных и красивых интерфейсов. Типографика, цвета и композиция.",
            "Дизайн",
            "8 мин",
            "24 июля 2025",
        )
        .bookmarked(true),
        Article::new(
            3,
            "Мобильная разработка в 2025",
            "Тенденции и лучшие практики разработки мобильных приложений. React Native и Flutter.",
            "Технологии",
            "12 мин",
            "23 июля 2025",
        ),
        Article::new(
            4,
            "Маркетинговые стратегии",
            "Эффективные подходы к цифровому маркетингу. SEO, контент-маркетинг и социальные сети.",
            "Маркетинг",
            "10 мин",
            "22 июля 2025",
        ),
        Article::new(
            5,
            "Основы финансовой грамотности",
            "Как управлять личными финансами. Инвестиции, сбережения и планирование бюджета.",
            "Финансы",
            "15 мин",
            "21 июля 2025",
        )
        .bookmarked(true),
        Article::new(
            6,
            "Здоровый образ жизни",
            "Простые способы улучшить качество жизни. Питание, спорт и ментальное здоровье.",
            "Здоровье",
            "7 мин",
            "20 июля 2025",
        ),
    ]
}
