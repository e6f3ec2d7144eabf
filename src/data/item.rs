use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use super::date::UploadDate;

/// Category assumed for items written before the batch job tagged categories.
pub const FALLBACK_CATEGORY: &str = "정치";

/// Substring of the source label that marks a video platform entry.
pub const VIDEO_SOURCE_MARKER: &str = "유튜브";

/// Recommendation score as written by the batch job: usually a number,
/// occasionally a preformatted string. Numbers keep their JSON form so an
/// integer score is written back without a fraction.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Score {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Score::Number(n) => write!(f, "{}", n),
            Score::Text(s) => f.write_str(s),
        }
    }
}

/// One ranked keyword/news/video record from `keywordData`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(rename = "제목", default, deserialize_with = "lenient_text_or_empty")]
    pub title: String,
    #[serde(
        rename = "카테고리",
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub category: Option<String>,
    #[serde(
        rename = "업로드일",
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub upload_date: Option<String>,
    #[serde(
        rename = "추천점수",
        default,
        deserialize_with = "lenient_score",
        skip_serializing_if = "Option::is_none"
    )]
    pub score: Option<Score>,
    #[serde(
        rename = "키워드",
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub keywords: Option<String>,
    #[serde(rename = "출처", default, deserialize_with = "lenient_text_or_empty")]
    pub source: String,
    #[serde(
        rename = "뉴스기사_URL",
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub news_url: Option<String>,
    #[serde(
        rename = "뉴스기사2_URL",
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub secondary_news_url: Option<String>,
    #[serde(
        rename = "유튜브_URL",
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub video_url: Option<String>,
}

/// Treat empty strings the way the page script treated falsy values.
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

impl Item {
    pub fn effective_category(&self) -> &str {
        non_empty(&self.category).unwrap_or(FALLBACK_CATEGORY)
    }

    pub fn parsed_date(&self) -> UploadDate {
        UploadDate::parse(self.upload_date.as_deref())
    }

    pub fn keywords_text(&self) -> &str {
        non_empty(&self.keywords).unwrap_or("")
    }

    pub fn upload_date_text(&self) -> &str {
        self.upload_date.as_deref().unwrap_or("")
    }

    pub fn score_text(&self) -> String {
        self.score.as_ref().map(|s| s.to_string()).unwrap_or_default()
    }

    pub fn is_video(&self) -> bool {
        self.source.contains(VIDEO_SOURCE_MARKER)
    }

    /// Video first, then the primary article; the alternate article is only
    /// used when neither of those is present.
    pub fn primary_link(&self) -> Option<&str> {
        non_empty(&self.video_url)
            .or_else(|| non_empty(&self.news_url))
            .or_else(|| non_empty(&self.secondary_news_url))
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Number(n) => Some(n.to_string()),
        serde_json::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

fn lenient_text_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    lenient_text(deserializer).map(Option::unwrap_or_default)
}

fn lenient_score<'de, D>(deserializer: D) -> Result<Option<Score>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => Some(Score::Number(n)),
        serde_json::Value::String(s) => Some(Score::Text(s)),
        serde_json::Value::Bool(b) => Some(Score::Text(b.to_string())),
        _ => None,
    })
}
