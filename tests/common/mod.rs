#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use keyword_board::app::App;
use keyword_board::config::Config;
use keyword_board::data::{Item, Score};

pub fn make_item(title: &str, category: Option<&str>, upload_date: Option<&str>) -> Item {
    Item {
        title: title.to_string(),
        category: category.map(str::to_string),
        upload_date: upload_date.map(str::to_string),
        score: Some(Score::Number(serde_json::Number::from(80u32))),
        keywords: Some("속보, 단독".to_string()),
        source: "구글뉴스".to_string(),
        news_url: Some(format!("https://news.example.com/{}", title)),
        secondary_news_url: None,
        video_url: None,
    }
}

pub fn make_video(title: &str, category: Option<&str>, upload_date: Option<&str>) -> Item {
    Item {
        source: "유튜브".to_string(),
        news_url: None,
        video_url: Some(format!("https://www.youtube.com/watch?v={}", title)),
        ..make_item(title, category, upload_date)
    }
}

pub fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
}

// App with default config and the given dataset (no file I/O).
pub fn test_app(items: Vec<Item>) -> App {
    App::new(Config::default(), Some(items)).unwrap()
}

pub fn titles(items: &[&Item]) -> Vec<String> {
    items.iter().map(|i| i.title.clone()).collect()
}
