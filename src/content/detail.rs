use super::list::sort_by_recency;
use super::model::ContentItem;
use crate::config;

/// One detail-view activation walks Loading into exactly one terminal
/// state. NotFound means the record does not exist (404 or an
/// undecodable match); Error is a transport failure. Both render calm
/// screens with a way back, but they are distinct states.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailState<T> {
    Loading,
    Found(T),
    NotFound,
    Error,
}

/// Words in the body, ignoring markup tags.
pub fn word_count(body: &str) -> usize {
    let mut count = 0;
    let mut in_tag = false;
    let mut in_word = false;
    for ch in body.chars() {
        match ch {
            '<' => {
                in_tag = true;
                in_word = false;
            }
            '>' => in_tag = false,
            c if c.is_whitespace() => in_word = false,
            _ if !in_tag => {
                if !in_word {
                    count += 1;
                    in_word = true;
                }
            }
            _ => {}
        }
    }
    count
}

pub fn reading_minutes(body: &str) -> usize {
    word_count(body)
        .div_ceil(config::WORDS_PER_MINUTE)
        .max(1)
}

pub fn reading_time_label(body: &str) -> String {
    format!("{} menit baca", reading_minutes(body))
}

/// Sidebar list for a detail view: the most recent items from the
/// collection, minus the one currently open.
pub fn related<T: ContentItem + Clone>(items: &[T], current_id: &str, limit: usize) -> Vec<T> {
    let mut sorted = items.to_vec();
    sort_by_recency(&mut sorted);
    sorted
        .into_iter()
        .filter(|item| item.id() != current_id)
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::model::{parse_timestamp, BlogPost};

    fn post(id: &str, date: Option<&str>) -> BlogPost {
        BlogPost {
            id: id.to_string(),
            title: format!("Post {}", id),
            excerpt: String::new(),
            content: String::new(),
            image: None,
            category: "Umum".to_string(),
            author: String::new(),
            created_at: date.and_then(parse_timestamp),
        }
    }

    #[test]
    fn four_hundred_words_read_in_two_minutes() {
        let body = vec!["kata"; 400].join(" ");
        assert_eq!(reading_minutes(&body), 2);
        assert_eq!(reading_time_label(&body), "2 menit baca");
    }

    #[test]
    fn reading_time_is_at_least_one_minute() {
        assert_eq!(reading_minutes(""), 1);
        assert_eq!(reading_minutes("tiga kata saja"), 1);
    }

    #[test]
    fn partial_minutes_round_up() {
        let body = vec!["kata"; 201].join(" ");
        assert_eq!(reading_minutes(&body), 2);
    }

    #[test]
    fn word_count_ignores_markup() {
        assert_eq!(word_count("<p>dua kata</p><br>"), 2);
        assert_eq!(word_count("satu<br>dua<br>tiga"), 3);
    }

    #[test]
    fn related_excludes_current_and_honors_limit_and_order() {
        let posts = vec![
            post("1", Some("2024-01-01")),
            post("2", Some("2024-02-01")),
            post("3", Some("2024-03-01")),
            post("4", Some("2024-04-01")),
            post("5", Some("2024-05-01")),
            post("6", Some("2024-06-01")),
            post("7", Some("2024-07-01")),
        ];
        let sidebar = related(&posts, "6", 5);
        assert_eq!(sidebar.len(), 5);
        assert!(sidebar.iter().all(|p| p.id != "6"));
        let ids: Vec<&str> = sidebar.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["7", "5", "4", "3", "2"]);
    }

    #[test]
    fn related_on_empty_collection_is_empty() {
        assert!(related::<BlogPost>(&[], "1", 5).is_empty());
    }
}
