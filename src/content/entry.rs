//! Keyword entry models

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// One blog post's source data, as stored in the keywords JSON file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Title shown in web search results
    #[serde(default, deserialize_with = "lenient_string")]
    pub metadata_title: String,

    /// Title shown on the page; also the source of the slug
    #[serde(default, deserialize_with = "lenient_string")]
    pub h1: String,

    /// Primary keyword
    #[serde(default, deserialize_with = "lenient_string")]
    pub keyword_main: String,

    /// Secondary keywords
    #[serde(default)]
    pub other_keywords: Vec<String>,

    /// Post body; entries without it get no page
    #[serde(
        default,
        deserialize_with = "content_object",
        serialize_with = "serialize_content"
    )]
    pub content: Option<Content>,

    /// Example question box
    #[serde(default)]
    pub example_question: Option<ExampleQuestion>,

    /// Fields this tool does not interpret, kept on rewrite
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Entry {
    /// URL-friendly name derived from the H1 title
    pub fn slug(&self) -> String {
        crate::helpers::slugify(&self.h1)
    }

    /// Whether the entry carries a non-empty content object
    pub fn has_content(&self) -> bool {
        self.content.as_ref().is_some_and(|c| !c.is_empty())
    }

    /// Publish date, if one has been assigned
    pub fn date(&self) -> Option<&str> {
        self.content.as_ref().and_then(|c| c.date.as_deref())
    }
}

/// The body of a blog post
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Content {
    /// Content type tag ("questions" or "guide")
    #[serde(rename = "type", default, deserialize_with = "lenient_string")]
    pub content_type: String,

    #[serde(default, deserialize_with = "lenient_option")]
    pub metadata_description: Option<String>,

    #[serde(default, deserialize_with = "lenient_option")]
    pub intro: Option<String>,

    #[serde(default)]
    pub paragraphs: Vec<Paragraph>,

    /// Human-readable publish date (e.g. "march 05, 2025")
    #[serde(
        default,
        deserialize_with = "lenient_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub date: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,

    /// Loaded from a `{}` object with no keys at all
    #[serde(skip)]
    pub from_empty_object: bool,
}

impl Content {
    /// Only a `{}` object that has not been filled in since counts as no content
    ///
    /// Objects that carry keys count as content even when every value is
    /// empty or null.
    pub fn is_empty(&self) -> bool {
        self.from_empty_object
            && self.content_type.is_empty()
            && self.metadata_description.is_none()
            && self.intro.is_none()
            && self.paragraphs.is_empty()
            && self.date.is_none()
            && self.extra.is_empty()
    }
}

/// A titled section of a post
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,

    #[serde(default, deserialize_with = "lenient_option")]
    pub description: Option<String>,
}

impl Paragraph {
    pub fn new(title: impl Into<String>, description: Option<String>) -> Self {
        Self {
            title: title.into(),
            description,
        }
    }
}

/// Example question shown alongside a post
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExampleQuestion {
    #[serde(default, deserialize_with = "lenient_option")]
    pub title: Option<String>,

    /// Older keyword files store this under `example_question`
    #[serde(default, alias = "example_question", deserialize_with = "lenient_option")]
    pub question: Option<String>,

    #[serde(default, deserialize_with = "lenient_option")]
    pub topic: Option<String>,
}

/// Deserialize a content object, remembering whether it had any keys
fn content_object<'de, D>(deserializer: D) -> Result<Option<Content>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(map) = Option::<Map<String, Value>>::deserialize(deserializer)? else {
        return Ok(None);
    };

    let from_empty_object = map.is_empty();
    let mut content: Content =
        serde_json::from_value(Value::Object(map)).map_err(serde::de::Error::custom)?;
    content.from_empty_object = from_empty_object;
    Ok(Some(content))
}

/// Write an untouched empty content object back as `{}`
fn serialize_content<S>(content: &Option<Content>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match content {
        Some(c) if c.is_empty() => Map::new().serialize(serializer),
        _ => content.serialize(serializer),
    }
}

/// Deserialize any scalar as a string; null becomes the empty string
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_option(deserializer)?.unwrap_or_default())
}

/// Deserialize any scalar as an optional string; null becomes `None`
fn lenient_option<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(value_to_string))
}

fn value_to_string(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_entry() {
        let json = r#"{
            "metadata_title": "Best Questions",
            "h1": "Best Questions to Ask",
            "keyword_main": "questions",
            "other_keywords": ["ask", "game"],
            "content": {
                "type": "questions",
                "metadata_description": "desc",
                "intro": "Hello",
                "paragraphs": [{"title": "One", "description": "First"}],
                "date": "march 05, 2025"
            },
            "example_question": {"title": "T", "question": "Q?", "topic": "Love"}
        }"#;

        let entry: Entry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.h1, "Best Questions to Ask");
        assert_eq!(entry.other_keywords, vec!["ask", "game"]);
        assert!(entry.has_content());
        assert_eq!(entry.date(), Some("march 05, 2025"));
        let content = entry.content.unwrap();
        assert_eq!(content.content_type, "questions");
        assert_eq!(content.paragraphs[0].title, "One");
        assert_eq!(content.paragraphs[0].description.as_deref(), Some("First"));
        let example = entry.example_question.unwrap();
        assert_eq!(example.question.as_deref(), Some("Q?"));
    }

    #[test]
    fn test_nulls_and_missing_fields() {
        let json = r#"{
            "h1": "Title",
            "metadata_title": null,
            "content": {"type": "guide", "intro": null, "paragraphs": [{"title": "A", "description": null}]}
        }"#;

        let entry: Entry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.metadata_title, "");
        assert!(entry.example_question.is_none());
        let content = entry.content.unwrap();
        assert!(content.intro.is_none());
        assert!(content.date.is_none());
        assert!(content.paragraphs[0].description.is_none());
    }

    #[test]
    fn test_scalars_coerced_to_string() {
        let json = r#"{"h1": 2024, "content": {"intro": true, "date": 17}}"#;
        let entry: Entry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.h1, "2024");
        let content = entry.content.unwrap();
        assert_eq!(content.intro.as_deref(), Some("true"));
        assert_eq!(content.date.as_deref(), Some("17"));
    }

    #[test]
    fn test_legacy_example_question_key() {
        let json = r#"{"title": null, "example_question": "What now?", "topic": null}"#;
        let example: ExampleQuestion = serde_json::from_str(json).unwrap();
        assert_eq!(example.question.as_deref(), Some("What now?"));
    }

    #[test]
    fn test_empty_content_is_absent() {
        let entry: Entry = serde_json::from_str(r#"{"h1": "A", "content": {}}"#).unwrap();
        assert!(!entry.has_content());

        let entry: Entry = serde_json::from_str(r#"{"h1": "A", "content": null}"#).unwrap();
        assert!(!entry.has_content());

        let entry: Entry = serde_json::from_str(r#"{"h1": "A"}"#).unwrap();
        assert!(!entry.has_content());
    }

    #[test]
    fn test_content_object_with_keys_is_present() {
        for content in [
            r#"{"paragraphs": []}"#,
            r#"{"intro": null}"#,
            r#"{"type": ""}"#,
        ] {
            let json = format!(r#"{{"h1": "A", "content": {}}}"#, content);
            let entry: Entry = serde_json::from_str(&json).unwrap();
            assert!(entry.has_content(), "{} should count as content", content);
        }
    }

    #[test]
    fn test_built_content_is_present() {
        let entry = Entry {
            h1: "A".to_string(),
            content: Some(Content::default()),
            ..Default::default()
        };
        assert!(entry.has_content());
    }

    #[test]
    fn test_empty_content_round_trip() {
        let mut entry: Entry = serde_json::from_str(r#"{"h1": "A", "content": {}}"#).unwrap();
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["content"], serde_json::json!({}));

        // Filling in a date makes it publishable
        entry.content.as_mut().unwrap().date = Some("may 01, 2024".to_string());
        assert!(entry.has_content());
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["content"]["date"], "may 01, 2024");
    }

    #[test]
    fn test_unknown_fields_survive_round_trip() {
        let json = r#"{"h1": "A", "status": "draft", "content": {"type": "questions", "author": "me"}}"#;
        let entry: Entry = serde_json::from_str(json).unwrap();
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["status"], "draft");
        assert_eq!(value["content"]["author"], "me");
        assert!(value["content"].get("date").is_none());
    }

    #[test]
    fn test_slug() {
        let entry = Entry {
            h1: "  101 Questions: Ask Your Partner! ".to_string(),
            ..Default::default()
        };
        assert_eq!(entry.slug(), "101-questions-ask-your-partner");
    }
}
