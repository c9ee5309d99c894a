//! Keyword sheet conversion - turns the CSV export into keyword entries

use anyhow::{Context, Result};
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;
use std::fmt;
use std::io::Read;
use std::path::Path;

use super::{loader, Content, ContentError, Entry, ExampleQuestion, Paragraph};

/// Column holding the search-result title
pub const TITLE_COLUMN: &str = "Title (visible in the web search)";
/// Column holding the on-page H1
pub const H1_COLUMN: &str = "H1 (visible on the web page)";
/// Column holding the primary keyword
pub const PRIMARY_KEYWORD_COLUMN: &str = "Primary keyword";
/// Column holding the `<br>`-separated section titles
pub const H2S_COLUMN: &str = "H2s";
/// Number of "Secondary keyword N" columns
pub const SECONDARY_KEYWORD_COLUMNS: usize = 14;

const GUIDE_WORDS: &[&str] = &["therapy", "counseling", "guide"];
const QUESTION_WORDS: &[&str] = &["questions", "quizzes", "ask", "game"];

lazy_static! {
    static ref LINE_BREAK: Regex = Regex::new(r"<br>|<br/>").expect("valid regex");
    static ref BULLET_PREFIX: Regex = Regex::new(r"^[-•\s]*").expect("valid regex");
}

/// A CSV row keyed by header
pub type Row = HashMap<String, String>;

/// Kind of post an entry describes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    Questions,
    Guide,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Questions => "questions",
            ContentType::Guide => "guide",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Split `<br>`-separated text into cleaned list items
///
/// # Examples
/// ```ignore
/// parse_list_items("- One<br>• Two<br/><br>") // -> ["One", "Two"]
/// ```
pub fn parse_list_items(text: &str) -> Vec<String> {
    LINE_BREAK
        .split(text)
        .map(|item| BULLET_PREFIX.replace(item.trim(), "").into_owned())
        .filter(|item| !item.is_empty())
        .collect()
}

/// Guess the content type from the search title
pub fn determine_content_type(title: &str) -> ContentType {
    let title = title.to_lowercase();

    if GUIDE_WORDS.iter().any(|word| title.contains(word)) {
        return ContentType::Guide;
    }

    if QUESTION_WORDS.iter().any(|word| title.contains(word)) {
        return ContentType::Questions;
    }

    // Most posts are question lists
    ContentType::Questions
}

/// Non-empty secondary keywords of a row, in column order
pub fn secondary_keywords(row: &Row) -> Vec<String> {
    (1..=SECONDARY_KEYWORD_COLUMNS)
        .filter_map(|i| row.get(&format!("Secondary keyword {}", i)))
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect()
}

/// Build an entry skeleton from a CSV row
pub fn entry_from_row(row: &Row) -> Result<Entry, ContentError> {
    let title = required(row, TITLE_COLUMN)?;
    let h2s = parse_list_items(required(row, H2S_COLUMN)?);

    let paragraphs = h2s
        .into_iter()
        .map(|h2| Paragraph::new(h2, None))
        .collect();

    Ok(Entry {
        metadata_title: title.to_string(),
        h1: required(row, H1_COLUMN)?.to_string(),
        keyword_main: required(row, PRIMARY_KEYWORD_COLUMN)?.to_string(),
        other_keywords: secondary_keywords(row),
        content: Some(Content {
            content_type: determine_content_type(title).to_string(),
            paragraphs,
            ..Default::default()
        }),
        example_question: Some(ExampleQuestion::default()),
        extra: Default::default(),
    })
}

/// Parse every row of a keyword sheet
pub fn entries_from_reader<R: Read>(reader: R) -> Result<Vec<Entry>> {
    let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

    let mut entries = Vec::new();
    for (i, record) in csv_reader.deserialize::<Row>().enumerate() {
        let row = record.with_context(|| format!("Failed to read CSV row {}", i + 1))?;
        entries.push(entry_from_row(&row)?);
    }

    Ok(entries)
}

/// Convert a keyword sheet into a keywords JSON file
pub fn convert_csv(csv_path: &Path, json_path: &Path) -> Result<Vec<Entry>> {
    let file = std::fs::File::open(csv_path)
        .with_context(|| format!("Failed to open {:?}", csv_path))?;
    let entries = entries_from_reader(file)?;
    loader::save_entries(json_path, &entries)?;
    Ok(entries)
}

fn required<'a>(row: &'a Row, column: &str) -> Result<&'a str, ContentError> {
    row.get(column)
        .map(String::as_str)
        .ok_or_else(|| ContentError::MissingColumn(column.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SHEET: &str = "\
Title (visible in the web search),H1 (visible on the web page),Primary keyword,Secondary keyword 1,Secondary keyword 2,Secondary keyword 3,H2s
100 Questions to Ask Your Partner,Questions to Ask Your Partner,questions to ask,couples, ,date night,- First Topic<br>- Second Topic<br/>
Couples Therapy Guide,Couples Therapy,therapy,,,,• Why it helps<br>• How to start
";

    #[test]
    fn test_parse_list_items() {
        assert_eq!(
            parse_list_items("- One<br>• Two<br/>  -   Three  "),
            vec!["One", "Two", "Three"]
        );
        assert_eq!(parse_list_items("Only item"), vec!["Only item"]);
        assert!(parse_list_items("").is_empty());
        assert!(parse_list_items("<br><br/> - <br>").is_empty());
    }

    #[test]
    fn test_determine_content_type() {
        assert_eq!(
            determine_content_type("Couples Therapy Near You"),
            ContentType::Guide
        );
        assert_eq!(
            determine_content_type("A GUIDE to Dating"),
            ContentType::Guide
        );
        assert_eq!(
            determine_content_type("50 Questions to Ask"),
            ContentType::Questions
        );
        // Fallback is also questions
        assert_eq!(
            determine_content_type("Love Languages"),
            ContentType::Questions
        );
    }

    #[test]
    fn test_secondary_keywords() {
        let mut row = Row::new();
        row.insert("Secondary keyword 1".to_string(), " alpha ".to_string());
        row.insert("Secondary keyword 2".to_string(), "   ".to_string());
        row.insert("Secondary keyword 14".to_string(), "omega".to_string());
        row.insert("Secondary keyword 15".to_string(), "ignored".to_string());
        assert_eq!(secondary_keywords(&row), vec!["alpha", "omega"]);
    }

    #[test]
    fn test_entries_from_reader() {
        let entries = entries_from_reader(SHEET.as_bytes()).unwrap();
        assert_eq!(entries.len(), 2);

        let first = &entries[0];
        assert_eq!(first.metadata_title, "100 Questions to Ask Your Partner");
        assert_eq!(first.h1, "Questions to Ask Your Partner");
        assert_eq!(first.keyword_main, "questions to ask");
        assert_eq!(first.other_keywords, vec!["couples", "date night"]);
        let content = first.content.as_ref().unwrap();
        assert_eq!(content.content_type, "questions");
        assert!(content.intro.is_none());
        assert!(content.date.is_none());
        let titles: Vec<_> = content.paragraphs.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["First Topic", "Second Topic"]);
        assert!(content.paragraphs.iter().all(|p| p.description.is_none()));
        assert_eq!(first.example_question, Some(ExampleQuestion::default()));

        let second = &entries[1];
        assert_eq!(second.content.as_ref().unwrap().content_type, "guide");
        assert!(second.other_keywords.is_empty());
    }

    #[test]
    fn test_missing_column() {
        let sheet = "H1 (visible on the web page),H2s\nTitle,One\n";
        let err = entries_from_reader(sheet.as_bytes()).unwrap_err();
        assert!(err
            .to_string()
            .contains("Title (visible in the web search)"));
    }

    #[test]
    fn test_convert_csv_writes_json() {
        let dir = TempDir::new().unwrap();
        let csv_path = dir.path().join("keywords.csv");
        let json_path = dir.path().join("keywords.json");
        std::fs::write(&csv_path, SHEET).unwrap();

        let entries = convert_csv(&csv_path, &json_path).unwrap();
        assert_eq!(entries.len(), 2);

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
        assert_eq!(value[0]["h1"], "Questions to Ask Your Partner");
        assert_eq!(value[0]["content"]["metadata_description"], serde_json::Value::Null);
        assert_eq!(value[0]["content"]["paragraphs"][1]["title"], "Second Topic");
        assert_eq!(value[1]["content"]["type"], "guide");
        assert!(value[0]["content"].get("date").is_none());
    }
}
