//! Convert the keyword sheet into keyword entries

use anyhow::Result;
use std::path::Path;

use crate::content::convert::convert_csv;
use crate::Site;

/// Convert a CSV sheet to the keywords JSON file
///
/// `input` and `output` override the configured paths.
pub fn run(site: &Site, input: Option<&Path>, output: Option<&Path>) -> Result<()> {
    let input = input.unwrap_or(&site.csv_path);
    let output = output.unwrap_or(&site.keywords_path);

    let entries = convert_csv(input, output)?;

    tracing::info!("Converted {:?} to {:?}", input, output);
    println!("Processed {} entries.", entries.len());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::loader::load_entries;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_convert_command() {
        let dir = TempDir::new().unwrap();
        let site = Site::new(dir.path()).unwrap();
        fs::write(
            &site.csv_path,
            "Title (visible in the web search),H1 (visible on the web page),Primary keyword,H2s\n\
Fun Questions,Fun Questions for Friends,fun questions,One<br>Two\n",
        )
        .unwrap();

        run(&site, None, None).unwrap();

        let entries = load_entries(&site.keywords_path).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].h1, "Fun Questions for Friends");
        assert_eq!(entries[0].content.as_ref().unwrap().paragraphs.len(), 2);
    }

    #[test]
    fn test_convert_command_with_overrides() {
        let dir = TempDir::new().unwrap();
        let site = Site::new(dir.path()).unwrap();
        let input = dir.path().join("sheet.csv");
        let output = dir.path().join("out/entries.json");
        fs::write(
            &input,
            "Title (visible in the web search),H1 (visible on the web page),Primary keyword,H2s\nA,B,C,D\n",
        )
        .unwrap();

        run(&site, Some(&input), Some(&output)).unwrap();
        assert!(output.exists());
        assert!(!site.keywords_path.exists());
    }

    #[test]
    fn test_convert_command_missing_sheet() {
        let dir = TempDir::new().unwrap();
        let site = Site::new(dir.path()).unwrap();
        assert!(run(&site, None, None).is_err());
    }
}
