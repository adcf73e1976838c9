//! Output rendering for search results
//!
//! The text form follows the CLI contract: a blank line, then either
//! `No path exists!` or `Path found!` with the decoded titles joined by
//! ` --> `. The JSON report carries the same data for machine consumers.

use crate::title::PageTitle;
use crate::Result;
use serde::Serialize;

/// Renders a path as decoded titles joined with ` --> `
pub fn format_path(path: &[PageTitle]) -> String {
    path.iter()
        .map(|title| title.to_string())
        .collect::<Vec<_>>()
        .join(" --> ")
}

/// Prints the final outcome in the text format
pub fn print_outcome(path: Option<&[PageTitle]>) {
    println!();
    match path {
        Some(path) => {
            println!("Path found!");
            println!("{}", format_path(path));
        }
        None => println!("No path exists!"),
    }
}

/// Machine-readable search report
#[derive(Debug, Serialize)]
pub struct PathReport {
    pub start: String,
    pub end: String,
    pub max_distance: u32,
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hops: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<String>>,
}

impl PathReport {
    /// Builds a report from a search outcome
    pub fn new(
        start: &PageTitle,
        end: &PageTitle,
        max_distance: u32,
        path: Option<&[PageTitle]>,
    ) -> Self {
        Self {
            start: start.to_string(),
            end: end.to_string(),
            max_distance,
            found: path.is_some(),
            hops: path.map(|p| p.len().saturating_sub(1) as u32),
            path: path.map(|p| p.iter().map(|t| t.to_string()).collect()),
        }
    }

    /// Serializes the report as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(names: &[&str]) -> Vec<PageTitle> {
        names.iter().map(|n| PageTitle::new(n)).collect()
    }

    #[test]
    fn test_format_path_joins_with_arrows() {
        let path = titles(&["Terence_Tao", "Fields_Medal", "Leonhard_Euler"]);
        assert_eq!(
            format_path(&path),
            "Terence_Tao --> Fields_Medal --> Leonhard_Euler"
        );
    }

    #[test]
    fn test_format_path_single_element() {
        let path = titles(&["Terence_Tao"]);
        assert_eq!(format_path(&path), "Terence_Tao");
    }

    #[test]
    fn test_format_path_uses_decoded_titles() {
        let path = titles(&["A", "Caf%C3%A9"]);
        assert_eq!(format_path(&path), "A --> Café");
    }

    #[test]
    fn test_report_for_found_path() {
        let path = titles(&["A", "B", "C"]);
        let report = PathReport::new(&PageTitle::new("A"), &PageTitle::new("C"), 4, Some(&path));

        assert!(report.found);
        assert_eq!(report.hops, Some(2));
        assert_eq!(
            report.path,
            Some(vec!["A".to_string(), "B".to_string(), "C".to_string()])
        );
    }

    #[test]
    fn test_report_for_missing_path() {
        let report = PathReport::new(&PageTitle::new("A"), &PageTitle::new("Z"), 2, None);

        assert!(!report.found);
        assert_eq!(report.hops, None);
        assert_eq!(report.path, None);
    }

    #[test]
    fn test_report_json_shape() {
        let path = titles(&["A", "B"]);
        let report = PathReport::new(&PageTitle::new("A"), &PageTitle::new("B"), 3, Some(&path));

        let json: serde_json::Value =
            serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(json["found"], true);
        assert_eq!(json["hops"], 1);
        assert_eq!(json["path"][1], "B");
    }

    #[test]
    fn test_report_json_omits_absent_path() {
        let report = PathReport::new(&PageTitle::new("A"), &PageTitle::new("Z"), 2, None);

        let json: serde_json::Value =
            serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert!(json.get("path").is_none());
        assert!(json.get("hops").is_none());
    }
}
