//! News item data structure.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Kind of announcement a news item carries.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum NewsCategory {
    Registration,
    Academic,
    Announcement,
    Deadline,
    Event,
    #[serde(rename = "WIL")]
    Wil,
}

impl fmt::Display for NewsCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            NewsCategory::Registration => "Registration",
            NewsCategory::Academic => "Academic",
            NewsCategory::Announcement => "Announcement",
            NewsCategory::Deadline => "Deadline",
            NewsCategory::Event => "Event",
            NewsCategory::Wil => "WIL",
        };
        f.write_str(label)
    }
}

/// Display priority of a news item.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Label shown next to the date, e.g. "High Priority".
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "High Priority",
            Priority::Medium => "Medium Priority",
            Priority::Low => "Low Priority",
        }
    }
}

/// File type of a news attachment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Pdf,
    Png,
    Jpg,
    Jpeg,
    Docx,
}

impl FileType {
    fn as_upper(&self) -> &'static str {
        match self {
            FileType::Pdf => "PDF",
            FileType::Png => "PNG",
            FileType::Jpg => "JPG",
            FileType::Jpeg => "JPEG",
            FileType::Docx => "DOCX",
        }
    }
}

/// A downloadable attachment. The URL is never interpreted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DownloadFile {
    pub filename: String,
    pub url: String,
    #[serde(rename = "type")]
    pub file_type: FileType,
    /// Human-readable size (e.g., "2.1 MB")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

impl DownloadFile {
    /// Download button label, e.g. "Download PDF (2.1 MB)".
    pub fn label(&self) -> String {
        match &self.size {
            Some(size) => format!("Download {} ({})", self.file_type.as_upper(), size),
            None => format!("Download {}", self.file_type.as_upper()),
        }
    }
}

/// A news item shown in the feed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewsItem {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub content: String,

    /// Publication date (ISO format in data files)
    pub date: NaiveDate,

    pub category: NewsCategory,
    pub priority: Priority,

    #[serde(default)]
    pub is_urgent: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download: Option<DownloadFile>,
}

impl NewsItem {
    /// Date formatted for display, e.g. "Aug 5, 2025".
    pub fn display_date(&self) -> String {
        self.date.format("%b %-d, %Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_item() -> NewsItem {
        NewsItem {
            id: "1".to_string(),
            title: "Huawei ICT Competition".to_string(),
            summary: "Summary".to_string(),
            content: "Content".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 8, 5).unwrap(),
            category: NewsCategory::Event,
            priority: Priority::High,
            is_urgent: false,
            download: Some(DownloadFile {
                filename: "Huawei_ICT_Competition.pdf".to_string(),
                url: "/downloads/Huawei_ICT_Competition.pdf".to_string(),
                file_type: FileType::Pdf,
                size: Some("2.1 MB".to_string()),
            }),
        }
    }

    #[test]
    fn test_display_date() {
        assert_eq!(sample_item().display_date(), "Aug 5, 2025");
    }

    #[test]
    fn test_download_label() {
        let item = sample_item();
        let mut download = item.download.unwrap();
        assert_eq!(download.label(), "Download PDF (2.1 MB)");

        download.size = None;
        assert_eq!(download.label(), "Download PDF");
    }

    #[test]
    fn test_parse_from_json() {
        let json = r#"{
            "id": "5",
            "title": "Email Verification Reminder",
            "summary": "Verify your email",
            "content": "Verify your email with EC",
            "date": "2025-07-30",
            "category": "Announcement",
            "priority": "medium",
            "is_urgent": true
        }"#;
        let item: NewsItem = serde_json::from_str(json).unwrap();
        assert!(item.is_urgent);
        assert_eq!(item.priority.label(), "Medium Priority");
        assert!(item.download.is_none());
    }

    #[test]
    fn test_parse_rejects_unknown_priority() {
        let json = r#"{
            "id": "x", "title": "t", "summary": "s", "content": "c",
            "date": "2025-07-30", "category": "WIL", "priority": "urgent"
        }"#;
        assert!(serde_json::from_str::<NewsItem>(json).is_err());
    }
}
