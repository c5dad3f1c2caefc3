//! Schedule, student directory and document records.

use serde::{Deserialize, Serialize};

use crate::listing::Filterable;
use crate::services::Resource;
use crate::utils::text;

/// Weekday names in display order.
pub const WEEKDAYS: [&str; 7] = [
    "Senin", "Selasa", "Rabu", "Kamis", "Jumat", "Sabtu", "Minggu",
];

/// One class meeting in the schedule (`jadwal`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScheduleEntry {
    #[serde(deserialize_with = "super::deserialize_id")]
    pub id: u64,

    pub course: String,

    #[serde(default)]
    pub lecturer: String,

    /// Weekday name, e.g. "Senin"
    pub day: String,

    #[serde(default)]
    pub start_time: String,

    #[serde(default)]
    pub end_time: String,

    #[serde(default)]
    pub room: String,

    #[serde(default)]
    pub semester: Option<String>,

    #[serde(default)]
    pub class_group: Option<String>,
}

impl ScheduleEntry {
    /// Position of the entry's weekday; unknown names sort last.
    pub fn day_index(&self) -> usize {
        WEEKDAYS
            .iter()
            .position(|d| d.eq_ignore_ascii_case(self.day.trim()))
            .unwrap_or(WEEKDAYS.len())
    }

    /// "08:00 - 09:40", or whichever half is known.
    pub fn time_range(&self) -> String {
        match (self.start_time.is_empty(), self.end_time.is_empty()) {
            (false, false) => format!("{} - {}", self.start_time, self.end_time),
            (false, true) => self.start_time.clone(),
            (true, false) => self.end_time.clone(),
            (true, true) => String::new(),
        }
    }
}

impl Resource for ScheduleEntry {
    const PATH: &'static str = "jadwal";
    const LABEL: &'static str = "Jadwal Kuliah";
}

impl Filterable for ScheduleEntry {
    fn search_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.course,
            self.lecturer,
            self.room,
            self.class_group.as_deref().unwrap_or("")
        )
    }

    fn category(&self) -> Option<&str> {
        Some(self.day.as_str())
    }
}

/// A student directory entry (`mahasiswa`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Student {
    #[serde(deserialize_with = "super::deserialize_id")]
    pub id: u64,

    /// Student registration number
    #[serde(deserialize_with = "super::deserialize_text")]
    pub nim: String,

    pub name: String,

    /// Year of enrolment
    #[serde(default)]
    pub cohort: Option<i32>,

    /// Study program
    #[serde(default)]
    pub program: String,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub photo: Option<String>,
}

impl Student {
    /// Up to two initials for the avatar placeholder.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

impl Resource for Student {
    const PATH: &'static str = "mahasiswa";
    const LABEL: &'static str = "Mahasiswa";
}

impl Filterable for Student {
    fn search_text(&self) -> String {
        format!("{} {}", self.name, self.nim)
    }

    fn category(&self) -> Option<&str> {
        Some(self.program.as_str()).filter(|p| !p.is_empty())
    }

    fn year(&self) -> Option<i32> {
        self.cohort
    }
}

/// A downloadable document (`dokumen`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Document {
    #[serde(deserialize_with = "super::deserialize_id")]
    pub id: u64,

    pub title: String,

    #[serde(default)]
    pub category: String,

    pub file_url: String,

    #[serde(default)]
    pub published_at: Option<String>,
}

impl Document {
    /// Upper-cased file extension for the type badge, e.g. "PDF".
    pub fn extension(&self) -> Option<String> {
        let path = url::Url::parse(&self.file_url)
            .map(|u| u.path().to_string())
            .unwrap_or_else(|_| self.file_url.clone());
        let name = path.rsplit('/').next()?;
        let (_, ext) = name.rsplit_once('.')?;
        (!ext.is_empty()).then(|| ext.to_uppercase())
    }
}

impl Resource for Document {
    const PATH: &'static str = "dokumen";
    const LABEL: &'static str = "Dokumen";
}

impl Filterable for Document {
    fn search_text(&self) -> String {
        self.title.clone()
    }

    fn category(&self) -> Option<&str> {
        Some(self.category.as_str()).filter(|c| !c.is_empty())
    }

    fn year(&self) -> Option<i32> {
        self.published_at.as_deref().and_then(text::year_of)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(day: &str) -> ScheduleEntry {
        ScheduleEntry {
            id: 1,
            course: "Basis Data".to_string(),
            lecturer: "Dr. Sari".to_string(),
            day: day.to_string(),
            start_time: "08:00".to_string(),
            end_time: "09:40".to_string(),
            room: "R.201".to_string(),
            semester: None,
            class_group: Some("A".to_string()),
        }
    }

    #[test]
    fn test_day_index() {
        assert_eq!(entry("Senin").day_index(), 0);
        assert_eq!(entry("jumat").day_index(), 4);
        assert_eq!(entry("Libur").day_index(), WEEKDAYS.len());
    }

    #[test]
    fn test_time_range() {
        assert_eq!(entry("Senin").time_range(), "08:00 - 09:40");
        let mut e = entry("Senin");
        e.end_time.clear();
        assert_eq!(e.time_range(), "08:00");
    }

    #[test]
    fn test_student_numeric_nim() {
        let student: Student = serde_json::from_str(
            r#"{"id": 1, "nim": 2101001, "name": "budi santoso", "cohort": 2021}"#,
        )
        .unwrap();
        assert_eq!(student.nim, "2101001");
        assert_eq!(student.initials(), "BS");
        assert_eq!(student.year(), Some(2021));
    }

    #[test]
    fn test_document_extension() {
        let doc = Document {
            id: 1,
            title: "Panduan Akademik".to_string(),
            category: "Panduan".to_string(),
            file_url: "https://cdn.example.ac.id/files/panduan.pdf?v=2".to_string(),
            published_at: None,
        };
        assert_eq!(doc.extension(), Some("PDF".to_string()));

        let doc = Document {
            file_url: "https://cdn.example.ac.id/files/unduh".to_string(),
            ..doc
        };
        assert_eq!(doc.extension(), None);
    }
}
