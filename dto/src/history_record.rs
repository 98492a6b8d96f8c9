use crate::document_links::DocumentLinks;
use crate::gender::Gender;
use crate::rank::Rank;
use crate::serde_tools::empty_string_as_none;
use chrono::NaiveDate;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

const DATE_FORMAT: &str = "%Y/%m/%d";

/// A prior submission made with the same access key.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRecord {
    #[serde(default)]
    key: String,
    name: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pdf1: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pdf2: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pdf3: Option<String>,
    #[serde(default)]
    timestamp: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    date: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    rank: Option<Rank>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    team_number: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    serial_number: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    gender: Option<Gender>,
}

impl HistoryRecord {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        key: String,
        name: String,
        documents: DocumentLinks,
        date: String,
        rank: Option<Rank>,
        team_number: Option<String>,
        serial_number: Option<String>,
        gender: Option<Gender>,
    ) -> Self {
        let (pdf1, pdf2, pdf3) = documents.into_parts();
        Self {
            key,
            name,
            pdf1,
            pdf2,
            pdf3,
            timestamp: date.clone(),
            date: Some(date),
            rank,
            team_number,
            serial_number,
            gender,
        }
    }

    pub fn documents(&self) -> DocumentLinks {
        DocumentLinks::new(self.pdf1.clone(), self.pdf2.clone(), self.pdf3.clone())
    }

    /// `date` when the service filled it, `timestamp` otherwise.
    pub fn display_date(&self) -> &str {
        self.date.as_deref().unwrap_or(&self.timestamp)
    }

    pub fn recorded_on(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.display_date().trim(), DATE_FORMAT).ok()
    }

    /// Newest record of the list. Records without a readable date come after any dated one;
    /// among equals, the first one in the list wins.
    pub fn newest(records: &[HistoryRecord]) -> Option<&HistoryRecord> {
        records.iter().reduce(|newest, record| {
            if record.recorded_on() > newest.recorded_on() {
                record
            } else {
                newest
            }
        })
    }
}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::*;

    pub fn leader_record() -> HistoryRecord {
        HistoryRecord::new(
            "123456".to_owned(),
            "محمد أحمد".to_owned(),
            DocumentLinks::new(
                Some("https://example.com/pdf1".to_owned()),
                Some("https://example.com/pdf2".to_owned()),
                Some("https://example.com/pdf3".to_owned()),
            ),
            "2025/04/01".to_owned(),
            Some(Rank::Leader),
            Some("5".to_owned()),
            Some("101".to_owned()),
            Some(Gender::LeaderMale),
        )
    }

    pub fn older_leader_record() -> HistoryRecord {
        HistoryRecord::new(
            "123456".to_owned(),
            "أحمد علي".to_owned(),
            DocumentLinks::new(
                Some("https://example.com/pdf1_2".to_owned()),
                None,
                Some("https://example.com/pdf3_2".to_owned()),
            ),
            "2025/03/20".to_owned(),
            Some(Rank::Leader),
            Some("6".to_owned()),
            Some("102".to_owned()),
            Some(Gender::LeaderMale),
        )
    }

    pub fn scout_record(key: &str) -> HistoryRecord {
        HistoryRecord::new(
            key.to_owned(),
            "خالد علي".to_owned(),
            DocumentLinks::new(
                Some("https://example.com/pdf1".to_owned()),
                Some("https://example.com/pdf2".to_owned()),
                None,
            ),
            "2025/04/05".to_owned(),
            Some(Rank::Scout),
            Some("7".to_owned()),
            Some("103".to_owned()),
            None,
        )
    }

    #[test]
    fn should_deserialize_record_from_script_service() {
        let json = r#"{
            "name": "أحمد علي",
            "key": "123456",
            "pdf1": "https://example.com/pdf1_2",
            "pdf2": null,
            "pdf3": "https://example.com/pdf3_2",
            "teamNumber": "6",
            "serialNumber": "102",
            "gender": "قائد",
            "timestamp": "2025/03/20",
            "rank": "قائد",
            "date": "2025/03/20"
        }"#;

        let record: HistoryRecord = serde_json::from_str(json).unwrap();

        assert_eq!(older_leader_record(), record);
    }

    #[test]
    fn should_read_blank_gender_as_none() {
        let json = r#"{"name": "خالد علي", "gender": "", "timestamp": "2025/04/05"}"#;

        let record: HistoryRecord = serde_json::from_str(json).unwrap();

        assert_eq!(&None, record.gender());
        assert_eq!("2025/04/05", record.display_date());
    }

    #[test]
    fn should_find_newest_record_whatever_the_order() {
        let records = vec![older_leader_record(), leader_record()];
        assert_eq!(Some(&leader_record()), HistoryRecord::newest(&records));

        let records = vec![leader_record(), older_leader_record()];
        assert_eq!(Some(&leader_record()), HistoryRecord::newest(&records));
    }

    #[test]
    fn should_prefer_dated_record_over_undated_one() {
        let json = r#"{"name": "بدون تاريخ", "timestamp": "someday"}"#;
        let undated: HistoryRecord = serde_json::from_str(json).unwrap();
        let records = vec![undated, older_leader_record()];

        assert_eq!(
            Some(&older_leader_record()),
            HistoryRecord::newest(&records)
        );
    }

    #[test]
    fn should_keep_first_record_when_dates_are_equal() {
        let first = leader_record();
        let mut second = older_leader_record();
        second.date = first.date.clone();
        let records = vec![first.clone(), second];

        assert_eq!(Some(&first), HistoryRecord::newest(&records));
    }

    #[test]
    fn should_find_no_newest_record_when_empty() {
        assert_eq!(None, HistoryRecord::newest(&[]));
    }
}
