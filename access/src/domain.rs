use chrono::NaiveDate;
use strum_macros::{Display, EnumCount, EnumIter, EnumString};

/// Account record types the directory can be filtered by.
///
/// `Display`/`FromStr` use the value the account service expects on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumCount, EnumIter, Display, EnumString)]
pub enum RecordType {
    Family,
    Household,
    #[strum(serialize = "Person Account")]
    PersonAccount,
}

impl RecordType {
    /// Label shown in the type picker.
    pub fn label(&self) -> &'static str {
        match self {
            RecordType::Family => "Families",
            RecordType::Household => "Households",
            RecordType::PersonAccount => "Person Accounts",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    pub search_term: String,
    /// `None` leaves the directory unfiltered by type.
    pub record_type: Option<RecordType>,
}

impl SearchCriteria {
    pub fn new(search_term: impl Into<String>, record_type: Option<RecordType>) -> Self {
        Self {
            search_term: search_term.into(),
            record_type,
        }
    }

    /// Record type name as sent to the account service, empty when unfiltered.
    pub fn record_type_name(&self) -> String {
        self.record_type
            .map(|record_type| record_type.to_string())
            .unwrap_or_default()
    }
}

/// Account as returned by the directory. Only `id` is guaranteed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountRow {
    pub id: String,
    pub name: String,
    pub account_number: Option<String>,
    pub practice_name: Option<String>,
    pub approver_name: Option<String>,
    pub region: Option<String>,
}

impl AccountRow {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormVisibility {
    #[default]
    Hidden,
    Visible,
}

impl FormVisibility {
    pub fn is_visible(&self) -> bool {
        matches!(self, FormVisibility::Visible)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccessRequestDraft {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub indefinite: bool,
    pub notes: String,
}

impl AccessRequestDraft {
    pub fn apply(&mut self, field: DraftField) {
        match field {
            DraftField::StartDate(date) => self.start_date = date,
            DraftField::EndDate(date) => self.end_date = date,
            DraftField::Notes(notes) => self.notes = notes,
            DraftField::Indefinite(indefinite) => self.indefinite = indefinite,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// A single edit to the draft, one variant per form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftField {
    StartDate(Option<NaiveDate>),
    EndDate(Option<NaiveDate>),
    Notes(String),
    Indefinite(bool),
}

impl DraftField {
    pub const START_DATE: &'static str = "Start Date";
    pub const END_DATE: &'static str = "End Date";
    pub const NOTES: &'static str = "Notes";
    pub const INDEFINITE: &'static str = "Indefinite";

    /// Maps a labelled input change onto the draft field it edits.
    ///
    /// `value` is the input's text and `checked` its checkbox state; each field
    /// reads whichever one applies. Unknown labels map to `None`.
    pub fn from_label(label: &str, value: &str, checked: bool) -> Option<Self> {
        match label {
            Self::START_DATE => Some(DraftField::StartDate(parse_date_input(value))),
            Self::END_DATE => Some(DraftField::EndDate(parse_date_input(value))),
            Self::NOTES => Some(DraftField::Notes(value.to_string())),
            Self::INDEFINITE => Some(DraftField::Indefinite(checked)),
            _ => None,
        }
    }
}

/// Parses the `YYYY-MM-DD` value of a date input. Blank or malformed input is `None`.
pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Payload of the create-access-request call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateAccessRequest {
    pub account_id: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub indefinite: bool,
    pub notes: String,
}
