use crate::domain::AccountRow;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountField {
    Name,
    AccountNumber,
    PracticeName,
    ApproverName,
    Region,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Field(AccountField),
    /// Button cell; `name` identifies the row action it fires.
    Action {
        label: &'static str,
        name: &'static str,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub label: &'static str,
    pub kind: ColumnKind,
    pub sortable: bool,
    pub class: Option<&'static str>,
}

impl Column {
    const fn field(label: &'static str, field: AccountField, sortable: bool) -> Self {
        Self {
            label,
            kind: ColumnKind::Field(field),
            sortable,
            class: None,
        }
    }
}

pub const REQUEST_ACTION: &str = "request";

/// Columns of the account results table, in display order.
pub const ACCOUNT_COLUMNS: [Column; 6] = [
    Column::field("Name", AccountField::Name, true),
    Column::field("Client Code", AccountField::AccountNumber, false),
    Column::field("Practice", AccountField::PracticeName, false),
    Column::field("Approver", AccountField::ApproverName, false),
    Column::field("Region", AccountField::Region, false),
    Column {
        label: "Request",
        kind: ColumnKind::Action {
            label: "Request Access",
            name: REQUEST_ACTION,
        },
        sortable: false,
        class: Some("violet-button"),
    },
];

impl AccountRow {
    /// Cell text for `field`, blank when the service left it out.
    pub fn field(&self, field: AccountField) -> &str {
        match field {
            AccountField::Name => &self.name,
            AccountField::AccountNumber => self.account_number.as_deref().unwrap_or_default(),
            AccountField::PracticeName => self.practice_name.as_deref().unwrap_or_default(),
            AccountField::ApproverName => self.approver_name.as_deref().unwrap_or_default(),
            AccountField::Region => self.region.as_deref().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

/// Case-insensitive, stable sort on the account name.
pub fn sort_by_name(rows: &mut [AccountRow], direction: SortDirection) {
    rows.sort_by(|a, b| {
        let ordering = compare_names(&a.name, &b.name);
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::Fake;
    use fake::faker::company::en::CompanyName;

    #[test]
    fn test_only_name_is_sortable() {
        let sortable: Vec<&str> = ACCOUNT_COLUMNS
            .iter()
            .filter(|c| c.sortable)
            .map(|c| c.label)
            .collect();
        assert_eq!(sortable, vec!["Name"]);
    }

    #[test]
    fn test_last_column_is_request_action() {
        let last = ACCOUNT_COLUMNS[ACCOUNT_COLUMNS.len() - 1];
        assert_eq!(last.label, "Request");
        assert_eq!(
            last.kind,
            ColumnKind::Action {
                label: "Request Access",
                name: "request"
            }
        );
    }

    #[test]
    fn test_missing_fields_render_blank() {
        let mut row = AccountRow::new("001", "Acme");
        row.region = Some("EMEA".to_string());
        assert_eq!(row.field(AccountField::Name), "Acme");
        assert_eq!(row.field(AccountField::Region), "EMEA");
        assert_eq!(row.field(AccountField::ApproverName), "");
    }

    #[test]
    fn test_sort_by_name_ignores_case() {
        let mut rows: Vec<AccountRow> = (0..20)
            .map(|i| AccountRow::new(i.to_string(), CompanyName().fake::<String>()))
            .collect();
        rows.push(AccountRow::new("a", "acme"));
        rows.push(AccountRow::new("b", "Acme Holdings"));

        sort_by_name(&mut rows, SortDirection::Ascending);
        assert!(
            rows.windows(2)
                .all(|w| w[0].name.to_lowercase() <= w[1].name.to_lowercase())
        );

        sort_by_name(&mut rows, SortDirection::Descending);
        assert!(
            rows.windows(2)
                .all(|w| w[0].name.to_lowercase() >= w[1].name.to_lowercase())
        );
    }

    #[test]
    fn test_toggle_direction() {
        assert_eq!(SortDirection::Ascending.toggled(), SortDirection::Descending);
        assert_eq!(SortDirection::Descending.toggled(), SortDirection::Ascending);
    }
}
