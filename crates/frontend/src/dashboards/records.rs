//! Static sample records with a local search filter.

use leptos::prelude::*;

use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

pub struct RecordTable {
    pub page_id: &'static str,
    pub title: &'static str,
    pub columns: &'static [&'static str],
    pub rows: &'static [&'static [&'static str]],
}

pub static EMPLOYEES: RecordTable = RecordTable {
    page_id: "employees--list",
    title: "Employees",
    columns: &["Name", "Position", "Department", "Status"],
    rows: &[
        &["Anna Petrova", "Store manager", "Operations", "Active"],
        &["David Kim", "Accountant", "Finance", "Active"],
        &["Maria Lopez", "Technician", "Maintenance", "On leave"],
        &["Omar Haddad", "Cashier", "Sales", "Active"],
    ],
};

pub static INVOICES: RecordTable = RecordTable {
    page_id: "invoices--list",
    title: "Invoices",
    columns: &["Number", "Customer", "Amount", "Status"],
    rows: &[
        &["INV-1042", "Northwind Ltd", "1 250.00", "Paid"],
        &["INV-1043", "Contoso", "980.50", "Overdue"],
        &["INV-1044", "Fabrikam", "4 310.00", "Draft"],
    ],
};

pub static TASKS: RecordTable = RecordTable {
    page_id: "tasks--list",
    title: "Tasks",
    columns: &["Task", "Assignee", "Due", "Priority"],
    rows: &[
        &["Restock shelf B4", "Omar Haddad", "2024-05-02", "High"],
        &["Quarterly audit", "David Kim", "2024-06-30", "Medium"],
        &["Replace HVAC filter", "Maria Lopez", "2024-05-10", "Low"],
    ],
};

pub static ACCESS_ASSETS: RecordTable = RecordTable {
    page_id: "access-control--list",
    title: "Access control",
    columns: &["Asset", "Type", "Holder", "Zone"],
    rows: &[
        &["Badge 00871", "Card", "Anna Petrova", "All zones"],
        &["Key K-12", "Physical key", "Maria Lopez", "Plant room"],
        &["Door D-3", "Reader", "-", "Warehouse"],
    ],
};

fn row_matches(row: &[&str], query: &str) -> bool {
    let query = query.trim().to_lowercase();
    query.is_empty() || row.iter().any(|cell| cell.to_lowercase().contains(&query))
}

#[component]
pub fn RecordsPage(table: &'static RecordTable) -> impl IntoView {
    let (query, set_query) = signal(String::new());

    let visible_rows = move || {
        query.with(|q| {
            table
                .rows
                .iter()
                .filter(|row| row_matches(row, q))
                .copied()
                .collect::<Vec<_>>()
        })
    };

    view! {
        <PageFrame page_id=table.page_id category=PAGE_CAT_LIST>
            <div class="page__header">
                <h1>{table.title}</h1>
                <input
                    type="search"
                    class="page__search"
                    placeholder="Search"
                    value=move || query.get()
                    on:input=move |ev| set_query.set(event_target_value(&ev))
                />
            </div>
            <div class="page__content">
                <table class="records-table">
                    <thead>
                        <tr>
                            {table.columns.iter().map(|c| view! { <th>{*c}</th> }).collect_view()}
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            visible_rows()
                                .into_iter()
                                .map(|row| {
                                    view! {
                                        <tr>
                                            {row.iter().map(|cell| view! { <td>{*cell}</td> }).collect_view()}
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_matches() {
        let row: &[&str] = &["INV-1042", "Northwind Ltd", "1 250.00", "Paid"];
        assert!(row_matches(row, ""));
        assert!(row_matches(row, "northwind"));
        assert!(row_matches(row, " PAID "));
        assert!(!row_matches(row, "overdue"));
    }
}
