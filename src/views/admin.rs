use crate::Route;
use dioxus::prelude::*;

/// Tables an administrator may manage
pub const ADMIN_TABLES: &[&str] = &[
    "Alert",
    "User",
    "Ticker",
    "Portfolio",
    "PriceHistory",
    "Holdings",
    "AuditLog",
];

pub fn is_admin_table(name: &str) -> bool {
    ADMIN_TABLES.contains(&name)
}

#[component]
pub fn Admin() -> Element {
    rsx! {
        div { id: "admin-page",
            h1 { "Admin" }
            h2 { "Tables" }
            ul { class: "table-list",
                for table in ADMIN_TABLES.iter() {
                    li { key: "{table}",
                        Link {
                            to: Route::AdminTable {
                                table: table.to_string(),
                            },
                            "{table}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn AdminTable(table: String) -> Element {
    rsx! {
        div { id: "admin-table-page",
            if is_admin_table(&table) {
                h1 { "{table}" }
            } else {
                h1 { "Unknown table" }
                p { class: "error-message", "\"{table}\" is not an administrable table." }
            }
            Link { to: Route::Admin {}, "Back to tables" }
        }
    }
}
