//! Page registry - единственный источник правды для маппинга path → page.

use leptos::prelude::*;

use super::overview::OverviewPage;
use super::records::{RecordsPage, ACCESS_ASSETS, EMPLOYEES, INVOICES, TASKS};
use crate::shared::page_loader::PageModule;

pub const OVERVIEW: PageModule = PageModule {
    path: "/dashboard",
    title: "Overview",
    icon: "overview",
    render: || view! { <OverviewPage /> }.into_any(),
};

pub static PAGE_MODULES: &[PageModule] = &[
    OVERVIEW,
    PageModule {
        path: "/dashboard/employees",
        title: "Employees",
        icon: "employees",
        render: || view! { <RecordsPage table=&EMPLOYEES /> }.into_any(),
    },
    PageModule {
        path: "/dashboard/invoices",
        title: "Invoices",
        icon: "invoices",
        render: || view! { <RecordsPage table=&INVOICES /> }.into_any(),
    },
    PageModule {
        path: "/dashboard/tasks",
        title: "Tasks",
        icon: "tasks",
        render: || view! { <RecordsPage table=&TASKS /> }.into_any(),
    },
    PageModule {
        path: "/dashboard/access-control",
        title: "Access control",
        icon: "access-control",
        render: || view! { <RecordsPage table=&ACCESS_ASSETS /> }.into_any(),
    },
];
