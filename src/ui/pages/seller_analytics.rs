// src/ui/pages/seller_analytics.rs - Sales heatmap, streaks, per-product numbers

use chrono::{Datelike, NaiveDate};
use dioxus::prelude::*;
#[allow(unused_imports)]
use dioxus_router::prelude::*;

use crate::activity::SalesActivityMap;
use crate::api::AnalyticsCounters;
use crate::catalog::{CatalogQuery, Product, SortBy};
use crate::ui::{
    pages::{EmptyState, PageError, PageSkeleton, PageWrapper, StatCard},
    state::{use_services, use_app_dispatch, AppAction},
    Notification,
};

/// Sales-map lifecycle. `Empty` and `Failed` are explicit so the page never
/// keeps rendering stale activity after a refetch went wrong.
#[derive(Debug, Clone, PartialEq)]
enum ActivityState {
    Loading,
    Loaded {
        map: SalesActivityMap,
        year_joined: i32,
    },
    Empty {
        year_joined: i32,
    },
    Failed(String),
}

/// Seller analytics page
#[component]
pub fn SellerAnalytics() -> Element {
    let services = use_services();
    let current_year = chrono::Utc::now().year();

    let mut activity = use_signal(|| ActivityState::Loading);
    let mut year = use_signal(|| current_year);

    use_future({
        let api = services.api.clone();
        move || {
            let api = api.clone();
            async move {
                match api.sales_map().await {
                    Ok(response) => {
                        let map = SalesActivityMap::from_wire(&response.sales_by_date);
                        if map.is_empty() {
                            activity.set(ActivityState::Empty {
                                year_joined: response.year_joined,
                            });
                        } else {
                            activity.set(ActivityState::Loaded {
                                map,
                                year_joined: response.year_joined,
                            });
                        }
                    }
                    Err(error) => activity.set(ActivityState::Failed(error.user_message())),
                }
            }
        }
    });

    let body = match activity() {
        ActivityState::Loading => rsx! { PageSkeleton {} },
        ActivityState::Failed(message) => rsx! { PageError { message: message } },
        ActivityState::Empty { .. } => rsx! {
            EmptyState {
                icon: "📈".to_string(),
                title: "No sales recorded yet".to_string(),
                description: "The heatmap fills in as orders come through.".to_string()
            }
        },
        ActivityState::Loaded { map, year_joined } => {
            let today = chrono::Utc::now().date_naive();
            let stats = map.streaks(today);
            let years: Vec<i32> = (year_joined..=current_year).rev().collect();

            rsx! {
                div {
                    class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6",
                    StatCard {
                        title: "Current streak".to_string(),
                        value: format!("{} days", stats.current_streak),
                        icon: Some("🔥".to_string())
                    }
                    StatCard {
                        title: "Longest streak".to_string(),
                        value: format!("{} days", stats.longest_streak),
                        icon: Some("🏆".to_string())
                    }
                    StatCard {
                        title: "Total sales".to_string(),
                        value: stats.total_sales.to_string(),
                        icon: Some("🧾".to_string())
                    }
                    StatCard {
                        title: "Best day".to_string(),
                        value: match stats.best_day {
                            Some((date, count)) => format!("{} ({})", date.format("%b %-d"), count),
                            None => "—".to_string(),
                        },
                        icon: Some("⭐".to_string())
                    }
                }

                div {
                    class: "bg-white shadow rounded-lg p-6",
                    div {
                        class: "flex items-center justify-between mb-4",
                        h2 { class: "text-lg font-medium text-gray-900", "Sales calendar" }
                        select {
                            class: "border-gray-300 rounded-md text-sm focus:ring-gray-500 focus:border-gray-500",
                            value: "{year}",
                            onchange: move |event| {
                                if let Ok(selected) = event.value().parse::<i32>() {
                                    year.set(selected);
                                }
                            },
                            for y in years {
                                option { value: "{y}", "{y}" }
                            }
                        }
                    }
                    Heatmap { map: map.clone(), year: year() }
                }

                ProductAnalyticsPanel {}
            }
        }
    };

    rsx! {
        PageWrapper {
            title: "Sales Analytics".to_string(),
            subtitle: Some("Every day you sold, at a glance".to_string()),
            {body}
        }
    }
}

/// GitHub-style year heatmap: one column per week, one row per weekday
#[component]
fn Heatmap(map: SalesActivityMap, year: i32) -> Element {
    let weeks = map.calendar_grid(year);

    rsx! {
        div {
            class: "overflow-x-auto",
            div {
                class: "flex gap-1",
                for (week_index, week) in weeks.iter().enumerate() {
                    div {
                        key: "{week_index}",
                        class: "flex flex-col gap-1",
                        for cell in week.iter() {
                            div {
                                key: "{cell.date}",
                                class: "h-3 w-3 rounded-sm",
                                style: heatmap_cell_style(&map, cell),
                                title: format!("{}: {} sales", cell.date.format("%Y-%m-%d"), cell.count),
                            }
                        }
                    }
                }
            }
            p {
                class: "mt-3 text-xs text-gray-400",
                "Shading is relative to each month's best day."
            }
        }
    }
}

fn heatmap_cell_style(map: &SalesActivityMap, cell: &crate::activity::CalendarCell) -> String {
    if !cell.in_year {
        return "background-color: transparent".to_string();
    }
    let intensity = map.intensity(cell);
    if intensity == 0.0 {
        "background-color: #e5e7eb".to_string()
    } else {
        format!("background-color: rgba(17, 24, 39, {:.2})", intensity)
    }
}

#[derive(Debug, Clone, PartialEq)]
enum AnalyticsState {
    Idle,
    Loading,
    Loaded(Box<(Product, AnalyticsCounters)>),
}

/// Per-product counters, loaded on demand for a chosen product
#[component]
fn ProductAnalyticsPanel() -> Element {
    let services = use_services();
    let dispatch = use_app_dispatch();

    let mut products = use_signal(Vec::<Product>::new);
    let mut selected = use_signal(|| AnalyticsState::Idle);

    use_future({
        let api = services.api.clone();
        move || {
            let api = api.clone();
            async move {
                let query = CatalogQuery::new(100, SortBy::Popularity);
                if let Ok(page) = api.fetch_products(&query).await {
                    products.set(page.products);
                }
            }
        }
    });

    let on_pick = use_callback({
        let api = services.api.clone();
        move |product_id: String| {
            if product_id.is_empty() {
                selected.set(AnalyticsState::Idle);
                return;
            }
            selected.set(AnalyticsState::Loading);
            let api = api.clone();
            let dispatch = dispatch;
            spawn(async move {
                match api.product_analytics(&product_id).await {
                    Ok(response) => selected.set(AnalyticsState::Loaded(Box::new((
                        response.info,
                        response.analytics,
                    )))),
                    Err(error) => {
                        dispatch(AppAction::AddNotification(Notification::error(
                            error.user_message(),
                        )));
                        selected.set(AnalyticsState::Idle);
                    }
                }
            });
        }
    });

    rsx! {
        div {
            class: "bg-white shadow rounded-lg p-6",
            h2 { class: "text-lg font-medium text-gray-900 mb-4", "Product analytics" }
            select {
                class: "border-gray-300 rounded-md text-sm focus:ring-gray-500 focus:border-gray-500 mb-4",
                onchange: move |event| on_pick.call(event.value()),
                option { value: "", "Choose a product..." }
                for product in products() {
                    option { value: "{product.id}", "{product.name}" }
                }
            }

            match selected() {
                AnalyticsState::Idle => rsx! {
                    p { class: "text-sm text-gray-500", "Pick a product to see its numbers." }
                },
                AnalyticsState::Loading => rsx! {
                    p { class: "text-sm text-gray-500 animate-pulse", "Loading..." }
                },
                AnalyticsState::Loaded(boxed) => {
                    let (product, counters) = *boxed;
                    rsx! {
                        div {
                            class: "grid grid-cols-2 md:grid-cols-4 gap-4",
                            AnalyticsCell { label: "Views".to_string(), value: counters.views }
                            AnalyticsCell { label: "Ordered".to_string(), value: counters.times_ordered }
                            AnalyticsCell { label: "Added to cart".to_string(), value: counters.added_to_cart }
                            AnalyticsCell { label: "Returned".to_string(), value: counters.times_returned }
                        }
                        p {
                            class: "mt-3 text-sm text-gray-500",
                            "{product.name} · {product.category.name}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn AnalyticsCell(label: String, value: u64) -> Element {
    rsx! {
        div {
            class: "text-center bg-gray-50 rounded-md p-4",
            p { class: "text-2xl font-semibold text-gray-900", "{value}" }
            p { class: "text-xs text-gray-500 uppercase tracking-wider", "{label}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map_with(entries: &[(&str, u32)]) -> SalesActivityMap {
        let raw = entries
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect::<std::collections::BTreeMap<_, _>>();
        SalesActivityMap::from_wire(&raw)
    }

    #[test]
    fn test_cell_style_for_zero_and_sale_days() {
        let map = map_with(&[("2025-03-10", 4), ("2025-03-20", 1)]);
        let grid = map.calendar_grid(2025);
        let cells: Vec<_> = grid.iter().flatten().collect();

        let sale_day = cells
            .iter()
            .find(|c| c.date == NaiveDate::from_ymd_opt(2025, 3, 10).unwrap())
            .unwrap();
        assert!(heatmap_cell_style(&map, sale_day).contains("rgba(17, 24, 39, 1.00)"));

        let quiet_day = cells
            .iter()
            .find(|c| c.date == NaiveDate::from_ymd_opt(2025, 3, 11).unwrap())
            .unwrap();
        assert_eq!(heatmap_cell_style(&map, quiet_day), "background-color: #e5e7eb");
    }

    #[test]
    fn test_out_of_year_cells_are_transparent() {
        let map = map_with(&[("2025-01-01", 2)]);
        let grid = map.calendar_grid(2025);
        // 2025-01-01 is a Wednesday; the first week starts in 2024.
        let boundary = grid[0][0];
        assert!(!boundary.in_year);
        assert_eq!(
            heatmap_cell_style(&map, &boundary),
            "background-color: transparent"
        );
    }

    #[test]
    fn test_faint_days_clamp_at_twenty_percent() {
        let map = map_with(&[("2025-06-01", 100), ("2025-06-15", 1)]);
        let grid = map.calendar_grid(2025);
        let faint = grid
            .iter()
            .flatten()
            .find(|c| c.date == NaiveDate::from_ymd_opt(2025, 6, 15).unwrap())
            .unwrap();
        assert_eq!(heatmap_cell_style(&map, faint), "background-color: rgba(17, 24, 39, 0.20)");
    }
}
