// src/ui/elements/dashboard.rs
// Analytics screen: traffic summary, daily breakdown, top products and top
// pages for a chosen date range.

use bevy::prelude::EventWriter;
use bevy_egui::egui;
use egui_extras::{Column, TableBuilder};

use crate::catalog::events::RequestFetch;
use crate::catalog::resources::{QueryCache, QueryKey};
use crate::ui::state::AdminWindowState;
use crate::ui::systems::ensure_fetched;

pub fn show_dashboard(
    ui: &mut egui::Ui,
    state: &mut AdminWindowState,
    cache: &QueryCache,
    fetch_writer: &mut EventWriter<RequestFetch>,
) {
    let (from, to) = state.report_range();
    for key in [
        QueryKey::ReportsOverview {
            from: from.clone(),
            to: to.clone(),
        },
        QueryKey::ReportsTopProducts {
            from: from.clone(),
            to: to.clone(),
        },
        QueryKey::ReportsTopPages {
            from: from.clone(),
            to: to.clone(),
        },
    ] {
        ensure_fetched(cache, fetch_writer, key);
    }

    ui.horizontal(|ui| {
        ui.label("From:");
        ui.add(
            egui::TextEdit::singleline(&mut state.report_from)
                .hint_text("YYYY-MM-DD")
                .desired_width(100.0),
        );
        ui.label("To:");
        ui.add(
            egui::TextEdit::singleline(&mut state.report_to)
                .hint_text("YYYY-MM-DD")
                .desired_width(100.0),
        );
        // Changing the inputs changes the cache keys, so the next frame's
        // ensure pass fetches the new range on its own.
        if ui.button("Last 7 days").clicked() {
            let today = chrono::Local::now().date_naive();
            state.report_from = (today - chrono::Duration::days(6))
                .format("%Y-%m-%d")
                .to_string();
            state.report_to = today.format("%Y-%m-%d").to_string();
        }
        if ui.button("Clear").clicked() {
            state.report_from.clear();
            state.report_to.clear();
        }
    });
    ui.separator();

    let Some(overview) = cache.reports_overview(&from, &to) else {
        ui.label("Loading reports…");
        return;
    };

    ui.columns(4, |columns| {
        summary_card(&mut columns[0], "Total events", overview.summary.total_events);
        summary_card(&mut columns[1], "Page views", overview.summary.page_views);
        summary_card(
            &mut columns[2],
            "Product views",
            overview.summary.product_views,
        );
        summary_card(
            &mut columns[3],
            "Unique visitors",
            overview.summary.unique_visitors,
        );
    });
    ui.separator();

    ui.label(egui::RichText::new("Daily traffic").strong());
    let row_height = ui.text_style_height(&egui::TextStyle::Body) + 4.0;
    TableBuilder::new(ui)
        .id_salt("dashboard_daily")
        .striped(true)
        .column(Column::auto().at_least(90.0))
        .columns(Column::remainder(), 4)
        .header(row_height, |mut header| {
            for title in ["Date", "Total", "Page views", "Product views", "Visitors"] {
                header.col(|ui| {
                    ui.label(egui::RichText::new(title).strong());
                });
            }
        })
        .body(|mut body| {
            for day in &overview.daily {
                body.row(row_height, |mut row| {
                    row.col(|ui| {
                        ui.label(&day.date);
                    });
                    row.col(|ui| {
                        ui.label(day.total.to_string());
                    });
                    row.col(|ui| {
                        ui.label(day.page_views.to_string());
                    });
                    row.col(|ui| {
                        ui.label(day.product_views.to_string());
                    });
                    row.col(|ui| {
                        ui.label(day.unique_visitors.to_string());
                    });
                });
            }
        });
    ui.separator();

    ui.columns(2, |columns| {
        top_products_table(&mut columns[0], cache, &from, &to);
        top_pages_table(&mut columns[1], cache, &from, &to);
    });
}

fn summary_card(ui: &mut egui::Ui, title: &str, value: u64) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.vertical(|ui| {
            ui.label(egui::RichText::new(title).small().weak());
            ui.label(egui::RichText::new(value.to_string()).heading());
        });
    });
}

fn top_products_table(
    ui: &mut egui::Ui,
    cache: &QueryCache,
    from: &Option<String>,
    to: &Option<String>,
) {
    ui.label(egui::RichText::new("Top products").strong());
    let Some(report) = cache.reports_top_products(from, to) else {
        ui.label("Loading…");
        return;
    };
    let row_height = ui.text_style_height(&egui::TextStyle::Body) + 4.0;
    TableBuilder::new(ui)
        .id_salt("dashboard_top_products")
        .striped(true)
        .column(Column::remainder())
        .column(Column::auto().at_least(60.0))
        .header(row_height, |mut header| {
            header.col(|ui| {
                ui.label(egui::RichText::new("Product").strong());
            });
            header.col(|ui| {
                ui.label(egui::RichText::new("Views").strong());
            });
        })
        .body(|mut body| {
            for item in &report.items {
                body.row(row_height, |mut row| {
                    row.col(|ui| {
                        let label = item
                            .product_slug
                            .as_deref()
                            .or(item.product_id.as_deref())
                            .unwrap_or("(unknown)");
                        ui.label(label);
                    });
                    row.col(|ui| {
                        ui.label(item.views.to_string());
                    });
                });
            }
        });
}

fn top_pages_table(
    ui: &mut egui::Ui,
    cache: &QueryCache,
    from: &Option<String>,
    to: &Option<String>,
) {
    ui.label(egui::RichText::new("Top pages").strong());
    let Some(report) = cache.reports_top_pages(from, to) else {
        ui.label("Loading…");
        return;
    };
    let row_height = ui.text_style_height(&egui::TextStyle::Body) + 4.0;
    TableBuilder::new(ui)
        .id_salt("dashboard_top_pages")
        .striped(true)
        .column(Column::remainder())
        .column(Column::auto().at_least(60.0))
        .header(row_height, |mut header| {
            header.col(|ui| {
                ui.label(egui::RichText::new("Path").strong());
            });
            header.col(|ui| {
                ui.label(egui::RichText::new("Views").strong());
            });
        })
        .body(|mut body| {
            for item in &report.items {
                body.row(row_height, |mut row| {
                    row.col(|ui| {
                        ui.label(item.path.as_deref().unwrap_or("(unknown)"));
                    });
                    row.col(|ui| {
                        ui.label(item.views.to_string());
                    });
                });
            }
        });
}
