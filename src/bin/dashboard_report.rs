//! Terminal report of the dashboard views
//!
//! Run: ./target/release/dashboard_report [view] [--category NAME] [--city NAME]
//! Views: all, home, delivery-tracking, products, sellers, transactions

use anyhow::Result;
use clap::Parser;
use olist_dashboard::api::DashboardService;
use olist_dashboard::config::{DashboardConfig, DEFAULT_DATA_DIR, DEFAULT_HISTOGRAM_BINS};
use olist_dashboard::views::{
    DeliveryView, HomeView, Lookup, PieSlice, ProductsView, SellersView, TransactionsView, View,
    ViewPayload, ViewRequest,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "dashboard_report")]
#[command(about = "Print dashboard views as text tables")]
struct Args {
    /// View key or label, or "all"
    #[arg(default_value = "all")]
    view: String,

    /// Directory holding the eight dataset CSV files
    #[arg(long, env = "DASHBOARD_DATA_DIR", default_value = DEFAULT_DATA_DIR)]
    data_dir: PathBuf,

    /// Category to look up in the Products view
    #[arg(long)]
    category: Option<String>,

    /// City to look up in the Sellers view
    #[arg(long)]
    city: Option<String>,

    /// Histogram bins for the delivery time distribution
    #[arg(long, default_value_t = 20)]
    bins: usize,
}

fn print_section_header(title: &str) {
    println!("\n{}", "═".repeat(80));
    println!("  {}", title);
    println!("{}\n", "═".repeat(80));
}

fn print_subsection(title: &str) {
    println!("\n{}", title);
    println!("{}", "─".repeat(70));
}

fn print_slices(slices: &[PieSlice], label: &str) {
    let total: f64 = slices.iter().map(|s| s.value).sum();
    println!("  {:32} {:>12} {:>8}", label, "Count", "Share");
    for slice in slices {
        let share = if total > 0.0 { slice.value / total * 100.0 } else { 0.0 };
        println!("  {:32} {:>12} {:>7.1}%", slice.name, slice.value, share);
    }
}

fn main() -> Result<()> {
    olist_dashboard::init_tracing();
    let args = Args::parse();

    let views: Vec<View> = if args.view.eq_ignore_ascii_case("all") {
        View::ALL.to_vec()
    } else {
        vec![args.view.parse()?]
    };

    let config = DashboardConfig {
        data_dir: args.data_dir.clone(),
        histogram_bins: if args.bins == 0 { DEFAULT_HISTOGRAM_BINS } else { args.bins },
        ..Default::default()
    };
    let service = DashboardService::from_config(&config)?;
    let request = ViewRequest {
        category: args.category.clone(),
        city: args.city.clone(),
    };

    for view in views {
        print_section_header(&view.label().to_uppercase());
        match service.render(view, &request) {
            ViewPayload::Home(home) => print_home(&home),
            ViewPayload::DeliveryTracking(delivery) => print_delivery(&delivery),
            ViewPayload::Products(products) => print_products(&products),
            ViewPayload::Sellers(sellers) => print_sellers(&sellers),
            ViewPayload::Transactions(transactions) => print_transactions(&transactions),
        }
    }

    println!();
    Ok(())
}

fn print_home(home: &HomeView) {
    println!("  {}", home.title);
    for line in &home.introduction {
        println!("  {}", line);
    }
    print_subsection("Menu");
    for entry in &home.menu {
        println!("  {:20} {}", entry.key, entry.label);
    }
}

fn print_delivery(delivery: &DeliveryView) {
    print_subsection("Overall Performance");
    match &delivery.summary {
        Some(s) => {
            println!("  Delivered orders       : {}", s.orders);
            println!("  Average delivery time  : {:.2} days", s.average_days);
            println!("  Shortest delivery time : {:.2} days", s.shortest_days as f64);
            println!("  Longest delivery time  : {:.2} days", s.longest_days as f64);
        }
        None => println!("  No delivered orders."),
    }

    print_subsection("On-going Order Status");
    print_slices(&delivery.order_status, "Status");

    print_subsection("Delivery Time Distribution");
    let peak = delivery
        .delivery_time_histogram
        .iter()
        .map(|b| b.count)
        .max()
        .unwrap_or(0);
    for bin in &delivery.delivery_time_histogram {
        let bar = if peak > 0 { bin.count * 40 / peak } else { 0 };
        println!(
            "  {:>7.1} - {:>7.1}  {:>7}  {}",
            bin.start,
            bin.end,
            bin.count,
            "█".repeat(bar)
        );
    }
}

fn print_products(products: &ProductsView) {
    print_subsection("Item Sold per Category");
    print_slices(&products.items_sold_per_category, "Category");

    print_subsection("Sales for Selected Category");
    let selected = products.selected_category.as_deref().unwrap_or("-");
    match &products.selected_category_sales {
        Lookup::Found { value } => println!("  Sales for {}: ${:.2}", selected, value),
        Lookup::NotFound { message } => println!("  {} ({})", message, selected),
    }

    print_subsection("Total Sales per Category (Top 10)");
    for bar in &products.sales_per_category {
        println!(
            "  {:40} {:>14.2}",
            bar.category.as_deref().unwrap_or("(uncategorised)"),
            bar.value
        );
    }
}

fn print_sellers(sellers: &SellersView) {
    print_subsection("Sellers Location Distribution");
    println!("  Heat points: {}", sellers.heat_points.len());
    if let Some(center) = sellers.map_center {
        println!("  Map center:  {:.4}, {:.4}", center.lat, center.lng);
    }

    print_subsection("Sellers City");
    let city = sellers.selected_city.as_deref().unwrap_or("-");
    match &sellers.sellers_in_city {
        Lookup::Found { value } => {
            println!("  Sellers (seller_id) in {}:", city);
            for seller_id in value {
                println!("    {}", seller_id);
            }
        }
        Lookup::NotFound { message } => println!("  {}", message),
    }

    print_subsection("Sellers by City");
    print_slices(&sellers.sellers_by_city, "City");
}

fn print_transactions(transactions: &TransactionsView) {
    print_subsection("Payment Type Distribution");
    print_slices(&transactions.payment_types, "Payment type");

    print_subsection("Transaction Value Month-to-Month");
    for point in &transactions.monthly_sales {
        println!("  {}  {:>14.2}", point.month.format("%Y-%m"), point.value);
    }
}
