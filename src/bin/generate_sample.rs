//! Sample data generator for the e-commerce dashboard
//!
//! Writes all eight dataset CSV files with the same columns as the public
//! dataset, filled with random but plausible values.
//!
//! Usage:
//!   cargo run --release --bin generate_sample -- [OPTIONS]
//!
//! Options:
//!   --orders <N>      Number of orders to generate (default: 2000)
//!   --products <N>    Number of products (default: 300)
//!   --sellers <N>     Number of sellers (default: 80)
//!   --seed <N>        Random seed for reproducibility (optional)
//!   --output <DIR>    Output directory (default: data)

use anyhow::{Context, Result};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use clap::Parser;
use csv::WriterBuilder;
use olist_dashboard::config::DatasetPaths;
use olist_dashboard::models::{
    CategoryTranslation, Customer, Geolocation, Order, OrderItem, OrderPayment, Product, Seller,
    DELIVERED,
};
use rand::prelude::*;
use rand::rngs::StdRng;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "generate_sample")]
#[command(about = "Generate sample e-commerce datasets")]
struct Args {
    #[arg(long, default_value = "2000")]
    orders: usize,

    #[arg(long, default_value = "300")]
    products: usize,

    #[arg(long, default_value = "80")]
    sellers: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,

    /// Output directory
    #[arg(long, default_value = "data")]
    output: PathBuf,
}

/// (source name, English name); the last entry is left untranslated
const CATEGORIES: [(&str, &str); 14] = [
    ("cama_mesa_banho", "bed_bath_table"),
    ("beleza_saude", "health_beauty"),
    ("esporte_lazer", "sports_leisure"),
    ("moveis_decoracao", "furniture_decor"),
    ("informatica_acessorios", "computers_accessories"),
    ("utilidades_domesticas", "housewares"),
    ("relogios_presentes", "watches_gifts"),
    ("telefonia", "telephony"),
    ("ferramentas_jardim", "garden_tools"),
    ("automotivo", "auto"),
    ("brinquedos", "toys"),
    ("cool_stuff", "cool_stuff"),
    ("perfumaria", "perfumery"),
    ("pc_gamer", "pc_gamer"),
];

/// (city, zip prefix, lat, lng)
const CITIES: [(&str, u32, f64, f64); 12] = [
    ("sao paulo", 1037, -23.55, -46.63),
    ("curitiba", 80010, -25.43, -49.27),
    ("rio de janeiro", 20010, -22.91, -43.17),
    ("belo horizonte", 30110, -19.92, -43.94),
    ("ribeirao preto", 14010, -21.18, -47.81),
    ("guarulhos", 7010, -23.46, -46.53),
    ("ibitinga", 14940, -21.76, -48.83),
    ("santo andre", 9010, -23.66, -46.53),
    ("campinas", 13010, -22.91, -47.06),
    ("maringa", 87010, -23.42, -51.94),
    ("porto alegre", 90010, -30.03, -51.23),
    ("manaus", 69005, -3.12, -60.02),
];

const STATUSES: [(&str, u32); 6] = [
    (DELIVERED, 900),
    ("shipped", 40),
    ("canceled", 20),
    ("unavailable", 15),
    ("invoiced", 15),
    ("processing", 10),
];

const PAYMENT_TYPES: [(&str, u32); 4] = [
    ("credit_card", 70),
    ("boleto", 20),
    ("voucher", 6),
    ("debit_card", 4),
];

fn weighted<'a, T>(rng: &mut impl Rng, items: &'a [(T, u32)]) -> &'a T {
    let total: u32 = items.iter().map(|(_, w)| w).sum();
    let mut pick = rng.gen_range(0..total);
    for (item, weight) in items {
        if pick < *weight {
            return item;
        }
        pick -= weight;
    }
    &items[items.len() - 1].0
}

fn random_id(rng: &mut impl Rng) -> String {
    format!("{:032x}", rng.gen::<u128>())
}

fn random_timestamp(rng: &mut impl Rng, start: NaiveDateTime, span_days: i64) -> NaiveDateTime {
    start + Duration::seconds(rng.gen_range(0..span_days * 86_400))
}

fn write_table<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    info!("Wrote {} rows to {:?}", rows.len(), path);
    Ok(())
}

fn main() -> Result<()> {
    olist_dashboard::init_tracing();
    let args = Args::parse();

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    std::fs::create_dir_all(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    let paths = DatasetPaths::from_dir(&args.output);

    let translations: Vec<CategoryTranslation> = CATEGORIES[..CATEGORIES.len() - 1]
        .iter()
        .map(|(pt, en)| CategoryTranslation {
            product_category_name: pt.to_string(),
            product_category_name_english: en.to_string(),
        })
        .collect();

    let products: Vec<Product> = (0..args.products)
        .map(|_| Product {
            product_id: random_id(&mut rng),
            product_category_name: if rng.gen_bool(0.02) {
                None
            } else {
                CATEGORIES.choose(&mut rng).map(|(pt, _)| pt.to_string())
            },
        })
        .collect();

    let city_weights: Vec<(usize, u32)> = (0..CITIES.len())
        .map(|i| (i, (CITIES.len() - i) as u32 * 3))
        .collect();
    let sellers: Vec<Seller> = (0..args.sellers)
        .map(|_| {
            let (city, zip, _, _) = CITIES[*weighted(&mut rng, &city_weights)];
            Seller {
                seller_id: random_id(&mut rng),
                seller_zip_code_prefix: zip,
                seller_city: city.to_string(),
                seller_state: None,
            }
        })
        .collect();

    // the last city has no geolocation rows, so its sellers drop out of the map
    let mut geolocation = Vec::new();
    for (city, zip, lat, lng) in &CITIES[..CITIES.len() - 1] {
        for _ in 0..rng.gen_range(1..=3) {
            geolocation.push(Geolocation {
                geolocation_zip_code_prefix: *zip,
                geolocation_lat: lat + rng.gen_range(-0.05..0.05),
                geolocation_lng: lng + rng.gen_range(-0.05..0.05),
                geolocation_city: Some(city.to_string()),
                geolocation_state: None,
            });
        }
    }

    let window_start = NaiveDate::from_ymd_opt(2017, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .context("invalid start date")?;

    let mut customers = Vec::with_capacity(args.orders);
    let mut orders = Vec::with_capacity(args.orders);
    let mut order_items = Vec::new();
    let mut order_payments = Vec::new();

    for _ in 0..args.orders {
        let order_id = random_id(&mut rng);
        let customer_id = random_id(&mut rng);
        let status = *weighted(&mut rng, &STATUSES);
        let purchased = random_timestamp(&mut rng, window_start, 600);
        let delivered = (status == DELIVERED).then(|| {
            purchased
                + Duration::days(rng.gen_range(1..40))
                + Duration::minutes(rng.gen_range(0..1440))
        });

        let (city, zip, _, _) = CITIES[rng.gen_range(0..CITIES.len())];
        customers.push(Customer {
            customer_id: customer_id.clone(),
            customer_unique_id: Some(random_id(&mut rng)),
            customer_zip_code_prefix: Some(zip),
            customer_city: Some(city.to_string()),
            customer_state: None,
        });

        let mut order_total = 0.0;
        for n in 0..rng.gen_range(1..=3u32) {
            let price = (rng.gen_range(10.0..500.0_f64) * 100.0).round() / 100.0;
            let freight = (rng.gen_range(5.0..40.0_f64) * 100.0).round() / 100.0;
            order_total += price + freight;
            order_items.push(OrderItem {
                order_id: order_id.clone(),
                order_item_id: Some(n + 1),
                product_id: products
                    .choose(&mut rng)
                    .map(|p| p.product_id.clone())
                    .unwrap_or_default(),
                seller_id: sellers.choose(&mut rng).map(|s| s.seller_id.clone()),
                price,
                freight_value: Some(freight),
            });
        }

        // a few orders never get a payment row
        if !rng.gen_bool(0.02) {
            order_payments.push(OrderPayment {
                order_id: order_id.clone(),
                payment_sequential: Some(1),
                payment_type: weighted(&mut rng, &PAYMENT_TYPES).to_string(),
                payment_installments: Some(rng.gen_range(1..=10)),
                payment_value: (order_total * 100.0_f64).round() / 100.0,
            });
        }

        orders.push(Order {
            order_id,
            customer_id: Some(customer_id),
            order_status: status.to_string(),
            order_purchase_timestamp: Some(purchased),
            order_approved_at: Some(purchased + Duration::minutes(rng.gen_range(5..600))),
            order_delivered_carrier_date: delivered.map(|d| d - Duration::days(1)),
            order_delivered_customer_date: delivered,
            order_estimated_delivery_date: Some(purchased + Duration::days(25)),
        });
    }

    write_table(&paths.category_translation, &translations)?;
    write_table(&paths.products, &products)?;
    write_table(&paths.sellers, &sellers)?;
    write_table(&paths.geolocation, &geolocation)?;
    write_table(&paths.customers, &customers)?;
    write_table(&paths.orders, &orders)?;
    write_table(&paths.order_items, &order_items)?;
    write_table(&paths.order_payments, &order_payments)?;

    info!("Sample datasets written to {}", args.output.display());
    Ok(())
}
