//! Delivery tracking: delivery times of completed orders and the status mix
//! of orders still in flight.

use chrono::NaiveDateTime;
use serde::Serialize;

use super::value_counts;
use crate::loader::Datasets;
use crate::models::DELIVERED;

const SECONDS_PER_DAY: i64 = 86_400;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeliveredOrder {
    pub order_id: String,
    pub order_status: String,
    pub order_purchase_timestamp: Option<NaiveDateTime>,
    pub order_delivered_customer_date: Option<NaiveDateTime>,
    /// Whole days from purchase to delivery, floored. Null when either timestamp is.
    pub delivery_time: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusCount {
    pub order_status: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeliverySummary {
    pub orders: usize,
    pub average_days: f64,
    pub shortest_days: i64,
    pub longest_days: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

/// Floor of (delivered - purchased) in days. Negative spans are kept as-is.
fn days_between(purchased: NaiveDateTime, delivered: NaiveDateTime) -> i64 {
    (delivered - purchased)
        .num_seconds()
        .div_euclid(SECONDS_PER_DAY)
}

/// Delivered orders with their delivery time
pub fn create_delivered_orders(data: &Datasets) -> Vec<DeliveredOrder> {
    data.orders
        .iter()
        .filter(|o| o.order_status == DELIVERED)
        .map(|o| {
            let delivery_time = match (o.order_purchase_timestamp, o.order_delivered_customer_date) {
                (Some(purchased), Some(delivered)) => Some(days_between(purchased, delivered)),
                _ => None,
            };
            DeliveredOrder {
                order_id: o.order_id.clone(),
                order_status: o.order_status.clone(),
                order_purchase_timestamp: o.order_purchase_timestamp,
                order_delivered_customer_date: o.order_delivered_customer_date,
                delivery_time,
            }
        })
        .collect()
}

/// Row count per status among orders that are not delivered
pub fn create_order_status_count(data: &Datasets) -> Vec<StatusCount> {
    let statuses = data
        .orders
        .iter()
        .filter(|o| o.order_status != DELIVERED)
        .map(|o| o.order_status.as_str());

    value_counts(statuses)
        .into_iter()
        .map(|(status, count)| StatusCount {
            order_status: status.to_string(),
            count,
        })
        .collect()
}

/// Mean, min and max delivery time over the non-null values
pub fn delivery_summary(orders: &[DeliveredOrder]) -> Option<DeliverySummary> {
    let times: Vec<i64> = orders.iter().filter_map(|o| o.delivery_time).collect();
    let shortest = *times.iter().min()?;
    let longest = *times.iter().max()?;
    let average = times.iter().sum::<i64>() as f64 / times.len() as f64;

    Some(DeliverySummary {
        orders: times.len(),
        average_days: average,
        shortest_days: shortest,
        longest_days: longest,
    })
}

/// Equal-width histogram of delivery times.
///
/// Bins span [min, max] with the last bin closed on the right. A single
/// distinct value is widened to [v - 0.5, v + 0.5].
pub fn delivery_time_histogram(values: &[i64], bins: usize) -> Vec<HistogramBin> {
    let (Some(&min), Some(&max)) = (values.iter().min(), values.iter().max()) else {
        return Vec::new();
    };
    if bins == 0 {
        return Vec::new();
    }

    let (lo, hi) = if min == max {
        (min as f64 - 0.5, max as f64 + 0.5)
    } else {
        (min as f64, max as f64)
    };
    let width = (hi - lo) / bins as f64;

    let mut counts = vec![0usize; bins];
    for &v in values {
        let idx = (((v as f64) - lo) / width).floor() as usize;
        counts[idx.min(bins - 1)] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            start: lo + width * i as f64,
            end: lo + width * (i + 1) as f64,
            count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{parse_timestamp, Order};

    fn order(id: &str, status: &str, purchased: &str, delivered: &str) -> Order {
        Order {
            order_id: id.to_string(),
            customer_id: None,
            order_status: status.to_string(),
            order_purchase_timestamp: parse_timestamp(purchased),
            order_approved_at: None,
            order_delivered_carrier_date: None,
            order_delivered_customer_date: parse_timestamp(delivered),
            order_estimated_delivery_date: None,
        }
    }

    fn datasets(orders: Vec<Order>) -> Datasets {
        Datasets {
            orders,
            ..Default::default()
        }
    }

    #[test]
    fn test_single_delivered_order() {
        let data = datasets(vec![order("1", "delivered", "2023-01-01", "2023-01-05")]);
        let delivered = create_delivered_orders(&data);
        assert_eq!(delivered.len(), 1);
        assert_eq!(delivered[0].delivery_time, Some(4));
    }

    #[test]
    fn test_partial_days_are_floored() {
        let data = datasets(vec![
            order("1", "delivered", "2018-01-01 18:00:00", "2018-01-03 09:00:00"),
            order("2", "delivered", "2018-01-01 09:00:00", "2018-01-01 20:00:00"),
        ]);
        let delivered = create_delivered_orders(&data);
        assert_eq!(delivered[0].delivery_time, Some(1));
        assert_eq!(delivered[1].delivery_time, Some(0));
    }

    #[test]
    fn test_negative_delivery_time_is_preserved() {
        let data = datasets(vec![order(
            "1",
            "delivered",
            "2018-01-05 12:00:00",
            "2018-01-04 18:00:00",
        )]);
        let delivered = create_delivered_orders(&data);
        // -18h floors to -1 day
        assert_eq!(delivered[0].delivery_time, Some(-1));
    }

    #[test]
    fn test_missing_delivery_date_propagates_null() {
        let data = datasets(vec![
            order("1", "delivered", "2018-01-01", ""),
            order("2", "shipped", "2018-01-01", ""),
        ]);
        let delivered = create_delivered_orders(&data);
        assert_eq!(delivered.len(), 1);
        assert_eq!(delivered[0].delivery_time, None);
    }

    #[test]
    fn test_status_counts_cover_every_non_delivered_order() {
        let data = datasets(vec![
            order("1", "delivered", "2018-01-01", "2018-01-02"),
            order("2", "shipped", "2018-01-01", ""),
            order("3", "canceled", "2018-01-01", ""),
            order("4", "shipped", "2018-01-01", ""),
            order("5", "invoiced", "2018-01-01", ""),
        ]);
        let counts = create_order_status_count(&data);
        assert_eq!(
            counts,
            vec![
                StatusCount { order_status: "shipped".into(), count: 2 },
                StatusCount { order_status: "canceled".into(), count: 1 },
                StatusCount { order_status: "invoiced".into(), count: 1 },
            ]
        );
        let non_delivered = data.orders.iter().filter(|o| !o.is_delivered()).count();
        assert_eq!(counts.iter().map(|c| c.count).sum::<usize>(), non_delivered);
    }

    #[test]
    fn test_summary_skips_nulls() {
        let data = datasets(vec![
            order("1", "delivered", "2018-01-01", "2018-01-03"),
            order("2", "delivered", "2018-01-01", "2018-01-11"),
            order("3", "delivered", "2018-01-01", ""),
        ]);
        let summary = delivery_summary(&create_delivered_orders(&data)).unwrap();
        assert_eq!(summary.orders, 2);
        assert_eq!(summary.shortest_days, 2);
        assert_eq!(summary.longest_days, 10);
        assert!((summary.average_days - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_summary_empty() {
        assert!(delivery_summary(&[]).is_none());
    }

    #[test]
    fn test_histogram_counts_all_values() {
        let values = [0, 1, 1, 2, 5, 10];
        let bins = delivery_time_histogram(&values, 5);
        assert_eq!(bins.len(), 5);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), values.len());
        assert_eq!(bins[0].count, 3);
        // max lands in the closed last bin
        assert_eq!(bins[4].count, 1);
        assert!((bins[4].end - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_histogram_single_value() {
        let bins = delivery_time_histogram(&[7, 7, 7], 2);
        assert_eq!(bins[0].start, 6.5);
        assert_eq!(bins[1].end, 7.5);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 3);
    }
}
