//! Transactions: payment type mix and month-to-month revenue.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

use super::value_counts;
use crate::loader::Datasets;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentTypeCount {
    pub payment_type: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlySales {
    /// First day of the purchase month
    pub order_purchase_timestamp: NaiveDate,
    pub payment_value: f64,
}

/// Payment rows per payment type, most frequent first
pub fn create_payment_type_count(data: &Datasets) -> Vec<PaymentTypeCount> {
    value_counts(data.order_payments.iter().map(|p| p.payment_type.as_str()))
        .into_iter()
        .map(|(payment_type, count)| PaymentTypeCount {
            payment_type: payment_type.to_string(),
            count,
        })
        .collect()
}

/// Payment value summed per purchase month, ascending.
///
/// Orders and payments are inner-joined on order_id. Orders without a
/// purchase timestamp fall out of the grouping.
pub fn create_monthly_sales(data: &Datasets) -> Vec<MonthlySales> {
    let mut purchase_months: HashMap<&str, Vec<NaiveDate>> = HashMap::new();
    for order in &data.orders {
        if let Some(month) = order
            .order_purchase_timestamp
            .and_then(|ts| NaiveDate::from_ymd_opt(ts.year(), ts.month(), 1))
        {
            purchase_months
                .entry(order.order_id.as_str())
                .or_default()
                .push(month);
        }
    }

    let mut monthly: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for payment in &data.order_payments {
        let Some(months) = purchase_months.get(payment.order_id.as_str()) else {
            continue;
        };
        for month in months {
            *monthly.entry(*month).or_insert(0.0) += payment.payment_value;
        }
    }

    monthly
        .into_iter()
        .map(|(order_purchase_timestamp, payment_value)| MonthlySales {
            order_purchase_timestamp,
            payment_value,
        })
        .collect()
}
