//! Seller distribution by city and by geolocation.

use indexmap::IndexSet;
use serde::Serialize;
use std::collections::HashMap;

use super::{top_n_with_others, value_counts};
use crate::loader::Datasets;

/// Cities shown individually in the sellers-by-city chart
pub const TOP_SELLER_CITIES: usize = 9;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CityCount {
    pub seller_city: String,
    pub count: usize,
}

/// One seller matched to one geolocation row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SellerLocation {
    pub seller_id: String,
    pub seller_city: String,
    pub seller_zip_code_prefix: u32,
    pub geolocation_lat: f64,
    pub geolocation_lng: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl From<&SellerLocation> for GeoPoint {
    fn from(s: &SellerLocation) -> Self {
        Self {
            lat: s.geolocation_lat,
            lng: s.geolocation_lng,
        }
    }
}

/// Seller count per city: top 9 plus an `Others` bucket
pub fn create_top_cities_with_seller(data: &Datasets) -> Vec<CityCount> {
    let ranked: Vec<(String, usize)> =
        value_counts(data.sellers.iter().map(|s| s.seller_city.as_str()))
            .into_iter()
            .map(|(city, count)| (city.to_string(), count))
            .collect();

    top_n_with_others(ranked, TOP_SELLER_CITIES)
        .into_iter()
        .map(|(seller_city, count)| CityCount { seller_city, count })
        .collect()
}

/// Sellers inner-joined with geolocation on zip-code prefix.
///
/// A seller appears once per geolocation row sharing its prefix; sellers
/// with no geolocation are dropped.
pub fn create_sellers_geolocation(data: &Datasets) -> Vec<SellerLocation> {
    let mut by_zip: HashMap<u32, Vec<usize>> = HashMap::new();
    for (i, geo) in data.geolocation.iter().enumerate() {
        by_zip.entry(geo.geolocation_zip_code_prefix).or_default().push(i);
    }

    data.sellers
        .iter()
        .flat_map(|seller| {
            by_zip
                .get(&seller.seller_zip_code_prefix)
                .into_iter()
                .flatten()
                .map(move |&i| {
                    let geo = &data.geolocation[i];
                    SellerLocation {
                        seller_id: seller.seller_id.clone(),
                        seller_city: seller.seller_city.clone(),
                        seller_zip_code_prefix: seller.seller_zip_code_prefix,
                        geolocation_lat: geo.geolocation_lat,
                        geolocation_lng: geo.geolocation_lng,
                    }
                })
        })
        .collect()
}

/// Mean position of the joined rows, used to centre the heat map
pub fn map_center(locations: &[SellerLocation]) -> Option<GeoPoint> {
    if locations.is_empty() {
        return None;
    }
    let n = locations.len() as f64;
    Some(GeoPoint {
        lat: locations.iter().map(|l| l.geolocation_lat).sum::<f64>() / n,
        lng: locations.iter().map(|l| l.geolocation_lng).sum::<f64>() / n,
    })
}

/// Distinct seller cities in table order
pub fn available_cities(data: &Datasets) -> Vec<String> {
    data.sellers
        .iter()
        .map(|s| s.seller_city.clone())
        .collect::<IndexSet<String>>()
        .into_iter()
        .collect()
}

/// Seller ids located in `city`, in table order
pub fn sellers_in_city(data: &Datasets, city: &str) -> Vec<String> {
    data.sellers
        .iter()
        .filter(|s| s.seller_city == city)
        .map(|s| s.seller_id.clone())
        .collect()
}
