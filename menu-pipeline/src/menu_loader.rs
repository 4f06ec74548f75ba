//! CSV menu item loader.
//!
//! Parses spreadsheet exports into `MenuItem`s. Expected CSV columns:
//!   name, category, category_group, price, food_cost, sales_volume,
//!   margin_percent, profit_margin[, quick_recommendation]
//!
//! Numeric cells are read leniently: blanks and junk become 0.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::coerce::lenient_f64;
use crate::error::{MenuError, MenuResult};
use crate::types::{MenuCategory, MenuItem};

/// A CSV row. Column names are snake_case, unlike the camelCase JSON
/// analysis documents. Text columns keep the raw cell, so names such as
/// `007` are not read as numbers.
#[derive(Debug, Clone, Deserialize)]
pub struct MenuItemRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub category_group: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub price: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub food_cost: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub sales_volume: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub margin_percent: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub profit_margin: f64,
    #[serde(default)]
    pub quick_recommendation: String,
}

impl MenuItemRecord {
    pub fn to_menu_item(&self) -> MenuItem {
        MenuItem {
            name: self.name.clone(),
            category: MenuCategory::from(self.category.as_str()),
            category_group: self.category_group.clone(),
            sales_volume: self.sales_volume,
            profit_margin: self.profit_margin,
            price: self.price,
            food_cost: self.food_cost,
            margin_percent: self.margin_percent,
            quick_recommendation: self.quick_recommendation.clone(),
        }
    }
}

/// Load menu items from a CSV reader.
pub fn load_menu_items<R: Read>(reader: R) -> MenuResult<Vec<MenuItem>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut items = Vec::new();
    for (line_num, result) in csv_reader.deserialize().enumerate() {
        let record: MenuItemRecord = result.map_err(|source| MenuError::Csv {
            line: line_num + 2,
            source,
        })?;
        items.push(record.to_menu_item());
    }

    log::debug!("loaded {} menu items from CSV", items.len());
    Ok(items)
}

/// Load menu items from a CSV file path.
pub fn load_menu_items_file<P: AsRef<Path>>(path: P) -> MenuResult<Vec<MenuItem>> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|source| MenuError::Io {
        path: path.display().to_string(),
        source,
    })?;
    load_menu_items(file)
}
