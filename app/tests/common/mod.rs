//! FILENAME: tests/common/mod.rs
//! Test fixtures for the comparison integration tests.

#![allow(dead_code)]

use comparison_engine::SlotSelection;
use engine::{CellValue, Table};
use std::fs;
use std::path::{Path, PathBuf};

pub fn text(s: &str) -> CellValue {
    CellValue::Text(s.to_string())
}

pub fn num(n: f64) -> CellValue {
    CellValue::Number(n)
}

/// A slot with just Country and Brand chosen.
pub fn slot(country: &str, brand: &str) -> SlotSelection {
    SlotSelection {
        country: Some(text(country)),
        brand: Some(text(brand)),
        ..Default::default()
    }
}

/// Market analysis fixture: the column layout the real dataset uses,
/// with enough rows to exercise filtering, tie-breaks and missing
/// values.
pub struct MarketFixture;

impl MarketFixture {
    pub fn headers() -> Vec<&'static str> {
        vec![
            "Quarter",
            "Year",
            "Region",
            "Country",
            "Country Flag",
            "Brand name",
            "Brand logo",
            "Price",
            "Market share",
        ]
    }

    /// (quarter, year, region, country, flag, brand, logo, price, share)
    pub fn data() -> Vec<(
        &'static str,
        f64,
        &'static str,
        &'static str,
        &'static str,
        &'static str,
        &'static str,
        f64,
        Option<f64>,
    )> {
        vec![
            ("Q1", 2024.0, "North America", "USA", "flag_usa.png", "Acme", "logo_acme.png", 10.0, Some(0.40)),
            ("Q1", 2024.0, "North America", "USA", "flag_usa.png", "Globex", "logo_globex.png", 20.0, Some(0.35)),
            ("Q2", 2024.0, "North America", "USA", "flag_usa.png", "Acme", "logo_acme.png", 11.0, Some(0.41)),
            ("Q1", 2023.0, "Europe", "Germany", "flag_de.png", "Acme", "logo_acme.png", 12.0, None),
            ("Q1", 2024.0, "Europe", "Germany", "flag_de.png", "Initech", "logo_initech.png", 15.0, Some(0.20)),
            ("Q1", 2024.0, "Asia", "Japan", "flag_jp.png", "Umbrella", "", 18.0, Some(0.25)),
        ]
    }

    pub fn table() -> Table {
        let mut table = Table::new(
            Self::headers().into_iter().map(String::from).collect(),
        );
        for (quarter, year, region, country, flag, brand, logo, price, share) in
            Self::data()
        {
            table.push_row(vec![
                text(quarter),
                num(year),
                text(region),
                text(country),
                text(flag),
                text(brand),
                if logo.is_empty() {
                    CellValue::Empty
                } else {
                    text(logo)
                },
                num(price),
                share.map(num).unwrap_or(CellValue::Empty),
            ]);
        }
        table
    }

    /// Writes the fixture as a CSV file under `dir` and returns its
    /// path, for tests that go through the table source.
    pub fn write_csv(dir: &Path) -> PathBuf {
        let mut lines = vec![Self::headers().join(",")];
        for (quarter, year, region, country, flag, brand, logo, price, share) in
            Self::data()
        {
            lines.push(format!(
                "{},{},{},{},{},{},{},{},{}",
                quarter,
                year,
                region,
                country,
                flag,
                brand,
                logo,
                price,
                share.map(|s| s.to_string()).unwrap_or_default(),
            ));
        }
        let path = dir.join("market.csv");
        fs::write(&path, lines.join("\n")).expect("write fixture csv");
        path
    }
}
