//! Print the hull of a random cloud for quick visual sanity on counts.
//!
//! Usage:
//!   cargo run -p graham --example random_hull -- square
//!   cargo run -p graham --example random_hull -- lattice

use graham::prelude::*;

fn main() {
    let mode = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "square".to_string());
    let cfg = match mode.as_str() {
        "square" => CloudCfg::default(),
        "disc" => CloudCfg {
            shape: CloudShape::Disc,
            ..CloudCfg::default()
        },
        "lattice" => CloudCfg {
            extent: 4.0,
            lattice: true,
            ..CloudCfg::default()
        },
        _ => {
            eprintln!("usage: random_hull [square|disc|lattice]");
            return;
        }
    };
    for index in 0..5 {
        let pts = draw_points(cfg, ReplayToken::new(2025, index));
        match graham_scan(&pts, &HullCfg::default().allow_degenerate()) {
            Ok(hull) => println!(
                "sample {index}: n={} hull={} area={:.4} perimeter={:.4}",
                pts.len(),
                hull.len(),
                hull.area(),
                hull.perimeter()
            ),
            Err(e) => println!("sample {index}: {e}"),
        }
    }
}
