//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `pospanel_core` linkage.
//! - Print the sales chart geometry, or the full SVG with `svg`.

use pospanel_core::DashboardService;
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("pospanel_core ping={}", pospanel_core::ping());
    println!("pospanel_core version={}", pospanel_core::core_version());

    let service = DashboardService::default();
    let want_svg = std::env::args().nth(1).as_deref() == Some("svg");

    let result = if want_svg {
        service.sales_chart_svg()
    } else {
        service.sales_chart().map(|chart| chart.geometry.polyline)
    };

    match result {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("sales chart failed: {err}");
            ExitCode::FAILURE
        }
    }
}
