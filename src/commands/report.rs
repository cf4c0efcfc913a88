use crate::cli::{Cli, Commands};
use crate::domain::models::{
    EntitiesReport, FullReport, Outcome, PositionsReport, ScanReport, TaxesReport, TotalsReport,
};
use crate::services::config::Settings;
use crate::services::entities::entities_report;
use crate::services::loader::load_corpus;
use crate::services::output::print_one;
use crate::services::positions::positions_report;
use crate::services::report::full_report;
use crate::services::taxes::taxes_report;
use crate::services::totals::totals_report;

pub fn handle_report_commands(cli: &Cli, settings: &Settings) -> anyhow::Result<()> {
    let corpus = load_corpus(&settings.root, &settings.partitions)?;
    match &cli.command {
        Commands::Scan => print_one(cli.json, corpus.scan_report(), render_scan),
        Commands::Totals => print_one(cli.json, totals_report(corpus.documents()), render_totals),
        Commands::Taxes => print_one(cli.json, taxes_report(&corpus), render_taxes),
        Commands::Positions { bins } => print_one(
            cli.json,
            positions_report(&corpus, settings.with_bins(*bins)?),
            render_positions,
        ),
        Commands::Entities => print_one(cli.json, entities_report(&corpus), render_entities),
        Commands::Report { bins } => print_one(
            cli.json,
            full_report(&corpus, settings.with_bins(*bins)?),
            render_full,
        ),
    }
}

fn render_scan(r: &ScanReport) -> Vec<String> {
    let mut out = vec![format!("root: {}", r.root)];
    for p in &r.partitions {
        if p.present {
            out.push(format!("{}\t{}", p.partition, p.documents));
        } else {
            out.push(format!("{}\tmissing", p.partition));
        }
    }
    if r.documents == 0 {
        out.push("no documents found".to_string());
    } else {
        out.push(format!("documents: {}", r.documents));
    }
    for s in &r.skipped {
        out.push(format!("skipped\t{}\t{}", s.path, s.reason));
    }
    out
}

fn render_totals(r: &TotalsReport) -> Vec<String> {
    let mut out = vec![
        format!("total\t{}", r.counts.total),
        format!("subtotal\t{}", r.counts.subtotal),
    ];
    if r.shares.is_empty() {
        out.push("no total or subtotal lines found".to_string());
    }
    for s in &r.shares {
        out.push(format!("share\t{}\t{:.1}%", s.label, s.percent));
    }
    out
}

fn render_taxes(r: &TaxesReport) -> Vec<String> {
    let mut out = Vec::new();
    for p in &r.partitions {
        if p.images.is_empty() {
            out.push(format!("{}\tno images with more than one tax line", p.partition));
        }
        for (image, count) in &p.images {
            out.push(format!("{}\t{}\t{}", p.partition, image, count));
        }
    }
    out
}

fn render_positions(r: &PositionsReport) -> Vec<String> {
    let mut out = vec![
        format!("category: {}", r.category),
        format!("points: {}", r.point_count),
    ];
    let h = match &r.heatmap {
        Outcome::Ready(h) => h,
        Outcome::NoData => {
            out.push(format!("no positions found for {}", r.category));
            return out;
        }
    };
    out.push(format!("bins: {}x{}", r.bins, r.bins));
    if let (Some(x0), Some(x1), Some(y0), Some(y1)) = (
        h.x_edges.first(),
        h.x_edges.last(),
        h.y_edges.first(),
        h.y_edges.last(),
    ) {
        out.push(format!("x range: {:.2}..{:.2}", x0, x1));
        out.push(format!("y range: {:.2}..{:.2}", y0, y1));
    }
    for ((ix, iy), count) in h.counts.indexed_iter() {
        if *count == 0 {
            continue;
        }
        out.push(format!(
            "{:.2}..{:.2}\t{:.2}..{:.2}\t{}",
            h.x_edges[ix],
            h.x_edges[ix + 1],
            h.y_edges[iy],
            h.y_edges[iy + 1],
            count
        ));
    }
    out
}

fn render_entities(r: &EntitiesReport) -> Vec<String> {
    let mut out: Vec<String> = r
        .categories
        .iter()
        .map(|c| format!("{}\t{}", c.category, c.count))
        .collect();
    match &r.rarest {
        Outcome::Ready(c) => out.push(format!("rarest: {} ({})", c.category, c.count)),
        Outcome::NoData => out.push("no entities found".to_string()),
    }
    out
}

fn render_full(r: &FullReport) -> Vec<String> {
    let mut out = Vec::new();
    let sections = [
        ("scan", render_scan(&r.scan)),
        ("totals", render_totals(&r.totals)),
        ("taxes", render_taxes(&r.taxes)),
        ("positions", render_positions(&r.positions)),
        ("entities", render_entities(&r.entities)),
    ];
    for (title, lines) in sections {
        out.push(format!("== {}", title));
        out.extend(lines);
    }
    out
}
