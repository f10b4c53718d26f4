//! Command output.

use std::{fmt::Display, io};

use promodesk::{
    locale::Language,
    notifications::Advisory,
    promotions::Promotion,
    views::reports::{DateRange, Report},
};
use rust_decimal::Decimal;
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};

pub(crate) fn write_failed(error: &io::Error) -> String {
    format!("failed to write output: {error}")
}

pub(crate) fn write_promotions(
    out: &mut impl io::Write,
    promotions: &[&Promotion],
    language: Language,
) -> io::Result<()> {
    if promotions.is_empty() {
        return writeln!(out, "no promotions found");
    }

    let mut builder = Builder::default();

    builder.push_record(["ID", "Name", "Start", "End", "Budget", "Sales impact"]);

    for promotion in promotions {
        builder.push_record([
            promotion.id.to_string(),
            promotion.name.clone(),
            language.format_date(promotion.start_date),
            language.format_date(promotion.end_date),
            money(promotion.budget),
            promotion
                .sales_impact
                .map(|impact| impact.normalize().to_string())
                .unwrap_or_default(),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Columns::new(4..6), Alignment::right());

    writeln!(out, "{table}")
}

pub(crate) fn write_report(
    out: &mut impl io::Write,
    report: &Report,
    range: DateRange,
    language: Language,
) -> io::Result<()> {
    let period = match (range.start, range.end) {
        (Some(start), Some(end)) => format!(
            "{} - {}",
            language.format_date(start),
            language.format_date(end)
        ),
        _ => "all promotions".to_string(),
    };

    let mut builder = Builder::default();

    builder.push_record(["Period", "Promotions", "Total budget", "Avg sales impact"]);
    builder.push_record([
        period,
        report.count.to_string(),
        money(report.total_budget),
        report.avg_sales_impact_display(),
    ]);

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Columns::new(1..4), Alignment::right());

    writeln!(out, "{table}")
}

pub(crate) fn write_advisory(
    out: &mut impl io::Write,
    advisory: Option<&Advisory>,
) -> io::Result<()> {
    match advisory {
        Some(advisory) => writeln!(out, "{}: {}", advisory.severity, advisory.message),
        None => Ok(()),
    }
}

pub(crate) fn write_field(
    out: &mut impl io::Write,
    name: &str,
    value: &impl Display,
) -> io::Result<()> {
    writeln!(out, "{name}: {value}")
}

fn money(amount: Decimal) -> String {
    format!("${}", amount.normalize())
}
