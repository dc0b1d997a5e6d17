// src/page/mod.rs

use crate::figures::{Figure, FigureSet};
use crate::ingest::Datasets;
use crate::series::DailyTotals;
use std::fmt::Write;

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

const PAGE_TITLE: &str = "1854 London Cholera Outbreak";

const CHOLERA_TABLE_INTRO: &str = "The below table shows the number of cholera attacks & deaths \
     on each day from the 19th of August to the 29th of September, 1854.";
const CHOLERA_LINE_INTRO: &str = "The below graph shows the number of daily cholera attacks & \
     deaths, as well as the total attacks & deaths up to that point, on a day-by-day basis.";
const NAPLES_INTRO: &str = "The below table and the following two graphs show the number of \
     deaths per 10,000 inhabitants of Naples, separated by age group and gender.";
const CENSUS_INTRO: &str = "The below table, and the following 4 graphs, show the breakdown of \
     population by age range in the UK, at around the same time period.";
const SPLIT_INTRO: &str = "Population breakdown of the UK by gender:";
const MAP_INTRO: &str = "Deaths from cholera near the infamous Broad Street pump, and other \
     nearby pumps";

/// Assemble the whole dashboard as one static HTML document. Pure: the
/// same inputs always produce the same bytes.
pub fn render(data: &Datasets, daily: &[DailyTotals], figures: &FigureSet) -> String {
    let mut html = String::new();
    let mut graphs: Vec<(&str, &Figure)> = Vec::new();

    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    let _ = writeln!(html, "<meta charset=\"utf-8\">");
    let _ = writeln!(html, "<title>{}</title>", escape(PAGE_TITLE));
    let _ = writeln!(html, "<script src=\"{PLOTLY_CDN}\"></script>");
    html.push_str("</head>\n<body>\n");

    let _ = writeln!(html, "<h1>{}</h1>", escape(PAGE_TITLE));

    paragraph(&mut html, CHOLERA_TABLE_INTRO);
    html.push_str(&cholera_table(daily));

    paragraph(&mut html, CHOLERA_LINE_INTRO);
    graph(&mut html, &mut graphs, "cholera-graph", &figures.cholera_line);

    paragraph(&mut html, NAPLES_INTRO);
    html.push_str(&naples_table(data));
    graph(
        &mut html,
        &mut graphs,
        "naples-male-graph",
        &figures.naples_male_bar,
    );
    graph(
        &mut html,
        &mut graphs,
        "naples-female-graph",
        &figures.naples_female_bar,
    );

    paragraph(&mut html, CENSUS_INTRO);
    html.push_str(&census_table(data));
    graph(&mut html, &mut graphs, "uk-male-pie", &figures.census_male_pie);
    graph(
        &mut html,
        &mut graphs,
        "uk-female-pie",
        &figures.census_female_pie,
    );
    graph(&mut html, &mut graphs, "uk-male-bar", &figures.census_male_bar);
    graph(
        &mut html,
        &mut graphs,
        "uk-female-bar",
        &figures.census_female_bar,
    );

    paragraph(&mut html, SPLIT_INTRO);
    graph(
        &mut html,
        &mut graphs,
        "uk-split-pie",
        &figures.census_split_pie,
    );

    paragraph(&mut html, MAP_INTRO);
    graph(&mut html, &mut graphs, "pump-map", &figures.death_map);

    html.push_str("<script>\n");
    for (id, figure) in graphs {
        let _ = writeln!(html, "Plotly.newPlot(\"{id}\", {});", embed_json(figure));
    }
    html.push_str("</script>\n</body>\n</html>\n");
    html
}

fn paragraph(html: &mut String, text: &str) {
    let _ = writeln!(html, "<p>{}</p>", escape(text));
}

fn graph<'a>(
    html: &mut String,
    graphs: &mut Vec<(&'a str, &'a Figure)>,
    id: &'a str,
    figure: &'a Figure,
) {
    let _ = writeln!(html, "<div id=\"{id}\"></div>");
    graphs.push((id, figure));
}

/// Serialize a figure for embedding inside a `<script>` block. `</` is
/// broken up so no cell value can close the script element early.
fn embed_json(figure: &Figure) -> String {
    serde_json::to_string(figure)
        .expect("figure payloads serialize")
        .replace("</", "<\\/")
}

fn cholera_table(daily: &[DailyTotals]) -> String {
    let rows = daily
        .iter()
        .map(|t| {
            vec![
                t.date.clone(),
                t.attacks.to_string(),
                t.deaths.to_string(),
                t.total.to_string(),
            ]
        })
        .collect::<Vec<_>>();
    html_table("cholera-table", &["Date", "Attacks", "Deaths", "Total"], &rows)
}

fn naples_table(data: &Datasets) -> String {
    let rows = data
        .mortality
        .iter()
        .map(|r| vec![r.age.clone(), r.male.to_string(), r.female.to_string()])
        .collect::<Vec<_>>();
    html_table(
        "naples-table",
        &["Age range", "Male deaths per 10k", "Female deaths per 10k"],
        &rows,
    )
}

fn census_table(data: &Datasets) -> String {
    let rows = data
        .census
        .iter()
        .map(|r| vec![r.age.clone(), r.male.to_string(), r.female.to_string()])
        .collect::<Vec<_>>();
    html_table(
        "uk-table",
        &["Age range", "Male population", "Female population"],
        &rows,
    )
}

fn html_table(id: &str, headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "<table id=\"{id}\">");
    out.push_str("<thead><tr>");
    for header in headers {
        let _ = write!(out, "<th>{}</th>", escape(header));
    }
    out.push_str("</tr></thead>\n<tbody>\n");
    for row in rows {
        out.push_str("<tr>");
        for cell in row {
            let _ = write!(out, "<td>{}</td>", escape(cell));
        }
        out.push_str("</tr>\n");
    }
    out.push_str("</tbody>\n</table>\n");
    out
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
