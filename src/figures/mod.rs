// src/figures/mod.rs

use crate::ingest::{CensusRecord, Datasets, MortalityRecord};
use crate::series::{self, DailyTotals};
use serde::Serialize;
use serde_json::{json, Value};

mod map;

pub use map::death_map;

/// A plotly.js figure: trace list plus layout, ready to be embedded in the
/// page and handed to `Plotly.newPlot`.
#[derive(Debug, Clone, Serialize)]
pub struct Figure {
    pub data: Vec<Value>,
    pub layout: Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    fn noun(self) -> &'static str {
        match self {
            Sex::Male => "men",
            Sex::Female => "women",
        }
    }

    fn adjective(self) -> &'static str {
        match self {
            Sex::Male => "Male",
            Sex::Female => "Female",
        }
    }
}

/// Trace colors for the daily line chart, as published.
const ATTACKS_COLOR: &str = "#ffa600";
const DEATHS_COLOR: &str = "#0388fc";
const TOTAL_ATTACKS_COLOR: &str = "#ef5675";
const TOTAL_DEATHS_COLOR: &str = "#003f5c";

/// Plasma sequential palette, cycled across categorical marks.
const PLASMA: &[&str] = &[
    "#0d0887", "#46039f", "#7201a8", "#9c179e", "#bd3786", "#d8576b", "#ed7953", "#fb9f3a",
    "#fdca26", "#f0f921",
];

/// Every figure on the dashboard, in page order.
#[derive(Debug, Clone)]
pub struct FigureSet {
    pub cholera_line: Figure,
    pub naples_male_bar: Figure,
    pub naples_female_bar: Figure,
    pub census_male_pie: Figure,
    pub census_female_pie: Figure,
    pub census_male_bar: Figure,
    pub census_female_bar: Figure,
    pub census_split_pie: Figure,
    pub death_map: Figure,
}

pub fn build_all(data: &Datasets, daily: &[DailyTotals]) -> FigureSet {
    let (male_total, female_total) = series::census_totals(&data.census);
    FigureSet {
        cholera_line: attack_death_line(daily),
        naples_male_bar: mortality_bar(&data.mortality, Sex::Male),
        naples_female_bar: mortality_bar(&data.mortality, Sex::Female),
        census_male_pie: census_pie(&data.census, Sex::Male),
        census_female_pie: census_pie(&data.census, Sex::Female),
        census_male_bar: census_bar(&data.census, Sex::Male),
        census_female_bar: census_bar(&data.census, Sex::Female),
        census_split_pie: census_split_pie(male_total, female_total),
        death_map: death_map(&data.death_locations, &data.pumps),
    }
}

/// Daily and cumulative attack/death counts, four lines on one chart.
pub fn attack_death_line(daily: &[DailyTotals]) -> Figure {
    let dates: Vec<&str> = daily.iter().map(|t| t.date.as_str()).collect();
    let line = |name: &str, values: Vec<u32>, color: &str| {
        json!({
            "type": "scatter",
            "mode": "lines",
            "name": name,
            "x": dates.clone(),
            "y": values,
            "line": { "color": color },
        })
    };
    let data = vec![
        line(
            "Attacks",
            daily.iter().map(|t| t.attacks).collect(),
            ATTACKS_COLOR,
        ),
        line(
            "Deaths",
            daily.iter().map(|t| t.deaths).collect(),
            DEATHS_COLOR,
        ),
        line(
            "Total Attacks",
            daily.iter().map(|t| t.cumulative_attacks).collect(),
            TOTAL_ATTACKS_COLOR,
        ),
        line(
            "Total Deaths",
            daily.iter().map(|t| t.cumulative_deaths).collect(),
            TOTAL_DEATHS_COLOR,
        ),
    ];
    Figure {
        data,
        layout: json!({
            "xaxis": { "title": { "text": "Date" } },
            "yaxis": { "title": { "text": "People" } },
        }),
    }
}

/// Naples deaths per 10,000 by age bracket, one sex per chart.
pub fn mortality_bar(rows: &[MortalityRecord], sex: Sex) -> Figure {
    let ages: Vec<&str> = rows.iter().map(|r| r.age.as_str()).collect();
    let rates: Vec<f64> = rows
        .iter()
        .map(|r| match sex {
            Sex::Male => r.male,
            Sex::Female => r.female,
        })
        .collect();
    Figure {
        data: vec![json!({ "type": "bar", "x": ages, "y": rates })],
        layout: json!({
            "xaxis": { "title": { "text": format!("Age range ({})", sex.noun()) } },
            "yaxis": { "title": { "text": "Deaths per 10,000" } },
        }),
    }
}

/// Census population share by age bracket for one sex.
pub fn census_pie(rows: &[CensusRecord], sex: Sex) -> Figure {
    let ages: Vec<&str> = rows.iter().map(|r| r.age.as_str()).collect();
    let values: Vec<u64> = rows.iter().map(|r| population(r, sex)).collect();
    Figure {
        data: vec![json!({ "type": "pie", "labels": ages, "values": values })],
        layout: json!({
            "title": {
                "text": format!("{} population in the UK by age range", sex.adjective()),
            },
            "piecolorway": PLASMA,
        }),
    }
}

/// Census population by age bracket for one sex, one colored bar each.
pub fn census_bar(rows: &[CensusRecord], sex: Sex) -> Figure {
    let ages: Vec<&str> = rows.iter().map(|r| r.age.as_str()).collect();
    let values: Vec<u64> = rows.iter().map(|r| population(r, sex)).collect();
    let colors: Vec<&str> = (0..rows.len()).map(|i| PLASMA[i % PLASMA.len()]).collect();
    Figure {
        data: vec![json!({
            "type": "bar",
            "x": ages,
            "y": values,
            "marker": { "color": colors },
        })],
        layout: json!({
            "xaxis": { "title": { "text": format!("Age range ({})", sex.noun()) } },
            "yaxis": { "title": { "text": "Population" } },
        }),
    }
}

/// The whole-population male/female split.
pub fn census_split_pie(male_total: u64, female_total: u64) -> Figure {
    Figure {
        data: vec![json!({
            "type": "pie",
            "labels": ["Men", "Women"],
            "values": [male_total, female_total],
        })],
        layout: json!({}),
    }
}

fn population(row: &CensusRecord, sex: Sex) -> u64 {
    match sex {
        Sex::Male => row.male,
        Sex::Female => row.female,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::DailyRecord;
    use crate::series::running_totals;

    fn sample_daily() -> Vec<DailyTotals> {
        running_totals(&[
            DailyRecord {
                date: "19-Aug-1854".to_string(),
                attacks: 1,
                deaths: 1,
            },
            DailyRecord {
                date: "20-Aug-1854".to_string(),
                attacks: 3,
                deaths: 2,
            },
        ])
    }

    fn sample_census() -> Vec<CensusRecord> {
        vec![
            CensusRecord {
                age: "0-9".to_string(),
                male: 100,
                female: 120,
            },
            CensusRecord {
                age: "10-19".to_string(),
                male: 80,
                female: 90,
            },
        ]
    }

    #[test]
    fn line_chart_has_four_colored_traces() {
        let fig = attack_death_line(&sample_daily());
        assert_eq!(fig.data.len(), 4);
        let names: Vec<&str> = fig
            .data
            .iter()
            .map(|t| t["name"].as_str().unwrap())
            .collect();
        assert_eq!(
            names,
            vec!["Attacks", "Deaths", "Total Attacks", "Total Deaths"]
        );
        assert_eq!(fig.data[0]["line"]["color"], ATTACKS_COLOR);
        assert_eq!(fig.data[3]["line"]["color"], TOTAL_DEATHS_COLOR);
        assert_eq!(fig.data[2]["y"], json!([1, 4]));
    }

    #[test]
    fn line_chart_of_nothing_is_still_a_figure() {
        let fig = attack_death_line(&[]);
        assert_eq!(fig.data.len(), 4);
        assert_eq!(fig.data[0]["x"], json!([]));
    }

    #[test]
    fn mortality_bar_picks_the_requested_sex() {
        let rows = vec![MortalityRecord {
            age: "0-1".to_string(),
            male: 10.5,
            female: 9.5,
        }];
        let fig = mortality_bar(&rows, Sex::Female);
        assert_eq!(fig.data[0]["y"], json!([9.5]));
        assert_eq!(
            fig.layout["xaxis"]["title"]["text"],
            json!("Age range (women)")
        );
        assert_eq!(
            fig.layout["yaxis"]["title"]["text"],
            json!("Deaths per 10,000")
        );
    }

    #[test]
    fn census_pie_is_titled_and_plasma_colored() {
        let fig = census_pie(&sample_census(), Sex::Male);
        assert_eq!(fig.data[0]["labels"], json!(["0-9", "10-19"]));
        assert_eq!(fig.data[0]["values"], json!([100, 80]));
        assert_eq!(
            fig.layout["title"]["text"],
            json!("Male population in the UK by age range")
        );
        assert_eq!(fig.layout["piecolorway"][0], json!(PLASMA[0]));
    }

    #[test]
    fn census_bar_cycles_the_palette() {
        let rows: Vec<CensusRecord> = (0..12)
            .map(|i| CensusRecord {
                age: format!("{}-{}", 10 * i, 10 * i + 9),
                male: 1,
                female: 1,
            })
            .collect();
        let fig = census_bar(&rows, Sex::Male);
        let colors = fig.data[0]["marker"]["color"].as_array().unwrap();
        assert_eq!(colors.len(), 12);
        assert_eq!(colors[10], colors[0]);
    }

    #[test]
    fn split_pie_holds_the_two_totals() {
        let fig = census_split_pie(180, 210);
        assert_eq!(fig.data[0]["labels"], json!(["Men", "Women"]));
        assert_eq!(fig.data[0]["values"], json!([180, 210]));
    }

    #[test]
    fn build_all_covers_the_page() {
        let data = Datasets {
            daily: vec![],
            mortality: vec![],
            census: sample_census(),
            pumps: vec![],
            death_locations: vec![],
        };
        let figs = build_all(&data, &sample_daily());
        assert_eq!(figs.census_split_pie.data[0]["values"], json!([180, 210]));
        assert_eq!(figs.cholera_line.data.len(), 4);
    }
}
