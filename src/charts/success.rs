//! Success distribution (pie chart)

use std::collections::HashMap;

use super::spec::{ChartSpec, PieChart, PieSlice};
use crate::dataset::{Dataset, SiteFilter};

pub const ALL_SITES_TITLE: &str = "Proportion of Successful Launches by Site";

/// Success/failure proportions for the pie chart.
///
/// With `SiteFilter::All` each slice is one site's share of all successful
/// launches. With a concrete site the two slices are that site's success and
/// failure rates. When the selection holds no records the result is
/// `ChartSpec::NoData` instead of a 0/0 rate.
pub fn compute_success_distribution(dataset: &Dataset, site_filter: &SiteFilter) -> ChartSpec {
    match site_filter {
        SiteFilter::All => distribution_by_site(dataset),
        SiteFilter::Site(site) => site_success_rate(dataset, site),
    }
}

fn distribution_by_site(dataset: &Dataset) -> ChartSpec {
    // (first-appearance index, count) per site
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    for record in dataset.records().iter().filter(|r| r.is_success()) {
        let next_index = counts.len();
        counts
            .entry(record.launch_site.as_str())
            .or_insert((next_index, 0))
            .1 += 1;
    }

    let total: usize = counts.values().map(|(_, n)| n).sum();
    if total == 0 {
        tracing::debug!("No successful launches in dataset");
        return ChartSpec::no_data(ALL_SITES_TITLE, "No successful launches recorded");
    }

    let mut per_site: Vec<(&str, usize, usize)> = counts
        .into_iter()
        .map(|(site, (order, count))| (site, order, count))
        .collect();
    per_site.sort_by(|a, b| b.2.cmp(&a.2).then(a.1.cmp(&b.1)));

    let slices = per_site
        .into_iter()
        .map(|(site, _, count)| PieSlice {
            label: site.to_string(),
            value: count as f64 / total as f64,
        })
        .collect();

    ChartSpec::Pie(PieChart {
        title: ALL_SITES_TITLE.to_string(),
        slices,
    })
}

fn site_success_rate(dataset: &Dataset, site: &str) -> ChartSpec {
    let title = format!("Total Success Launches for site {}", site);

    let (successes, total) = dataset
        .records()
        .iter()
        .filter(|r| r.launch_site == site)
        .fold((0usize, 0usize), |(ok, all), r| {
            (ok + usize::from(r.is_success()), all + 1)
        });

    if total == 0 {
        tracing::debug!(site = %site, "No launches recorded for site");
        return ChartSpec::no_data(title, format!("No launches recorded for site {}", site));
    }

    let rate = successes as f64 / total as f64;

    ChartSpec::Pie(PieChart {
        title,
        slices: vec![
            PieSlice {
                label: "Success".to_string(),
                value: rate,
            },
            PieSlice {
                label: "Failure".to_string(),
                value: 1.0 - rate,
            },
        ],
    })
}
