//! Payload scatter selection

use std::collections::HashSet;

use super::spec::{ChartSpec, ScatterChart, ScatterPoint};
use crate::dataset::{Dataset, PayloadRange, SiteFilter};

pub const X_LABEL: &str = "Payload Mass (kg)";
pub const Y_LABEL: &str = "class";

/// Rows for the payload/outcome scatter chart.
///
/// Keeps records with `min < payload < max` (boundary values are dropped) and,
/// for a concrete site, only that site's launches. Rows pass through
/// unaggregated, colored by booster version category.
pub fn compute_scatter_selection(
    dataset: &Dataset,
    site_filter: &SiteFilter,
    payload_range: &PayloadRange,
) -> ChartSpec {
    let points: Vec<ScatterPoint> = dataset
        .records()
        .iter()
        .filter(|r| payload_range.contains(r.payload_mass_kg))
        .filter(|r| site_filter.matches(r))
        .map(|r| ScatterPoint {
            x: r.payload_mass_kg,
            y: r.outcome_class,
            category: r.booster_version_category.clone(),
            site: r.launch_site.clone(),
        })
        .collect();

    let mut seen = HashSet::new();
    let categories = points
        .iter()
        .filter(|p| seen.insert(p.category.as_str()))
        .map(|p| p.category.clone())
        .collect();

    let scope = match site_filter {
        SiteFilter::All => "All Sites",
        SiteFilter::Site(site) => site.as_str(),
    };

    tracing::debug!(
        site = %site_filter,
        range = %payload_range,
        points = points.len(),
        "Computed scatter selection"
    );

    ChartSpec::Scatter(ScatterChart {
        title: format!("Correlation between Payload and Success for {}", scope),
        x_label: X_LABEL.to_string(),
        y_label: Y_LABEL.to_string(),
        categories,
        points,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::LaunchRecord;

    fn dataset() -> Dataset {
        Dataset::from_records(vec![
            LaunchRecord::new("CCAFS LC-40", 500.0, "v1.1", 1),
            LaunchRecord::new("CCAFS LC-40", 10000.0, "FT", 1),
            LaunchRecord::new("KSC LC-39A", 15000.0, "B5", 0),
            LaunchRecord::new("KSC LC-39A", 2500.0, "FT", 0),
            LaunchRecord::new("VAFB SLC-4E", 7000.0, "B4", 1),
        ])
        .unwrap()
    }

    fn count(dataset: &Dataset, site: &SiteFilter, range: PayloadRange) -> usize {
        compute_scatter_selection(dataset, site, &range)
            .as_scatter()
            .unwrap()
            .points
            .len()
    }

    #[test]
    fn test_boundary_values_excluded() {
        let dataset = Dataset::from_records(vec![
            LaunchRecord::new("CCAFS", 500.0, "v1.1", 1),
            LaunchRecord::new("CCAFS", 10000.0, "FT", 1),
            LaunchRecord::new("CCAFS", 15000.0, "B5", 0),
        ])
        .unwrap();

        let spec = compute_scatter_selection(
            &dataset,
            &SiteFilter::All,
            &PayloadRange::new(0.0, 10000.0),
        );
        let scatter = spec.as_scatter().unwrap();
        assert_eq!(scatter.points.len(), 1);
        assert_eq!(scatter.points[0].x, 500.0);
        assert_eq!(scatter.points[0].y, 1);
        assert_eq!(scatter.points[0].category, "v1.1");
    }

    #[test]
    fn test_every_point_satisfies_filters() {
        let dataset = dataset();
        let ranges = [(0.0, 10000.0), (500.0, 7000.0), (2000.0, 20000.0), (0.0, 0.0)];
        let mut filters = vec![SiteFilter::All];
        filters.extend(dataset.launch_sites().into_iter().map(SiteFilter::site));

        for (min, max) in ranges {
            for filter in &filters {
                let spec = compute_scatter_selection(&dataset, filter, &PayloadRange::new(min, max));
                for point in &spec.as_scatter().unwrap().points {
                    assert!(point.x > min && point.x < max);
                    assert!(filter.is_all() || SiteFilter::site(point.site.as_str()) == *filter);
                }
            }
        }
    }

    #[test]
    fn test_narrowing_never_grows_selection() {
        let dataset = dataset();
        let mut previous = usize::MAX;
        for (min, max) in [(0.0, 20000.0), (400.0, 12000.0), (1000.0, 9000.0), (3000.0, 5000.0)] {
            let n = count(&dataset, &SiteFilter::All, PayloadRange::new(min, max));
            assert!(n <= previous);
            previous = n;
        }
    }

    #[test]
    fn test_site_filter_applied() {
        let dataset = dataset();
        let n = count(
            &dataset,
            &SiteFilter::site("KSC LC-39A"),
            PayloadRange::new(0.0, 20000.0),
        );
        assert_eq!(n, 2);
    }

    #[test]
    fn test_unknown_site_is_empty_scatter() {
        let spec = compute_scatter_selection(
            &dataset(),
            &SiteFilter::site("Boca Chica"),
            &PayloadRange::new(0.0, 20000.0),
        );
        let scatter = spec.as_scatter().unwrap();
        assert!(scatter.points.is_empty());
        assert!(scatter.categories.is_empty());
    }

    #[test]
    fn test_categories_first_appearance() {
        let spec = compute_scatter_selection(
            &dataset(),
            &SiteFilter::All,
            &PayloadRange::new(0.0, 20000.0),
        );
        let scatter = spec.as_scatter().unwrap();
        assert_eq!(scatter.categories, vec!["v1.1", "FT", "B5", "B4"]);
        assert_eq!(scatter.x_label, X_LABEL);
        assert!(scatter.title.ends_with("All Sites"));
    }
}
