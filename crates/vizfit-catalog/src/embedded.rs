//! Embedded chart specs.
//!
//! The default catalog is compiled in with `include_str!()` so the library
//! works without any files on disk. Entries are listed in file-name order,
//! the same order a [`DirectoryCatalog`](crate::DirectoryCatalog) would load
//! them in.

/// Bundled spec files as `(file name, contents)` pairs.
pub const EMBEDDED_CHARTS: &[(&str, &str)] = &[
    ("barchart.json", include_str!("../data/charts/barchart.json")),
    ("bubblechart.json", include_str!("../data/charts/bubblechart.json")),
    ("chordchart.json", include_str!("../data/charts/chordchart.json")),
    ("heatmap.json", include_str!("../data/charts/heatmap.json")),
    ("hiveplot.json", include_str!("../data/charts/hiveplot.json")),
    ("linechart.json", include_str!("../data/charts/linechart.json")),
    ("piechart.json", include_str!("../data/charts/piechart.json")),
    ("poi.json", include_str!("../data/charts/poi.json")),
    ("polygon.json", include_str!("../data/charts/polygon.json")),
    ("scatterchart.json", include_str!("../data/charts/scatterchart.json")),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_files_are_sorted_by_name() {
        let names: Vec<_> = EMBEDDED_CHARTS.iter().map(|(name, _)| *name).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }
}
