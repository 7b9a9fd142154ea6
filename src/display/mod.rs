use std::fmt::{self, Display, Formatter};

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::*;
use num_traits::{Float, FromPrimitive};

use crate::accumulator::WeightedStatistics;
use crate::error::Result;

fn value_cell<T: Display>(value: Result<T>) -> Cell {
    let text = match value {
        Ok(v) => format!("{v:.6}"),
        Err(_) => "n/a".to_string(),
    };
    Cell::new(text).set_alignment(CellAlignment::Right)
}

fn row<T: Display>(table: &mut Table, metric: &str, value: Result<T>) {
    table.add_row(vec![
        Cell::new(metric).set_alignment(CellAlignment::Left),
        value_cell(value),
    ]);
}

impl<T> WeightedStatistics<T>
where
    T: Float + FromPrimitive + Display,
{
    /// Summary table of every statistic; queries that cannot be answered yet
    /// show as `n/a`.
    pub fn display(&self) -> String {
        let mut title_table = Table::new();
        title_table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .add_row(vec![
                Cell::new("Weighted Statistics").set_alignment(CellAlignment::Center),
            ]);

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec![
                Cell::new("Metric").set_alignment(CellAlignment::Center),
                Cell::new("Value").set_alignment(CellAlignment::Center),
            ]);

        table.add_row(vec![
            Cell::new("Samples").set_alignment(CellAlignment::Left),
            Cell::new(self.samples()).set_alignment(CellAlignment::Right),
        ]);
        row(&mut table, "Weight sum", Ok(self.weight_sum()));
        row(&mut table, "Min", self.min());
        row(&mut table, "Max", self.max());
        row(&mut table, "Mean", self.mean());
        row(&mut table, "Variance", self.variance());
        row(&mut table, "Std. deviation", self.standard_deviation());
        row(&mut table, "Skewness", self.skewness());
        row(&mut table, "Kurtosis", self.kurtosis());
        row(&mut table, "Error estimate", self.error_estimate());

        format!("{title_table}\n{table}")
    }
}

impl<T> Display for WeightedStatistics<T>
where
    T: Float + FromPrimitive + Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_lists_every_statistic() {
        let mut stats = WeightedStatistics::new();
        stats
            .add_sequence(&[3.0, 4.0, 5.0, 2.0, 3.0, 4.0, 5.0, 6.0, 4.0, 7.0])
            .unwrap();
        let report = stats.to_string();

        for label in ["Samples", "Weight sum", "Mean", "Variance", "Skewness", "Kurtosis", "Error estimate"] {
            assert!(report.contains(label), "missing {label} in\n{report}");
        }
        assert!(report.contains("4.300000"));
        assert!(report.contains("0.359543"));
        assert!(!report.contains("n/a"));
    }

    #[test]
    fn unanswerable_rows_show_placeholder() {
        let mut stats = WeightedStatistics::new();
        stats.add_value(1.0).unwrap();
        let report = stats.to_string();

        assert!(report.contains("1.000000"));
        assert!(report.contains("n/a"));
    }
}
