//! Scaling of result series onto a chart.
//!
//! All series share one scale: time runs along x against the slowest run,
//! operations along y against the busiest one, with y pointing down as on a
//! canvas.

use crate::metrics::DataPoint;
use crate::runner::AlgorithmResult;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ChartScale {
    pub max_time: f64,
    pub max_operations: u64,
}

impl ChartScale {
    /// Global maxima over every data point, `None` if there is nothing to plot.
    pub fn from_results<'a, I>(results: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a AlgorithmResult>,
    {
        let mut max_time = 0.0f64;
        let mut max_operations = 0u64;
        for point in results.into_iter().flat_map(|r| &r.metrics.data_points) {
            max_time = max_time.max(point.time);
            max_operations = max_operations.max(point.operations);
        }

        if max_time == 0.0 || max_operations == 0 {
            return None;
        }
        Some(Self {
            max_time,
            max_operations,
        })
    }

    pub fn project(&self, point: &DataPoint, width: f64, height: f64) -> (f64, f64) {
        let x = point.time / self.max_time * width;
        let y = height - point.operations as f64 / self.max_operations as f64 * height;
        (x, y)
    }

    pub fn polyline(&self, result: &AlgorithmResult, width: f64, height: f64) -> Vec<(f64, f64)> {
        result
            .metrics
            .data_points
            .iter()
            .map(|p| self.project(p, width, height))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::AlgorithmId;
    use crate::metrics::Metrics;

    fn result(name: AlgorithmId, points: &[(f64, u64)]) -> AlgorithmResult {
        AlgorithmResult {
            name,
            metrics: Metrics {
                data_points: points
                    .iter()
                    .map(|&(time, operations)| DataPoint { time, operations })
                    .collect(),
                ..Metrics::default()
            },
            completed: true,
        }
    }

    #[test]
    fn test_scale_uses_global_maxima() {
        let results = [
            result(AlgorithmId::Insertion, &[(1.0, 100), (8.0, 900)]),
            result(AlgorithmId::Bucket, &[(2.0, 500)]),
        ];
        let scale = ChartScale::from_results(&results).unwrap();
        assert_eq!(scale.max_time, 8.0);
        assert_eq!(scale.max_operations, 900);

        let line = scale.polyline(&results[1], 400.0, 300.0);
        assert_eq!(line.len(), 1);
        let (x, y) = line[0];
        assert!((x - 100.0).abs() < 1e-9);
        assert!((y - (300.0 - 500.0 / 900.0 * 300.0)).abs() < 1e-9);
    }

    #[test]
    fn test_nothing_to_plot() {
        assert!(ChartScale::from_results(&[] as &[AlgorithmResult]).is_none());
        let flat = [result(AlgorithmId::Quick, &[(0.0, 0)])];
        assert!(ChartScale::from_results(&flat).is_none());
    }

    #[test]
    fn test_endpoints() {
        let results = [result(AlgorithmId::Merge, &[(0.0, 0), (5.0, 50)])];
        let scale = ChartScale::from_results(&results).unwrap();
        assert_eq!(scale.polyline(&results[0], 10.0, 20.0), vec![(0.0, 20.0), (10.0, 0.0)]);
    }
}
