// File: crates/pulse-core/src/downsample.rs
// Summary: Largest-Triangle-Three-Buckets thinning for long line series.

use crate::series::LinePoint;

/// Indices of at most `threshold` points chosen by LTTB, treating the point index as x.
/// First and last points are always kept; output is in ascending order.
pub fn lttb_indices(values: &[f64], threshold: usize) -> Vec<usize> {
    let n = values.len();
    if threshold == 0 || n == 0 { return Vec::new(); }
    if threshold >= n || n <= 2 { return (0..n).collect(); }
    if threshold == 1 { return vec![0]; }
    if threshold == 2 { return vec![0, n - 1]; }

    let bucket_size = (n - 2) as f64 / (threshold - 2) as f64;
    let mut picked = Vec::with_capacity(threshold);
    picked.push(0);
    let mut a = 0usize;

    for i in 0..(threshold - 2) {
        let start = (1.0 + i as f64 * bucket_size).floor() as usize;
        let end = ((1.0 + (i + 1) as f64 * bucket_size).floor() as usize).min(n - 1);

        // Average of the next bucket; the final bucket looks ahead to the last point.
        let next_end = ((1.0 + (i + 2) as f64 * bucket_size).floor() as usize).min(n);
        let (avg_x, avg_y) = if end < next_end {
            let span = &values[end..next_end];
            let count = span.len() as f64;
            let sx: f64 = (end..next_end).map(|k| k as f64).sum();
            (sx / count, span.iter().sum::<f64>() / count)
        } else {
            ((n - 1) as f64, values[n - 1])
        };

        let (ax, ay) = (a as f64, values[a]);
        let mut best = start;
        let mut best_area = -1.0f64;
        for k in start..end.max(start + 1) {
            let area = ((ax - avg_x) * (values[k] - ay) - (ax - k as f64) * (avg_y - ay)).abs();
            if area > best_area {
                best_area = area;
                best = k;
            }
        }
        picked.push(best);
        a = best;
    }

    picked.push(n - 1);
    picked
}

/// Thin `points` to at most `max_points`, keeping labels with their values.
pub fn lttb(points: &[LinePoint], max_points: usize) -> Vec<LinePoint> {
    let values: Vec<f64> = points.iter().map(|p| p.value).collect();
    lttb_indices(&values, max_points).into_iter().map(|i| points[i].clone()).collect()
}
