/// `count` evenly spaced values over `[start, end]`, both ends included.
///
/// `count == 0` gives an empty vector and `count == 1` gives `[start]`.
/// The last element is pinned to `end` so accumulated rounding never
/// leaves it short.
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            let mut points: Vec<f64> = (0..count)
                .map(|i| start + step * i as f64)
                .collect();
            points[count - 1] = end;
            points
        }
    }
}
