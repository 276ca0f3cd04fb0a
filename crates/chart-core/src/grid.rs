// File: crates/chart-core/src/grid.rs
// Summary: Grid/tick layout helpers ("nice" major steps, minor subdivisions, labels).

/// Mantissas a major step may take, in increasing order.
const NICE_STEPS: [f64; 5] = [1.0, 2.0, 2.5, 5.0, 10.0];

/// Tick positions for one axis.
#[derive(Clone, Debug, PartialEq)]
pub struct Ticks {
    pub step: f64,
    pub major: Vec<f64>,
    pub minor: Vec<f64>,
}

impl Ticks {
    /// Lay out ticks for the closed range `[min, max]` using at most `max_bins` major intervals.
    pub fn for_range(min: f64, max: f64, max_bins: usize) -> Self {
        let step = nice_step(min, max, max_bins);
        let major = major_ticks(min, max, step);
        let minor = minor_ticks(min, max, step);
        Self { step, major, minor }
    }

    pub fn labels(&self) -> Vec<String> {
        self.major.iter().map(|&v| format_tick(v, self.step)).collect()
    }
}

/// Smallest 1-2-2.5-5 step that splits `[min, max]` into at most `max_bins` intervals.
pub fn nice_step(min: f64, max: f64, max_bins: usize) -> f64 {
    let span = (max - min).abs();
    if !span.is_finite() || span <= 0.0 {
        return 1.0;
    }
    let bins = max_bins.max(1) as f64;
    let raw = span / bins;
    let mag = 10f64.powf(raw.log10().floor());
    for m in NICE_STEPS {
        let step = m * mag;
        if span / step <= bins + 1e-9 {
            return step;
        }
    }
    10.0 * mag
}

fn step_mantissa(step: f64) -> f64 {
    let mag = 10f64.powf(step.log10().floor());
    step / mag
}

pub fn major_ticks(min: f64, max: f64, step: f64) -> Vec<f64> {
    if !(step > 0.0) || !min.is_finite() || !max.is_finite() {
        return Vec::new();
    }
    let eps = step * 1e-9;
    let first = ((min - eps) / step).ceil() as i64;
    let last = ((max + eps) / step).floor() as i64;
    (first..=last).map(|i| i as f64 * step).collect()
}

/// Minor ticks strictly between majors: 5 subdivisions for 1/5 mantissas, 4 otherwise.
pub fn minor_ticks(min: f64, max: f64, step: f64) -> Vec<f64> {
    if !(step > 0.0) || !min.is_finite() || !max.is_finite() {
        return Vec::new();
    }
    let m = step_mantissa(step);
    let divs = if (m - 1.0).abs() < 1e-6 || (m - 5.0).abs() < 1e-6 || (m - 10.0).abs() < 1e-6 { 5 } else { 4 };
    let minor_step = step / divs as f64;
    let eps = minor_step * 1e-6;
    let first = ((min - eps) / minor_step).ceil() as i64;
    let last = ((max + eps) / minor_step).floor() as i64;
    (first..=last)
        .filter(|i| i.rem_euclid(divs) != 0)
        .map(|i| i as f64 * minor_step)
        .collect()
}

/// Format `v` with the fewest decimals that still distinguish ticks `step` apart.
pub fn format_tick(v: f64, step: f64) -> String {
    let mut decimals = if step > 0.0 && step.is_finite() {
        (-step.log10().floor()).max(0.0) as usize
    } else {
        0
    };
    if step > 0.0 && (step_mantissa(step) - 2.5).abs() < 1e-6 {
        decimals += 1;
    }
    let s = format!("{:.*}", decimals, v);
    // avoid "-0" / "-0.00"
    if s.trim_start_matches('-').chars().all(|c| c == '0' || c == '.') {
        s.trim_start_matches('-').to_string()
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: &[f64], b: &[f64]) -> bool {
        a.len() == b.len() && a.iter().zip(b).all(|(x, y)| (x - y).abs() < 1e-9)
    }

    #[test]
    fn nice_step_for_k_range() {
        // k axis of the Frobenius chart: 10..80 with margins
        assert!((nice_step(6.5, 83.5, 8) - 10.0).abs() < 1e-12);
        assert!((nice_step(0.0, 1.0, 8) - 0.2).abs() < 1e-12);
        assert!((nice_step(0.0, 1.0, 4) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn major_ticks_cover_range() {
        let t = major_ticks(6.5, 83.5, 10.0);
        assert!(approx(&t, &[10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0]));
        let t = major_ticks(0.0, 1.0, 0.25);
        assert!(approx(&t, &[0.0, 0.25, 0.5, 0.75, 1.0]));
    }

    #[test]
    fn minor_ticks_skip_majors() {
        let m = minor_ticks(0.0, 10.0, 5.0);
        assert!(approx(&m, &[1.0, 2.0, 3.0, 4.0, 6.0, 7.0, 8.0, 9.0]));
        let m = minor_ticks(0.0, 2.0, 2.0);
        assert!(approx(&m, &[0.5, 1.0, 1.5]));
    }

    #[test]
    fn degenerate_range_has_unit_step() {
        assert_eq!(nice_step(3.0, 3.0, 8), 1.0);
        assert!(major_ticks(f64::NAN, 1.0, 1.0).is_empty());
    }

    #[test]
    fn tick_labels() {
        assert_eq!(format_tick(20.0, 10.0), "20");
        assert_eq!(format_tick(0.04, 0.02), "0.04");
        assert_eq!(format_tick(0.75, 0.25), "0.75");
        assert_eq!(format_tick(-0.0, 0.1), "0.0");
        assert_eq!(format_tick(1500.0, 500.0), "1500");
    }
}
