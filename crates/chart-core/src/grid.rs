// File: crates/chart-core/src/grid.rs
// Summary: Grid/tick layout helpers.

/// Round `span / target` up to a 1, 2 or 5 times a power of ten.
pub fn nice_step(span: f64, target: usize) -> f64 {
    let raw = span.abs() / target.max(1) as f64;
    if !raw.is_finite() || raw <= 0.0 {
        return 1.0;
    }
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let nice = if norm <= 1.0 {
        1.0
    } else if norm <= 2.0 {
        2.0
    } else if norm <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * mag
}

/// Tick positions inside [min, max] on a nice step, roughly `target` of them.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() || max <= min {
        return Vec::new();
    }
    let step = nice_step(max - min, target);
    let eps = step * 1e-9;
    let first = (min / step).ceil() * step;
    let mut out = Vec::new();
    let mut i = 0usize;
    loop {
        let v = first + step * i as f64;
        if v > max + eps {
            break;
        }
        // snap -0.0 and float dust to a clean zero
        out.push(if v.abs() < eps { 0.0 } else { v });
        i += 1;
    }
    out
}

/// Format a tick value with just enough decimals for `step`.
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step >= 1.0 || step <= 0.0 {
        0
    } else {
        (-step.log10().floor()) as usize
    };
    format!("{:.*}", decimals, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nice_steps_are_1_2_5() {
        assert_eq!(nice_step(10.0, 5), 2.0);
        assert_eq!(nice_step(100.0, 4), 50.0);
        assert!((nice_step(7.0, 10) - 1.0).abs() < 1e-12);
        assert!((nice_step(0.9, 5) - 0.2).abs() < 1e-12);
    }

    #[test]
    fn ticks_cover_range() {
        assert_eq!(nice_ticks(0.0, 10.0, 5), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
        let t = nice_ticks(0.8, 5.2, 5);
        assert_eq!(t.len(), 5);
        for (got, want) in t.iter().zip([1.0, 2.0, 3.0, 4.0, 5.0]) {
            assert!((got - want).abs() < 1e-9);
        }
        assert!(nice_ticks(1.0, 1.0, 5).is_empty());
    }

    #[test]
    fn ticks_snap_zero() {
        let t = nice_ticks(-1.0, 1.0, 4);
        assert!(t.contains(&0.0));
        assert!(!t.iter().any(|v| *v == 0.0 && v.is_sign_negative()));
    }

    #[test]
    fn tick_format_precision() {
        assert_eq!(format_tick(4000.0, 1000.0), "4000");
        assert_eq!(format_tick(0.5, 0.5), "0.5");
        assert_eq!(format_tick(0.25, 0.05), "0.25");
    }
}
