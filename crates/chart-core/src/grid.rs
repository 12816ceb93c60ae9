// File: crates/chart-core/src/grid.rs
// Summary: Nice linear tick values and tick label formatting.

/// Round `raw` up to 1, 2, 2.5 or 5 times a power of ten.
pub fn nice_step(raw: f64) -> f64 {
    if !raw.is_finite() || raw <= 0.0 { return 1.0; }
    let mag = 10f64.powf(raw.log10().floor());
    let frac = raw / mag;
    let nice = if frac <= 1.0 {
        1.0
    } else if frac <= 2.0 {
        2.0
    } else if frac <= 2.5 {
        2.5
    } else if frac <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * mag
}

/// Evenly spaced round values inside `[min, max]`, at most `max_ticks` of them.
pub fn nice_ticks(min: f64, max: f64, max_ticks: usize) -> Vec<f64> {
    let (lo, hi) = (min.min(max), min.max(max));
    if !lo.is_finite() || !hi.is_finite() { return Vec::new(); }
    if (hi - lo).abs() < 1e-12 || max_ticks < 2 { return vec![lo]; }
    let step = nice_step((hi - lo) / (max_ticks as f64 - 1.0));
    let first = (lo / step).ceil() * step;
    let mut out = Vec::new();
    let mut i = 0;
    loop {
        let v = first + step * i as f64;
        if v > hi + step * 1e-9 { break; }
        // snap float noise such as 0.30000000000000004
        out.push((v / step).round() * step);
        i += 1;
    }
    out
}

/// Compact tick label: integers without decimals, otherwise up to 4 decimals.
pub fn format_tick(v: f64) -> String {
    if v == 0.0 { return "0".to_string(); }
    if v.fract() == 0.0 && v.abs() < 1e15 {
        return format!("{}", v as i64);
    }
    let s = format!("{:.4}", v);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}
