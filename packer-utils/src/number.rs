use anyhow::{anyhow, Result};

/// Largest number of fractional digits a fixed-point weight may carry.
pub const MAX_PRECISION: u32 = 6;

/// Multiplier that turns a value with `precision` fractional digits into whole units.
pub fn fixed_scale(precision: u32) -> Result<u32> {
    if precision > MAX_PRECISION {
        return Err(anyhow!(
            "Precision ({}) exceeds maximum ({})",
            precision,
            MAX_PRECISION
        ));
    }
    Ok(10u32.pow(precision))
}

/// Parses a non-negative decimal such as `53.38` into whole `10^-precision` units.
///
/// Trailing fractional zeros do not count against `precision`, so `1.50`
/// is accepted with a precision of 1. Anything finer than `precision` is an
/// error rather than being rounded.
pub fn fixed_from_dec_str(value: &str, precision: u32) -> Result<u32> {
    let scale = fixed_scale(precision)?;
    let (whole, frac) = value.split_once('.').unwrap_or((value, ""));
    if whole.is_empty() && frac.is_empty() {
        return Err(anyhow!("Empty number"));
    }
    if !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit()) {
        return Err(anyhow!("Invalid number ({})", value));
    }
    let frac = frac.trim_end_matches('0');
    if frac.len() as u32 > precision {
        return Err(anyhow!(
            "Number ({}) has more than {} fractional digits",
            value,
            precision
        ));
    }

    let whole_units = match whole {
        "" => 0u64,
        w => w
            .parse::<u64>()
            .map_err(|_| anyhow!("Number ({}) is too large", value))?,
    };
    let frac_units = match frac {
        "" => 0u64,
        f => f.parse::<u64>()? * 10u64.pow(precision - f.len() as u32),
    };
    whole_units
        .checked_mul(scale as u64)
        .and_then(|w| w.checked_add(frac_units))
        .and_then(|units| u32::try_from(units).ok())
        .ok_or_else(|| anyhow!("Number ({}) is too large", value))
}

/// Parses a non-negative, finite decimal.
pub fn non_negative_f64_from_str(value: &str) -> Result<f64> {
    let parsed = value
        .parse::<f64>()
        .map_err(|_| anyhow!("Invalid number ({})", value))?;
    if !parsed.is_finite() || parsed < 0.0 {
        return Err(anyhow!("Number ({}) must be finite and non-negative", value));
    }
    Ok(parsed)
}
