//! Parsers for the free-text product descriptors.
//!
//! Both columns are operator-entered text and malformed values are normal
//! data: a parse failure means "no match", never an error.

/// Extract min and max wattage from a range descriptor like "3W-40W".
pub fn parse_wattage_range(raw: &str) -> Option<(i32, i32)> {
    let cleaned = raw.replace('W', "");
    let (min, max) = cleaned.split_once('-')?;
    let min = min.trim().parse::<i32>().ok()?;
    let max = max.trim().parse::<i32>().ok()?;
    Some((min, max))
}

/// Extract the individual Kelvin values from a descriptor like
/// "4000K,5000K,6000K". Any malformed element empties the whole list.
pub fn parse_color_temp(raw: &str) -> Vec<i32> {
    raw.split(',')
        .map(|part| part.trim().trim_end_matches('K').parse::<i32>())
        .collect::<Result<Vec<_>, _>>()
        .unwrap_or_default()
}

/// Row-wise wattage predicate: the parsed range [min, max] must contain the
/// requested minimum. Unparseable descriptors never match.
pub fn wattage_range_contains(descriptor: Option<&str>, requested: i32) -> bool {
    match parse_wattage_range(descriptor.unwrap_or_default()) {
        Some((min, max)) => min <= requested && requested <= max,
        None => false,
    }
}

/// Row-wise color-temperature predicate: the requested Kelvin value must
/// appear in the parsed list. Unparseable or empty descriptors never match.
pub fn color_temps_contain(descriptor: Option<&str>, requested: i32) -> bool {
    parse_color_temp(descriptor.unwrap_or_default()).contains(&requested)
}
