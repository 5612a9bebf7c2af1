use crate::domain::WeatherRow;

/// Rows whose city contains `term`, ignoring case, in their original order.
pub fn filter_rows<'a>(rows: &'a [WeatherRow], term: &str) -> Vec<&'a WeatherRow> {
    let needle = term.to_lowercase();
    rows.iter()
        .filter(|row| row.city.to_lowercase().contains(&needle))
        .collect()
}
