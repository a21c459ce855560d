pub const REMOTE: &str = "Remote";
pub const LOCATION_NOT_SPECIFIED: &str = "Location not specified";

/// Renders provider location fields as a single display string.
///
/// A city wins over the remote flag. A missing country renders the city alone.
pub fn format_location(city: Option<&str>, country: Option<&str>, is_remote: bool) -> String {
    let city = city.map(str::trim).filter(|c| !c.is_empty());
    let country = country.map(str::trim).filter(|c| !c.is_empty());

    match (city, country) {
        (Some(city), Some(country)) => format!("{city}, {country}"),
        (Some(city), None) => city.to_string(),
        (None, _) if is_remote => REMOTE.to_string(),
        (None, _) => LOCATION_NOT_SPECIFIED.to_string(),
    }
}
