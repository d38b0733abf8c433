//! Default place catalog.

use crate::model::meeting::MeetingValidationError;
use crate::model::place::Place;

/// Rooms offered by the registration dialog when no catalog is configured.
pub const DEFAULT_PLACE_NAMES: &[&str] = &[
    "Room A", "Room B", "Room C", "Room D", "Room E", "Room F", "Room G", "Room H", "Room I",
    "Room J",
];

/// Builds a sorted, de-duplicated catalog from raw names.
pub fn place_catalog<I, S>(names: I) -> Result<Vec<Place>, MeetingValidationError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut places = names
        .into_iter()
        .map(Place::new)
        .collect::<Result<Vec<_>, _>>()?;
    places.sort();
    places.dedup();
    Ok(places)
}

pub fn default_places() -> Vec<Place> {
    place_catalog(DEFAULT_PLACE_NAMES).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::{default_places, place_catalog};
    use crate::model::meeting::MeetingValidationError;

    #[test]
    fn default_catalog_has_ten_rooms() {
        let places = default_places();
        assert_eq!(places.len(), 10);
        assert_eq!(places[0].name(), "Room A");
        assert_eq!(places[9].name(), "Room J");
    }

    #[test]
    fn catalog_sorts_and_dedups() {
        let places = place_catalog(["Mars", "Jupiter", " Mars "]).unwrap();
        let names: Vec<_> = places.iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["Jupiter", "Mars"]);
    }

    #[test]
    fn catalog_rejects_blank_names() {
        assert_eq!(
            place_catalog(["Mars", ""]).unwrap_err(),
            MeetingValidationError::EmptyPlace
        );
    }
}
