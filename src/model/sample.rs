//! Built-in demo collection.

use super::error::ValidationError;
use super::place::{LatLng, Place};
use super::user_map::UserMap;

type SampleMap = (&'static str, &'static [(&'static str, &'static str, f64, f64)]);

const SAMPLES: &[SampleMap] = &[
    (
        "Memories from University",
        &[
            ("Branner Hall", "Best dorm at Stanford", 37.426, -122.163),
            ("Gates CS building", "Many long nights in this basement", 37.430, -122.173),
            ("Pinkberry", "First date with my wife", 37.444, -122.170),
        ],
    ),
    (
        "January vacation planning!",
        &[
            ("Tokyo", "Overnight layover", 35.67, 139.65),
            ("Ranchi", "Family visit + wedding!", 23.34, 85.31),
            ("Singapore", "Inspired by \"Crazy Rich Asians\"", 1.35, 103.82),
        ],
    ),
    (
        "Singapore travel itinerary",
        &[
            ("Gardens by the Bay", "Amazing urban nature park", 1.282, 103.864),
            (
                "Jurong Bird Park",
                "Family-friendly park with many varieties of birds",
                1.319,
                103.706,
            ),
            ("Sentosa", "Island resort with panoramic views", 1.249, 103.830),
            ("Botanic Gardens", "One of the world's greatest tropical gardens", 1.3138, 103.8159),
        ],
    ),
    (
        "My favorite places in the Midwest",
        &[
            ("Chicago", "Urban center of the midwest, the \"Windy City\"", 41.878, -87.630),
            ("Rochester, Michigan", "The best of Detroit suburbia", 42.681, -83.134),
            ("Mackinaw City", "The entrance into the Upper Peninsula", 45.777, -84.727),
            ("Michigan State University", "Home to the Spartans", 42.701, -84.482),
            ("University of Michigan", "Home to the Wolverines", 42.278, -83.738),
        ],
    ),
    (
        "Restaurants to try",
        &[
            ("Champ's Diner", "Retro diner in Brooklyn", 40.709, -73.941),
            ("Althea", "Chicago upscale dining with an amazing view", 41.895, -87.625),
            ("Shizen", "Elegant sushi in San Francisco", 37.768, -122.422),
            ("Citizen Eatery", "Bright cafe in Austin with a pink rabbit", 30.322, -97.739),
            ("Kati Thai", "Authentic Portland Thai food, served with love", 45.505, -122.635),
        ],
    ),
];

/// Five ready-made maps for trying the app without entering data.
///
/// # Errors
///
/// Never fails in practice; the data goes through the same validation as
/// user input.
pub fn sample_maps() -> Result<Vec<UserMap>, ValidationError> {
    SAMPLES
        .iter()
        .map(|(title, places)| {
            let places = places
                .iter()
                .map(|&(name, description, lat, lng)| {
                    Place::new(name, description, LatLng::new(lat, lng))
                })
                .collect::<Result<Vec<_>, _>>()?;
            UserMap::new(*title, places)
        })
        .collect()
}
