//! Built-in sample catalog of twenty well-known films.

use super::types::{Catalog, MovieRecord};

const SAMPLE: &[(&str, &str, i32, f64, &str)] = &[
    (
        "The Shawshank Redemption",
        "Drama",
        1994,
        9.3,
        "Two imprisoned men bond over a number of years, finding solace and eventual redemption through acts of common decency.",
    ),
    (
        "The Godfather",
        "Crime, Drama",
        1972,
        9.2,
        "The aging patriarch of an organized crime dynasty transfers control of his clandestine empire to his reluctant son.",
    ),
    (
        "The Dark Knight",
        "Action, Crime, Drama",
        2008,
        9.0,
        "When the menace known as the Joker wreaks havoc and chaos on the people of Gotham, Batman must accept one of the greatest psychological and physical tests of his ability to fight injustice.",
    ),
    (
        "Pulp Fiction",
        "Crime, Drama",
        1994,
        8.9,
        "The lives of two mob hitmen, a boxer, a gangster and his wife, and a pair of diner bandits intertwine in four tales of violence and redemption.",
    ),
    (
        "Forrest Gump",
        "Drama, Romance",
        1994,
        8.8,
        "The presidencies of Kennedy and Johnson, the events of Vietnam, Watergate, and other historical events unfold through the perspective of an Alabama man with an IQ of 75.",
    ),
    (
        "Inception",
        "Action, Adventure, Sci-Fi",
        2010,
        8.8,
        "A thief who steals corporate secrets through the use of dream-sharing technology is given the inverse task of planting an idea into the mind of a C.E.O.",
    ),
    (
        "The Matrix",
        "Action, Sci-Fi",
        1999,
        8.7,
        "A computer hacker learns from mysterious rebels about the true nature of his reality and his role in the war against its controllers.",
    ),
    (
        "Goodfellas",
        "Biography, Crime, Drama",
        1990,
        8.7,
        "The story of Henry Hill and his life in the mob, covering his relationship with his wife Karen Hill and his mob partners Jimmy Conway and Tommy DeVito.",
    ),
    (
        "The Silence of the Lambs",
        "Crime, Drama, Thriller",
        1991,
        8.6,
        "A young F.B.I. cadet must receive the help of an incarcerated and manipulative cannibal killer to help catch another serial killer.",
    ),
    (
        "Star Wars: A New Hope",
        "Action, Adventure, Fantasy",
        1977,
        8.6,
        "Luke Skywalker joins forces with a Jedi Knight, a cocky pilot, a Wookiee and two droids to save the galaxy from the Empire's world-destroying battle station.",
    ),
    (
        "The Lord of the Rings: The Fellowship of the Ring",
        "Adventure, Drama, Fantasy",
        2001,
        8.8,
        "A meek Hobbit from the Shire and eight companions set out on a journey to destroy the powerful One Ring and save Middle-earth from the Dark Lord Sauron.",
    ),
    (
        "Fight Club",
        "Drama",
        1999,
        8.8,
        "An insomniac office worker and a devil-may-care soapmaker form an underground fight club that evolves into something much, much more.",
    ),
    (
        "Parasite",
        "Comedy, Drama, Thriller",
        2019,
        8.6,
        "Greed and class discrimination threaten the newly formed symbiotic relationship between the wealthy Park family and the destitute Kim clan.",
    ),
    (
        "Interstellar",
        "Adventure, Drama, Sci-Fi",
        2014,
        8.6,
        "A team of explorers travel through a wormhole in space in an attempt to ensure humanity's survival.",
    ),
    (
        "The Avengers",
        "Action, Adventure, Sci-Fi",
        2012,
        8.0,
        "Earth's mightiest heroes must come together and learn to fight as a team if they are going to stop the mischievous Loki and his alien army from enslaving humanity.",
    ),
    (
        "Toy Story",
        "Animation, Adventure, Comedy",
        1995,
        8.3,
        "A cowboy doll is profoundly threatened and jealous when a new spaceman figure supplants him as top toy in a boy's room.",
    ),
    (
        "Spirited Away",
        "Animation, Adventure, Family",
        2001,
        8.6,
        "During her family's move to the suburbs, a sullen 10-year-old girl wanders into a world ruled by gods, witches, and spirits.",
    ),
    (
        "The Lion King",
        "Animation, Adventure, Drama",
        1994,
        8.5,
        "Lion prince Simba and his father are targeted by his bitter uncle, who wants to ascend the throne himself.",
    ),
    (
        "Alien",
        "Horror, Sci-Fi",
        1979,
        8.4,
        "The crew of a commercial spacecraft encounter a deadly lifeform after investigating an unknown transmission.",
    ),
    (
        "Gladiator",
        "Action, Adventure, Drama",
        2000,
        8.5,
        "A former Roman General sets out to exact vengeance against the corrupt emperor who murdered his family and sent him into slavery.",
    ),
];

/// The catalog used when no catalog file is configured.
pub fn sample_catalog() -> Catalog {
    Catalog::from_records(SAMPLE.iter().map(
        |&(title, genre, year, rating, description)| MovieRecord {
            title: title.to_string(),
            genre: genre.to_string(),
            year,
            rating,
            description: description.to_string(),
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sample_catalog_shape() {
        let catalog = sample_catalog();
        assert_eq!(catalog.len(), 20);

        let titles: HashSet<&str> = catalog.titles().into_iter().collect();
        assert_eq!(titles.len(), 20, "sample titles must be unique");

        assert!(catalog
            .iter()
            .all(|m| (0.0..=10.0).contains(&m.rating) && !m.description.is_empty()));
    }

    #[test]
    fn test_sample_catalog_max_rating() {
        let max = sample_catalog()
            .iter()
            .map(|m| m.rating)
            .fold(f64::MIN, f64::max);
        assert_eq!(max, 9.3);
    }

    #[test]
    fn test_sample_catalog_genres() {
        let genres = sample_catalog().genres();
        assert!(genres.contains(&"Sci-Fi".to_string()));
        assert!(genres.contains(&"Animation".to_string()));
        assert_eq!(genres.len(), 13);
    }
}
