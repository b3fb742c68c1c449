use serde::{Deserialize, Serialize};

pub type GenreId = u64;

/// A TMDB movie genre, fetched once when the search screen mounts
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Genre {
    pub id: GenreId,
    pub name: String,
}

/// One entry of the genre picker
///
/// The picker always leads with an "All genres" entry whose id is `None`;
/// choosing it clears the genre filter.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct GenreOption {
    pub id: Option<GenreId>,
    pub name: String,
}

impl GenreOption {
    pub const ALL_LABEL: &'static str = "All genres";

    /// Builds the picker list: the "All genres" entry, then `genres` in API order
    pub fn list(genres: &[Genre]) -> Vec<GenreOption> {
        std::iter::once(GenreOption {
            id: None,
            name: Self::ALL_LABEL.to_string(),
        })
        .chain(genres.iter().map(GenreOption::from))
        .collect()
    }
}

impl From<&Genre> for GenreOption {
    fn from(genre: &Genre) -> Self {
        Self {
            id: Some(genre.id),
            name: genre.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_list_leads_with_all() {
        let genres = vec![
            Genre {
                id: 28,
                name: "Action".to_string(),
            },
            Genre {
                id: 35,
                name: "Comedy".to_string(),
            },
        ];

        let options = GenreOption::list(&genres);

        assert_eq!(options.len(), 3);
        assert_eq!(options[0].id, None);
        assert_eq!(options[0].name, "All genres");
        assert_eq!(options[1].id, Some(28));
        assert_eq!(options[2].name, "Comedy");
    }

    #[test]
    fn test_option_list_with_no_genres() {
        let options = GenreOption::list(&[]);
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].id, None);
    }
}
