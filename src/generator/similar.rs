//! "Related content" links shown at the bottom of each post

use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::SiteConfig;
use crate::content::Entry;

/// Number of related-post slots in the template
pub const SIMILAR_POST_COUNT: usize = 3;

/// One related-post slot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimilarPost {
    pub link: String,
    pub date: String,
    pub title: String,
}

impl SimilarPost {
    /// Build a slot pointing at `entry`'s page
    pub fn from_entry(config: &SiteConfig, entry: &Entry) -> Self {
        Self {
            link: config.post_path(&entry.slug()),
            date: entry.date().unwrap_or_default().to_string(),
            title: entry.h1.clone(),
        }
    }
}

/// Exactly three related-post slots; unused slots hold empty strings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimilarPosts {
    posts: [SimilarPost; SIMILAR_POST_COUNT],
}

impl SimilarPosts {
    /// All slots empty
    pub fn empty() -> Self {
        Self::default()
    }

    /// Fill slots in order; extra posts are dropped, missing ones left empty
    pub fn from_posts(posts: Vec<SimilarPost>) -> Self {
        let mut similar = Self::empty();
        for (slot, post) in similar.posts.iter_mut().zip(posts) {
            *slot = post;
        }
        similar
    }

    /// Pick up to three random siblings of the entry at `current`
    pub fn sample<R: Rng + ?Sized>(
        config: &SiteConfig,
        entries: &[Entry],
        current: usize,
        rng: &mut R,
    ) -> Self {
        let siblings: Vec<&Entry> = entries
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != current)
            .map(|(_, entry)| entry)
            .collect();

        let posts = siblings
            .choose_multiple(rng, SIMILAR_POST_COUNT)
            .map(|entry| SimilarPost::from_entry(config, entry))
            .collect();

        Self::from_posts(posts)
    }

    pub fn posts(&self) -> &[SimilarPost] {
        &self.posts
    }

    /// Number of filled slots
    pub fn filled(&self) -> usize {
        self.posts.iter().filter(|p| !p.link.is_empty()).count()
    }
}
