use crate::models::Comment;
use chrono::{TimeZone, Utc};
use tracing::debug;

/// Session-local engagement state for one property detail page: the like
/// counter, whether the current visitor has liked the listing, and the
/// comment thread (newest first).
///
/// This is in-session state only. It starts from seed values and is lost
/// when the session ends; nothing here touches the shared catalog.
#[derive(Debug, Clone, Default)]
pub struct Engagement {
    likes: u32,
    liked: bool,
    comments: Vec<Comment>,
}

impl Engagement {
    pub fn new(likes: u32, comments: Vec<Comment>) -> Self {
        Self {
            likes,
            liked: false,
            comments,
        }
    }

    /// Engagement state a detail page starts with: the baseline like count
    /// and the three canonical seed comments.
    pub fn seed_for(property_id: &str) -> Self {
        debug!("Seeding engagement state for listing {property_id}");
        Self::new(42, seed_comments())
    }

    pub fn likes(&self) -> u32 {
        self.likes
    }

    pub fn liked(&self) -> bool {
        self.liked
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// Flip the visitor's like. Returns the new counter value.
    pub fn toggle_like(&mut self) -> u32 {
        if self.liked {
            self.likes = self.likes.saturating_sub(1);
        } else {
            self.likes += 1;
        }
        self.liked = !self.liked;
        self.likes
    }

    /// Add a comment to the top of the thread. Blank author or content
    /// (after trimming) is rejected and leaves the thread untouched.
    pub fn add_comment(
        &mut self,
        author: &str,
        content: &str,
        rating: Option<u8>,
    ) -> Option<&Comment> {
        let author = author.trim();
        let content = content.trim();
        if author.is_empty() || content.is_empty() {
            return None;
        }

        let comment = Comment {
            id: (self.comments.len() + 1).to_string(),
            author: author.to_string(),
            content: content.to_string(),
            rating: rating.map(|r| r.clamp(1, 5)),
            created_at: Utc::now(),
            likes: 0,
        };
        self.comments.insert(0, comment);
        Some(&self.comments[0])
    }

    /// Like a single comment. Returns false when the id is unknown.
    pub fn like_comment(&mut self, comment_id: &str) -> bool {
        match self.comments.iter_mut().find(|c| c.id == comment_id) {
            Some(comment) => {
                comment.likes += 1;
                true
            }
            None => false,
        }
    }

    /// Mean of the star ratings that are present, or None when no comment
    /// carries a rating.
    pub fn average_rating(&self) -> Option<f32> {
        let ratings: Vec<u8> = self.comments.iter().filter_map(|c| c.rating).collect();
        if ratings.is_empty() {
            return None;
        }
        let sum: u32 = ratings.iter().map(|&r| u32::from(r)).sum();
        Some(sum as f32 / ratings.len() as f32)
    }
}

fn seed_comments() -> Vec<Comment> {
    vec![
        Comment {
            id: "1".to_string(),
            author: "Ahmet Yılmaz".to_string(),
            content: "Çok güzel bir ev! Konumu harika, iç tasarımı da çok modern. \
                      Kesinlikle tavsiye ederim."
                .to_string(),
            rating: Some(5),
            created_at: Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap(),
            likes: 8,
        },
        Comment {
            id: "2".to_string(),
            author: "Fatma Demir".to_string(),
            content: "Fiyat performans açısından çok iyi. Bu bölgede bu fiyata bu kalitede \
                      ev bulmak zor."
                .to_string(),
            rating: Some(4),
            created_at: Utc.with_ymd_and_hms(2024, 1, 20, 0, 0, 0).unwrap(),
            likes: 5,
        },
        Comment {
            id: "3".to_string(),
            author: "Mehmet Kaya".to_string(),
            content: "Proje çok güzel görünüyor. İnşaat kalitesi nasıl acaba?".to_string(),
            rating: Some(4),
            created_at: Utc.with_ymd_and_hms(2024, 1, 25, 0, 0, 0).unwrap(),
            likes: 3,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_like_flips_and_restores_counter() {
        let mut e = Engagement::seed_for("1");
        assert_eq!(e.likes(), 42);
        assert_eq!(e.toggle_like(), 43);
        assert!(e.liked());
        assert_eq!(e.toggle_like(), 42);
        assert!(!e.liked());
    }

    #[test]
    fn toggle_like_never_underflows() {
        let mut e = Engagement::new(0, Vec::new());
        e.toggle_like();
        // Simulate an inconsistent baseline: liked but counter at zero
        let mut inconsistent = Engagement::new(0, Vec::new());
        inconsistent.liked = true;
        assert_eq!(inconsistent.toggle_like(), 0);
        assert_eq!(e.likes(), 1);
    }

    #[test]
    fn new_comment_is_prepended_with_fresh_id() {
        let mut e = Engagement::seed_for("1");
        let added = e.add_comment("Ayşe", "Bahçesi çok güzel.", Some(5)).unwrap();
        assert_eq!(added.id, "4");
        assert_eq!(added.likes, 0);
        assert_eq!(e.comments()[0].author, "Ayşe");
        assert_eq!(e.comments().len(), 4);
    }

    #[test]
    fn blank_author_or_content_is_rejected() {
        let mut e = Engagement::seed_for("1");
        assert!(e.add_comment("  ", "içerik", None).is_none());
        assert!(e.add_comment("Ali", "   ", None).is_none());
        assert_eq!(e.comments().len(), 3);
    }

    #[test]
    fn rating_is_clamped_into_star_range() {
        let mut e = Engagement::new(0, Vec::new());
        let added = e.add_comment("Ali", "Puan", Some(9)).unwrap();
        assert_eq!(added.rating, Some(5));
    }

    #[test]
    fn like_comment_hits_and_misses() {
        let mut e = Engagement::seed_for("1");
        assert!(e.like_comment("2"));
        assert_eq!(
            e.comments().iter().find(|c| c.id == "2").unwrap().likes,
            6
        );
        assert!(!e.like_comment("99"));
    }

    #[test]
    fn average_rating_over_seed_comments() {
        let e = Engagement::seed_for("1");
        let avg = e.average_rating().unwrap();
        assert!((avg - 13.0 / 3.0).abs() < f32::EPSILON);
        assert_eq!(Engagement::new(0, Vec::new()).average_rating(), None);
    }
}
