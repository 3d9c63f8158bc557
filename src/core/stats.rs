use serde::{Serialize, Deserialize};

/// Catalog statistics for monitoring
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogStats {
    pub total_movies: usize,
    pub total_users: usize,
    pub total_reviews: usize,

    // Distinct names per secondary index
    pub actor_count: usize,
    pub director_count: usize,
    pub genre_count: usize,

    pub generation: u64,
    pub resolution_cache: CacheStats,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CacheStats {
    pub hit_count: usize,
    pub miss_count: usize,
    pub size: usize,
    pub capacity: usize,
}

impl CacheStats {
    pub fn hit_rate(&self) -> f64 {
        let total = self.hit_count + self.miss_count;
        if total == 0 {
            0.0
        } else {
            self.hit_count as f64 / total as f64
        }
    }
}
