use serde::Serialize;

use crate::domain::recommendation::Recommendation;
use crate::pagination::Paginated;

/// Data required to render one page of recommendations.
#[derive(Debug, Serialize)]
pub struct RecommendationsPageData {
    pub recommendations: Paginated<Recommendation>,
}
