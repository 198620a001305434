use crate::domain::recommendation::Recommendation;
use crate::dto::recommendations::RecommendationsPageData;
use crate::pagination::Paginator;
use crate::repository::RecommendationReader;
use crate::services::{ServiceResult, select_page};

/// Fetches recommendations for the current stock and shows `page`.
pub async fn load_recommendations<R>(
    repo: &R,
    pager: &mut Paginator<Recommendation>,
    page: Option<usize>,
) -> ServiceResult<RecommendationsPageData>
where
    R: RecommendationReader + ?Sized,
{
    let recommendations = repo.list_recommendations().await.map_err(|err| {
        log::error!("Failed to list recommendations: {err}");
        err
    })?;

    pager.set_items(recommendations);
    pager.reset();
    select_page(pager, page)?;

    Ok(RecommendationsPageData {
        recommendations: pager.page_view(),
    })
}

pub fn show_recommendations_page(
    pager: &mut Paginator<Recommendation>,
    page: usize,
) -> ServiceResult<RecommendationsPageData> {
    select_page(pager, Some(page))?;

    Ok(RecommendationsPageData {
        recommendations: pager.page_view(),
    })
}
