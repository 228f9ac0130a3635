//! Справочник вариантов товара для подарков

use crate::shared::api_client;
use contracts::domain::a004_gift::metadata::PRODUCT_VARIANTS_COLLECTION;
use contracts::domain::a004_gift::ProductVariant;
use contracts::shared::api_error::ApiError;
use contracts::shared::config::API_PREFIX;
use contracts::shared::paging::ListQuery;

pub async fn fetch_product_variants() -> Result<Vec<ProductVariant>, ApiError> {
    let path = format!("{}/{}", API_PREFIX, PRODUCT_VARIANTS_COLLECTION);
    let page = api_client::get_page(&path, &ListQuery::lookup()).await?;
    Ok(page.items)
}
