//! Category Details - Model Layer

use crate::shared::api_client::{self, save_target};
use contracts::domain::a002_category::{Category, CategoryDto, ENTITY_METADATA};
use contracts::domain::common::{EntityId, MultipartPayload};
use contracts::shared::api_error::ApiError;
use contracts::shared::paging::ListQuery;
use web_sys::File;

pub async fn fetch_category(id: EntityId) -> Result<Category, ApiError> {
    api_client::get_json(&ENTITY_METADATA.api_item_path(id)).await
}

/// Все категории для выбора родителя
pub async fn fetch_parent_candidates() -> Result<Vec<Category>, ApiError> {
    let page = api_client::get_page(&ENTITY_METADATA.api_path(), &ListQuery::lookup()).await?;
    Ok(page.items)
}

pub async fn save_category(
    id: Option<EntityId>,
    dto: CategoryDto,
    image: Option<File>,
) -> Result<(), ApiError> {
    let (method, path) = save_target(&ENTITY_METADATA, id);
    api_client::send_multipart(method, &path, dto.form_fields(), image).await
}
