//! Gift Details - Model Layer

use crate::shared::api_client::{self, save_target};
use contracts::domain::a004_gift::{Gift, GiftDto, ENTITY_METADATA};
use contracts::domain::common::EntityId;
use contracts::shared::api_error::ApiError;

pub async fn fetch_gift(id: EntityId) -> Result<Gift, ApiError> {
    api_client::get_json(&ENTITY_METADATA.api_item_path(id)).await
}

pub async fn save_gift(id: Option<EntityId>, dto: GiftDto) -> Result<(), ApiError> {
    let (method, path) = save_target(&ENTITY_METADATA, id);
    api_client::send_json(method, &path, &dto).await
}
