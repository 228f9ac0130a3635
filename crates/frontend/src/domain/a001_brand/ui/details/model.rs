//! Brand Details - Model Layer

use crate::shared::api_client::{self, save_target};
use contracts::domain::a001_brand::{Brand, BrandDto, ENTITY_METADATA};
use contracts::domain::common::{EntityId, MultipartPayload};
use contracts::shared::api_error::ApiError;
use web_sys::File;

pub async fn fetch_brand(id: EntityId) -> Result<Brand, ApiError> {
    api_client::get_json(&ENTITY_METADATA.api_item_path(id)).await
}

/// Create or update a brand; the logo goes as the `image` part
pub async fn save_brand(id: Option<EntityId>, dto: BrandDto, logo: Option<File>) -> Result<(), ApiError> {
    let (method, path) = save_target(&ENTITY_METADATA, id);
    api_client::send_multipart(method, &path, dto.form_fields(), logo).await
}
