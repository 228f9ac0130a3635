//! Poster Details - Model Layer

use crate::shared::api_client::{self, save_target};
use contracts::domain::a003_poster::{Poster, PosterDto, ENTITY_METADATA};
use contracts::domain::common::{EntityId, MultipartPayload};
use contracts::shared::api_error::ApiError;
use web_sys::File;

pub async fn fetch_poster(id: EntityId) -> Result<Poster, ApiError> {
    api_client::get_json(&ENTITY_METADATA.api_item_path(id)).await
}

pub async fn save_poster(id: Option<EntityId>, dto: PosterDto, image: Option<File>) -> Result<(), ApiError> {
    let (method, path) = save_target(&ENTITY_METADATA, id);
    api_client::send_multipart(method, &path, dto.form_fields(), image).await
}
