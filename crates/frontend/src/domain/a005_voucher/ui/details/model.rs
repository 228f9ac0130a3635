//! Voucher Details - Model Layer

use crate::shared::api_client::{self, save_target};
use contracts::domain::a005_voucher::{Voucher, VoucherDto, ENTITY_METADATA};
use contracts::domain::common::EntityId;
use contracts::shared::api_error::ApiError;

pub async fn fetch_voucher(id: EntityId) -> Result<Voucher, ApiError> {
    api_client::get_json(&ENTITY_METADATA.api_item_path(id)).await
}

pub async fn save_voucher(id: Option<EntityId>, dto: VoucherDto) -> Result<(), ApiError> {
    let (method, path) = save_target(&ENTITY_METADATA, id);
    api_client::send_json(method, &path, &dto).await
}
