//! Внешняя граница сессии: абстрактные контракты запрос/ответ.
//!
//! Реализация живёт у хоста (HTTP-клиент, мок в тестах). Сессия не знает
//! ни про транспорт, ни про хранение.

use async_trait::async_trait;
use contracts::domain::v003_master_data::{AccessoryModelRow, CatalogFamily, CatalogRow};
use contracts::domain::v004_specification::{BulkSaveRequest, SpecificationDto};
use thiserror::Error;
use uuid::Uuid;

/// Транспортные ошибки внешних вызовов
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server returned status {code}")]
    Status { code: u16 },

    #[error("Decode error: {0}")]
    Decode(String),
}

#[async_trait]
pub trait EstimateApi: Send + Sync {
    /// Строки одного семейства справочника
    async fn fetch_catalog(&self, family: CatalogFamily) -> Result<Vec<CatalogRow>, ApiError>;

    /// Справочник моделей дополнительного оборудования (все виды одним списком)
    async fn fetch_accessory_models(&self) -> Result<Vec<AccessoryModelRow>, ApiError>;

    /// Сохранённая спецификация одного листа; `None` — лист ещё не сохранялся
    async fn fetch_specification(
        &self,
        estimate_id: Uuid,
        sheet_id: i64,
    ) -> Result<Option<SpecificationDto>, ApiError>;

    /// Сохранить порядок листов. Обязательный шаг перед пакетным сохранением.
    async fn save_display_order(
        &self,
        estimate_id: Uuid,
        sheet_ids: &[i64],
    ) -> Result<(), ApiError>;

    /// Пакетное сохранение спецификаций всех листов
    async fn bulk_save_specifications(
        &self,
        estimate_id: Uuid,
        request: &BulkSaveRequest,
    ) -> Result<(), ApiError>;
}
