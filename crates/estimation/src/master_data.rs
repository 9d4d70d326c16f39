//! Кэш справочников. Загружается один раз за сессию; все каскадные
//! выпадающие списки читают отсюда.

use contracts::domain::v003_master_data::{AccessoryModelRow, CatalogFamily, CatalogRow};
use std::collections::HashMap;

use crate::api::EstimateApi;

#[derive(Debug, Clone, Default)]
pub struct CatalogSet {
    rows: HashMap<CatalogFamily, Vec<CatalogRow>>,
    accessory_models: Vec<AccessoryModelRow>,
}

impl CatalogSet {
    /// Загрузить все семейства разом (fan-out / fan-in).
    ///
    /// Каждое семейство загружается изолированно: упавший запрос пишется в лог
    /// и оставляет семейство пустым, не прерывая загрузку остальных.
    pub async fn load(api: &dyn EstimateApi) -> Self {
        let family_futures = CatalogFamily::ALL.iter().map(|&family| async move {
            match api.fetch_catalog(family).await {
                Ok(rows) => (family, rows),
                Err(e) => {
                    tracing::warn!("catalog '{}' load failed: {}; using empty", family, e);
                    (family, Vec::new())
                }
            }
        });

        let (families, accessory_models) = futures::join!(
            futures::future::join_all(family_futures),
            Self::fetch_accessory_models_or_empty(api)
        );

        Self {
            rows: families.into_iter().collect(),
            accessory_models,
        }
    }

    async fn fetch_accessory_models_or_empty(api: &dyn EstimateApi) -> Vec<AccessoryModelRow> {
        match api.fetch_accessory_models().await {
            Ok(rows) => rows,
            Err(e) => {
                tracing::warn!("accessory model catalog load failed: {}; using empty", e);
                Vec::new()
            }
        }
    }

    /// Собрать кэш из готовых строк (тесты, предзагруженные данные)
    pub fn from_parts(
        rows: HashMap<CatalogFamily, Vec<CatalogRow>>,
        accessory_models: Vec<AccessoryModelRow>,
    ) -> Self {
        Self {
            rows,
            accessory_models,
        }
    }

    pub fn catalog(&self, family: CatalogFamily) -> &[CatalogRow] {
        self.rows.get(&family).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Наименование по коду; пустая строка, если код неизвестен
    pub fn lookup_label(&self, family: CatalogFamily, code: &str) -> String {
        self.catalog(family)
            .iter()
            .find(|row| row.code == code)
            .map(|row| row.label.clone())
            .unwrap_or_default()
    }

    /// Строка семейства, действительная под данной единицей измерения
    pub fn find_under_unit(
        &self,
        family: CatalogFamily,
        code: &str,
        unit_code: &str,
    ) -> Option<&CatalogRow> {
        self.catalog(family).iter().find(|row| {
            row.code == code && row.parent_unit_code.as_deref() == Some(unit_code)
        })
    }

    pub fn accessory_models(&self) -> &[AccessoryModelRow] {
        &self.accessory_models
    }

    /// Явная перезагрузка справочника оборудования (кнопка обновления).
    /// Ошибка оставляет прежние строки на месте.
    pub async fn reload_accessory_models(&mut self, api: &dyn EstimateApi) {
        match api.fetch_accessory_models().await {
            Ok(rows) => self.accessory_models = rows,
            Err(e) => {
                tracing::warn!("accessory model catalog reload failed: {}", e);
            }
        }
    }
}
