use serde::{Deserialize, Serialize};

/// Строка справочника: код, наименование и (для зависимых значений)
/// код единицы измерения, под которой значение действительно.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogRow {
    pub code: String,
    #[serde(default)]
    pub label: String,
    /// Для двухуровневых каскадов (размер, давление, проход):
    /// значение действительно только под этой единицей измерения.
    #[serde(rename = "parentUnitCode", default)]
    pub parent_unit_code: Option<String>,
}

impl CatalogRow {
    pub fn new(code: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            label: label.into(),
            parent_unit_code: None,
        }
    }

    pub fn with_unit(
        code: impl Into<String>,
        label: impl Into<String>,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            label: label.into(),
            parent_unit_code: Some(unit.into()),
        }
    }
}

/// Строка справочника моделей дополнительного оборудования.
/// Один ряд несёт производителя, модель и спецификацию целиком —
/// выбор модели всегда переносит все три поля атомарно.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessoryModelRow {
    #[serde(rename = "kindTag")]
    pub kind_tag: String,
    #[serde(rename = "makerCode")]
    pub maker_code: String,
    #[serde(rename = "makerLabel", default)]
    pub maker_label: String,
    #[serde(rename = "modelCode")]
    pub model_code: String,
    #[serde(rename = "modelLabel", default)]
    pub model_label: String,
    #[serde(rename = "specText", default)]
    pub spec_text: String,
}

// ============================================================================
// Семейства справочников
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CatalogFamily {
    Units,
    ValveSeries,
    BonnetTypes,
    BodyMaterials,
    BodySizes,
    BodyRatings,
    Connections,
    TrimTypes,
    TrimSeries,
    TrimMaterials,
    TrimPortSizes,
    TrimForms,
    ActuatorActions,
    ActuatorSeries,
    ActuatorSizes,
    ActuatorHandwheels,
}

impl CatalogFamily {
    /// Все семейства — порядок соответствует порядку загрузки
    pub const ALL: [CatalogFamily; 16] = [
        CatalogFamily::Units,
        CatalogFamily::ValveSeries,
        CatalogFamily::BonnetTypes,
        CatalogFamily::BodyMaterials,
        CatalogFamily::BodySizes,
        CatalogFamily::BodyRatings,
        CatalogFamily::Connections,
        CatalogFamily::TrimTypes,
        CatalogFamily::TrimSeries,
        CatalogFamily::TrimMaterials,
        CatalogFamily::TrimPortSizes,
        CatalogFamily::TrimForms,
        CatalogFamily::ActuatorActions,
        CatalogFamily::ActuatorSeries,
        CatalogFamily::ActuatorSizes,
        CatalogFamily::ActuatorHandwheels,
    ];

    /// Сегмент пути API для загрузки семейства
    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogFamily::Units => "units",
            CatalogFamily::ValveSeries => "valve-series",
            CatalogFamily::BonnetTypes => "bonnet-types",
            CatalogFamily::BodyMaterials => "body-materials",
            CatalogFamily::BodySizes => "body-sizes",
            CatalogFamily::BodyRatings => "body-ratings",
            CatalogFamily::Connections => "connections",
            CatalogFamily::TrimTypes => "trim-types",
            CatalogFamily::TrimSeries => "trim-series",
            CatalogFamily::TrimMaterials => "trim-materials",
            CatalogFamily::TrimPortSizes => "trim-port-sizes",
            CatalogFamily::TrimForms => "trim-forms",
            CatalogFamily::ActuatorActions => "actuator-actions",
            CatalogFamily::ActuatorSeries => "actuator-series",
            CatalogFamily::ActuatorSizes => "actuator-sizes",
            CatalogFamily::ActuatorHandwheels => "actuator-handwheels",
        }
    }
}

impl std::fmt::Display for CatalogFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
