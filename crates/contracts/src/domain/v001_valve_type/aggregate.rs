use serde::{Deserialize, Serialize};

// ============================================================================
// ValveType — группа позиций TagNo с общей серией клапана
// ============================================================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValveType {
    #[serde(rename = "typeId")]
    pub type_id: i64,

    /// Код серии клапана (ссылка на справочник серий)
    #[serde(rename = "seriesCode")]
    pub series_code: String,

    /// Наименование, разрешённое из справочника по series_code
    #[serde(rename = "displayName", default)]
    pub display_name: String,

    #[serde(rename = "displayOrder", default)]
    pub display_order: u32,
}

impl ValveType {
    pub fn new(type_id: i64, series_code: String, display_name: String) -> Self {
        Self {
            type_id,
            series_code,
            display_name,
            display_order: 0,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.series_code.trim().is_empty() {
            return Err("Код серии не может быть пустым".into());
        }
        Ok(())
    }
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ValveTypeDto {
    #[serde(rename = "typeId")]
    pub type_id: Option<i64>,
    #[serde(rename = "seriesCode")]
    pub series_code: String,
    #[serde(rename = "displayName", default)]
    pub display_name: Option<String>,
    #[serde(rename = "displayOrder", default)]
    pub display_order: u32,
}

impl From<ValveTypeDto> for ValveType {
    fn from(dto: ValveTypeDto) -> Self {
        Self {
            type_id: dto.type_id.unwrap_or_default(),
            series_code: dto.series_code,
            display_name: dto.display_name.unwrap_or_default(),
            display_order: dto.display_order,
        }
    }
}
