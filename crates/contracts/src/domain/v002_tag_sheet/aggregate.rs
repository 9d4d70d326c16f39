use serde::{Deserialize, Serialize};

// ============================================================================
// TagSheet — одна позиция TagNo заявки на расчёт
// ============================================================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagSheet {
    /// Стабильный идентификатор листа спецификации.
    /// Выдаётся один раз (сервером или локальным счётчиком) и не переиспользуется.
    #[serde(rename = "sheetId")]
    pub sheet_id: i64,

    /// Отображаемый номер тега, редактируется пользователем
    #[serde(rename = "tagLabel", default)]
    pub tag_label: String,

    #[serde(rename = "quantity", default = "default_quantity")]
    pub quantity: u32,

    /// Код серии родительского типа; неизменен после создания
    #[serde(rename = "typeCode")]
    pub type_code: String,

    #[serde(rename = "displayOrder", default)]
    pub display_order: u32,
}

fn default_quantity() -> u32 {
    1
}

impl TagSheet {
    pub fn new(sheet_id: i64, type_code: String, tag_label: String, quantity: u32) -> Self {
        Self {
            sheet_id,
            tag_label,
            quantity: quantity.max(1),
            type_code,
            display_order: 0,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.type_code.trim().is_empty() {
            return Err("Тип клапана не указан".into());
        }
        if self.quantity == 0 {
            return Err("Количество должно быть положительным".into());
        }
        Ok(())
    }
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TagSheetDto {
    #[serde(rename = "sheetId")]
    pub sheet_id: Option<i64>,
    #[serde(rename = "tagLabel", default)]
    pub tag_label: String,
    #[serde(rename = "quantity", default = "default_quantity")]
    pub quantity: u32,
    #[serde(rename = "typeCode")]
    pub type_code: String,
    #[serde(rename = "displayOrder", default)]
    pub display_order: u32,
}

impl From<TagSheetDto> for TagSheet {
    fn from(dto: TagSheetDto) -> Self {
        Self {
            sheet_id: dto.sheet_id.unwrap_or_default(),
            tag_label: dto.tag_label,
            quantity: dto.quantity.max(1),
            type_code: dto.type_code,
            display_order: dto.display_order,
        }
    }
}
