use super::record::{
    AccessoryKind, AccessorySet, ActuatorSelection, BodySelection, SpecificationRecord,
    TrimSelection,
};
use crate::domain::common::CodeLabel;
use serde::{Deserialize, Serialize};

fn pair(code: &Option<String>, label: &Option<String>) -> CodeLabel {
    CodeLabel {
        code: code.clone().unwrap_or_default(),
        label: label.clone().unwrap_or_default(),
    }
}

// ============================================================================
// Форма ответа "спецификация одного TagNo"
// Отсутствующее поле читается как пустая строка, никогда как ошибка.
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BodySectionDto {
    #[serde(rename = "bonnetTypeCode", default)]
    pub bonnet_type_code: Option<String>,
    #[serde(rename = "bonnetTypeName", default)]
    pub bonnet_type_name: Option<String>,
    #[serde(rename = "materialCode", default)]
    pub material_code: Option<String>,
    #[serde(rename = "materialName", default)]
    pub material_name: Option<String>,
    #[serde(rename = "sizeUnitCode", default)]
    pub size_unit_code: Option<String>,
    #[serde(rename = "sizeUnitName", default)]
    pub size_unit_name: Option<String>,
    #[serde(rename = "sizeCode", default)]
    pub size_code: Option<String>,
    #[serde(rename = "sizeName", default)]
    pub size_name: Option<String>,
    #[serde(rename = "ratingUnitCode", default)]
    pub rating_unit_code: Option<String>,
    #[serde(rename = "ratingUnitName", default)]
    pub rating_unit_name: Option<String>,
    #[serde(rename = "ratingCode", default)]
    pub rating_code: Option<String>,
    #[serde(rename = "ratingName", default)]
    pub rating_name: Option<String>,
    #[serde(rename = "connectionCode", default)]
    pub connection_code: Option<String>,
    #[serde(rename = "connectionName", default)]
    pub connection_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TrimSectionDto {
    #[serde(rename = "trimTypeCode", default)]
    pub trim_type_code: Option<String>,
    #[serde(rename = "trimTypeName", default)]
    pub trim_type_name: Option<String>,
    #[serde(rename = "seriesCode", default)]
    pub series_code: Option<String>,
    #[serde(rename = "seriesName", default)]
    pub series_name: Option<String>,
    #[serde(rename = "materialCode", default)]
    pub material_code: Option<String>,
    #[serde(rename = "materialName", default)]
    pub material_name: Option<String>,
    #[serde(rename = "portUnitCode", default)]
    pub port_unit_code: Option<String>,
    #[serde(rename = "portUnitName", default)]
    pub port_unit_name: Option<String>,
    #[serde(rename = "portSizeCode", default)]
    pub port_size_code: Option<String>,
    #[serde(rename = "portSizeName", default)]
    pub port_size_name: Option<String>,
    #[serde(rename = "formCode", default)]
    pub form_code: Option<String>,
    #[serde(rename = "formName", default)]
    pub form_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ActuatorSectionDto {
    #[serde(rename = "actionCode", default)]
    pub action_code: Option<String>,
    #[serde(rename = "actionName", default)]
    pub action_name: Option<String>,
    #[serde(rename = "seriesCode", default)]
    pub series_code: Option<String>,
    #[serde(rename = "seriesName", default)]
    pub series_name: Option<String>,
    #[serde(rename = "sizeCode", default)]
    pub size_code: Option<String>,
    #[serde(rename = "sizeName", default)]
    pub size_name: Option<String>,
    #[serde(rename = "handwheelCode", default)]
    pub handwheel_code: Option<String>,
    #[serde(rename = "handwheelName", default)]
    pub handwheel_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AccessorySlotDto {
    #[serde(rename = "kindTag", default)]
    pub kind_tag: String,
    #[serde(rename = "makerCode", default)]
    pub maker_code: Option<String>,
    #[serde(rename = "makerName", default)]
    pub maker_name: Option<String>,
    #[serde(rename = "modelCode", default)]
    pub model_code: Option<String>,
    #[serde(rename = "modelName", default)]
    pub model_name: Option<String>,
    #[serde(rename = "specText", default)]
    pub spec_text: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SpecificationDto {
    #[serde(default)]
    pub body: BodySectionDto,
    #[serde(default)]
    pub trim: TrimSectionDto,
    #[serde(default)]
    pub actuator: ActuatorSectionDto,
    #[serde(default)]
    pub accessories: Vec<AccessorySlotDto>,
}

impl SpecificationDto {
    /// Собрать рабочую запись из ответа сервера.
    /// Слоты оборудования сопоставляются по метке вида; лишние метки
    /// игнорируются, отсутствующие остаются пустыми шаблонами.
    pub fn into_record(self, valve_series: CodeLabel) -> SpecificationRecord {
        let body = BodySelection {
            bonnet_type: pair(&self.body.bonnet_type_code, &self.body.bonnet_type_name),
            material: pair(&self.body.material_code, &self.body.material_name),
            size_unit: pair(&self.body.size_unit_code, &self.body.size_unit_name),
            size: pair(&self.body.size_code, &self.body.size_name),
            rating_unit: pair(&self.body.rating_unit_code, &self.body.rating_unit_name),
            rating: pair(&self.body.rating_code, &self.body.rating_name),
            connection: pair(&self.body.connection_code, &self.body.connection_name),
        };
        let trim = TrimSelection {
            trim_type: pair(&self.trim.trim_type_code, &self.trim.trim_type_name),
            series: pair(&self.trim.series_code, &self.trim.series_name),
            material: pair(&self.trim.material_code, &self.trim.material_name),
            port_unit: pair(&self.trim.port_unit_code, &self.trim.port_unit_name),
            port_size: pair(&self.trim.port_size_code, &self.trim.port_size_name),
            form: pair(&self.trim.form_code, &self.trim.form_name),
        };
        let actuator = ActuatorSelection {
            action: pair(&self.actuator.action_code, &self.actuator.action_name),
            series: pair(&self.actuator.series_code, &self.actuator.series_name),
            size: pair(&self.actuator.size_code, &self.actuator.size_name),
            handwheel: pair(&self.actuator.handwheel_code, &self.actuator.handwheel_name),
        };

        let mut accessory = AccessorySet::initial();
        for dto in &self.accessories {
            let Some(kind) = AccessoryKind::ALL
                .iter()
                .copied()
                .find(|k| k.tag() == dto.kind_tag)
            else {
                continue;
            };
            let slot = accessory.slot_mut(kind);
            slot.maker = pair(&dto.maker_code, &dto.maker_name);
            slot.model = pair(&dto.model_code, &dto.model_name);
            slot.spec_text = dto.spec_text.clone().unwrap_or_default();
        }

        SpecificationRecord {
            valve_series,
            body,
            trim,
            actuator,
            accessory,
        }
    }
}
