use super::record::{AccessoryKind, SpecificationRecord};
use serde::{Deserialize, Serialize};

fn opt(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

// ============================================================================
// Плоская форма сохранения спецификации.
// Ключи — фиксированные аббревиатуры, принятые сервером; пустые поля
// сериализуются как null.
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SpecificationSaveDto {
    #[serde(rename = "ValveSeriesCode")]
    pub valve_series_code: Option<String>,

    // --- Body ---
    #[serde(rename = "BonnetCode")]
    pub bonnet_code: Option<String>,
    #[serde(rename = "BodyMaterialCode")]
    pub body_material_code: Option<String>,
    #[serde(rename = "BodySizeUnitCode")]
    pub body_size_unit_code: Option<String>,
    #[serde(rename = "BodySizeCode")]
    pub body_size_code: Option<String>,
    #[serde(rename = "RatingUnitCode")]
    pub rating_unit_code: Option<String>,
    #[serde(rename = "RatingCode")]
    pub rating_code: Option<String>,
    #[serde(rename = "ConnCode")]
    pub conn_code: Option<String>,

    // --- Trim ---
    #[serde(rename = "TrimTypeCode")]
    pub trim_type_code: Option<String>,
    #[serde(rename = "TrimSeriesCode")]
    pub trim_series_code: Option<String>,
    #[serde(rename = "TrimMaterialCode")]
    pub trim_material_code: Option<String>,
    #[serde(rename = "PortUnitCode")]
    pub port_unit_code: Option<String>,
    #[serde(rename = "PortCode")]
    pub port_code: Option<String>,
    #[serde(rename = "FormCode")]
    pub form_code: Option<String>,

    // --- Actuator ---
    #[serde(rename = "ActTypeCode")]
    pub act_type_code: Option<String>,
    #[serde(rename = "ActSeriesCode")]
    pub act_series_code: Option<String>,
    #[serde(rename = "ActSizeCode")]
    pub act_size_code: Option<String>,
    #[serde(rename = "HwCode")]
    pub hw_code: Option<String>,

    // --- Accessory ---
    #[serde(rename = "PosMakerCode")]
    pub pos_maker_code: Option<String>,
    #[serde(rename = "PosCode")]
    pub pos_code: Option<String>,
    #[serde(rename = "PosSpec")]
    pub pos_spec: Option<String>,
    #[serde(rename = "SolMakerCode")]
    pub sol_maker_code: Option<String>,
    #[serde(rename = "SolCode")]
    pub sol_code: Option<String>,
    #[serde(rename = "SolSpec")]
    pub sol_spec: Option<String>,
    #[serde(rename = "LimMakerCode")]
    pub lim_maker_code: Option<String>,
    #[serde(rename = "LimCode")]
    pub lim_code: Option<String>,
    #[serde(rename = "LimSpec")]
    pub lim_spec: Option<String>,
    #[serde(rename = "AirSetMakerCode")]
    pub air_set_maker_code: Option<String>,
    #[serde(rename = "AirSetCode")]
    pub air_set_code: Option<String>,
    #[serde(rename = "AirSetSpec")]
    pub air_set_spec: Option<String>,
    #[serde(rename = "VbMakerCode")]
    pub vb_maker_code: Option<String>,
    #[serde(rename = "VbCode")]
    pub vb_code: Option<String>,
    #[serde(rename = "VbSpec")]
    pub vb_spec: Option<String>,
    #[serde(rename = "AoMakerCode")]
    pub ao_maker_code: Option<String>,
    #[serde(rename = "AoCode")]
    pub ao_code: Option<String>,
    #[serde(rename = "AoSpec")]
    pub ao_spec: Option<String>,
    #[serde(rename = "LockUpMakerCode")]
    pub lock_up_maker_code: Option<String>,
    #[serde(rename = "LockUpCode")]
    pub lock_up_code: Option<String>,
    #[serde(rename = "LockUpSpec")]
    pub lock_up_spec: Option<String>,
    #[serde(rename = "SnapMakerCode")]
    pub snap_maker_code: Option<String>,
    #[serde(rename = "SnapCode")]
    pub snap_code: Option<String>,
    #[serde(rename = "SnapSpec")]
    pub snap_spec: Option<String>,
}

impl From<&SpecificationRecord> for SpecificationSaveDto {
    fn from(r: &SpecificationRecord) -> Self {
        let acc = |kind: AccessoryKind| r.accessory.slot(kind);
        Self {
            valve_series_code: opt(&r.valve_series.code),

            bonnet_code: opt(&r.body.bonnet_type.code),
            body_material_code: opt(&r.body.material.code),
            body_size_unit_code: opt(&r.body.size_unit.code),
            body_size_code: opt(&r.body.size.code),
            rating_unit_code: opt(&r.body.rating_unit.code),
            rating_code: opt(&r.body.rating.code),
            conn_code: opt(&r.body.connection.code),

            trim_type_code: opt(&r.trim.trim_type.code),
            trim_series_code: opt(&r.trim.series.code),
            trim_material_code: opt(&r.trim.material.code),
            port_unit_code: opt(&r.trim.port_unit.code),
            port_code: opt(&r.trim.port_size.code),
            form_code: opt(&r.trim.form.code),

            act_type_code: opt(&r.actuator.action.code),
            act_series_code: opt(&r.actuator.series.code),
            act_size_code: opt(&r.actuator.size.code),
            hw_code: opt(&r.actuator.handwheel.code),

            pos_maker_code: opt(&acc(AccessoryKind::Positioner).maker.code),
            pos_code: opt(&acc(AccessoryKind::Positioner).model.code),
            pos_spec: opt(&acc(AccessoryKind::Positioner).spec_text),
            sol_maker_code: opt(&acc(AccessoryKind::Solenoid).maker.code),
            sol_code: opt(&acc(AccessoryKind::Solenoid).model.code),
            sol_spec: opt(&acc(AccessoryKind::Solenoid).spec_text),
            lim_maker_code: opt(&acc(AccessoryKind::Limiter).maker.code),
            lim_code: opt(&acc(AccessoryKind::Limiter).model.code),
            lim_spec: opt(&acc(AccessoryKind::Limiter).spec_text),
            air_set_maker_code: opt(&acc(AccessoryKind::AirSupply).maker.code),
            air_set_code: opt(&acc(AccessoryKind::AirSupply).model.code),
            air_set_spec: opt(&acc(AccessoryKind::AirSupply).spec_text),
            vb_maker_code: opt(&acc(AccessoryKind::VolumeBooster).maker.code),
            vb_code: opt(&acc(AccessoryKind::VolumeBooster).model.code),
            vb_spec: opt(&acc(AccessoryKind::VolumeBooster).spec_text),
            ao_maker_code: opt(&acc(AccessoryKind::AirOperator).maker.code),
            ao_code: opt(&acc(AccessoryKind::AirOperator).model.code),
            ao_spec: opt(&acc(AccessoryKind::AirOperator).spec_text),
            lock_up_maker_code: opt(&acc(AccessoryKind::LockUp).maker.code),
            lock_up_code: opt(&acc(AccessoryKind::LockUp).model.code),
            lock_up_spec: opt(&acc(AccessoryKind::LockUp).spec_text),
            snap_maker_code: opt(&acc(AccessoryKind::SnapActingRelay).maker.code),
            snap_code: opt(&acc(AccessoryKind::SnapActingRelay).model.code),
            snap_spec: opt(&acc(AccessoryKind::SnapActingRelay).spec_text),
        }
    }
}

// ============================================================================
// Пакетное сохранение
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BulkSaveItem {
    #[serde(rename = "sheetId")]
    pub sheet_id: i64,
    pub specification: SpecificationSaveDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct BulkSaveRequest {
    pub items: Vec<BulkSaveItem>,
}
