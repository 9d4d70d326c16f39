//! Каскадные зависимости полей спецификации.
//!
//! Двухуровневое правило (единица → значение) одно на все секции и
//! закреплено декларативной таблицей зависимостей, а не условиями по именам
//! полей. Асимметрия обязательна: смена единицы безусловно сбрасывает
//! значение; смена значения требует, чтобы код существовал под текущей
//! единицей, иначе отказ без изменения рабочей копии.

use contracts::domain::common::CodeLabel;
use contracts::domain::v003_master_data::{AccessoryModelRow, CatalogFamily, CatalogRow};
use contracts::domain::v004_specification::{AccessoryKind, SpecificationRecord};
use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::error::CascadeError;
use crate::master_data::CatalogSet;

/// Все изменяемые каскадом поля секций Body / Trim / Actuator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecField {
    BonnetType,
    BodyMaterial,
    BodySizeUnit,
    BodySize,
    BodyRatingUnit,
    BodyRating,
    Connection,
    TrimType,
    TrimSeries,
    TrimMaterial,
    TrimPortUnit,
    TrimPortSize,
    TrimForm,
    ActuatorAction,
    ActuatorSeries,
    ActuatorSize,
    ActuatorHandwheel,
}

/// Таблица "поле → зависимые поля, сбрасываемые при его смене"
static DEPENDENTS: Lazy<HashMap<SpecField, &'static [SpecField]>> = Lazy::new(|| {
    HashMap::from([
        (SpecField::BodySizeUnit, &[SpecField::BodySize][..]),
        (SpecField::BodyRatingUnit, &[SpecField::BodyRating][..]),
        (SpecField::TrimPortUnit, &[SpecField::TrimPortSize][..]),
    ])
});

impl SpecField {
    /// Семейство справочника, из которого поле выбирается
    pub fn family(&self) -> CatalogFamily {
        match self {
            SpecField::BonnetType => CatalogFamily::BonnetTypes,
            SpecField::BodyMaterial => CatalogFamily::BodyMaterials,
            SpecField::BodySizeUnit => CatalogFamily::Units,
            SpecField::BodySize => CatalogFamily::BodySizes,
            SpecField::BodyRatingUnit => CatalogFamily::Units,
            SpecField::BodyRating => CatalogFamily::BodyRatings,
            SpecField::Connection => CatalogFamily::Connections,
            SpecField::TrimType => CatalogFamily::TrimTypes,
            SpecField::TrimSeries => CatalogFamily::TrimSeries,
            SpecField::TrimMaterial => CatalogFamily::TrimMaterials,
            SpecField::TrimPortUnit => CatalogFamily::Units,
            SpecField::TrimPortSize => CatalogFamily::TrimPortSizes,
            SpecField::TrimForm => CatalogFamily::TrimForms,
            SpecField::ActuatorAction => CatalogFamily::ActuatorActions,
            SpecField::ActuatorSeries => CatalogFamily::ActuatorSeries,
            SpecField::ActuatorSize => CatalogFamily::ActuatorSizes,
            SpecField::ActuatorHandwheel => CatalogFamily::ActuatorHandwheels,
        }
    }

    /// Поля, сбрасываемые при смене этого поля
    pub fn dependents(&self) -> &'static [SpecField] {
        DEPENDENTS.get(self).copied().unwrap_or(&[])
    }

    /// Для значения в паре "единица → значение": его поле единицы
    pub fn unit_field(&self) -> Option<SpecField> {
        match self {
            SpecField::BodySize => Some(SpecField::BodySizeUnit),
            SpecField::BodyRating => Some(SpecField::BodyRatingUnit),
            SpecField::TrimPortSize => Some(SpecField::TrimPortUnit),
            _ => None,
        }
    }
}

fn slot<'a>(record: &'a SpecificationRecord, field: SpecField) -> &'a CodeLabel {
    match field {
        SpecField::BonnetType => &record.body.bonnet_type,
        SpecField::BodyMaterial => &record.body.material,
        SpecField::BodySizeUnit => &record.body.size_unit,
        SpecField::BodySize => &record.body.size,
        SpecField::BodyRatingUnit => &record.body.rating_unit,
        SpecField::BodyRating => &record.body.rating,
        SpecField::Connection => &record.body.connection,
        SpecField::TrimType => &record.trim.trim_type,
        SpecField::TrimSeries => &record.trim.series,
        SpecField::TrimMaterial => &record.trim.material,
        SpecField::TrimPortUnit => &record.trim.port_unit,
        SpecField::TrimPortSize => &record.trim.port_size,
        SpecField::TrimForm => &record.trim.form,
        SpecField::ActuatorAction => &record.actuator.action,
        SpecField::ActuatorSeries => &record.actuator.series,
        SpecField::ActuatorSize => &record.actuator.size,
        SpecField::ActuatorHandwheel => &record.actuator.handwheel,
    }
}

fn slot_mut<'a>(record: &'a mut SpecificationRecord, field: SpecField) -> &'a mut CodeLabel {
    match field {
        SpecField::BonnetType => &mut record.body.bonnet_type,
        SpecField::BodyMaterial => &mut record.body.material,
        SpecField::BodySizeUnit => &mut record.body.size_unit,
        SpecField::BodySize => &mut record.body.size,
        SpecField::BodyRatingUnit => &mut record.body.rating_unit,
        SpecField::BodyRating => &mut record.body.rating,
        SpecField::Connection => &mut record.body.connection,
        SpecField::TrimType => &mut record.trim.trim_type,
        SpecField::TrimSeries => &mut record.trim.series,
        SpecField::TrimMaterial => &mut record.trim.material,
        SpecField::TrimPortUnit => &mut record.trim.port_unit,
        SpecField::TrimPortSize => &mut record.trim.port_size,
        SpecField::TrimForm => &mut record.trim.form,
        SpecField::ActuatorAction => &mut record.actuator.action,
        SpecField::ActuatorSeries => &mut record.actuator.series,
        SpecField::ActuatorSize => &mut record.actuator.size,
        SpecField::ActuatorHandwheel => &mut record.actuator.handwheel,
    }
}

/// Единая точка применения изменения поля.
///
/// - поле с зависимыми (единица измерения): установить, сбросить зависимые;
/// - значение в паре с единицей: принять только код, существующий под
///   текущей единицей, иначе `CascadeError::OutOfDomain`;
/// - обычное поле: установить код и наименование из справочника.
///
/// Пустой код всегда означает очистку поля (и его зависимых).
pub fn apply_field_change(
    record: &mut SpecificationRecord,
    catalogs: &CatalogSet,
    field: SpecField,
    code: &str,
) -> Result<(), CascadeError> {
    if code.is_empty() {
        slot_mut(record, field).clear();
        for &dep in field.dependents() {
            slot_mut(record, dep).clear();
        }
        return Ok(());
    }

    if let Some(unit_field) = field.unit_field() {
        let unit_code = slot(record, unit_field).code.clone();
        let row = catalogs
            .find_under_unit(field.family(), code, &unit_code)
            .ok_or_else(|| CascadeError::OutOfDomain {
                code: code.to_string(),
                unit: unit_code.clone(),
            })?;
        *slot_mut(record, field) = CodeLabel::new(row.code.as_str(), row.label.as_str());
        return Ok(());
    }

    let label = catalogs.lookup_label(field.family(), code);
    *slot_mut(record, field) = CodeLabel::new(code, label);
    for &dep in field.dependents() {
        slot_mut(record, dep).clear();
    }
    Ok(())
}

/// Смена единицы измерения: установка плюс безусловный сброс парного значения
pub fn on_unit_change(
    record: &mut SpecificationRecord,
    catalogs: &CatalogSet,
    field: SpecField,
    code: &str,
) {
    debug_assert!(!field.dependents().is_empty(), "not a unit field");
    // Поле единицы не бывает вне домена — отказ невозможен
    let _ = apply_field_change(record, catalogs, field, code);
}

/// Смена зависимого значения; отказ оставляет рабочую копию нетронутой
pub fn on_value_change(
    record: &mut SpecificationRecord,
    catalogs: &CatalogSet,
    field: SpecField,
    code: &str,
) -> Result<(), CascadeError> {
    apply_field_change(record, catalogs, field, code)
}

/// Допустимые кандидаты для поля при текущем частичном выборе
pub fn candidates<'a>(
    record: &SpecificationRecord,
    catalogs: &'a CatalogSet,
    field: SpecField,
) -> Vec<&'a CatalogRow> {
    match field.unit_field() {
        Some(unit_field) => {
            let unit_code = &slot(record, unit_field).code;
            if unit_code.is_empty() {
                return Vec::new();
            }
            catalogs
                .catalog(field.family())
                .iter()
                .filter(|row| row.parent_unit_code.as_deref() == Some(unit_code.as_str()))
                .collect()
        }
        None => catalogs.catalog(field.family()).iter().collect(),
    }
}

// ============================================================================
// Трёхуровневый каскад оборудования: вид → производитель → модель
// ============================================================================

/// Смена производителя очищает модель и спецификацию только этого вида
pub fn on_maker_change(
    record: &mut SpecificationRecord,
    catalogs: &CatalogSet,
    kind: AccessoryKind,
    maker_code: &str,
) {
    let maker_label = catalogs
        .accessory_models()
        .iter()
        .find(|row| row.kind_tag == kind.tag() && row.maker_code == maker_code)
        .map(|row| row.maker_label.clone())
        .unwrap_or_default();

    let slot = record.accessory.slot_mut(kind);
    if maker_code.is_empty() {
        slot.clear_selection();
        return;
    }
    slot.maker = CodeLabel::new(maker_code, maker_label);
    slot.model.clear();
    slot.spec_text.clear();
}

/// Выбор модели: производитель, модель и спецификация назначаются атомарно
/// из одной строки справочника. Частичное назначение исключено.
pub fn on_model_select(
    record: &mut SpecificationRecord,
    kind: AccessoryKind,
    row: &AccessoryModelRow,
) {
    let slot = record.accessory.slot_mut(kind);
    slot.maker = CodeLabel::new(row.maker_code.as_str(), row.maker_label.as_str());
    slot.model = CodeLabel::new(row.model_code.as_str(), row.model_label.as_str());
    slot.spec_text = row.spec_text.clone();
}
