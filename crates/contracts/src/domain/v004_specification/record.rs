use crate::domain::common::CodeLabel;
use serde::{Deserialize, Serialize};

// ============================================================================
// Виды дополнительного оборудования
// ============================================================================

/// Восемь фиксированных видов дополнительного оборудования.
/// Порядок вариантов — это и порядок секции в номере изделия,
/// и порядок строк на экране; не переставлять.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AccessoryKind {
    Positioner,
    Solenoid,
    Limiter,
    AirSupply,
    VolumeBooster,
    AirOperator,
    LockUp,
    SnapActingRelay,
}

impl AccessoryKind {
    pub const ALL: [AccessoryKind; 8] = [
        AccessoryKind::Positioner,
        AccessoryKind::Solenoid,
        AccessoryKind::Limiter,
        AccessoryKind::AirSupply,
        AccessoryKind::VolumeBooster,
        AccessoryKind::AirOperator,
        AccessoryKind::LockUp,
        AccessoryKind::SnapActingRelay,
    ];

    /// Постоянная метка вида — проставлена в слоте даже когда слот пуст
    pub fn tag(&self) -> &'static str {
        match self {
            AccessoryKind::Positioner => "POS",
            AccessoryKind::Solenoid => "SOL",
            AccessoryKind::Limiter => "LIM",
            AccessoryKind::AirSupply => "AST",
            AccessoryKind::VolumeBooster => "VBS",
            AccessoryKind::AirOperator => "AOP",
            AccessoryKind::LockUp => "LUP",
            AccessoryKind::SnapActingRelay => "SAR",
        }
    }
}

// ============================================================================
// Секции выбора
// ============================================================================

/// Секция Body. Размер и давление — двухуровневые поля:
/// значение действительно только в паре со своей единицей измерения.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BodySelection {
    #[serde(rename = "bonnetType", default)]
    pub bonnet_type: CodeLabel,
    #[serde(default)]
    pub material: CodeLabel,
    #[serde(rename = "sizeUnit", default)]
    pub size_unit: CodeLabel,
    #[serde(default)]
    pub size: CodeLabel,
    #[serde(rename = "ratingUnit", default)]
    pub rating_unit: CodeLabel,
    #[serde(default)]
    pub rating: CodeLabel,
    #[serde(default)]
    pub connection: CodeLabel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TrimSelection {
    #[serde(rename = "trimType", default)]
    pub trim_type: CodeLabel,
    #[serde(default)]
    pub series: CodeLabel,
    #[serde(default)]
    pub material: CodeLabel,
    #[serde(rename = "portUnit", default)]
    pub port_unit: CodeLabel,
    #[serde(rename = "portSize", default)]
    pub port_size: CodeLabel,
    #[serde(default)]
    pub form: CodeLabel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ActuatorSelection {
    #[serde(default)]
    pub action: CodeLabel,
    #[serde(default)]
    pub series: CodeLabel,
    #[serde(default)]
    pub size: CodeLabel,
    #[serde(default)]
    pub handwheel: CodeLabel,
}

/// Один слот дополнительного оборудования. Производитель, модель и
/// спецификация назначаются только атомарно из строки справочника.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AccessorySlot {
    #[serde(rename = "kindTag", default)]
    pub kind_tag: String,
    #[serde(default)]
    pub maker: CodeLabel,
    #[serde(default)]
    pub model: CodeLabel,
    #[serde(rename = "specText", default)]
    pub spec_text: String,
}

impl AccessorySlot {
    /// Пустой слот с проставленной меткой вида
    pub fn initial(kind: AccessoryKind) -> Self {
        Self {
            kind_tag: kind.tag().to_string(),
            ..Self::default()
        }
    }

    pub fn clear_selection(&mut self) {
        self.maker.clear();
        self.model.clear();
        self.spec_text.clear();
    }
}

/// Слоты всех восьми видов, всегда присутствующие целиком
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessorySet {
    #[serde(default)]
    pub positioner: AccessorySlot,
    #[serde(default)]
    pub solenoid: AccessorySlot,
    #[serde(default)]
    pub limiter: AccessorySlot,
    #[serde(rename = "airSupply", default)]
    pub air_supply: AccessorySlot,
    #[serde(rename = "volumeBooster", default)]
    pub volume_booster: AccessorySlot,
    #[serde(rename = "airOperator", default)]
    pub air_operator: AccessorySlot,
    #[serde(rename = "lockUp", default)]
    pub lock_up: AccessorySlot,
    #[serde(rename = "snapActingRelay", default)]
    pub snap_acting_relay: AccessorySlot,
}

impl AccessorySet {
    pub fn initial() -> Self {
        Self {
            positioner: AccessorySlot::initial(AccessoryKind::Positioner),
            solenoid: AccessorySlot::initial(AccessoryKind::Solenoid),
            limiter: AccessorySlot::initial(AccessoryKind::Limiter),
            air_supply: AccessorySlot::initial(AccessoryKind::AirSupply),
            volume_booster: AccessorySlot::initial(AccessoryKind::VolumeBooster),
            air_operator: AccessorySlot::initial(AccessoryKind::AirOperator),
            lock_up: AccessorySlot::initial(AccessoryKind::LockUp),
            snap_acting_relay: AccessorySlot::initial(AccessoryKind::SnapActingRelay),
        }
    }

    pub fn slot(&self, kind: AccessoryKind) -> &AccessorySlot {
        match kind {
            AccessoryKind::Positioner => &self.positioner,
            AccessoryKind::Solenoid => &self.solenoid,
            AccessoryKind::Limiter => &self.limiter,
            AccessoryKind::AirSupply => &self.air_supply,
            AccessoryKind::VolumeBooster => &self.volume_booster,
            AccessoryKind::AirOperator => &self.air_operator,
            AccessoryKind::LockUp => &self.lock_up,
            AccessoryKind::SnapActingRelay => &self.snap_acting_relay,
        }
    }

    pub fn slot_mut(&mut self, kind: AccessoryKind) -> &mut AccessorySlot {
        match kind {
            AccessoryKind::Positioner => &mut self.positioner,
            AccessoryKind::Solenoid => &mut self.solenoid,
            AccessoryKind::Limiter => &mut self.limiter,
            AccessoryKind::AirSupply => &mut self.air_supply,
            AccessoryKind::VolumeBooster => &mut self.volume_booster,
            AccessoryKind::AirOperator => &mut self.air_operator,
            AccessoryKind::LockUp => &mut self.lock_up,
            AccessoryKind::SnapActingRelay => &mut self.snap_acting_relay,
        }
    }

    /// Обход слотов в фиксированном порядке видов
    pub fn iter(&self) -> impl Iterator<Item = (AccessoryKind, &AccessorySlot)> {
        AccessoryKind::ALL.iter().map(move |&k| (k, self.slot(k)))
    }
}

impl Default for AccessorySet {
    fn default() -> Self {
        Self::initial()
    }
}

// ============================================================================
// Полная запись выбора для одного TagNo
// ============================================================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SpecificationRecord {
    /// Сквозное поле: серия клапана родительского типа
    #[serde(rename = "valveSeries", default)]
    pub valve_series: CodeLabel,
    #[serde(default)]
    pub body: BodySelection,
    #[serde(default)]
    pub trim: TrimSelection,
    #[serde(default)]
    pub actuator: ActuatorSelection,
    #[serde(default)]
    pub accessory: AccessorySet,
}

impl SpecificationRecord {
    /// Шаблон INITIAL_*: все поля пустые, метки видов оборудования проставлены
    pub fn initial() -> Self {
        Self {
            accessory: AccessorySet::initial(),
            ..Self::default()
        }
    }

    /// Шаблон для непосещённого TagNo: пустая запись со сквозной серией клапана
    pub fn initial_with_series(valve_series: CodeLabel) -> Self {
        Self {
            valve_series,
            ..Self::initial()
        }
    }
}
