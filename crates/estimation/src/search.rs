//! Поиск моделей оборудования и учёт поколений отложенного (debounced) ввода.

use contracts::domain::v003_master_data::AccessoryModelRow;
use contracts::domain::v004_specification::AccessoryKind;

/// Строки трёх поисковых полей модального окна подбора модели
#[derive(Debug, Clone, Default)]
pub struct AccessoryFilter {
    pub maker: String,
    pub model: String,
    pub spec: String,
}

impl AccessoryFilter {
    /// Термы всех непустых полей: в нижнем регистре, разбитые по пробелам,
    /// объединяются по И
    fn terms(&self) -> Vec<String> {
        [&self.maker, &self.model, &self.spec]
            .iter()
            .flat_map(|s| s.split_whitespace())
            .map(|t| t.to_lowercase())
            .collect()
    }

    fn matches(&self, row: &AccessoryModelRow) -> bool {
        let haystack = format!(
            "{} {} {}",
            row.maker_label.to_lowercase(),
            row.model_label.to_lowercase(),
            row.spec_text.to_lowercase()
        );
        self.terms().iter().all(|term| haystack.contains(term))
    }
}

/// Кандидаты: строки нужного вида, прошедшие все поисковые термы
pub fn filter_accessory_models<'a>(
    rows: &'a [AccessoryModelRow],
    kind: AccessoryKind,
    filter: &AccessoryFilter,
) -> Vec<&'a AccessoryModelRow> {
    rows.iter()
        .filter(|row| row.kind_tag == kind.tag())
        .filter(|row| filter.matches(row))
        .collect()
}

// ============================================================================
// Поколения отложенного ввода
// ============================================================================

/// Счётчик поколений для debounce: каждый ввод берёт новый токен,
/// сработавший таймер проверяет, что его токен всё ещё текущий.
/// Сами таймеры — забота хоста.
#[derive(Debug, Clone, Default)]
pub struct SearchDebounce {
    generation: u64,
}

impl SearchDebounce {
    pub fn new() -> Self {
        Self::default()
    }

    /// Новый ввод: все ранее выданные токены устаревают
    pub fn next(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    pub fn is_current(&self, token: u64) -> bool {
        self.generation == token
    }
}
