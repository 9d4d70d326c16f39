use serde::{Deserialize, Serialize};

/// Пара код/наименование — базовая единица всех выборов спецификации.
///
/// Пустой код означает "не выбрано"; наименование при этом тоже пустое.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CodeLabel {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub label: String,
}

impl CodeLabel {
    pub fn new(code: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            label: label.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }

    /// Сбросить пару в состояние "не выбрано"
    pub fn clear(&mut self) {
        self.code.clear();
        self.label.clear();
    }

    /// Код для сохранения: `None` вместо пустой строки
    pub fn code_opt(&self) -> Option<String> {
        if self.code.is_empty() {
            None
        } else {
            Some(self.code.clone())
        }
    }
}
