use thiserror::Error;

/// Ошибки операций сессии
#[derive(Debug, Error)]
pub enum EstimateError {
    /// Сохранение прервано до обращения к серверу: нет типа, нет TagNo
    /// или не заполнена шапка заявки
    #[error("Validation error: {0}")]
    Validation(String),

    /// Сохранение порядка листов не прошло — пакетное сохранение
    /// спецификаций не начинается
    #[error("Order save failed: {0}")]
    OrderSave(String),

    /// Сервер отклонил пакетное сохранение; повторов не делаем
    #[error("Save rejected: {0}")]
    SaveRejected(String),
}

/// Отказ каскадного изменения поля. Рабочая копия при отказе не меняется.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CascadeError {
    /// Код значения не существует под текущей единицей измерения
    #[error("value '{code}' is not valid under unit '{unit}'")]
    OutOfDomain { code: String, unit: String },
}
