//! Номер изделия: детерминированная строка фиксированной ширины,
//! выводимая из текущей рабочей копии. Чистая функция, не бросает.

use contracts::domain::common::CodeLabel;
use contracts::domain::v004_specification::{AccessoryKind, SpecificationRecord};

/// 6 (body) + 1 + 6 (trim) + 1 + 4 (actuator) + 1 + 11 (accessory)
pub const PART_NUMBER_LEN: usize = 30;

/// Запасной вариант той же формы на случай внутренне некорректного входа
const ALL_ZERO: &str = "000000-000000-0000-00000000000";

fn ch(field: &CodeLabel) -> char {
    // Коды однозначные; более длинный код даёт первый символ,
    // чтобы не ломать фиксированную ширину
    field.code.chars().next().unwrap_or('0')
}

/// Собрать номер изделия из рабочей копии.
///
/// Секции разделены `-`; каждый отсутствующий компонент — литерал `0`.
/// Результат — всегда ровно 30 символов.
pub fn part_number(record: &SpecificationRecord) -> String {
    let mut out = String::with_capacity(PART_NUMBER_LEN);

    // Body: тип крышки, константа "2", материал, размер, давление, присоединение
    out.push(ch(&record.body.bonnet_type));
    out.push('2');
    out.push(ch(&record.body.material));
    out.push(ch(&record.body.size));
    out.push(ch(&record.body.rating));
    out.push(ch(&record.body.connection));
    out.push('-');

    // Trim: тип, серия, материал, размер корпуса (повтор), проход, форма
    out.push(ch(&record.trim.trim_type));
    out.push(ch(&record.trim.series));
    out.push(ch(&record.trim.material));
    out.push(ch(&record.body.size));
    out.push(ch(&record.trim.port_size));
    out.push(ch(&record.trim.form));
    out.push('-');

    // Actuator
    out.push(ch(&record.actuator.action));
    out.push(ch(&record.actuator.series));
    out.push(ch(&record.actuator.size));
    out.push(ch(&record.actuator.handwheel));
    out.push('-');

    // Accessory: производитель+модель для первых трёх видов,
    // далее только модель
    for kind in [
        AccessoryKind::Positioner,
        AccessoryKind::Solenoid,
        AccessoryKind::Limiter,
    ] {
        let slot = record.accessory.slot(kind);
        out.push(ch(&slot.maker));
        out.push(ch(&slot.model));
    }
    for kind in [
        AccessoryKind::AirSupply,
        AccessoryKind::VolumeBooster,
        AccessoryKind::AirOperator,
        AccessoryKind::LockUp,
        AccessoryKind::SnapActingRelay,
    ] {
        out.push(ch(&record.accessory.slot(kind).model));
    }

    if out.chars().count() != PART_NUMBER_LEN {
        return ALL_ZERO.to_string();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_selection_shape() {
        let pn = part_number(&SpecificationRecord::initial());
        assert_eq!(pn, "020000-000000-0000-00000000000");
        assert_eq!(pn.len(), PART_NUMBER_LEN);
    }

    #[test]
    fn test_separator_positions() {
        let pn = part_number(&SpecificationRecord::initial());
        let dashes: Vec<usize> = pn
            .char_indices()
            .filter(|(_, c)| *c == '-')
            .map(|(i, _)| i)
            .collect();
        assert_eq!(dashes, [6, 13, 18]);
    }

    #[test]
    fn test_body_size_repeats_in_trim_section() {
        let mut record = SpecificationRecord::initial();
        record.body.size = CodeLabel::new("F", "20A");
        let pn = part_number(&record);
        // позиция 3 в секции Body и позиция 10 (4-я в секции Trim)
        assert_eq!(pn.as_bytes()[3], b'F');
        assert_eq!(pn.as_bytes()[10], b'F');
    }

    #[test]
    fn test_accessory_section_layout() {
        let mut record = SpecificationRecord::initial();
        record.accessory.positioner.maker = CodeLabel::new("Y", "Yamatake");
        record.accessory.positioner.model = CodeLabel::new("7", "AVP300");
        record.accessory.lock_up.model = CodeLabel::new("4", "LV-2");

        let pn = part_number(&record);
        let acc = &pn[19..];
        assert_eq!(acc.len(), 11);
        assert_eq!(&acc[0..2], "Y7");
        // соленоид и концевик пустыми парами, одиночные виды до lock-up нулями
        assert_eq!(&acc[2..9], "0000000");
        assert_eq!(acc.as_bytes()[9], b'4');
        assert_eq!(acc.as_bytes()[10], b'0');
    }

    #[test]
    fn test_multichar_code_contributes_first_char_only() {
        let mut record = SpecificationRecord::initial();
        record.body.material = CodeLabel::new("3X", "SUS316L");
        let pn = part_number(&record);
        assert_eq!(pn.len(), PART_NUMBER_LEN);
        assert_eq!(pn.as_bytes()[2], b'3');
    }

    #[test]
    fn test_full_selection_still_30_chars() {
        let mut record = SpecificationRecord::initial();
        record.body.bonnet_type = CodeLabel::new("1", "Plain");
        record.body.material = CodeLabel::new("3", "SUS316");
        record.body.size = CodeLabel::new("F", "20A");
        record.body.rating = CodeLabel::new("4", "JIS20K");
        record.body.connection = CodeLabel::new("2", "Flanged RF");
        record.trim.trim_type = CodeLabel::new("1", "Contoured");
        record.trim.series = CodeLabel::new("5", "HTS");
        record.trim.material = CodeLabel::new("6", "Stellite");
        record.trim.port_size = CodeLabel::new("D", "15A");
        record.trim.form = CodeLabel::new("2", "EQ%");
        record.actuator.action = CodeLabel::new("1", "Direct");
        record.actuator.series = CodeLabel::new("3", "HA3");
        record.actuator.size = CodeLabel::new("2", "#2");
        record.actuator.handwheel = CodeLabel::new("1", "Top");

        let pn = part_number(&record);
        assert_eq!(pn.chars().count(), PART_NUMBER_LEN);
        assert_eq!(&pn[..6], "123F42");
    }
}
