//! Сборка пакетной формы сохранения из по-листового хранилища.

use contracts::domain::v002_tag_sheet::TagSheet;
use contracts::domain::v004_specification::{
    BulkSaveItem, BulkSaveRequest, SpecificationRecord, SpecificationSaveDto,
};

use crate::store::SelectionStore;

/// Ровно один элемент на каждый лист из `tag_list`, в порядке displayOrder:
/// запись из хранилища, для активного листа — рабочая копия, для ни разу
/// не посещённого листа — пустой шаблон со сквозной серией клапана из
/// активной рабочей копии. Непосещённый лист получает синтаксически
/// корректную пустую спецификацию, а не пропуск.
pub fn build_bulk_payload(
    tag_list: &[TagSheet],
    store: &SelectionStore,
    working_copy: &SpecificationRecord,
    active_sheet_id: Option<i64>,
) -> BulkSaveRequest {
    let mut ordered: Vec<&TagSheet> = tag_list.iter().collect();
    ordered.sort_by_key(|tag| tag.display_order);

    let items = ordered
        .into_iter()
        .map(|tag| {
            let record: SpecificationRecord = if let Some(stored) = store.get(tag.sheet_id) {
                stored.clone()
            } else if active_sheet_id == Some(tag.sheet_id) {
                working_copy.clone()
            } else {
                SpecificationRecord::initial_with_series(working_copy.valve_series.clone())
            };
            BulkSaveItem {
                sheet_id: tag.sheet_id,
                specification: SpecificationSaveDto::from(&record),
            }
        })
        .collect();

    BulkSaveRequest { items }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::CodeLabel;

    fn tag(sheet_id: i64, order: u32) -> TagSheet {
        TagSheet {
            sheet_id,
            tag_label: format!("TAG-{sheet_id:03}"),
            quantity: 1,
            type_code: "HLS".into(),
            display_order: order,
        }
    }

    #[test]
    fn test_one_item_per_tag_regardless_of_visits() {
        let tags = vec![tag(1, 0), tag(2, 1), tag(3, 2)];
        let mut store = SelectionStore::new();
        store.put(2, SpecificationRecord::initial());

        let payload = build_bulk_payload(&tags, &store, &SpecificationRecord::initial(), None);
        let ids: Vec<i64> = payload.items.iter().map(|i| i.sheet_id).collect();
        assert_eq!(ids, [1, 2, 3]);
    }

    #[test]
    fn test_items_follow_display_order() {
        let tags = vec![tag(1, 2), tag(2, 0), tag(3, 1)];
        let payload = build_bulk_payload(
            &tags,
            &SelectionStore::new(),
            &SpecificationRecord::initial(),
            None,
        );
        let ids: Vec<i64> = payload.items.iter().map(|i| i.sheet_id).collect();
        assert_eq!(ids, [2, 3, 1]);
    }

    #[test]
    fn test_untouched_sheet_gets_template_with_active_series() {
        // Лист 1 не посещался, лист 2 отредактирован
        let tags = vec![tag(1, 0), tag(2, 1)];
        let mut store = SelectionStore::new();

        let mut edited = SpecificationRecord::initial();
        edited.valve_series = CodeLabel::new("H", "HLS");
        edited.body.material = CodeLabel::new("3", "SUS316");
        store.commit_working_copy(2, &edited);

        let payload = build_bulk_payload(&tags, &store, &edited, Some(2));
        assert_eq!(payload.items[0].sheet_id, 1);
        assert_eq!(
            payload.items[0].specification.valve_series_code,
            Some("H".into())
        );
        assert_eq!(payload.items[0].specification.body_material_code, None);
        assert_eq!(
            payload.items[1].specification.body_material_code,
            Some("3".into())
        );
    }

    #[test]
    fn test_active_unstored_sheet_uses_working_copy() {
        let tags = vec![tag(5, 0)];
        let mut working = SpecificationRecord::initial();
        working.actuator.series = CodeLabel::new("3", "HA3");

        let payload = build_bulk_payload(&tags, &SelectionStore::new(), &working, Some(5));
        assert_eq!(
            payload.items[0].specification.act_series_code,
            Some("3".into())
        );
    }
}
