//! Сквозные сценарии сессии выбора против мок-сервера.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use contracts::domain::v003_master_data::{AccessoryModelRow, CatalogFamily, CatalogRow};
use contracts::domain::v004_specification::{BulkSaveRequest, SpecificationDto};
use estimation::{
    ApiError, CatalogSet, EstimateApi, EstimateError, SelectionSession, SpecField, SwitchOutcome,
};
use uuid::Uuid;

// ============================================================================
// Мок внешнего API
// ============================================================================

#[derive(Default)]
struct MockApi {
    specifications: HashMap<i64, SpecificationDto>,
    fail_order_save: bool,
    fail_spec_fetch: bool,
    fail_catalog: Option<CatalogFamily>,
    order_saves: AtomicUsize,
    bulk_saves: Mutex<Vec<BulkSaveRequest>>,
}

#[async_trait]
impl EstimateApi for MockApi {
    async fn fetch_catalog(&self, family: CatalogFamily) -> Result<Vec<CatalogRow>, ApiError> {
        if self.fail_catalog == Some(family) {
            return Err(ApiError::Status { code: 500 });
        }
        Ok(match family {
            CatalogFamily::Units => vec![
                CatalogRow::new("A", "mm (A)"),
                CatalogRow::new("I", "inch (B)"),
            ],
            CatalogFamily::ValveSeries => vec![
                CatalogRow::new("H", "HLS"),
                CatalogRow::new("G", "GVS"),
            ],
            CatalogFamily::BodyMaterials => vec![
                CatalogRow::new("3", "SUS316"),
                CatalogRow::new("4", "SCS14A"),
            ],
            CatalogFamily::BodySizes => vec![
                CatalogRow::with_unit("F", "20A", "A"),
                CatalogRow::with_unit("G", "25A", "A"),
                CatalogRow::with_unit("2", "3/4B", "I"),
            ],
            _ => Vec::new(),
        })
    }

    async fn fetch_accessory_models(&self) -> Result<Vec<AccessoryModelRow>, ApiError> {
        Ok(vec![AccessoryModelRow {
            kind_tag: "POS".into(),
            maker_code: "Y".into(),
            maker_label: "Yamatake".into(),
            model_code: "7".into(),
            model_label: "AVP300".into(),
            spec_text: "4-20mA smart".into(),
        }])
    }

    async fn fetch_specification(
        &self,
        _estimate_id: Uuid,
        sheet_id: i64,
    ) -> Result<Option<SpecificationDto>, ApiError> {
        if self.fail_spec_fetch {
            return Err(ApiError::Network("connection reset".into()));
        }
        Ok(self.specifications.get(&sheet_id).cloned())
    }

    async fn save_display_order(
        &self,
        _estimate_id: Uuid,
        _sheet_ids: &[i64],
    ) -> Result<(), ApiError> {
        if self.fail_order_save {
            return Err(ApiError::Status { code: 409 });
        }
        self.order_saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn bulk_save_specifications(
        &self,
        _estimate_id: Uuid,
        request: &BulkSaveRequest,
    ) -> Result<(), ApiError> {
        self.bulk_saves.lock().unwrap().push(request.clone());
        Ok(())
    }
}

fn persisted_spec(material_code: &str, material_name: &str) -> SpecificationDto {
    serde_json::from_value(serde_json::json!({
        "body": { "materialCode": material_code, "materialName": material_name }
    }))
    .unwrap()
}

async fn session_with(api: &MockApi) -> SelectionSession {
    let catalogs = CatalogSet::load(api).await;
    let mut session = SelectionSession::new(catalogs);
    session.set_project_name("Plant A revamp");
    session.add_type("H").unwrap();
    session
}

// ============================================================================
// Переключение листов
// ============================================================================

#[tokio::test]
async fn switch_round_trip_restores_edits_exactly() {
    let api = MockApi::default();
    let mut session = session_with(&api).await;
    let a = session.add_tag("H", "TAG-001", 1).unwrap();
    let b = session.add_tag("H", "TAG-002", 1).unwrap();

    session.switch_to(&api, a).await;
    session.set_unit(SpecField::BodySizeUnit, "A");
    session.set_value(SpecField::BodySize, "F").unwrap();
    let edited = session.working_copy().clone();

    session.switch_to(&api, b).await;
    assert!(session.working_copy().body.size.is_empty());

    session.switch_to(&api, a).await;
    assert_eq!(session.working_copy(), &edited);
}

#[tokio::test]
async fn session_copy_wins_over_server_data_on_revisit() {
    let mut api = MockApi::default();
    api.specifications.insert(1, persisted_spec("4", "SCS14A"));
    let mut session = session_with(&api).await;
    let a = session.add_tag("H", "TAG-001", 1).unwrap();
    let b = session.add_tag("H", "TAG-002", 1).unwrap();

    session.switch_to(&api, a).await;
    assert_eq!(session.working_copy().body.material.code, "4");

    session.set_value(SpecField::BodyMaterial, "3").unwrap();
    session.switch_to(&api, b).await;
    session.switch_to(&api, a).await;
    // Не "4" с сервера: сессионная копия авторитетна до сохранения
    assert_eq!(session.working_copy().body.material.code, "3");
}

#[tokio::test]
async fn first_visit_seeds_from_persisted_specification() {
    let mut api = MockApi::default();
    api.specifications.insert(1, persisted_spec("3", "SUS316"));
    let mut session = session_with(&api).await;
    let a = session.add_tag("H", "TAG-001", 1).unwrap();

    session.switch_to(&api, a).await;
    assert_eq!(session.working_copy().body.material.code, "3");
    assert_eq!(session.working_copy().valve_series.code, "H");
    assert_eq!(session.working_copy().valve_series.label, "HLS");
}

#[tokio::test]
async fn fetch_failure_degrades_to_empty_template() {
    let mut api = MockApi::default();
    api.specifications.insert(1, persisted_spec("3", "SUS316"));
    api.fail_spec_fetch = true;
    let mut session = session_with(&api).await;
    let a = session.add_tag("H", "TAG-001", 1).unwrap();

    session.switch_to(&api, a).await;
    assert_eq!(session.active_sheet(), Some(a));
    assert!(session.working_copy().body.material.is_empty());
    assert_eq!(session.working_copy().valve_series.code, "H");
    assert_eq!(session.working_copy().accessory.positioner.kind_tag, "POS");
}

#[tokio::test]
async fn switch_to_active_sheet_is_noop() {
    let api = MockApi::default();
    let mut session = session_with(&api).await;
    let a = session.add_tag("H", "TAG-001", 1).unwrap();

    session.switch_to(&api, a).await;
    session.set_value(SpecField::BodyMaterial, "3").unwrap();

    // Повторная активация того же листа не делает commit
    assert!(session.begin_switch(a).is_none());
    assert!(session.store().get(a).is_none());
}

#[tokio::test]
async fn stale_fetch_response_is_discarded() {
    let mut api = MockApi::default();
    api.specifications.insert(1, persisted_spec("4", "SCS14A"));
    let mut session = session_with(&api).await;
    let a = session.add_tag("H", "TAG-001", 1).unwrap();
    let b = session.add_tag("H", "TAG-002", 1).unwrap();

    // Пользователь переключился на b раньше, чем пришёл ответ по a
    let Some(SwitchOutcome::NeedsFetch(stale_ticket)) = session.begin_switch(a) else {
        panic!("expected fetch ticket");
    };
    let Some(SwitchOutcome::NeedsFetch(current_ticket)) = session.begin_switch(b) else {
        panic!("expected fetch ticket");
    };

    let late_response = api.fetch_specification(session.header().estimate_id, a).await.unwrap();
    session.finish_switch(stale_ticket, late_response);

    // Ответ по a не перезаписал рабочую копию листа b
    assert_eq!(session.active_sheet(), Some(b));
    assert!(session.working_copy().body.material.is_empty());

    session.finish_switch(current_ticket, None);
    assert!(session.working_copy().body.material.is_empty());
}

// ============================================================================
// Сохранение
// ============================================================================

#[tokio::test]
async fn bulk_payload_covers_every_tag_even_unvisited() {
    let api = MockApi::default();
    let mut session = session_with(&api).await;
    let a = session.add_tag("H", "TAG-001", 1).unwrap();
    let b = session.add_tag("H", "TAG-002", 1).unwrap();
    let c = session.add_tag("H", "TAG-003", 2).unwrap();

    session.switch_to(&api, b).await;
    session.set_value(SpecField::BodyMaterial, "3").unwrap();

    session.save_all(&api).await.unwrap();

    let saved = api.bulk_saves.lock().unwrap();
    let request = saved.last().unwrap();
    let ids: Vec<i64> = request.items.iter().map(|i| i.sheet_id).collect();
    assert_eq!(ids, [a, b, c]);

    // Непосещённый лист — шаблон, отредактированный — его правки
    assert_eq!(request.items[0].specification.body_material_code, None);
    assert_eq!(
        request.items[1].specification.body_material_code,
        Some("3".into())
    );
}

#[tokio::test]
async fn order_save_failure_aborts_bulk_save() {
    let mut api = MockApi::default();
    api.fail_order_save = true;
    let mut session = session_with(&api).await;
    session.add_tag("H", "TAG-001", 1).unwrap();

    let err = session.save_all(&api).await.unwrap_err();
    assert!(matches!(err, EstimateError::OrderSave(_)));
    assert!(api.bulk_saves.lock().unwrap().is_empty());
}

#[tokio::test]
async fn save_without_tags_or_project_name_is_rejected() {
    let api = MockApi::default();

    let mut session = SelectionSession::new(CatalogSet::load(&api).await);
    session.set_project_name("Plant A revamp");
    assert!(matches!(
        session.save_all(&api).await.unwrap_err(),
        EstimateError::Validation(_)
    ));

    let mut session = session_with(&api).await;
    session.add_tag("H", "TAG-001", 1).unwrap();
    session.set_project_name("");
    assert!(matches!(
        session.save_all(&api).await.unwrap_err(),
        EstimateError::Validation(_)
    ));
    assert_eq!(api.order_saves.load(Ordering::SeqCst), 0);
}

// ============================================================================
// Справочники
// ============================================================================

#[tokio::test]
async fn catalog_load_isolates_family_failures() {
    let mut api = MockApi::default();
    api.fail_catalog = Some(CatalogFamily::BodyMaterials);

    let catalogs = CatalogSet::load(&api).await;
    assert!(catalogs.catalog(CatalogFamily::BodyMaterials).is_empty());
    assert!(!catalogs.catalog(CatalogFamily::BodySizes).is_empty());
    assert_eq!(catalogs.accessory_models().len(), 1);
}

// ============================================================================
// Списки типов и листов
// ============================================================================

#[tokio::test]
async fn tags_require_existing_type_and_removal_cascades() {
    let api = MockApi::default();
    let mut session = session_with(&api).await;

    assert!(matches!(
        session.add_tag("ZZZ", "TAG-001", 1),
        Err(EstimateError::Validation(_))
    ));

    session.add_type("G").unwrap();
    let a = session.add_tag("H", "TAG-001", 1).unwrap();
    let g = session.add_tag("G", "TAG-101", 1).unwrap();
    session.switch_to(&api, a).await;
    session.set_value(SpecField::BodyMaterial, "3").unwrap();
    session.switch_to(&api, g).await;

    let type_id = session.types()[0].type_id;
    session.remove_type(type_id);
    assert!(session.tags().iter().all(|t| t.type_code != "H"));
    assert!(session.store().get(a).is_none());
    assert_eq!(session.tags().len(), 1);
    assert_eq!(session.tags()[0].display_order, 0);
}

#[tokio::test]
async fn move_tag_renumbers_sequence() {
    let api = MockApi::default();
    let mut session = session_with(&api).await;
    let a = session.add_tag("H", "TAG-001", 1).unwrap();
    let b = session.add_tag("H", "TAG-002", 1).unwrap();
    let c = session.add_tag("H", "TAG-003", 1).unwrap();

    session.move_tag(c, -2);
    let order: Vec<i64> = session.tags().iter().map(|t| t.sheet_id).collect();
    assert_eq!(order, [c, a, b]);
    let numbering: Vec<u32> = session.tags().iter().map(|t| t.display_order).collect();
    assert_eq!(numbering, [0, 1, 2]);
}

#[tokio::test]
async fn part_number_tracks_working_copy() {
    let api = MockApi::default();
    let mut session = session_with(&api).await;
    let a = session.add_tag("H", "TAG-001", 1).unwrap();
    session.switch_to(&api, a).await;

    assert_eq!(session.part_number(), "020000-000000-0000-00000000000");

    session.set_value(SpecField::BodyMaterial, "3").unwrap();
    session.set_unit(SpecField::BodySizeUnit, "A");
    session.set_value(SpecField::BodySize, "F").unwrap();
    let pn = session.part_number();
    assert_eq!(pn.len(), 30);
    assert_eq!(&pn[..6], "023F00");
}
