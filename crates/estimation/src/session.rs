//! Сессия выбора: один общий параметризованный автомат состояний
//! для обеих страниц (создание заявки и её просмотр).
//!
//! Состояния: нет активного листа → `Active(sheet_id)`. Переключение листа
//! всегда идёт через безусловный commit уходящей рабочей копии; возврат на
//! посещённый лист восстанавливает сессионную копию, и она приоритетнее
//! данных сервера до сохранения или перезагрузки страницы.

use contracts::domain::common::CodeLabel;
use contracts::domain::v001_valve_type::ValveType;
use contracts::domain::v002_tag_sheet::TagSheet;
use contracts::domain::v003_master_data::{AccessoryModelRow, CatalogFamily};
use contracts::domain::v004_specification::{AccessoryKind, SpecificationDto, SpecificationRecord};
use contracts::domain::v005_estimate::EstimateHeader;

use crate::api::EstimateApi;
use crate::cascade::{self, SpecField};
use crate::encoder;
use crate::error::{CascadeError, EstimateError};
use crate::master_data::CatalogSet;
use crate::payload::build_bulk_payload;
use crate::search::{filter_accessory_models, AccessoryFilter};
use crate::store::SelectionStore;

/// Талон незавершённого переключения: ответ сервера применяется только если
/// талон всё ещё текущий — побеждает последний запрошенный лист.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwitchTicket {
    sheet_id: i64,
    epoch: u64,
}

impl SwitchTicket {
    pub fn sheet_id(&self) -> i64 {
        self.sheet_id
    }
}

/// Результат первой (синхронной) фазы переключения
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchOutcome {
    /// Лист уже посещался в этой сессии — восстановлена сессионная копия
    Restored,
    /// Нужна загрузка сохранённой спецификации с сервера
    NeedsFetch(SwitchTicket),
}

pub struct SelectionSession {
    header: EstimateHeader,
    catalogs: CatalogSet,
    types: Vec<ValveType>,
    tags: Vec<TagSheet>,
    store: SelectionStore,
    working_copy: SpecificationRecord,
    active: Option<i64>,
    switch_epoch: u64,
    next_sheet_id: i64,
    next_type_id: i64,
}

impl SelectionSession {
    /// Создать сессию над загруженным кэшем справочников
    pub fn new(catalogs: CatalogSet) -> Self {
        Self {
            header: EstimateHeader::default(),
            catalogs,
            types: Vec::new(),
            tags: Vec::new(),
            store: SelectionStore::new(),
            working_copy: SpecificationRecord::initial(),
            active: None,
            switch_epoch: 0,
            next_sheet_id: 1,
            next_type_id: 1,
        }
    }

    /// Открыть сохранённую заявку: установить шапку и списки с сервера.
    /// Локальные счётчики идентификаторов продолжают нумерацию выше
    /// максимальных загруженных значений.
    pub fn seed_from_server(
        &mut self,
        header: EstimateHeader,
        types: Vec<ValveType>,
        tags: Vec<TagSheet>,
    ) {
        self.next_sheet_id = tags.iter().map(|t| t.sheet_id).max().unwrap_or(0) + 1;
        self.next_type_id = types.iter().map(|t| t.type_id).max().unwrap_or(0) + 1;
        self.header = header;
        self.types = types;
        self.tags = tags;
        self.store.clear();
        self.active = None;
        self.working_copy = SpecificationRecord::initial();
    }

    // ========================================================================
    // Доступ к состоянию
    // ========================================================================

    pub fn header(&self) -> &EstimateHeader {
        &self.header
    }

    pub fn set_project_name(&mut self, name: impl Into<String>) {
        self.header.project_name = name.into();
    }

    pub fn set_customer_name(&mut self, name: impl Into<String>) {
        self.header.customer_name = name.into();
    }

    pub fn catalogs(&self) -> &CatalogSet {
        &self.catalogs
    }

    pub fn types(&self) -> &[ValveType] {
        &self.types
    }

    pub fn tags(&self) -> &[TagSheet] {
        &self.tags
    }

    pub fn active_sheet(&self) -> Option<i64> {
        self.active
    }

    pub fn store(&self) -> &SelectionStore {
        &self.store
    }

    /// Живая рабочая копия активного листа
    pub fn working_copy(&self) -> &SpecificationRecord {
        &self.working_copy
    }

    /// Номер изделия по текущей рабочей копии
    pub fn part_number(&self) -> String {
        encoder::part_number(&self.working_copy)
    }

    // ========================================================================
    // Списки Type / TagNo
    // ========================================================================

    /// Добавить тип; наименование разрешается из справочника серий
    pub fn add_type(&mut self, series_code: &str) -> Result<i64, EstimateError> {
        if series_code.trim().is_empty() {
            return Err(EstimateError::Validation("Код серии не указан".into()));
        }
        if self.types.iter().any(|t| t.series_code == series_code) {
            return Err(EstimateError::Validation(format!(
                "Тип '{}' уже добавлен",
                series_code
            )));
        }
        let display_name = self
            .catalogs
            .lookup_label(CatalogFamily::ValveSeries, series_code);
        let type_id = self.next_type_id;
        self.next_type_id += 1;
        let mut valve_type = ValveType::new(type_id, series_code.to_string(), display_name);
        valve_type.display_order = self.types.len() as u32;
        self.types.push(valve_type);
        Ok(type_id)
    }

    /// Добавить лист TagNo под существующий тип.
    /// Неизвестный код типа — отказ: осиротевших листов не бывает.
    pub fn add_tag(
        &mut self,
        type_code: &str,
        tag_label: &str,
        quantity: u32,
    ) -> Result<i64, EstimateError> {
        if !self.types.iter().any(|t| t.series_code == type_code) {
            return Err(EstimateError::Validation(format!(
                "Тип '{}' не найден",
                type_code
            )));
        }
        let sheet_id = self.next_sheet_id;
        self.next_sheet_id += 1;
        let mut tag = TagSheet::new(sheet_id, type_code.to_string(), tag_label.to_string(), quantity);
        tag.display_order = self.tags.len() as u32;
        self.tags.push(tag);
        Ok(sheet_id)
    }

    pub fn set_tag_label(&mut self, sheet_id: i64, label: &str) {
        if let Some(tag) = self.tags.iter_mut().find(|t| t.sheet_id == sheet_id) {
            tag.tag_label = label.to_string();
        }
    }

    pub fn set_tag_quantity(&mut self, sheet_id: i64, quantity: u32) {
        if let Some(tag) = self.tags.iter_mut().find(|t| t.sheet_id == sheet_id) {
            tag.quantity = quantity.max(1);
        }
    }

    /// Удалить лист вместе с его сессионной записью.
    /// Удаление активного листа деактивирует сессию.
    pub fn remove_tag(&mut self, sheet_id: i64) {
        self.tags.retain(|t| t.sheet_id != sheet_id);
        self.store.remove(sheet_id);
        if self.active == Some(sheet_id) {
            self.active = None;
            self.working_copy = SpecificationRecord::initial();
            self.switch_epoch += 1;
        }
        self.renumber();
    }

    /// Удалить тип и все его листы
    pub fn remove_type(&mut self, type_id: i64) {
        let Some(pos) = self.types.iter().position(|t| t.type_id == type_id) else {
            return;
        };
        let series_code = self.types.remove(pos).series_code;
        let removed: Vec<i64> = self
            .tags
            .iter()
            .filter(|t| t.type_code == series_code)
            .map(|t| t.sheet_id)
            .collect();
        self.tags.retain(|t| t.type_code != series_code);
        for sheet_id in removed {
            self.store.remove(sheet_id);
            if self.active == Some(sheet_id) {
                self.active = None;
                self.working_copy = SpecificationRecord::initial();
                self.switch_epoch += 1;
            }
        }
        self.renumber();
    }

    /// Сдвинуть лист в общей последовательности
    pub fn move_tag(&mut self, sheet_id: i64, delta: i32) {
        self.tags.sort_by_key(|t| t.display_order);
        let Some(pos) = self.tags.iter().position(|t| t.sheet_id == sheet_id) else {
            return;
        };
        let target = (pos as i32 + delta).clamp(0, self.tags.len() as i32 - 1) as usize;
        let tag = self.tags.remove(pos);
        self.tags.insert(target, tag);
        // Закрепить новые позиции до сквозного пересчёта, иначе сортировка
        // по старым displayOrder откатит перестановку
        for (idx, tag) in self.tags.iter_mut().enumerate() {
            tag.display_order = idx as u32;
        }
        self.renumber();
    }

    /// Пересчитать сквозную нумерацию листов: по порядку типов,
    /// внутри типа — по текущему порядку
    pub fn renumber(&mut self) {
        self.types.sort_by_key(|t| t.display_order);
        for (idx, valve_type) in self.types.iter_mut().enumerate() {
            valve_type.display_order = idx as u32;
        }

        let type_order: Vec<&str> = self.types.iter().map(|t| t.series_code.as_str()).collect();
        self.tags.sort_by_key(|tag| {
            let type_pos = type_order
                .iter()
                .position(|code| *code == tag.type_code)
                .unwrap_or(usize::MAX);
            (type_pos, tag.display_order)
        });
        for (idx, tag) in self.tags.iter_mut().enumerate() {
            tag.display_order = idx as u32;
        }
    }

    fn series_of(&self, sheet_id: i64) -> CodeLabel {
        let Some(tag) = self.tags.iter().find(|t| t.sheet_id == sheet_id) else {
            return CodeLabel::default();
        };
        let label = self
            .types
            .iter()
            .find(|t| t.series_code == tag.type_code)
            .map(|t| t.display_name.clone())
            .unwrap_or_default();
        CodeLabel::new(tag.type_code.clone(), label)
    }

    // ========================================================================
    // Переключение активного листа
    // ========================================================================

    /// Первая фаза переключения: безусловный commit уходящей копии, затем
    /// восстановление сессионной записи либо талон на загрузку с сервера.
    /// Переключение на уже активный лист — no-op (двойного commit нет).
    pub fn begin_switch(&mut self, sheet_id: i64) -> Option<SwitchOutcome> {
        if self.active == Some(sheet_id) {
            return None;
        }
        if self.active.is_some() {
            self.commit_active();
        }

        // Любое переключение обесценивает ранее выданные талоны
        self.switch_epoch += 1;
        self.active = Some(sheet_id);

        if let Some(stored) = self.store.get(sheet_id) {
            // Сессионная копия приоритетнее данных сервера до сохранения
            self.working_copy = stored.clone();
            return Some(SwitchOutcome::Restored);
        }

        // Пока идёт загрузка, рабочая копия — пустой шаблон листа
        self.working_copy = SpecificationRecord::initial_with_series(self.series_of(sheet_id));
        Some(SwitchOutcome::NeedsFetch(SwitchTicket {
            sheet_id,
            epoch: self.switch_epoch,
        }))
    }

    /// Вторая фаза: применить ответ сервера, если талон всё ещё текущий.
    /// Устаревший ответ молча отбрасывается. `None` (нет сохранённой
    /// спецификации или ошибка чтения) оставляет посеянный шаблон.
    pub fn finish_switch(&mut self, ticket: SwitchTicket, fetched: Option<SpecificationDto>) {
        if ticket.epoch != self.switch_epoch || self.active != Some(ticket.sheet_id) {
            tracing::debug!(
                "discarding stale specification response for sheet {}",
                ticket.sheet_id
            );
            return;
        }
        if let Some(dto) = fetched {
            self.working_copy = dto.into_record(self.series_of(ticket.sheet_id));
        }
    }

    /// Обе фазы разом для хостов без собственного цикла событий
    pub async fn switch_to(&mut self, api: &dyn EstimateApi, sheet_id: i64) {
        let Some(SwitchOutcome::NeedsFetch(ticket)) = self.begin_switch(sheet_id) else {
            return;
        };
        let fetched = match api
            .fetch_specification(self.header.estimate_id, sheet_id)
            .await
        {
            Ok(dto) => dto,
            Err(e) => {
                // Ошибка чтения не фатальна: лист остаётся пустым шаблоном
                tracing::warn!("specification fetch failed for sheet {}: {}", sheet_id, e);
                None
            }
        };
        self.finish_switch(ticket, fetched);
    }

    fn commit_active(&mut self) {
        if let Some(active) = self.active {
            self.store.commit_working_copy(active, &self.working_copy);
        }
    }

    // ========================================================================
    // Правки рабочей копии
    // ========================================================================

    pub fn set_unit(&mut self, field: SpecField, code: &str) {
        cascade::on_unit_change(&mut self.working_copy, &self.catalogs, field, code);
    }

    pub fn set_value(&mut self, field: SpecField, code: &str) -> Result<(), CascadeError> {
        cascade::on_value_change(&mut self.working_copy, &self.catalogs, field, code)
    }

    pub fn set_accessory_maker(&mut self, kind: AccessoryKind, maker_code: &str) {
        cascade::on_maker_change(&mut self.working_copy, &self.catalogs, kind, maker_code);
    }

    pub fn select_accessory_model(&mut self, kind: AccessoryKind, row: &AccessoryModelRow) {
        cascade::on_model_select(&mut self.working_copy, kind, row);
    }

    /// Кандидаты для модального окна подбора модели
    pub fn search_accessory_models(
        &self,
        kind: AccessoryKind,
        filter: &AccessoryFilter,
    ) -> Vec<&AccessoryModelRow> {
        filter_accessory_models(self.catalogs.accessory_models(), kind, filter)
    }

    /// Кнопка обновления справочника оборудования
    pub async fn reload_accessory_models(&mut self, api: &dyn EstimateApi) {
        self.catalogs.reload_accessory_models(api).await;
    }

    // ========================================================================
    // Сохранение
    // ========================================================================

    /// Сохранить всё: валидация, порядок листов, затем пакет спецификаций.
    /// Неудача сохранения порядка прерывает процесс до пакетного шага.
    pub async fn save_all(&mut self, api: &dyn EstimateApi) -> Result<(), EstimateError> {
        if self.types.is_empty() {
            return Err(EstimateError::Validation(
                "Не добавлен ни один тип клапана".into(),
            ));
        }
        if self.tags.is_empty() {
            return Err(EstimateError::Validation(
                "Не добавлен ни один TagNo".into(),
            ));
        }
        self.header.validate().map_err(EstimateError::Validation)?;

        self.commit_active();
        self.renumber();

        let sheet_ids: Vec<i64> = self.tags.iter().map(|t| t.sheet_id).collect();
        api.save_display_order(self.header.estimate_id, &sheet_ids)
            .await
            .map_err(|e| EstimateError::OrderSave(e.to_string()))?;

        let request =
            build_bulk_payload(&self.tags, &self.store, &self.working_copy, self.active);
        api.bulk_save_specifications(self.header.estimate_id, &request)
            .await
            .map_err(|e| EstimateError::SaveRejected(e.to_string()))?;

        self.header.touch();
        Ok(())
    }
}
