//! Ownership of the dashboard's live chart widgets.
//!
//! Each [`ChartSlot`] holds at most one widget. Loading new data never
//! updates a widget in place: the old one is destroyed first, then a new one
//! is built from the fresh data.

use crate::chart_config::{bar_chart_config, line_chart_config};
use crate::{dom, js_bridge};
use pu_model::locale::UiText;
use pu_model::statistics::ChartData;
use serde::Serialize;

/// One of the two fixed canvas placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartSlot {
    /// Line chart: age vs. pressure ulcer incidence
    Age,
    /// Bar chart: intervention comparison
    Intervention,
}

impl ChartSlot {
    pub const ALL: [ChartSlot; 2] = [ChartSlot::Age, ChartSlot::Intervention];

    /// DOM id of the slot's `<canvas>`.
    pub fn canvas_id(&self) -> &'static str {
        match self {
            ChartSlot::Age => "ageChart",
            ChartSlot::Intervention => "interventionChart",
        }
    }
}

/// A live chart bound to a slot.
pub trait ChartWidget {
    /// The data the widget was built from.
    fn data(&self) -> &ChartData;

    /// Re-measure the container.
    fn resize(&self);

    /// Redraw without animation. Does not change data.
    fn redraw(&self);

    /// Whether the underlying chart exists yet. Construction may finish
    /// after the widget is stored, or never.
    fn is_constructed(&self) -> bool;

    /// Release the widget's resources.
    fn destroy(self);
}

/// Series data of both slots, `None` for a slot without a chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedChartData {
    pub age_chart: Option<ChartData>,
    pub intervention_chart: Option<ChartData>,
}

/// Owns the widget in each slot.
pub struct WidgetManager<W: ChartWidget> {
    age: Option<W>,
    intervention: Option<W>,
}

impl<W: ChartWidget> Default for WidgetManager<W> {
    fn default() -> Self {
        Self {
            age: None,
            intervention: None,
        }
    }
}

impl<W: ChartWidget> WidgetManager<W> {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, slot: ChartSlot) -> &Option<W> {
        match slot {
            ChartSlot::Age => &self.age,
            ChartSlot::Intervention => &self.intervention,
        }
    }

    fn slot_mut(&mut self, slot: ChartSlot) -> &mut Option<W> {
        match slot {
            ChartSlot::Age => &mut self.age,
            ChartSlot::Intervention => &mut self.intervention,
        }
    }

    pub fn get(&self, slot: ChartSlot) -> Option<&W> {
        self.slot(slot).as_ref()
    }

    /// Destroy the widget in `slot`. Returns whether there was one.
    pub fn destroy_if_present(&mut self, slot: ChartSlot) -> bool {
        match self.slot_mut(slot).take() {
            Some(widget) => {
                widget.destroy();
                true
            }
            None => false,
        }
    }

    /// Put `widget` in `slot`, destroying whatever was there.
    pub fn set(&mut self, slot: ChartSlot, widget: W) {
        self.destroy_if_present(slot);
        *self.slot_mut(slot) = Some(widget);
    }

    /// Destroy the current widget, then build and store a new one.
    ///
    /// `build` runs only after the old widget is gone. If it returns `None`
    /// the slot stays empty.
    pub fn replace_with<F>(&mut self, slot: ChartSlot, build: F) -> bool
    where
        F: FnOnce() -> Option<W>,
    {
        self.destroy_if_present(slot);
        match build() {
            Some(widget) => {
                *self.slot_mut(slot) = Some(widget);
                true
            }
            None => false,
        }
    }

    fn constructed(&self, slot: ChartSlot) -> Option<&W> {
        self.get(slot).filter(|w| w.is_constructed())
    }

    /// Number of slots holding a constructed chart.
    pub fn live_count(&self) -> usize {
        ChartSlot::ALL
            .iter()
            .filter(|s| self.constructed(**s).is_some())
            .count()
    }

    pub fn resize_all(&self) {
        for widget in ChartSlot::ALL.iter().filter_map(|s| self.get(*s)) {
            widget.resize();
        }
    }

    pub fn redraw_all(&self) {
        for widget in ChartSlot::ALL.iter().filter_map(|s| self.get(*s)) {
            widget.redraw();
        }
    }

    /// Snapshot of the series behind each constructed chart. A slot whose
    /// chart was never built exports `None`.
    pub fn export(&self) -> ExportedChartData {
        let series = |slot| self.constructed(slot).map(|w| w.data().clone());
        ExportedChartData {
            age_chart: series(ChartSlot::Age),
            intervention_chart: series(ChartSlot::Intervention),
        }
    }
}

/// A Chart.js chart driven through [`js_bridge`].
pub struct JsChart {
    slot: ChartSlot,
    data: ChartData,
}

impl JsChart {
    /// Build the chart for `slot` from `data`.
    ///
    /// Returns `None` when the slot's canvas is not in the page. Chart.js
    /// itself may still be loading, so the chart counts as constructed only
    /// once the bridge reports it.
    pub fn create(slot: ChartSlot, data: ChartData, text: &UiText) -> Option<Self> {
        if dom::element_by_id(slot.canvas_id()).is_none() {
            log::warn!("No canvas #{}, skipping chart", slot.canvas_id());
            return None;
        }
        let config = match slot {
            ChartSlot::Age => line_chart_config(&data, text),
            ChartSlot::Intervention => bar_chart_config(&data, text),
        };
        let config_json = match serde_json::to_string(&config) {
            Ok(json) => json,
            Err(e) => {
                log::error!("Failed to serialize {} config: {}", slot.canvas_id(), e);
                return None;
            }
        };
        js_bridge::create_chart(slot.canvas_id(), &config_json);
        log::info!(
            "Built {} with {} datasets",
            slot.canvas_id(),
            data.datasets.len()
        );
        Some(Self { slot, data })
    }
}

impl ChartWidget for JsChart {
    fn data(&self) -> &ChartData {
        &self.data
    }

    fn resize(&self) {
        js_bridge::resize_chart(self.slot.canvas_id());
    }

    fn redraw(&self) {
        js_bridge::redraw_chart(self.slot.canvas_id());
    }

    fn is_constructed(&self) -> bool {
        js_bridge::has_chart(self.slot.canvas_id())
    }

    fn destroy(self) {
        js_bridge::destroy_chart(self.slot.canvas_id());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Log = Rc<RefCell<Vec<String>>>;

    struct FakeWidget {
        name: &'static str,
        data: ChartData,
        log: Log,
        constructed: bool,
    }

    impl FakeWidget {
        fn build(name: &'static str, label: &str, log: &Log) -> Self {
            log.borrow_mut().push(format!("create {}", name));
            Self {
                name,
                data: ChartData {
                    labels: vec![label.to_string()],
                    datasets: Vec::new(),
                },
                log: Rc::clone(log),
                constructed: true,
            }
        }

        /// A widget whose chart never came up (library or canvas missing).
        fn stalled(name: &'static str, label: &str, log: &Log) -> Self {
            Self {
                constructed: false,
                ..Self::build(name, label, log)
            }
        }
    }

    impl ChartWidget for FakeWidget {
        fn data(&self) -> &ChartData {
            &self.data
        }
        fn resize(&self) {
            self.log.borrow_mut().push(format!("resize {}", self.name));
        }
        fn redraw(&self) {
            self.log.borrow_mut().push(format!("redraw {}", self.name));
        }
        fn is_constructed(&self) -> bool {
            self.constructed
        }
        fn destroy(self) {
            self.log.borrow_mut().push(format!("destroy {}", self.name));
        }
    }

    #[test]
    fn test_rebuild_destroys_before_creating() {
        let log: Log = Rc::default();
        let mut manager = WidgetManager::new();

        manager.replace_with(ChartSlot::Age, || Some(FakeWidget::build("first", "a", &log)));
        manager.replace_with(ChartSlot::Age, || Some(FakeWidget::build("second", "b", &log)));

        assert_eq!(
            *log.borrow(),
            vec!["create first", "destroy first", "create second"]
        );
        assert_eq!(manager.live_count(), 1);
    }

    #[test]
    fn test_only_latest_widget_responds_to_resize() {
        let log: Log = Rc::default();
        let mut manager = WidgetManager::new();
        manager.replace_with(ChartSlot::Age, || Some(FakeWidget::build("first", "a", &log)));
        manager.replace_with(ChartSlot::Age, || Some(FakeWidget::build("second", "b", &log)));
        log.borrow_mut().clear();

        manager.resize_all();
        assert_eq!(*log.borrow(), vec!["resize second"]);
    }

    #[test]
    fn test_set_destroys_previous() {
        let log: Log = Rc::default();
        let mut manager = WidgetManager::new();
        manager.set(ChartSlot::Intervention, FakeWidget::build("one", "a", &log));
        manager.set(ChartSlot::Intervention, FakeWidget::build("two", "b", &log));
        assert_eq!(
            *log.borrow(),
            vec!["create one", "create two", "destroy one"]
        );
        assert_eq!(manager.get(ChartSlot::Intervention).map(|w| w.name), Some("two"));
    }

    #[test]
    fn test_destroy_if_present() {
        let log: Log = Rc::default();
        let mut manager = WidgetManager::new();
        assert!(!manager.destroy_if_present(ChartSlot::Age));
        manager.set(ChartSlot::Age, FakeWidget::build("one", "a", &log));
        assert!(manager.destroy_if_present(ChartSlot::Age));
        assert_eq!(manager.live_count(), 0);
        assert!(!manager.destroy_if_present(ChartSlot::Age));
    }

    #[test]
    fn test_failed_build_leaves_slot_empty() {
        let log: Log = Rc::default();
        let mut manager = WidgetManager::new();
        manager.set(ChartSlot::Age, FakeWidget::build("old", "a", &log));
        let built = manager.replace_with(ChartSlot::Age, || None);
        assert!(!built);
        assert_eq!(manager.live_count(), 0);
        assert_eq!(*log.borrow(), vec!["create old", "destroy old"]);
    }

    #[test]
    fn test_redraw_touches_each_live_widget() {
        let log: Log = Rc::default();
        let mut manager = WidgetManager::new();
        manager.redraw_all();
        assert!(log.borrow().is_empty());

        manager.set(ChartSlot::Age, FakeWidget::build("age", "a", &log));
        manager.set(ChartSlot::Intervention, FakeWidget::build("bars", "b", &log));
        log.borrow_mut().clear();
        manager.redraw_all();
        assert_eq!(*log.borrow(), vec!["redraw age", "redraw bars"]);
    }

    #[test]
    fn test_export_marks_missing_slots() {
        let log: Log = Rc::default();
        let mut manager = WidgetManager::new();
        let empty = manager.export();
        assert_eq!(empty.age_chart, None);
        assert_eq!(empty.intervention_chart, None);

        manager.set(ChartSlot::Age, FakeWidget::build("age", "60-64", &log));
        let exported = manager.export();
        assert_eq!(
            exported.age_chart.map(|d| d.labels),
            Some(vec!["60-64".to_string()])
        );
        assert_eq!(exported.intervention_chart, None);

        let json = serde_json::to_value(manager.export()).unwrap();
        assert!(json["interventionChart"].is_null());
        assert_eq!(json["ageChart"]["labels"][0], "60-64");
    }

    #[test]
    fn test_unconstructed_chart_exports_null() {
        let log: Log = Rc::default();
        let mut manager = WidgetManager::new();
        manager.set(ChartSlot::Age, FakeWidget::stalled("age", "60-64", &log));
        manager.set(ChartSlot::Intervention, FakeWidget::build("bars", "A", &log));

        assert_eq!(manager.live_count(), 1);
        let exported = manager.export();
        assert_eq!(exported.age_chart, None);
        assert!(exported.intervention_chart.is_some());

        let json = serde_json::to_value(manager.export()).unwrap();
        assert!(json["ageChart"].is_null());
    }
}
