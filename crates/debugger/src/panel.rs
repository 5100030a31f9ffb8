//! Presentation targets for snapshots.

use crate::{Error, FormattedSnapshot, registers::Width};
use indexmap::IndexMap;

/// Something that displays snapshots.
pub trait Present {
    fn present(&mut self, snapshot: &FormattedSnapshot) -> Result<(), Error>;
}

/// Names of the information label slots, in the same order as
/// [`FormattedSnapshot::info_lines`].
pub const LABEL_SLOTS: [&str; 7] = [
    "CPUType",
    "FPUType",
    "dynaRec",
    "softFloatFPU",
    "PITMode",
    "waitStates",
    "memoryInfo",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelRow {
    pub name: &'static str,
    pub width: Width,
    pub value: String,
    /// Whether the value differs from the one shown before it.
    pub changed: bool,
}

/// Display model of a debugger window: a set of named text labels and a two column register
/// table.
///
/// Labels must be bound before anything is presented into them.
#[derive(Debug, Clone, Default)]
pub struct Panel {
    labels: IndexMap<&'static str, String>,
    rows: Vec<PanelRow>,
    previous: Option<FormattedSnapshot>,
    presented: u64,
}

impl Panel {
    /// A panel with no labels bound.
    pub fn new() -> Self {
        Self::default()
    }

    /// A panel with every label slot bound.
    pub fn with_labels() -> Self {
        let mut panel = Self::new();
        panel.bind_labels(LABEL_SLOTS);
        panel
    }

    pub fn bind_label(&mut self, slot: &'static str) {
        self.labels.entry(slot).or_default();
    }

    pub fn bind_labels(&mut self, slots: impl IntoIterator<Item = &'static str>) {
        for slot in slots {
            self.bind_label(slot);
        }
    }

    pub fn unbind_label(&mut self, slot: &str) {
        self.labels.shift_remove(slot);
    }

    pub fn label(&self, slot: &str) -> Option<&str> {
        self.labels.get(slot).map(String::as_str)
    }

    /// Text of every bound label, in slot order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        LABEL_SLOTS
            .iter()
            .filter_map(|slot| self.labels.get(slot).map(String::as_str))
    }

    pub fn rows(&self) -> &[PanelRow] {
        &self.rows
    }

    /// How many snapshots were presented so far.
    pub fn presented(&self) -> u64 {
        self.presented
    }
}

impl Present for Panel {
    fn present(&mut self, snapshot: &FormattedSnapshot) -> Result<(), Error> {
        // a failure must leave the previous frame intact
        if let Some(missing) = LABEL_SLOTS
            .iter()
            .find(|slot| !self.labels.contains_key(**slot))
        {
            return Err(Error::StaleWidgetHandle { widget: *missing });
        }

        for (slot, line) in LABEL_SLOTS.iter().zip(snapshot.info_lines()) {
            if let Some(label) = self.labels.get_mut(slot) {
                label.clear();
                label.push_str(line);
            }
        }

        let changed = match &self.previous {
            Some(previous) => snapshot.changed_registers(previous).collect::<Vec<_>>(),
            None => Vec::new(),
        };

        self.rows.clear();
        self.rows
            .extend(snapshot.registers.iter().map(|row| PanelRow {
                name: row.name,
                width: row.width,
                value: row.value.clone(),
                changed: changed.contains(&row.name),
            }));

        self.previous = Some(snapshot.clone());
        self.presented += 1;

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::render;
    use machine::StaticState;

    #[test]
    fn unbound_panel_is_stale() {
        let snapshot = render(&StaticState::default()).unwrap();

        let mut panel = Panel::new();
        assert_eq!(
            panel.present(&snapshot),
            Err(Error::StaleWidgetHandle { widget: "CPUType" })
        );

        let mut panel = Panel::with_labels();
        panel.unbind_label("memoryInfo");
        assert_eq!(
            panel.present(&snapshot),
            Err(Error::StaleWidgetHandle {
                widget: "memoryInfo"
            })
        );
        assert!(panel.rows().is_empty());
        assert_eq!(panel.label("CPUType"), Some(""));
    }

    #[test]
    fn presents_labels_and_rows() {
        let snapshot = render(&StaticState::default()).unwrap();

        let mut panel = Panel::with_labels();
        panel.present(&snapshot).unwrap();

        assert_eq!(
            panel.label("CPUType"),
            Some("CPU Type: Intel 8088 @ 4.77 MHz")
        );
        assert_eq!(panel.label("FPUType"), Some("FPU Type: None"));
        assert_eq!(panel.labels().count(), 7);
        assert_eq!(panel.rows().len(), 14);
        assert!(panel.rows().iter().all(|row| !row.changed));
        assert_eq!(panel.presented(), 1);
    }

    #[test]
    fn highlights_changes_since_last_frame() {
        let mut state = StaticState::default();
        let mut panel = Panel::with_labels();
        panel.present(&render(&state).unwrap()).unwrap();

        state.registers.ecx = 0x10;
        panel.present(&render(&state).unwrap()).unwrap();

        let changed = panel
            .rows()
            .iter()
            .filter(|row| row.changed)
            .map(|row| row.name)
            .collect::<Vec<_>>();
        assert_eq!(changed, ["CX"]);

        // table is rebuilt, not appended to
        assert_eq!(panel.rows().len(), 14);

        panel.present(&render(&state).unwrap()).unwrap();
        assert!(panel.rows().iter().all(|row| !row.changed));
    }
}
