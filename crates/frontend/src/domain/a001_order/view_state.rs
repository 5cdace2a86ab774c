use contracts::domain::a001_order::OrderId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Режим отображения списка
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    List,
    Grid,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::List => ViewMode::Grid,
            ViewMode::Grid => ViewMode::List,
        }
    }
}

impl Default for ViewMode {
    fn default() -> Self {
        ViewMode::List
    }
}

/// Состояние отображения, не связанное с запросом.
///
/// Открыто не больше одного меню строки.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    mode: ViewMode,
    open_row_menu: Option<OrderId>,
    selected: BTreeSet<OrderId>,
}

impl ViewState {
    pub fn new(mode: ViewMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: ViewMode) {
        self.mode = mode;
    }

    pub fn toggle_mode(&mut self) -> ViewMode {
        self.mode = self.mode.toggled();
        self.mode
    }

    /// Открыть меню строки (закрыв любое другое) или закрыть, если оно уже открыто.
    /// Возвращает `true`, если меню строки теперь открыто.
    pub fn toggle_row_menu(&mut self, row_id: &OrderId) -> bool {
        if self.open_row_menu.as_ref() == Some(row_id) {
            self.open_row_menu = None;
            false
        } else {
            self.open_row_menu = Some(row_id.clone());
            true
        }
    }

    pub fn close_row_menu(&mut self) {
        self.open_row_menu = None;
    }

    pub fn open_row_menu(&self) -> Option<&OrderId> {
        self.open_row_menu.as_ref()
    }

    pub fn is_menu_open(&self, row_id: &OrderId) -> bool {
        self.open_row_menu.as_ref() == Some(row_id)
    }

    /// Returns `true` if the row is selected after the toggle
    pub fn toggle_selection(&mut self, row_id: &OrderId) -> bool {
        if self.selected.remove(row_id) {
            false
        } else {
            self.selected.insert(row_id.clone());
            true
        }
    }

    pub fn select_page<I>(&mut self, row_ids: I)
    where
        I: IntoIterator<Item = OrderId>,
    {
        self.selected.extend(row_ids);
    }

    /// Все строки страницы выбраны (пустая страница не считается выбранной)
    pub fn is_page_selected(&self, row_ids: &[OrderId]) -> bool {
        !row_ids.is_empty() && row_ids.iter().all(|id| self.selected.contains(id))
    }

    /// Флажок страницы: снять выбор только со строк страницы, если они все выбраны,
    /// иначе выбрать их. Выбор на других страницах не меняется.
    pub fn toggle_page_selection(&mut self, row_ids: &[OrderId]) -> bool {
        if self.is_page_selected(row_ids) {
            for id in row_ids {
                self.selected.remove(id);
            }
            false
        } else {
            self.select_page(row_ids.iter().cloned());
            true
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    pub fn is_selected(&self, row_id: &OrderId) -> bool {
        self.selected.contains(row_id)
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    pub fn selected(&self) -> impl Iterator<Item = &OrderId> {
        self.selected.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_one_row_menu_open() {
        let mut state = ViewState::default();
        let first = OrderId::new("10685");
        let second = OrderId::new("19043");

        assert!(state.toggle_row_menu(&first));
        assert!(state.toggle_row_menu(&second));

        assert!(!state.is_menu_open(&first));
        assert!(state.is_menu_open(&second));
        assert_eq!(state.open_row_menu(), Some(&second));
    }

    #[test]
    fn test_toggle_same_row_closes_menu() {
        let mut state = ViewState::default();
        let row = OrderId::new("10685");
        state.toggle_row_menu(&row);
        assert!(!state.toggle_row_menu(&row));
        assert_eq!(state.open_row_menu(), None);
    }

    #[test]
    fn test_mode_change_keeps_menu_and_selection() {
        let mut state = ViewState::new(ViewMode::List);
        let row = OrderId::new("1");
        state.toggle_row_menu(&row);
        state.toggle_selection(&row);

        state.set_mode(ViewMode::Grid);
        assert_eq!(state.mode(), ViewMode::Grid);
        assert_eq!(state.toggle_mode(), ViewMode::List);
        assert!(state.is_menu_open(&row));
        assert!(state.is_selected(&row));
    }

    #[test]
    fn test_selection() {
        let mut state = ViewState::default();
        let a = OrderId::new("a");
        let b = OrderId::new("b");

        assert!(state.toggle_selection(&a));
        assert!(!state.toggle_selection(&a));
        state.select_page(vec![a.clone(), b.clone(), a.clone()]);
        assert_eq!(state.selected_count(), 2);
        assert_eq!(state.selected().collect::<Vec<_>>(), vec![&a, &b]);

        state.clear_selection();
        assert_eq!(state.selected_count(), 0);
    }

    #[test]
    fn test_page_toggle_keeps_other_pages_selection() {
        let mut state = ViewState::default();
        let elsewhere = OrderId::new("19043");
        let page = vec![OrderId::new("10602"), OrderId::new("10703")];

        state.toggle_selection(&elsewhere);
        assert!(!state.is_page_selected(&page));
        assert!(state.toggle_page_selection(&page));
        assert!(state.is_page_selected(&page));
        assert_eq!(state.selected_count(), 3);

        assert!(!state.toggle_page_selection(&page));
        assert!(!state.is_page_selected(&page));
        assert!(state.is_selected(&elsewhere));
        assert_eq!(state.selected_count(), 1);
    }

    #[test]
    fn test_partially_selected_page_selects_rest() {
        let mut state = ViewState::default();
        let page = vec![OrderId::new("10602"), OrderId::new("10703")];
        state.toggle_selection(&page[0]);

        assert!(state.toggle_page_selection(&page));
        assert_eq!(state.selected_count(), 2);
        assert!(!state.is_page_selected(&[]));
    }
}
