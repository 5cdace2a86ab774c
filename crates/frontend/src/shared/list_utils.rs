/// Универсальные утилиты для работы со списками (поиск, сортировка, UI компоненты)
use contracts::shared::order_query::SortDirection;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cmp::Ordering;

/// Trait для типов данных, поддерживающих поиск
pub trait Searchable {
    /// Проверяет, соответствует ли объект поисковому запросу (уже в нижнем регистре)
    fn matches_filter(&self, filter_lower: &str) -> bool;
}

/// Trait для типов данных, поддерживающих сортировку
pub trait Sortable {
    type Field: Copy;

    /// Сравнивает два объекта по указанному полю
    fn compare_by_field(&self, other: &Self, field: Self::Field) -> Ordering;

    /// Сравнение по идентичности, для стабильного порядка при равенстве поля
    fn compare_identity(&self, other: &Self) -> Ordering;
}

/// Разбить текст на фрагменты `(фрагмент, совпал ли с фильтром)` без учёта регистра.
///
/// Сравнение идёт по символам нижнего регистра, а границы фрагментов всегда
/// совпадают с границами символов исходного текста.
pub fn split_matches<'a>(text: &'a str, filter: &str) -> Vec<(&'a str, bool)> {
    let needle: Vec<char> = filter.trim().to_lowercase().chars().collect();
    if needle.is_empty() {
        return vec![(text, false)];
    }

    // Каждый символ нижнего регистра помнит позицию исходного символа
    let lowered: Vec<(usize, char)> = text
        .char_indices()
        .flat_map(|(pos, c)| c.to_lowercase().map(move |lc| (pos, lc)))
        .collect();
    let on_boundary =
        |idx: usize| idx == 0 || idx == lowered.len() || lowered[idx - 1].0 != lowered[idx].0;
    let byte_at = |idx: usize| lowered.get(idx).map_or(text.len(), |(pos, _)| *pos);

    let mut parts = Vec::new();
    let mut last_byte = 0;
    let mut idx = 0;
    while idx + needle.len() <= lowered.len() {
        let end = idx + needle.len();
        let hit = on_boundary(idx)
            && on_boundary(end)
            && lowered[idx..end].iter().map(|(_, c)| *c).eq(needle.iter().copied());
        if !hit {
            idx += 1;
            continue;
        }

        let (from, to) = (byte_at(idx), byte_at(end));
        if from > last_byte {
            parts.push((&text[last_byte..from], false));
        }
        parts.push((&text[from..to], true));
        last_byte = to;
        idx = end;
    }

    if last_byte < text.len() || parts.is_empty() {
        parts.push((&text[last_byte..], false));
    }
    parts
}

/// Подсветка совпадений в тексте (case-insensitive)
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let parts: Vec<AnyView> = split_matches(text, filter)
        .into_iter()
        .map(|(fragment, matched)| {
            let fragment = fragment.to_string();
            if matched {
                view! { <mark class="search-highlight">{fragment}</mark> }.into_any()
            } else {
                view! { <span>{fragment}</span> }.into_any()
            }
        })
        .collect();

    view! { <>{parts}</> }.into_any()
}

/// Сортирует список по указанному полю; при равенстве порядок по идентичности, всегда по возрастанию
pub fn sort_list<T: Sortable>(items: &mut [&T], field: T::Field, direction: SortDirection) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        let cmp = match direction {
            SortDirection::Asc => cmp,
            SortDirection::Desc => cmp.reverse(),
        };
        cmp.then_with(|| a.compare_identity(b))
    });
}

/// Фильтрует список по поисковому запросу; пустой запрос пропускает всё
pub fn filter_list<'a, T: Searchable>(
    items: impl IntoIterator<Item = &'a T>,
    filter: &str,
) -> Vec<&'a T> {
    let filter_lower = filter.trim().to_lowercase();
    items
        .into_iter()
        .filter(|item| filter_lower.is_empty() || item.matches_filter(&filter_lower))
        .collect()
}

/// Компонент поиска с debounce и кнопкой очистки
#[component]
pub fn SearchInput(
    /// Текущее значение фильтра (для отображения)
    #[prop(into)]
    value: Signal<String>,
    /// Callback для обновления значения фильтра
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder текст
    #[prop(optional, into)]
    placeholder: String,
    /// Задержка перед применением, мс
    #[prop(optional, default = 300)]
    debounce_ms: u32,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Buscar por cliente, produto ou número...".to_string()
    } else {
        placeholder
    };

    // Локальное состояние для input (до debounce)
    let (input_value, set_input_value) = signal(value.get_untracked());

    // Поколение ввода: применяется только последний таймер
    let generation = StoredValue::new(0u64);
    let applied = StoredValue::new(0u64);

    // Внешний сброс фильтра, пока нет ожидающего ввода
    Effect::new(move |_| {
        let external = value.get();
        if generation.get_value() == applied.get_value()
            && external.trim() != input_value.get_untracked().trim()
        {
            set_input_value.set(external);
        }
    });

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        let current = generation.get_value() + 1;
        generation.set_value(current);

        spawn_local(async move {
            TimeoutFuture::new(debounce_ms).await;
            if generation.get_value() == current {
                applied.set_value(current);
                on_change.run(new_value);
            }
        });
    };

    let is_filter_active = move || !value.get().trim().is_empty();

    let clear_filter = move |_| {
        let current = generation.get_value() + 1;
        generation.set_value(current);
        applied.set_value(current);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                class=move || if is_filter_active() { "search-input__field search-input__field--active" } else { "search-input__field" }
                placeholder={placeholder}
                prop:value=move || input_value.get()
                on:input=move |ev| {
                    let val = event_target_value(&ev);
                    handle_input_change(val);
                }
            />
            {move || if !input_value.get().is_empty() {
                view! {
                    <button
                        class="search-input__clear"
                        on:click=clear_filter
                        title="Limpar"
                    >
                        {crate::shared::icons::icon("x")}
                    </button>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}

/// Получить индикатор сортировки для заголовка
pub fn get_sort_indicator<F: PartialEq>(current_field: F, field: F, direction: SortDirection) -> &'static str {
    if current_field == field {
        match direction {
            SortDirection::Asc => " ▲",
            SortDirection::Desc => " ▼",
        }
    } else {
        " ⇅"
    }
}
