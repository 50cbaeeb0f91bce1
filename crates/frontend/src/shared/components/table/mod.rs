//! Reusable data table: paginated grid with optional row selection and a
//! contextual toolbar area.
//!
//! The table owns pagination and the display side of selection; the hosting
//! page stays the source of truth for the record collection and mirrors the
//! selected id set through `on_select_row` / `selected_row_ids`. The table
//! performs no I/O and knows nothing about entities — rows arrive as
//! pre-shaped [`TableRow`] values keyed by column id.

pub mod checkbox;
pub mod pagination;
pub mod paging;

use std::collections::BTreeMap;

use leptos::prelude::*;

use checkbox::TableCheckbox;
use pagination::PaginationControls;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
    Center,
}

impl Align {
    fn css(self) -> &'static str {
        match self {
            Align::Left => "left",
            Align::Right => "right",
            Align::Center => "center",
        }
    }
}

/// Column descriptor: which row cell to render under which header.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub id: &'static str,
    pub label: &'static str,
    pub min_width: Option<u32>,
    pub align: Align,
}

impl Column {
    pub fn new(id: &'static str, label: &'static str) -> Self {
        Self {
            id,
            label,
            min_width: None,
            align: Align::Left,
        }
    }

    pub fn min_width(mut self, px: u32) -> Self {
        self.min_width = Some(px);
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    fn header_style(&self) -> String {
        match self.min_width {
            Some(px) => format!("min-width: {}px; text-align: {};", px, self.align.css()),
            None => format!("text-align: {};", self.align.css()),
        }
    }

    fn cell_style(&self) -> String {
        format!("text-align: {};", self.align.css())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Success,
    Warning,
    Danger,
    Neutral,
}

impl BadgeTone {
    fn css(self) -> &'static str {
        match self {
            BadgeTone::Success => "success",
            BadgeTone::Warning => "warning",
            BadgeTone::Danger => "danger",
            BadgeTone::Neutral => "neutral",
        }
    }
}

/// A displayable cell value: a primitive or a pre-shaped visual element.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Link {
        href: String,
        text: String,
        external: bool,
    },
    Badge {
        text: String,
        tone: BadgeTone,
    },
    Image {
        url: String,
        alt: String,
    },
    Empty,
}

/// One table row: a stable identifier plus cells keyed by column id.
/// Columns with no matching cell render as [`CellValue::Empty`].
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    id: String,
    cells: BTreeMap<&'static str, CellValue>,
}

impl TableRow {
    /// Rows must carry a stable identifier; there is no positional-index
    /// fallback, since index identity breaks across filtering.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        assert!(!id.is_empty(), "table rows require a stable identifier");
        Self {
            id,
            cells: BTreeMap::new(),
        }
    }

    pub fn cell(mut self, column: &'static str, value: CellValue) -> Self {
        self.cells.insert(column, value);
        self
    }

    pub fn text(self, column: &'static str, text: impl Into<String>) -> Self {
        let text = text.into();
        if text.trim().is_empty() {
            self.cell(column, CellValue::Empty)
        } else {
            self.cell(column, CellValue::Text(text))
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.cells.get(column)
    }
}

fn render_cell(value: &CellValue) -> AnyView {
    match value {
        CellValue::Text(text) => view! { <span>{text.clone()}</span> }.into_any(),
        CellValue::Link {
            href,
            text,
            external,
        } => {
            if *external {
                view! {
                    <a class="table__link" href=href.clone() target="_blank" rel="noopener noreferrer">
                        {text.clone()}
                    </a>
                }
                .into_any()
            } else {
                view! { <a class="table__link" href=href.clone()>{text.clone()}</a> }.into_any()
            }
        }
        CellValue::Badge { text, tone } => view! {
            <span class=format!("badge badge--{}", tone.css())>{text.clone()}</span>
        }
        .into_any(),
        CellValue::Image { url, alt } => view! {
            <img class="table__thumb" src=url.clone() alt=alt.clone()/>
        }
        .into_any(),
        CellValue::Empty => view! { <span class="table__cell-empty">"N/A"</span> }.into_any(),
    }
}

/// Paginated, optionally multi-select data grid.
///
/// Selection scope: the header checkbox selects exactly the rows visible on
/// the current page, not the whole filtered collection. Every selection
/// mutation emits the full id list through `on_select_row`; a host-supplied
/// `selected_row_ids` signal is adopted whenever it changes, which lets the
/// page clear selection after a delete.
#[component]
pub fn DataTable(
    columns: Vec<Column>,
    #[prop(into)] rows: Signal<Vec<TableRow>>,
    /// Rows-per-page choices; the first entry is the initial page size.
    #[prop(optional)]
    rows_per_page_options: Option<Vec<usize>>,
    #[prop(optional)] enable_checkbox: bool,
    #[prop(optional)] on_select_row: Option<Callback<Vec<String>>>,
    /// Browse-mode toolbar, shown while the selection is empty.
    #[prop(optional)]
    render_toolbar: Option<Callback<Vec<String>, AnyView>>,
    /// Selection-mode actions, shown while at least one row is selected.
    #[prop(optional)]
    render_actions: Option<Callback<Vec<String>, AnyView>>,
    #[prop(optional, into)] selected_row_ids: Option<Signal<Vec<String>>>,
) -> impl IntoView {
    let options = rows_per_page_options.unwrap_or_else(|| vec![5, 10, 25]);
    let default_per = options.first().copied().unwrap_or(10);

    let (page, set_page) = signal(0usize);
    let (rows_per_page, set_rows_per_page) = signal(default_per);
    let (selected, set_selected) = signal(Vec::<String>::new());
    let columns = StoredValue::new(columns);

    // Controlled-selection mode: adopt the host's id set whenever it changes.
    if let Some(external) = selected_row_ids {
        Effect::new(move |_| set_selected.set(external.get()));
    }

    let current_page = Memo::new(move |_| {
        paging::clamp_page(page.get(), rows.with(|r| r.len()), rows_per_page.get())
    });
    let total_pages =
        Memo::new(move |_| paging::page_count(rows.with(|r| r.len()), rows_per_page.get()));
    let visible = Memo::new(move |_| {
        rows.with(|r| paging::page_slice(r, current_page.get(), rows_per_page.get()))
    });

    let emit = move |ids: Vec<String>| {
        set_selected.set(ids.clone());
        if let Some(callback) = on_select_row {
            callback.run(ids);
        }
    };

    let header_checked = Memo::new(move |_| {
        visible.with(|rows| {
            !rows.is_empty()
                && selected.with(|s| rows.iter().all(|row| s.contains(&row.id().to_string())))
        })
    });

    view! {
        <div class="table">
            {enable_checkbox.then(|| view! {
                <div class="table__toolbar">
                    {move || {
                        let ids = selected.get();
                        let renderer = if ids.is_empty() { render_toolbar } else { render_actions };
                        match renderer {
                            Some(callback) => callback.run(ids),
                            None => view! { <></> }.into_any(),
                        }
                    }}
                </div>
            })}

            <table class="table__data table--striped">
                <thead class="table__head">
                    <tr>
                        {enable_checkbox.then(|| view! {
                            <th class="table__header-cell table__header-cell--checkbox">
                                <input
                                    type="checkbox"
                                    class="table__checkbox"
                                    prop:checked=move || header_checked.get()
                                    on:change=move |ev| {
                                        if event_target_checked(&ev) {
                                            emit(visible.get_untracked()
                                                .iter()
                                                .map(|row| row.id().to_string())
                                                .collect());
                                        } else {
                                            emit(Vec::new());
                                        }
                                    }
                                />
                            </th>
                        })}
                        {columns.with_value(|cols| cols.iter().map(|col| {
                            view! {
                                <th class="table__header-cell" style=col.header_style()>
                                    {col.label}
                                </th>
                            }
                        }).collect_view())}
                    </tr>
                </thead>
                <tbody>
                    {move || visible.get().into_iter().map(|row| {
                        let row_id = row.id().to_string();
                        let is_selected = Signal::derive({
                            let id = row_id.clone();
                            move || selected.with(|s| s.contains(&id))
                        });
                        let toggle = {
                            let id = row_id.clone();
                            move |_checked: bool| {
                                let mut ids = selected.get_untracked();
                                paging::toggle_id(&mut ids, &id);
                                emit(ids);
                            }
                        };
                        view! {
                            <tr
                                class="table__row"
                                class=("table__row--selected", move || is_selected.get())
                            >
                                {enable_checkbox.then(|| view! {
                                    <TableCheckbox
                                        checked=is_selected
                                        on_change=Callback::new(toggle.clone())
                                    />
                                })}
                                {columns.with_value(|cols| cols.iter().map(|col| {
                                    let value = row.get(col.id).cloned().unwrap_or(CellValue::Empty);
                                    view! {
                                        <td class="table__cell" style=col.cell_style()>
                                            {render_cell(&value)}
                                        </td>
                                    }
                                }).collect_view())}
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>

            <PaginationControls
                current_page=current_page
                total_pages=total_pages
                total_count=Signal::derive(move || rows.with(|r| r.len()))
                rows_per_page=rows_per_page
                on_page_change=Callback::new(move |p| set_page.set(p))
                on_rows_per_page_change=Callback::new(move |per| {
                    set_rows_per_page.set(per);
                    set_page.set(0);
                })
                rows_per_page_options=options
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_cell_falls_back_to_empty() {
        let row = TableRow::new("r1").text("name", "Alpha");
        assert_eq!(row.get("name"), Some(&CellValue::Text("Alpha".to_string())));
        assert_eq!(row.get("country"), None);
    }

    #[test]
    fn test_blank_text_becomes_empty_cell() {
        let row = TableRow::new("r1").text("note", "   ");
        assert_eq!(row.get("note"), Some(&CellValue::Empty));
    }

    #[test]
    #[should_panic(expected = "stable identifier")]
    fn test_blank_row_id_is_rejected() {
        let _ = TableRow::new("");
    }

    #[test]
    fn test_column_builder() {
        let col = Column::new("email", "Email").min_width(120).align(Align::Right);
        assert_eq!(col.header_style(), "min-width: 120px; text-align: right;");
        assert_eq!(col.cell_style(), "text-align: right;");
    }
}
