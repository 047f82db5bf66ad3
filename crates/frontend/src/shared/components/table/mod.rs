//! Generic data table: column descriptors in, one page of rows out.
//!
//! Purely presentational. Sorting, filtering and pagination happen in
//! the record set; the table only renders the page it is given and
//! reports header clicks through `on_sort`.

pub mod number_format;

pub use number_format::format_money;

use contracts::shared::listing::SortSpec;
use leptos::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ColumnAlign {
    Left,
    Right,
}

/// One column descriptor: key for sorting, title for the header, and a
/// plain function that renders the cell text.
#[derive(Clone)]
pub struct TableColumn<T> {
    pub key: &'static str,
    pub title: &'static str,
    pub align: ColumnAlign,
    pub cell: fn(&T) -> String,
}

impl<T> TableColumn<T> {
    pub fn new(key: &'static str, title: &'static str, cell: fn(&T) -> String) -> Self {
        Self {
            key,
            title,
            align: ColumnAlign::Left,
            cell,
        }
    }

    pub fn right(key: &'static str, title: &'static str, cell: fn(&T) -> String) -> Self {
        Self {
            key,
            title,
            align: ColumnAlign::Right,
            cell,
        }
    }
}

/// Sort indicator for a header cell
fn sort_indicator(sort: &Option<SortSpec>, field: &str) -> &'static str {
    match sort {
        Some(spec) if spec.field == field => {
            if spec.ascending {
                " \u{25b2}"
            } else {
                " \u{25bc}"
            }
        }
        _ => " \u{21c5}",
    }
}

#[component]
pub fn DataTable<T>(
    /// Column descriptors, in display order
    columns: Vec<TableColumn<T>>,

    /// The current page of the visible collection
    #[prop(into)]
    rows: Signal<Vec<T>>,

    /// Render skeleton rows instead of data
    #[prop(into)]
    loading: Signal<bool>,

    /// Active sort, for the header indicators
    #[prop(into)]
    sort: Signal<Option<SortSpec>>,

    /// Called with the column key when a header is clicked
    on_sort: Callback<String>,

    /// Extra class for a row (e.g. low-stock highlight)
    #[prop(optional)]
    row_class: Option<fn(&T) -> &'static str>,

    /// Per-row action cell renderer
    #[prop(optional)]
    actions: Option<Callback<T, AnyView>>,

    /// Number of skeleton rows shown while loading
    #[prop(optional, default = 10)]
    skeleton_rows: usize,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
{
    let column_count = columns.len() + usize::from(actions.is_some());

    let header_cells = columns
        .iter()
        .map(|col| {
            let key = col.key;
            let align = col.align;
            view! {
                <th
                    class=if align == ColumnAlign::Right {
                        "data-table__header data-table__header--right"
                    } else {
                        "data-table__header"
                    }
                    on:click=move |_| on_sort.run(key.to_string())
                >
                    {col.title}
                    <span class="data-table__sort-indicator">
                        {move || sort_indicator(&sort.get(), key)}
                    </span>
                </th>
            }
        })
        .collect_view();

    let body_columns = columns;

    view! {
        <div class="data-table-wrap">
            <table class="data-table">
                <thead>
                    <tr>
                        {header_cells}
                        {actions.map(|_| view! { <th class="data-table__header">"Actions"</th> })}
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        if loading.get() {
                            (0..skeleton_rows)
                                .map(|_| {
                                    view! {
                                        <tr class="data-table__row">
                                            {(0..column_count)
                                                .map(|_| view! {
                                                    <td><div class="skeleton"></div></td>
                                                })
                                                .collect_view()}
                                        </tr>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        } else if rows.get().is_empty() {
                            view! {
                                <tr class="data-table__row data-table__row--empty">
                                    <td colspan=column_count.to_string()>"No records match"</td>
                                </tr>
                            }
                            .into_any()
                        } else {
                            rows.get()
                                .into_iter()
                                .map(|row| {
                                    let extra = row_class.map(|f| f(&row)).unwrap_or("");
                                    let cells = body_columns
                                        .iter()
                                        .map(|col| {
                                            let align = col.align;
                                            view! {
                                                <td
                                                    class=if align == ColumnAlign::Right {
                                                        "data-table__cell--right"
                                                    } else {
                                                        ""
                                                    }
                                                >
                                                    {(col.cell)(&row)}
                                                </td>
                                            }
                                        })
                                        .collect_view();
                                    let action_cell = actions.map(|render| {
                                        view! {
                                            <td class="data-table__actions">
                                                {render.run(row.clone())}
                                            </td>
                                        }
                                    });
                                    view! {
                                        <tr class=format!("data-table__row {}", extra)>
                                            {cells}
                                            {action_cell}
                                        </tr>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }
                    }}
                </tbody>
            </table>
        </div>
    }
}
