use crate::shared::components::ui::{Button, Input, Select, Textarea};
use crate::shared::date_utils::{format_date, parse_date};
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::shared::state::{FormMode, WarehouseStore};
use crate::shared::toast::ToastService;
use contracts::domain::w002_order::{Order, OrderDraft, OrderLine};
use contracts::enums::OrderStatus;
use leptos::prelude::*;

/// One order line as typed into the form, before parsing
#[derive(Clone, Debug, Default, PartialEq)]
struct LineInput {
    name: String,
    quantity: String,
}

impl LineInput {
    fn from_line(line: &OrderLine) -> Self {
        Self {
            name: line.name.clone(),
            quantity: line.quantity.to_string(),
        }
    }

    fn parse(&self) -> Result<OrderLine, String> {
        let quantity: u32 = self
            .quantity
            .trim()
            .parse()
            .map_err(|_| format!("Line quantity \"{}\" is not a whole number", self.quantity))?;
        Ok(OrderLine {
            name: self.name.trim().to_string(),
            quantity,
        })
    }
}

/// Modal host for the order form
#[component]
pub fn OrderForm(form: RwSignal<FormMode<Order>>) -> impl IntoView {
    move || match form.get() {
        FormMode::Closed => ().into_any(),
        FormMode::Adding => view! {
            <OrderFormModal form=form existing=None />
        }
        .into_any(),
        FormMode::Editing(order) => view! {
            <OrderFormModal form=form existing=Some(order) />
        }
        .into_any(),
    }
}

#[component]
fn OrderFormModal(form: RwSignal<FormMode<Order>>, existing: Option<Order>) -> impl IntoView {
    let store = WarehouseStore::use_store();
    let toasts = ToastService::use_toasts();

    let editing_id = existing.as_ref().map(|order| order.id);
    let title = match &existing {
        Some(order) => format!("Edit {}", order.code),
        None => "Add order".to_string(),
    };

    let customer_name = RwSignal::new(
        existing
            .as_ref()
            .map(|o| o.customer_name.clone())
            .unwrap_or_default(),
    );
    let status = RwSignal::new(
        existing
            .as_ref()
            .map(|o| o.status.code().to_string())
            .unwrap_or_else(|| OrderStatus::Pending.code().to_string()),
    );
    let lines: RwSignal<Vec<LineInput>> = RwSignal::new(
        existing
            .as_ref()
            .map(|o| o.items.iter().map(LineInput::from_line).collect())
            .unwrap_or_else(|| vec![LineInput::default()]),
    );
    let total_price = RwSignal::new(
        existing
            .as_ref()
            .map(|o| o.total_price.to_string())
            .unwrap_or_default(),
    );
    let shipping_date = RwSignal::new(
        existing
            .as_ref()
            .map(|o| format_date(o.shipping_date))
            .unwrap_or_default(),
    );
    let notes = RwSignal::new(
        existing
            .as_ref()
            .and_then(|o| o.notes.clone())
            .unwrap_or_default(),
    );
    let error: RwSignal<Option<String>> = RwSignal::new(None);

    let build_draft = move || -> Result<OrderDraft, String> {
        let status = OrderStatus::from_code(&status.get_untracked())
            .ok_or_else(|| "Unknown order status".to_string())?;
        let items = lines
            .get_untracked()
            .iter()
            .map(LineInput::parse)
            .collect::<Result<Vec<OrderLine>, String>>()?;
        let total_price: f64 = total_price
            .get_untracked()
            .trim()
            .parse()
            .map_err(|_| "Total price must be a number".to_string())?;
        let shipping_date = parse_date(&shipping_date.get_untracked())
            .ok_or_else(|| "Shipping date must be a valid date".to_string())?;
        let notes = notes.get_untracked().trim().to_string();
        let draft = OrderDraft {
            customer_name: customer_name.get_untracked().trim().to_string(),
            status,
            items,
            total_price,
            shipping_date,
            notes: if notes.is_empty() { None } else { Some(notes) },
        };
        draft.validate()?;
        Ok(draft)
    };

    let close = Callback::new(move |_: ()| form.set(FormMode::Closed));

    let submit = Callback::new(move |_| {
        let draft = match build_draft() {
            Ok(draft) => draft,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };
        let saved = match editing_id {
            Some(id) => store.update_order(id, draft),
            None => store.add_order(draft),
        };
        match saved {
            Ok(order) => {
                toasts.success(format!("Saved {} for {}", order.code, order.customer_name));
                form.set(FormMode::Closed);
            }
            // Store errors (stale id) go through the toast service
            Err(err) => toasts.error(err.to_string()),
        }
    });

    let add_line = Callback::new(move |_| {
        lines.update(|v| v.push(LineInput::default()));
    });

    view! {
        <Modal title=title on_close=close>
            <div class="form">
                {move || {
                    error.get().map(|message| {
                        view! { <div class="form__error">{message}</div> }
                    })
                }}
                <Input
                    label="Customer"
                    value=Signal::derive(move || customer_name.get())
                    on_input=Callback::new(move |v: String| customer_name.set(v))
                    required=true
                />
                <Select
                    label="Status"
                    value=Signal::derive(move || status.get())
                    options=Signal::derive(move || {
                        OrderStatus::all()
                            .into_iter()
                            .map(|s| (s.code().to_string(), s.display_name().to_string()))
                            .collect()
                    })
                    on_change=Callback::new(move |v: String| status.set(v))
                />

                <div class="form__lines">
                    <div class="form__lines-header">
                        <span class="form__label">"Items"</span>
                        <Button variant="ghost" size="sm" on_click=add_line>
                            {icon("plus")}
                            " Add line"
                        </Button>
                    </div>
                    {move || {
                        lines
                            .get()
                            .into_iter()
                            .enumerate()
                            .map(|(index, _)| {
                                view! {
                                    <div class="form__line">
                                        <Input
                                            value=Signal::derive(move || {
                                                lines.with(|v| {
                                                    v.get(index).map(|l| l.name.clone()).unwrap_or_default()
                                                })
                                            })
                                            placeholder="Product name"
                                            on_input=Callback::new(move |value: String| {
                                                lines.update(|v| {
                                                    if let Some(slot) = v.get_mut(index) {
                                                        slot.name = value;
                                                    }
                                                });
                                            })
                                        />
                                        <Input
                                            input_type="number"
                                            value=Signal::derive(move || {
                                                lines.with(|v| {
                                                    v.get(index)
                                                        .map(|l| l.quantity.clone())
                                                        .unwrap_or_default()
                                                })
                                            })
                                            placeholder="Qty"
                                            on_input=Callback::new(move |value: String| {
                                                lines.update(|v| {
                                                    if let Some(slot) = v.get_mut(index) {
                                                        slot.quantity = value;
                                                    }
                                                });
                                            })
                                        />
                                        <Button
                                            variant="danger"
                                            size="sm"
                                            on_click=Callback::new(move |_| {
                                                lines.update(|v| {
                                                    if index < v.len() {
                                                        v.remove(index);
                                                    }
                                                });
                                            })
                                        >
                                            {icon("trash")}
                                        </Button>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>

                <Input
                    label="Total price"
                    input_type="number"
                    value=Signal::derive(move || total_price.get())
                    on_input=Callback::new(move |v: String| total_price.set(v))
                    required=true
                />
                <Input
                    label="Shipping date"
                    input_type="date"
                    value=Signal::derive(move || shipping_date.get())
                    on_input=Callback::new(move |v: String| shipping_date.set(v))
                    required=true
                />
                <Textarea
                    label="Notes"
                    value=Signal::derive(move || notes.get())
                    on_input=Callback::new(move |v: String| notes.set(v))
                    placeholder="Optional notes"
                />
                <div class="form__actions">
                    <Button variant="secondary" on_click=Callback::new(move |_| close.run(()))>
                        "Cancel"
                    </Button>
                    <Button on_click=submit>
                        {if editing_id.is_some() { "Save changes" } else { "Add order" }}
                    </Button>
                </div>
            </div>
        </Modal>
    }
}
